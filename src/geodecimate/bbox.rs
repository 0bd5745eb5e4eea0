use geo::algorithm::bounding_rect::BoundingRect;
use geo_types::{Geometry, Point, Rect};

fn rect(p: &Point<f64>) -> Rect<f64> {
    Rect::new((p.x(), p.y()), (p.x(), p.y()))
}

fn merge(a: Rect<f64>, b: Rect<f64>) -> Rect<f64> {
    Rect::new(
        (a.min().x.min(b.min().x), a.min().y.min(b.min().y)),
        (a.max().x.max(b.max().x), a.max().y.max(b.max().y)),
    )
}

/// Planar bounding box, or `None` for geometries without coordinates.
pub fn bbox(geom: &Geometry<f64>) -> Option<Rect<f64>> {
    match *geom {
        Geometry::Point(ref g) => Some(rect(g)),
        Geometry::Line(ref g) => Some(g.bounding_rect()),
        Geometry::LineString(ref g) => g.bounding_rect(),
        Geometry::Polygon(ref g) => g.bounding_rect(),
        Geometry::MultiPoint(ref g) => g.bounding_rect(),
        Geometry::MultiLineString(ref g) => g.bounding_rect(),
        Geometry::MultiPolygon(ref g) => g.bounding_rect(),
        Geometry::GeometryCollection(ref gc) => gc.0.iter().filter_map(bbox).reduce(merge),
        Geometry::Rect(ref g) => Some(*g),
        Geometry::Triangle(ref g) => g.to_polygon().bounding_rect(),
    }
}

#[cfg(test)]
mod tests {
    use crate::geodecimate::bbox::bbox;
    use geo_types::{line_string, point, polygon, Geometry, GeometryCollection, LineString, Rect};

    #[test]
    fn point_bbox() {
        let g = Geometry::Point(point!(x: 1.0, y: 2.0));
        assert_eq!(Some(Rect::new((1.0, 2.0), (1.0, 2.0))), bbox(&g));
    }

    #[test]
    fn line_bbox() {
        let g = Geometry::LineString(line_string![(x: 3.0, y: -1.0), (x: -2.0, y: 4.0)]);
        assert_eq!(Some(Rect::new((-2.0, -1.0), (3.0, 4.0))), bbox(&g));
    }

    #[test]
    fn empty_line_has_no_bbox() {
        let g = Geometry::LineString(LineString(vec![]));
        assert_eq!(None, bbox(&g));
    }

    #[test]
    fn collection_bbox_merges_members() {
        let gc = GeometryCollection(vec![
            Geometry::Point(point!(x: 10.0, y: 10.0)),
            Geometry::LineString(LineString(vec![])),
            Geometry::Polygon(polygon![
                (x: 0.0, y: 0.0),
                (x: 2.0, y: 0.0),
                (x: 2.0, y: 2.0),
                (x: 0.0, y: 0.0)
            ]),
        ]);
        assert_eq!(
            Some(Rect::new((0.0, 0.0), (10.0, 10.0))),
            bbox(&Geometry::GeometryCollection(gc))
        );
        assert_eq!(None, bbox(&Geometry::GeometryCollection(GeometryCollection(vec![]))));
    }
}
