#![allow(dead_code)]
pub mod bbox;
pub mod codec;
pub mod commands;
pub mod decimator;
pub mod error;
pub mod geojson;
pub mod geometry;
pub mod par;
pub mod position;
pub mod record;
pub mod setting;
pub mod shape;
pub mod simplifier;
pub mod text;
