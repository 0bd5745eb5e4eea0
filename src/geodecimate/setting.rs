//! Per-partition switch for shape decimation.
//!
//! Partitions are configured through a TOML settings file:
//!
//! ```toml
//! [partitions.opendes]
//! indexer-decimation-enabled = "false"
//! ```
//!
//! Decimation stays on for partitions without the property, and also when
//! the settings cannot be read.

use crate::geodecimate::error::Error;
use log::error;
use lru::LruCache;
use parking_lot::Mutex;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::time::{Duration, Instant};

pub const PROPERTY_NAME: &str = "indexer-decimation-enabled";
const CACHE_TTL: Duration = Duration::from_secs(300);
const CACHE_CAPACITY: usize = 1000;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Property {
    Bool(bool),
    Text(String),
    Other(toml::Value),
}

impl Property {
    /// Only `true` and a case-insensitive `"true"` switch a flag on.
    pub fn is_true(&self) -> bool {
        match self {
            Property::Bool(b) => *b,
            Property::Text(s) => s.eq_ignore_ascii_case("true"),
            Property::Other(_) => false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct PartitionInfo {
    pub properties: HashMap<String, Property>,
}

impl PartitionInfo {
    pub fn with_property(mut self, name: &str, value: Property) -> PartitionInfo {
        self.properties.insert(name.to_string(), value);
        self
    }
}

pub trait PartitionProvider: Send + Sync {
    fn get(&self, partition_id: &str) -> Result<Option<PartitionInfo>, Error>;
}

#[derive(Debug, Default, Deserialize)]
struct SettingsFile {
    #[serde(default)]
    partitions: HashMap<String, PartitionInfo>,
}

/// Reads partition properties from a TOML file on every lookup.
pub struct FilePartitionProvider {
    path: PathBuf,
}

impl FilePartitionProvider {
    pub fn new<P: Into<PathBuf>>(path: P) -> FilePartitionProvider {
        FilePartitionProvider { path: path.into() }
    }
}

impl PartitionProvider for FilePartitionProvider {
    fn get(&self, partition_id: &str) -> Result<Option<PartitionInfo>, Error> {
        let contents = fs::read_to_string(&self.path).map_err(|e| {
            Error::PartitionLookup(format!("{}: {}", self.path.display(), e))
        })?;
        let mut settings: SettingsFile =
            toml::from_str(&contents).map_err(|e| Error::InvalidSettings(e.to_string()))?;
        Ok(settings.partitions.remove(partition_id))
    }
}

#[derive(Debug, Default)]
pub struct InMemoryPartitionProvider {
    partitions: HashMap<String, PartitionInfo>,
}

impl InMemoryPartitionProvider {
    pub fn with_partition(mut self, partition_id: &str, info: PartitionInfo) -> InMemoryPartitionProvider {
        self.partitions.insert(partition_id.to_string(), info);
        self
    }
}

impl PartitionProvider for InMemoryPartitionProvider {
    fn get(&self, partition_id: &str) -> Result<Option<PartitionInfo>, Error> {
        Ok(self.partitions.get(partition_id).cloned())
    }
}

/// LRU of resolved flags, each entry expiring `ttl` after it was written.
pub struct DecimationSettingCache {
    entries: Mutex<LruCache<String, (bool, Instant)>>,
    ttl: Duration,
}

impl DecimationSettingCache {
    pub fn new(capacity: usize, ttl: Duration) -> DecimationSettingCache {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        DecimationSettingCache {
            entries: Mutex::new(LruCache::new(capacity)),
            ttl,
        }
    }

    pub fn get(&self, key: &str) -> Option<bool> {
        let mut entries = self.entries.lock();
        let cached = entries.get(key).copied();
        match cached {
            Some((enabled, written)) if written.elapsed() < self.ttl => Some(enabled),
            Some(_) => {
                entries.pop(key);
                None
            }
            None => None,
        }
    }

    pub fn put(&self, key: String, enabled: bool) {
        self.entries.lock().put(key, (enabled, Instant::now()));
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl Default for DecimationSettingCache {
    fn default() -> DecimationSettingCache {
        DecimationSettingCache::new(CACHE_CAPACITY, CACHE_TTL)
    }
}

pub struct DecimationSetting {
    provider: Box<dyn PartitionProvider>,
    cache: DecimationSettingCache,
}

impl DecimationSetting {
    pub fn new(provider: Box<dyn PartitionProvider>) -> DecimationSetting {
        DecimationSetting::with_cache(provider, DecimationSettingCache::default())
    }

    pub fn with_cache(provider: Box<dyn PartitionProvider>, cache: DecimationSettingCache) -> DecimationSetting {
        DecimationSetting { provider, cache }
    }

    /// Looks the flag up for a partition, caching the answer. A failed
    /// lookup is logged and counts as enabled.
    pub fn is_decimation_enabled(&self, partition_id: &str) -> bool {
        let cache_key = format!("{}-{}", partition_id, PROPERTY_NAME);
        if let Some(enabled) = self.cache.get(&cache_key) {
            return enabled;
        }

        let enabled = match self.provider.get(partition_id) {
            Ok(info) => decimation_enabled(info.as_ref()),
            Err(e) => {
                error!(
                    "PartitionService: Error getting {} for dataPartition with Id: {}. Turn on the feature flag by default. {}",
                    PROPERTY_NAME, partition_id, e
                );
                true
            }
        };
        self.cache.put(cache_key, enabled);
        enabled
    }

    /// Shapes outside any partition are always decimated.
    pub fn is_enabled_for(&self, partition_id: Option<&str>) -> bool {
        partition_id.map_or(true, |id| self.is_decimation_enabled(id))
    }
}

fn decimation_enabled(info: Option<&PartitionInfo>) -> bool {
    info.and_then(|info| info.properties.get(PROPERTY_NAME))
        .map(Property::is_true)
        .unwrap_or(true)
}
