// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! TOML file with one `[[lock]]` table per instrumented lock
//!
//! ```toml
//! [[lock]]
//! name = "namespace"
//! warning_threshold = "5s"
//! min_log_gap = "10s"
//! ```

use super::{ConfigError, LockConfig};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocksConfig {
    #[serde(default, rename = "lock")]
    locks: Vec<LockConfig>,
}

impl LocksConfig {
    /// Parse and validate TOML text
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&content)?;
        tracing::debug!(path = %path.display(), locks = config.locks.len(), "loaded lock config");
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for lock in &self.locks {
            lock.validate()?;
            if !seen.insert(lock.name.as_str()) {
                return Err(ConfigError::DuplicateName(lock.name.clone()));
            }
        }
        Ok(())
    }

    /// Look up a lock by name
    pub fn get(&self, name: &str) -> Option<&LockConfig> {
        self.locks.iter().find(|lock| lock.name == name)
    }

    /// Configured lock, or defaults under that name
    pub fn get_or_default(&self, name: &str) -> LockConfig {
        self.get(name)
            .cloned()
            .unwrap_or_else(|| LockConfig::new(name))
    }

    pub fn iter(&self) -> impl Iterator<Item = &LockConfig> {
        self.locks.iter()
    }

    pub fn len(&self) -> usize {
        self.locks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locks.is_empty()
    }
}

#[cfg(test)]
#[path = "file_tests.rs"]
mod tests;
