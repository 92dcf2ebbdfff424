//! Per-pipeline settings for the threads and channels behind each stage.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{IterError, Result};

const MIN_STACK_SIZE: usize = 16 * 1024;

/// How stage threads and their output channels are created.
///
/// The defaults give the classic behaviour: rendezvous channels (every send
/// waits for a matching receive) and threads named `chaniter-<stage>`.
///
/// ```toml
/// capacity = 0
/// thread_name = "ingest"
/// stack_size = 262144
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StageConfig {
    /// Slots in each stage's output channel. `0` means rendezvous.
    pub capacity: usize,
    /// Prefix for stage thread names.
    pub thread_name: String,
    /// Stack size for stage threads; `None` uses the platform default.
    pub stack_size: Option<usize>,
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            capacity: 0,
            thread_name: "chaniter".to_string(),
            stack_size: None,
        }
    }
}

impl StageConfig {
    /// Parse and validate a config from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: StageConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| IterError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<()> {
        if self.thread_name.trim().is_empty() {
            return Err(IterError::InvalidConfig {
                field: "thread_name",
                reason: "must not be empty".to_string(),
            });
        }
        if let Some(size) = self.stack_size {
            if size < MIN_STACK_SIZE {
                return Err(IterError::InvalidConfig {
                    field: "stack_size",
                    reason: format!("{size} bytes is below the {MIN_STACK_SIZE} byte minimum"),
                });
            }
        }
        Ok(())
    }

    pub(crate) fn stage_thread_name(&self, stage: &str) -> String {
        format!("{}-{}", self.thread_name, stage)
    }
}
