//! Error types for pipeline construction and configuration.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors reported when a pipeline is asked to do something it cannot.
///
/// Running pipelines never fail: the only runtime signal is the end of a
/// sequence. Everything here is raised while building a stage or loading a
/// [`StageConfig`](crate::StageConfig).
#[derive(Error, Debug)]
pub enum IterError {
    #[error("step_by needs a step of at least 1")]
    ZeroStep,
    #[error("windows needs a window length of at least 1")]
    ZeroWindow,
    #[error("invalid config field `{field}`: {reason}")]
    InvalidConfig { field: &'static str, reason: String },
    #[error("failed to parse stage config: {0}")]
    ConfigParse(#[from] toml::de::Error),
    #[error("failed to read stage config from {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, IterError>;

/// Raised inside a stage thread when the downstream receiver was dropped.
///
/// Stage bodies bubble it up with `?` so the thread unwinds its loops and
/// drops its own upstream receiver.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("downstream consumer disconnected")]
pub(crate) struct Disconnected;
