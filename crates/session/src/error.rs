use std::path::PathBuf;

use blockworld_kernel::ConfigError;

/// Errors from building or driving a session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),
    #[error("script line {line}: {message}")]
    Script { line: usize, message: String },
}
