//! Error taxonomy for the scaffolding engine

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors the scaffolding engine can produce.
///
/// `Validation` is recoverable: the caller re-prompts for better input.
/// `Io` is fatal for the run: partial output may be left on disk, and the
/// failing action and path are part of the message so the leftovers are
/// attributable. Manifest resolution and context binding are total and
/// never fail.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Required input was missing or unusable.
    #[error("{0}")]
    Validation(String),

    /// A filesystem or template operation failed.
    #[error("failed to {action} {}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl Error {
    pub(crate) fn io(
        action: &'static str,
        path: impl Into<PathBuf>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Error::Io {
            action,
            path: path.into(),
            source: source.into(),
        }
    }

    /// An entry referenced a pack path that does not exist.
    pub(crate) fn missing(action: &'static str, path: impl Into<PathBuf>) -> Self {
        Error::io(
            action,
            path,
            std::io::Error::new(std::io::ErrorKind::NotFound, "not found in template pack"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_message_names_action_and_path() {
        let err = Error::missing("copy", "src/js/debug.js");
        assert_eq!(err.to_string(), "failed to copy src/js/debug.js");
    }

    #[test]
    fn test_io_preserves_source() {
        use std::error::Error as _;
        let err = Error::missing("render", "src/_index.html");
        assert!(err.source().is_some());
    }
}
