//! File-backed tracing output, kept off the terminal the game draws on.

use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::TriviaError;

/// Installs the global subscriber writing to `path`. `RUST_LOG` overrides the
/// default `info` filter. Fails if a subscriber is already installed.
pub fn init(path: &Path) -> Result<(), TriviaError> {
    let log_file = File::create(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init()
        .map_err(TriviaError::Logging)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_install_is_reported() {
        let dir = std::env::temp_dir();
        let first = dir.join(format!("team-trivia-{}.log", uuid::Uuid::new_v4()));
        let second = dir.join(format!("team-trivia-{}.log", uuid::Uuid::new_v4()));

        init(&first).unwrap();
        let err = init(&second).unwrap_err();
        assert!(matches!(err, TriviaError::Logging(_)));
        assert!(err.to_string().starts_with("failed to install logger"));

        let _ = std::fs::remove_file(first);
        let _ = std::fs::remove_file(second);
    }
}
