use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use allocsum_core::error::{CategorizerError, Result};

// ── Directory bootstrap ────────────────────────────────────────────────────────

/// Ensure the standard `~/.allocsum/` directory hierarchy exists.
///
/// Creates the following directories if absent (including any missing parents):
/// - `~/.allocsum/`
/// - `~/.allocsum/logs/`
pub fn ensure_directories() -> anyhow::Result<()> {
    let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    let allocsum_dir = home.join(".allocsum");
    std::fs::create_dir_all(&allocsum_dir)?;
    std::fs::create_dir_all(allocsum_dir.join("logs"))?;
    Ok(())
}

// ── Logging bootstrap ──────────────────────────────────────────────────────────

/// Initialise the global `tracing` subscriber.
///
/// `log_level` is mapped to a [`tracing_subscriber::EnvFilter`] directive.
/// Falls back to `"info"` if the level string is not recognised.
///
/// The `log_file` parameter is accepted for forward-compatibility but file
/// logging is not yet wired – all output currently goes to stderr.
pub fn setup_logging(log_level: &str, _log_file: Option<&PathBuf>) -> anyhow::Result<()> {
    let upper = log_level.to_uppercase();
    let normalised = match upper.as_str() {
        "DEBUG" => "debug",
        "INFO" => "info",
        "WARNING" => "warn",
        "ERROR" => "error",
        other => other,
    };

    let filter = EnvFilter::try_new(normalised).unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = fmt::layer().with_target(false).with_thread_ids(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .init();

    Ok(())
}

// ── Input preloading ───────────────────────────────────────────────────────────

/// Read the file given via `--input` into a string.
///
/// Wraps the underlying I/O error with the offending path so the failure
/// message names the file the user asked for.
pub fn read_input_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| CategorizerError::FileRead {
        path: path.to_path_buf(),
        source,
    })
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    // ── test_ensure_directories ───────────────────────────────────────────────

    #[test]
    fn test_ensure_directories() {
        let tmp = TempDir::new().expect("tempdir");

        // Override HOME so that dirs::home_dir() resolves to our temp dir.
        let original_home = std::env::var_os("HOME");
        std::env::set_var("HOME", tmp.path());

        let result = ensure_directories();

        // Restore HOME.
        match original_home {
            Some(v) => std::env::set_var("HOME", v),
            None => std::env::remove_var("HOME"),
        }

        result.expect("ensure_directories should succeed");

        let allocsum_dir = tmp.path().join(".allocsum");
        assert!(allocsum_dir.is_dir(), ".allocsum dir must exist");
        assert!(allocsum_dir.join("logs").is_dir(), "logs subdir must exist");
    }

    // ── test_read_input_file ──────────────────────────────────────────────────

    #[test]
    fn test_read_input_file_returns_contents() {
        let tmp = TempDir::new().expect("tempdir");
        let path = tmp.path().join("records.txt");
        std::fs::write(&path, "02444XXXX 20GB\n059XXXXXX 50GB\n").expect("write");

        let contents = read_input_file(&path).expect("read");
        assert!(contents.starts_with("02444XXXX 20GB"));
        assert_eq!(contents.lines().count(), 2);
    }

    #[test]
    fn test_read_input_file_missing_names_path() {
        let tmp = TempDir::new().expect("tempdir");
        let path = tmp.path().join("does_not_exist.txt");

        let err = read_input_file(&path).expect_err("must fail");
        let msg = err.to_string();
        assert!(msg.contains("Failed to read input file"));
        assert!(msg.contains("does_not_exist.txt"));
    }
}
