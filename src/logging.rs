//! Logger setup.
//!
//! Stdout and stderr belong to the terminal UI, so records only go to a file.
//! Without a log file the logger stays uninstalled and every `log` macro is a
//! no-op. The filter comes from `RUST_LOG` and defaults to `info`.

use std::fs::OpenOptions;
use std::path::Path;

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};

/// Install the global logger writing to `path`. Returns false when no path is given.
pub fn init(path: Option<&Path>) -> Result<bool> {
    let Some(path) = path else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .context("installing logger")?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_path_is_a_no_op() {
        assert!(!init(None).unwrap());
    }

    #[test]
    fn test_unwritable_path_is_an_error() {
        let err = init(Some(Path::new("/nonexistent/dir/maze.log"))).unwrap_err();
        assert!(err.to_string().contains("opening log file"));
    }
}
