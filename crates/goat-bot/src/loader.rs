//! Loads command definitions from disk into a [`CommandRegistry`].
//!
//! Every file under the commands directory is either an invokable command
//! (`*.command.json`) or an interval message (`*.interval.json`). A bad file
//! is logged and skipped; the rest still load.

use crate::error::LoadError;
use command_engine::{CommandRegistry, IntervalMessage, InvokableCommand};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

const COMMAND_SUFFIX: &str = ".command.json";
const INTERVAL_SUFFIX: &str = ".interval.json";

/// Outcome of loading a commands directory.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub registry: CommandRegistry,
    /// Files that were skipped, with the reason.
    pub skipped: Vec<LoadError>,
}

/// Load all command and interval files under `dir`, recursively.
///
/// Files load in path order. Fails only if `dir` itself cannot be read.
pub fn load_commands(dir: &Path) -> Result<LoadReport, LoadError> {
    info!("Loading commands from {}", dir.display());

    let mut files = Vec::new();
    collect_files(dir, &mut files).map_err(|source| LoadError::Io {
        path: dir.to_path_buf(),
        source,
    })?;
    files.sort();

    let mut report = LoadReport::default();
    for path in files {
        if let Err(e) = load_file(&path, &mut report.registry) {
            warn!("Skipping command file: {}", e);
            report.skipped.push(e);
        }
    }

    info!(
        "{} invokable commands successfully loaded",
        report.registry.command_count()
    );
    info!(
        "{} interval messages successfully loaded",
        report.registry.interval_count()
    );

    Ok(report)
}

fn collect_files(dir: &Path, files: &mut Vec<PathBuf>) -> std::io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        // Symlinked directories are not followed
        if entry.file_type()?.is_dir() {
            // Unreadable subdirectories are skipped, not fatal
            if let Err(e) = collect_files(&path, files) {
                warn!("Could not read directory {}: {}", path.display(), e);
            }
        } else {
            files.push(path);
        }
    }
    Ok(())
}

fn load_file(path: &Path, registry: &mut CommandRegistry) -> Result<(), LoadError> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();

    let added = if name.ends_with(COMMAND_SUFFIX) {
        let command: InvokableCommand = read_json(path)?;
        debug!("Loaded command '{}' from {}", command.invocation, path.display());
        registry.add_command(command)
    } else if name.ends_with(INTERVAL_SUFFIX) {
        let interval: IntervalMessage = read_json(path)?;
        debug!("Loaded interval message from {}", path.display());
        registry.add_interval(interval)
    } else {
        return Err(LoadError::UnknownSuffix {
            path: path.to_path_buf(),
        });
    };

    added.map_err(|source| LoadError::Registry {
        path: path.to_path_buf(),
        source,
    })
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let data = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&data).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })
}
