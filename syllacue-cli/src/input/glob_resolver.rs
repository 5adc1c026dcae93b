//! Speaker file resolution from paths and glob patterns

use anyhow::Result;
use glob::glob;
use std::path::{Path, PathBuf};

use crate::error::CliError;

/// Resolve input arguments to speaker files.
///
/// An argument naming an existing file is taken as is; anything else is
/// treated as a glob pattern. Result is sorted and deduplicated so event
/// output order does not depend on directory listing order.
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        if Path::new(pattern).is_file() {
            files.push(PathBuf::from(pattern));
            continue;
        }

        let paths = glob(pattern).map_err(|e| CliError::InvalidPattern(format!("{pattern}: {e}")))?;
        let before = files.len();

        for path in paths.flatten() {
            if path.is_file() {
                files.push(path);
            }
        }

        if files.len() == before {
            log::warn!("Pattern matched no files: {pattern}");
        }
    }

    if files.is_empty() {
        return Err(CliError::FileNotFound(patterns.join(", ")).into());
    }

    files.sort();
    files.dedup();

    Ok(files)
}

/// Speaker name of an input file: its stem (`s01.txt` -> `s01`)
pub fn speaker_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
