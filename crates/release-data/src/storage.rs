//! JSON persistence for release histories and chart datasets.

use std::path::Path;

use release_core::error::{Result, StatsError};
use release_core::models::CanonicalRelease;
use serde::Serialize;
use tracing::debug;

/// Load a history written by [`write_json`].
///
/// A missing or unreadable file yields [`StatsError::FileRead`]; content that
/// is not a JSON array of releases yields [`StatsError::MalformedInput`].
/// Both carry the offending path.
pub fn load_history(path: &Path) -> Result<Vec<CanonicalRelease>> {
    let content = std::fs::read_to_string(path).map_err(|source| StatsError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let history: Vec<CanonicalRelease> =
        serde_json::from_str(&content).map_err(|source| StatsError::MalformedInput {
            path: path.to_path_buf(),
            source,
        })?;

    debug!(
        "Loaded {} releases from {}",
        history.len(),
        path.display()
    );
    Ok(history)
}

/// Write `value` as pretty-printed JSON to `path`.
///
/// Parent directories are created as needed.  The document goes to a sibling
/// temp file first and is renamed into place, so a failed write never leaves
/// a truncated file behind.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;

    let write_err = |source: std::io::Error| StatsError::FileWrite {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }

    let mut tmp_name = path.as_os_str().to_os_string();
    tmp_name.push(".tmp");
    let tmp = std::path::PathBuf::from(tmp_name);

    std::fs::write(&tmp, json).map_err(write_err)?;
    std::fs::rename(&tmp, path).map_err(write_err)?;

    debug!("Wrote {}", path.display());
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
