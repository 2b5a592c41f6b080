//! Locating the runtime data directory.

use std::env;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Cached path to the directory containing the engine's runtime data files.
static DATA_ROOT: LazyLock<PathBuf> = LazyLock::new(detect_data_root);

/// Construct a data path relative to the resolved data root.
pub fn data_path(relative: impl AsRef<Path>) -> PathBuf {
    DATA_ROOT.join(relative)
}

/// Resolve the most likely location of the runtime data directory.
fn detect_data_root() -> PathBuf {
    let mut candidates = Vec::new();

    // workspace root and flattened `data/`
    candidates.push(PathBuf::from("campus_engine/data"));
    candidates.push(PathBuf::from("data"));

    if let Ok(exe_path) = env::current_exe()
        && let Some(dir) = exe_path.parent()
    {
        candidates.push(dir.join("campus_engine/data"));
        candidates.push(dir.join("data"));

        if let Some(parent) = dir.parent() {
            candidates.push(parent.join("campus_engine/data"));
            candidates.push(parent.join("data"));
        }
    }

    // last resort for `cargo run` from anywhere inside the source tree
    candidates.push(Path::new(env!("CARGO_MANIFEST_DIR")).join("data"));

    candidates
        .into_iter()
        .find(|candidate| candidate.join("world.ron").is_file())
        .unwrap_or_else(|| PathBuf::from("campus_engine/data"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_path_finds_shipped_world() {
        assert!(data_path("world.ron").is_file());
    }
}
