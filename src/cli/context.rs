use std::path::{Path, PathBuf};
use std::sync::OnceLock;

static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

const DEFAULT_DATA_DIR: &str = ".shiftswap";

/// Initialize the global data directory path.
pub fn init(dir: &Path) {
    let _ = DATA_DIR.set(dir.to_path_buf());
}

/// Get the current data directory path, `.shiftswap` if never set.
pub fn data_dir() -> &'static Path {
    DATA_DIR
        .get()
        .map(|p| p.as_path())
        .unwrap_or(Path::new(DEFAULT_DATA_DIR))
}
