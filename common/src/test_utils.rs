//! Scratch files for tests that exercise file IO.

use std::path::{Path, PathBuf};

const SCRATCH_DIR: &str = "test_output";

/// `<workspace>/test_output`. `common` sits one level below the workspace root.
pub fn scratch_dir() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .unwrap_or(manifest_dir)
        .join(SCRATCH_DIR)
}

/// Path for a scratch file named `name`.
///
/// The directory is created on demand and any file left at that path by an earlier run
/// is removed, so a test never reads stale output.
pub fn test_output_path(name: &str) -> PathBuf {
    let dir = scratch_dir();
    if let Err(err) = std::fs::create_dir_all(&dir) {
        panic!("cannot create {}: {err}", dir.display());
    }

    let path = dir.join(name);
    match std::fs::remove_file(&path) {
        Ok(()) => {}
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
        Err(err) => panic!("cannot clear {}: {err}", path.display()),
    }
    path
}
