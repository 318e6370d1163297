
use std::fs;
use std::path::{Path, PathBuf};

/// Copy a loom-core fixture snapshot into `dir`
#[allow(clippy::expect_used)]
pub fn copy_fixture(name: &str, dir: &Path) -> PathBuf {
    let source = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../loom-core/tests/fixtures")
        .join(name);
    let target = dir.join(name);
    fs::copy(&source, &target).expect("Failed to copy fixture");
    target
}
