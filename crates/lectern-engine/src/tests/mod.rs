use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a temporary articles directory
pub fn create_test_articles_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Create an article file, including any parent folders in `relative`
pub fn create_test_file(articles_dir: &TempDir, relative: &str, content: &str) -> PathBuf {
    let file_path = articles_dir.path().join(relative);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&file_path, content).unwrap();
    file_path
}
