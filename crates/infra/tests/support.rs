//! Shared fixtures for infrastructure integration tests.

use std::path::Path;

use tempfile::TempDir;

pub const INDEX_HTML: &str = "<!doctype html><html><body><div id=\"root\"></div></body></html>";
pub const APP_JS: &str = "console.log('helpdesk');";

/// Temporary static directory laid out like a built SPA bundle.
pub struct SpaBundle {
    dir: TempDir,
}

impl SpaBundle {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("temp dir should be created");
        std::fs::create_dir_all(dir.path().join("assets")).expect("assets dir");
        std::fs::write(dir.path().join("index.html"), INDEX_HTML).expect("index.html");
        std::fs::write(dir.path().join("assets/app-3f2a.js"), APP_JS).expect("bundle");
        std::fs::write(dir.path().join("favicon.ico"), [0u8, 1, 2, 3]).expect("favicon");
        Self { dir }
    }

    /// Bundle without an entry document.
    pub fn without_index() -> Self {
        let bundle = Self::new();
        std::fs::remove_file(bundle.path().join("index.html")).expect("remove index");
        bundle
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}
