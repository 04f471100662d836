//! SPA bundle check
//!
//! Everything under `assets/` is served `immutable` for a year, so a file
//! there without a content hash in its name would never be refetched.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

const ENTRY_DOCUMENT: &str = "index.html";
const ASSETS_DIR: &str = "assets";
const MIN_HASH_LEN: usize = 6;

pub fn check(dir: &Path) -> Result<()> {
    if !dir.join(ENTRY_DOCUMENT).is_file() {
        bail!("{} has no {ENTRY_DOCUMENT}", dir.display());
    }

    let assets = dir.join(ASSETS_DIR);
    let mut files = Vec::new();
    if assets.is_dir() {
        collect_files(&assets, &mut files)?;
    }

    let unhashed: Vec<String> = files
        .iter()
        .filter(|path| !is_content_hashed(path))
        .map(|path| path.strip_prefix(dir).unwrap_or(path).display().to_string())
        .collect();
    if !unhashed.is_empty() {
        bail!("assets without a content hash: {}", unhashed.join(", "));
    }

    println!("{}: entry document and {} hashed assets", dir.display(), files.len());
    Ok(())
}

fn collect_files(dir: &Path, out: &mut Vec<PathBuf>) -> Result<()> {
    for entry in fs::read_dir(dir).with_context(|| format!("cannot read {}", dir.display()))? {
        let path = entry?.path();
        if path.is_dir() {
            collect_files(&path, out)?;
        } else {
            out.push(path);
        }
    }
    Ok(())
}

/// `app-3f2a9c1b.js`, `logo.8d1e0f2a.svg`: the last `-` or `.` separated
/// segment of the stem is the hash.
fn is_content_hashed(path: &Path) -> bool {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .and_then(|stem| stem.rsplit(['-', '.']).next().filter(|hash| hash.len() < stem.len()))
        .is_some_and(|hash| {
            hash.len() >= MIN_HASH_LEN
                && hash.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
        })
}
