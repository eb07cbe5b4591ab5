use std::path::{Path, PathBuf};
use std::{fs, io};

use crate::post::Post;

/// Writes one rendered page to <out_dir>/<id>/index.html, creating the
/// directory tree and overwriting any earlier run.
pub fn write_page(out_dir: &Path, post_id: &str, html: &str) -> io::Result<PathBuf> {
    let post_dir = out_dir.join(post_id);
    fs::create_dir_all(&post_dir)?;

    let out_path = post_dir.join("index.html");
    fs::write(&out_path, html)?;

    Ok(out_path)
}

/// Overwrites posts.json wholesale. The manifest never accumulates entries
/// from earlier runs.
pub fn write_manifest(out_dir: &Path, posts: &[Post]) -> io::Result<PathBuf> {
    fs::create_dir_all(out_dir)?;

    let json = serde_json::to_string_pretty(posts)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, format!("Error serializing posts.json: {}", e)))?;

    let out_path = out_dir.join("posts.json");
    fs::write(&out_path, json)?;

    Ok(out_path)
}
