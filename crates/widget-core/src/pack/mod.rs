//! Template pack loading and building
//!
//! A pack is the complete widget template tree plus a `pack.yaml` manifest,
//! shipped either as a zip at a remote URL or as a plain directory for
//! development. Both sources produce the same in-memory pack, so generation
//! behaves identically in development and production.

mod source;
mod version;

pub use source::{PackSource, DEFAULT_PACK_URL, PACK_URL_ENV};
pub use version::check_compatibility;

use anyhow::{Context, Result};
use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::{Cursor, Read, Write};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{ZipArchive, ZipWriter};

/// Manifest file name at the root of every pack.
pub const MANIFEST_FILE: &str = "pack.yaml";

/// Pack manifest describing the template tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackManifest {
    /// Display name of the pack.
    pub name: String,

    /// Description of what the pack provides.
    pub description: String,

    /// Semver version for CLI compatibility checking.
    pub version: String,
}

/// A fully loaded template pack: manifest plus file bytes by relative path.
#[derive(Debug, Clone)]
pub struct TemplatePack {
    manifest: PackManifest,
    files: HashMap<String, Vec<u8>>,
}

impl TemplatePack {
    pub fn manifest(&self) -> &PackManifest {
        &self.manifest
    }

    /// Look up a single file's bytes by pack-relative path.
    pub fn file(&self, path: &str) -> Option<&[u8]> {
        self.files.get(path).map(Vec::as_slice)
    }

    /// All files under a directory prefix, with their pack-relative paths.
    /// Sorted so directory copies are deterministic.
    pub fn files_under(&self, dir: &str) -> Vec<(&str, &[u8])> {
        let prefix = format!("{}/", dir.trim_end_matches('/'));
        let mut files: Vec<_> = self
            .files
            .iter()
            .filter(|(path, _)| path.starts_with(&prefix))
            .map(|(path, bytes)| (path.as_str(), bytes.as_slice()))
            .collect();
        files.sort_by_key(|(path, _)| *path);
        files
    }

    /// Load a pack from zip bytes (the remote distribution format).
    pub fn from_zip(bytes: &[u8]) -> Result<Self> {
        let cursor = Cursor::new(bytes);
        let mut archive = ZipArchive::new(cursor).context("Failed to read template pack zip")?;

        let mut files: HashMap<String, Vec<u8>> = HashMap::new();
        for i in 0..archive.len() {
            let mut file = archive.by_index(i)?;
            if file.is_dir() {
                continue;
            }
            let path = file.name().replace('\\', "/");

            let mut contents = Vec::new();
            file.read_to_end(&mut contents)?;
            files.insert(path, contents);
        }

        let manifest = parse_manifest(&files)?;
        Ok(Self { manifest, files })
    }

    /// Load a pack from a local template directory (development mode).
    pub fn from_dir(dir: &Path) -> Result<Self> {
        if !dir.is_dir() {
            anyhow::bail!("Template directory not found: {}", dir.display());
        }

        let mut files: HashMap<String, Vec<u8>> = HashMap::new();
        for entry in WalkDir::new(dir) {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            let relative = entry
                .path()
                .strip_prefix(dir)
                .context("Failed to compute pack-relative path")?
                .to_string_lossy()
                .replace('\\', "/");
            let contents = std::fs::read(entry.path())
                .with_context(|| format!("Failed to read {}", entry.path().display()))?;
            files.insert(relative, contents);
        }

        let manifest = parse_manifest(&files)?;
        Ok(Self { manifest, files })
    }
}

fn parse_manifest(files: &HashMap<String, Vec<u8>>) -> Result<PackManifest> {
    let bytes = files
        .get(MANIFEST_FILE)
        .ok_or_else(|| anyhow::anyhow!("Template pack is missing {}", MANIFEST_FILE))?;
    serde_yaml::from_slice(bytes).with_context(|| format!("Failed to parse {}", MANIFEST_FILE))
}

/// Build a pack zip from a local template directory.
///
/// The manifest goes in first, then every other file in sorted order so the
/// archive is reproducible.
pub fn build_pack_zip(dir: &Path) -> Result<Vec<u8>> {
    let manifest_path = dir.join(MANIFEST_FILE);
    let manifest_content = std::fs::read_to_string(&manifest_path)
        .with_context(|| format!("Failed to read {}", manifest_path.display()))?;
    // Parse up front so a broken manifest fails the build, not the consumer.
    let _: PackManifest = serde_yaml::from_str(&manifest_content)
        .with_context(|| format!("Failed to parse {}", manifest_path.display()))?;

    let mut paths: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path().to_path_buf())
        .collect();
    paths.sort();

    let mut zip_buffer = Vec::new();
    {
        let mut zip = ZipWriter::new(Cursor::new(&mut zip_buffer));
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

        zip.start_file(MANIFEST_FILE, options)?;
        zip.write_all(manifest_content.as_bytes())?;

        for path in &paths {
            let relative = path
                .strip_prefix(dir)
                .context("Failed to compute pack-relative path")?
                .to_string_lossy()
                .replace('\\', "/");
            if relative == MANIFEST_FILE {
                continue;
            }
            let content = std::fs::read(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            zip.start_file(&relative, options)?;
            zip.write_all(&content)?;
        }

        zip.finish()?;
    }

    Ok(zip_buffer)
}

/// Build a pack zip and write it next to the template directory.
///
/// Development workflow for publishing the pack where the remote URL
/// points. The output name defaults to `<pack name>.zip`.
pub fn build_pack(template_dir: &Option<PathBuf>, output: &Option<PathBuf>) -> Result<()> {
    let dir = template_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from("templates"));

    if !dir.exists() {
        anyhow::bail!("Template directory not found: {}", dir.display());
    }

    println!("{}", "Building template pack...".cyan().bold());

    let zip_bytes = build_pack_zip(&dir)?;

    let out_path = match output {
        Some(path) => path.clone(),
        None => {
            let pack = TemplatePack::from_zip(&zip_bytes)?;
            PathBuf::from(format!("{}.zip", pack.manifest().name))
        }
    };

    std::fs::write(&out_path, &zip_bytes)
        .with_context(|| format!("Failed to write {}", out_path.display()))?;

    println!(
        "{} {} ({} bytes)",
        "Built".green().bold(),
        out_path.display(),
        zip_bytes.len()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const MANIFEST: &str = "name: web-widget\ndescription: widget template tree\nversion: 0.1.0\n";

    fn write_template_dir(root: &Path) {
        fs::write(root.join(MANIFEST_FILE), MANIFEST).unwrap();
        fs::create_dir_all(root.join("src/js")).unwrap();
        fs::write(root.join("Gruntfile.js"), "module.exports = {};\n").unwrap();
        fs::write(root.join("src/js/debug.js"), "// debug\n").unwrap();
        fs::write(root.join("src/js/widget.js"), "// widget\n").unwrap();
    }

    #[test]
    fn test_from_dir_collects_relative_paths() {
        let tmp = TempDir::new().unwrap();
        write_template_dir(tmp.path());

        let pack = TemplatePack::from_dir(tmp.path()).unwrap();
        assert_eq!(pack.manifest().name, "web-widget");
        assert!(pack.file("Gruntfile.js").is_some());
        assert!(pack.file("src/js/debug.js").is_some());
        assert!(pack.file("missing.txt").is_none());
    }

    #[test]
    fn test_from_dir_without_manifest_fails() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("Gruntfile.js"), "x").unwrap();

        let err = TemplatePack::from_dir(tmp.path()).unwrap_err();
        assert!(err.to_string().contains(MANIFEST_FILE));
    }

    #[test]
    fn test_files_under_returns_sorted_subtree() {
        let tmp = TempDir::new().unwrap();
        write_template_dir(tmp.path());

        let pack = TemplatePack::from_dir(tmp.path()).unwrap();
        let under: Vec<&str> = pack.files_under("src/js").iter().map(|(p, _)| *p).collect();
        assert_eq!(under, ["src/js/debug.js", "src/js/widget.js"]);

        assert!(pack.files_under("nope").is_empty());
    }

    #[test]
    fn test_zip_round_trip_preserves_file_set() {
        let tmp = TempDir::new().unwrap();
        write_template_dir(tmp.path());

        let from_dir = TemplatePack::from_dir(tmp.path()).unwrap();
        let zip_bytes = build_pack_zip(tmp.path()).unwrap();
        let from_zip = TemplatePack::from_zip(&zip_bytes).unwrap();

        assert_eq!(from_zip.manifest().version, from_dir.manifest().version);
        for path in ["Gruntfile.js", "src/js/debug.js", "src/js/widget.js"] {
            assert_eq!(from_zip.file(path), from_dir.file(path), "{path}");
        }
    }

    #[test]
    fn test_build_pack_zip_rejects_broken_manifest() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(MANIFEST_FILE), "name: [unclosed").unwrap();

        assert!(build_pack_zip(tmp.path()).is_err());
    }
}
