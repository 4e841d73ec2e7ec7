//! Filesystem materialization of a resolved manifest
//!
//! The only part of the engine with side effects. Entries are applied in
//! manifest order; every operation is idempotent, so re-running against an
//! existing destination is supported. Stale files left over from an earlier
//! run with a different selection are not pruned (additive-only).

use std::path::{Path, PathBuf};
use tokio::fs;

use crate::context::TemplateData;
use crate::error::{Error, Result};
use crate::manifest::{EntryKind, ManifestEntry};
use crate::pack::TemplatePack;

/// Apply the manifest to `dest_root`, returning every path written.
///
/// The first failing entry aborts the run; its action and path are carried
/// in the error so partial output is attributable.
pub async fn materialize(
    pack: &TemplatePack,
    manifest: &[ManifestEntry],
    data: &TemplateData,
    dest_root: &Path,
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dest_root)
        .await
        .map_err(|e| Error::io("create directory", dest_root, e))?;

    let mut written = Vec::new();

    for entry in manifest {
        match &entry.kind {
            EntryKind::Copy { source } => {
                copy_entry(pack, source, &entry.dest, dest_root, &mut written).await?;
            }
            EntryKind::Render { source, context } => {
                let bytes = pack
                    .file(source)
                    .ok_or_else(|| Error::missing("render", source))?;
                let body = std::str::from_utf8(bytes)
                    .map_err(|e| Error::io("render", source, e))?;
                let ctx = data
                    .context_for(*context)
                    .map_err(|e| Error::io("render", source, e))?;
                let rendered = tera::Tera::one_off(body, &ctx, false)
                    .map_err(|e| Error::io("render", source, e))?;

                let dest = dest_root.join(&entry.dest);
                write_file(&dest, rendered.as_bytes()).await?;
                written.push(dest);
            }
            EntryKind::EnsureDir => {
                let dir = dest_root.join(&entry.dest);
                fs::create_dir_all(&dir)
                    .await
                    .map_err(|e| Error::io("create directory", &dir, e))?;
                written.push(dir);
            }
        }
    }

    Ok(written)
}

/// Copy a pack file, or the whole subtree when `source` names a directory.
async fn copy_entry(
    pack: &TemplatePack,
    source: &str,
    entry_dest: &str,
    dest_root: &Path,
    written: &mut Vec<PathBuf>,
) -> Result<()> {
    if let Some(bytes) = pack.file(source) {
        let dest = dest_root.join(entry_dest);
        write_file(&dest, bytes).await?;
        written.push(dest);
        return Ok(());
    }

    let prefix = format!("{}/", source.trim_end_matches('/'));
    let files = pack.files_under(source);
    if files.is_empty() {
        return Err(Error::missing("copy", source));
    }

    for (path, bytes) in files {
        let Some(relative) = path.strip_prefix(&prefix) else {
            continue;
        };
        let dest = dest_root.join(entry_dest).join(relative);
        write_file(&dest, bytes).await?;
        written.push(dest);
    }

    Ok(())
}

async fn write_file(dest: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)
            .await
            .map_err(|e| Error::io("create directory", parent, e))?;
    }
    fs::write(dest, bytes)
        .await
        .map_err(|e| Error::io("write", dest, e))
}
