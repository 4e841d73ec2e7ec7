//! Widget Core - scaffolding engine for AppsNgen web widget projects
//!
//! This library turns a small set of feature-toggle answers into a generated
//! widget project: it normalizes the answers into typed flags, resolves the
//! list of template files those flags select, binds the data each template
//! family is rendered with, and materializes the result on disk.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Decision logic** - `features`, `manifest` and `context` are pure:
//!   same answers in, same plan out, no filesystem access
//! - **Effects** - `pack` loads the template tree (remote zip or local
//!   directory) and `materialize` owns every filesystem write
//! - **Front-end** - optional cliclack prompt flow (feature-gated) plus
//!   `runtime` for the npm install / grunt build that follows generation
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based prompt flow
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use widget_core::{generate, PackSource, RawAnswers};
//!
//! let pack = PackSource::local("templates".into()).load("my-tool").await?;
//! let answers = RawAnswers {
//!     widget_name: "Stock Ticker".into(),
//!     enable_data_source_support: true,
//!     enable_quotes_support: Some(true),
//!     ..Default::default()
//! };
//! let generated = generate(&pack, Path::new("stock-ticker"), &answers).await?;
//! println!("{} files written", generated.files.len());
//! ```

pub mod context;
pub mod error;
pub mod features;
pub mod manifest;
pub mod materialize;
pub mod pack;
pub mod runtime;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use context::{ContextId, TemplateData};
pub use error::{Error, Result};
pub use features::{FeatureFlags, RawAnswers};
pub use manifest::{resolve_manifest, EntryKind, ManifestEntry};
pub use materialize::materialize;
pub use pack::{PackManifest, PackSource, TemplatePack};

#[cfg(feature = "tui")]
pub use tui::run;

use std::path::{Path, PathBuf};

/// CLI version fallback - used for template pack compatibility checking
/// Each binary should define its own version, but this provides a fallback
pub const DEFAULT_CLI_VERSION: &str = "0.1.0";

/// Result of a generation run.
#[derive(Debug, Clone)]
pub struct Generated {
    /// The validated selection the run was generated from.
    pub flags: FeatureFlags,
    /// Every path written, in manifest order.
    pub files: Vec<PathBuf>,
}

/// Generate a widget project: normalize answers, resolve the manifest, bind
/// the template contexts, and materialize everything under `dest_root`.
///
/// The destination is threaded through explicitly; the process working
/// directory is never changed.
pub async fn generate(
    pack: &TemplatePack,
    dest_root: &Path,
    answers: &RawAnswers,
) -> Result<Generated> {
    let flags = FeatureFlags::from_answers(answers)?;
    let entries = resolve_manifest(&flags);
    let data = TemplateData::bind(&flags);
    let files = materialize(pack, &entries, &data, dest_root).await?;

    Ok(Generated { flags, files })
}
