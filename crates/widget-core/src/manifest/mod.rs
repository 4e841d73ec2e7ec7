//! File manifest resolution
//!
//! Maps a validated feature selection to the ordered list of pack entries
//! that belong in the generated project. Resolution is a total function:
//! every flag combination, including the all-false one, yields a valid
//! manifest (the project skeleton plus the two always-present directories).

mod rules;

use std::collections::HashSet;

use crate::context::ContextId;
use crate::features::FeatureFlags;

pub use rules::Feature;

/// How a manifest entry is materialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryKind {
    /// Copy the source file (or directory subtree) verbatim.
    Copy { source: String },
    /// Render the source template with the named context, then write it.
    Render { source: String, context: ContextId },
    /// Create the destination directory even if nothing populates it.
    EnsureDir,
}

/// One file operation in the generation plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    /// Destination path relative to the project root.
    pub dest: String,
    pub kind: EntryKind,
}

impl ManifestEntry {
    fn copy(path: &str) -> Self {
        Self {
            dest: path.to_string(),
            kind: EntryKind::Copy {
                source: path.to_string(),
            },
        }
    }

    fn render(path: &str, context: ContextId) -> Self {
        Self {
            dest: strip_template_marker(path),
            kind: EntryKind::Render {
                source: path.to_string(),
                context,
            },
        }
    }

    fn ensure_dir(path: &str) -> Self {
        Self {
            dest: path.to_string(),
            kind: EntryKind::EnsureDir,
        }
    }
}

/// Rendered output drops the leading-underscore marker that distinguishes
/// templates from static assets: `src/_index.html` -> `src/index.html`.
fn strip_template_marker(path: &str) -> String {
    match path.rsplit_once('/') {
        Some((dir, name)) => format!("{}/{}", dir, name.strip_prefix('_').unwrap_or(name)),
        None => path.strip_prefix('_').unwrap_or(path).to_string(),
    }
}

/// Resolve the ordered manifest for a feature selection.
///
/// Walks the rule table in declaration order and keeps every entry whose
/// gating feature is enabled. Rules are additive; a destination already
/// claimed by an earlier rule is not added twice.
pub fn resolve_manifest(flags: &FeatureFlags) -> Vec<ManifestEntry> {
    let mut seen = HashSet::new();
    let mut manifest = Vec::new();

    for rule in rules::RULES {
        if !rule.feature.enabled(flags) {
            continue;
        }
        for spec in rule.entries {
            let entry = spec.to_entry();
            if seen.insert(entry.dest.clone()) {
                manifest.push(entry);
            }
        }
    }

    manifest
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::RawAnswers;

    fn flags(
        preferences: bool,
        events: bool,
        data_source: bool,
        quotes: bool,
        time_series: bool,
        news: bool,
    ) -> FeatureFlags {
        FeatureFlags::from_answers(&RawAnswers {
            widget_name: "Stock Ticker".to_string(),
            enable_preferences_support: preferences,
            enable_events_support: events,
            enable_data_source_support: data_source,
            enable_quotes_support: Some(quotes),
            enable_time_series_support: Some(time_series),
            enable_news_support: Some(news),
            ..Default::default()
        })
        .unwrap()
    }

    fn dests(manifest: &[ManifestEntry]) -> Vec<&str> {
        manifest.iter().map(|e| e.dest.as_str()).collect()
    }

    #[test]
    fn test_strip_template_marker() {
        assert_eq!(strip_template_marker("_package.json"), "package.json");
        assert_eq!(strip_template_marker("_.appsngenrc"), ".appsngenrc");
        assert_eq!(
            strip_template_marker("src/_application.xml"),
            "src/application.xml"
        );
        assert_eq!(strip_template_marker("src/js/_widget.js"), "src/js/widget.js");
        assert_eq!(strip_template_marker("src/js/debug.js"), "src/js/debug.js");
    }

    #[test]
    fn test_minimal_selection_is_the_skeleton() {
        let manifest = resolve_manifest(&flags(false, false, false, false, false, false));

        let expected = [
            "Gruntfile.js",
            "LICENSE",
            "README.md",
            "package.json",
            "bower.json",
            ".appsngenrc",
            "src/js/debug.js",
            "src/styles",
            "src/images",
            "src/application.xml",
            "src/index.html",
            "src/js/widget.js",
            "tests",
            "src/fonts",
            "documentation",
        ];
        assert_eq!(dests(&manifest), expected);

        let ensure_dirs: Vec<_> = manifest
            .iter()
            .filter(|e| e.kind == EntryKind::EnsureDir)
            .map(|e| e.dest.as_str())
            .collect();
        assert_eq!(ensure_dirs, ["src/fonts", "documentation"]);
    }

    #[test]
    fn test_full_selection_is_a_strict_superset_without_duplicates() {
        let minimal = resolve_manifest(&flags(false, false, false, false, false, false));
        let full = resolve_manifest(&flags(true, true, true, true, true, true));

        let full_dests = dests(&full);
        for entry in &minimal {
            assert!(full_dests.contains(&entry.dest.as_str()), "{}", entry.dest);
        }

        for extra in [
            "src/js/base-builder.ui.js",
            "src/js/data-builder.js",
            "src/js/data-builder.ui.js",
            "src/js/waiting-builder.ui.js",
            "src/js/news-builder.ui.js",
            "src/js/quotes-builder.ui.js",
            "src/js/request-builder.js",
            "src/js/request-builder.ui.js",
            "src/js/greeting.js",
            "src/js/greeting.ui.js",
            "src/js/event-builder.js",
            "src/js/event-builder.ui.js",
        ] {
            assert_eq!(
                full_dests.iter().filter(|d| **d == extra).count(),
                1,
                "{extra} should appear exactly once"
            );
        }

        let unique: std::collections::HashSet<_> = full_dests.iter().collect();
        assert_eq!(unique.len(), full_dests.len(), "no duplicate destinations");
    }

    #[test]
    fn test_shared_data_fetch_files_appear_once_for_every_fetcher_combination() {
        // quotes, time series and news all pull in the shared data-fetch
        // files; no combination may duplicate them.
        for bits in 1..8u8 {
            let quotes = bits & 1 != 0;
            let time_series = bits & 2 != 0;
            let news = bits & 4 != 0;
            let manifest = resolve_manifest(&flags(false, false, true, quotes, time_series, news));
            let count = dests(&manifest)
                .iter()
                .filter(|d| **d == "src/js/data-builder.js")
                .count();
            assert_eq!(count, 1, "bits {bits:03b}");
        }
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let f = flags(true, false, true, true, false, true);
        assert_eq!(resolve_manifest(&f), resolve_manifest(&f));
    }

    #[test]
    fn test_single_flag_flips_only_add_entries() {
        // Monotonicity: for every baseline and every optional flag, turning
        // the flag on keeps every previously selected destination.
        for bits in 0..64u8 {
            let base = [
                bits & 1 != 0,
                bits & 2 != 0,
                bits & 4 != 0,
                bits & 8 != 0,
                bits & 16 != 0,
                bits & 32 != 0,
            ];
            let before = resolve_manifest(&flags(
                base[0], base[1], base[2], base[3], base[4], base[5],
            ));

            for flip in 0..6 {
                if base[flip] {
                    continue;
                }
                let mut raised = base;
                raised[flip] = true;
                let after = resolve_manifest(&flags(
                    raised[0], raised[1], raised[2], raised[3], raised[4], raised[5],
                ));

                let after_dests = dests(&after);
                for entry in &before {
                    assert!(
                        after_dests.contains(&entry.dest.as_str()),
                        "flipping flag {flip} on baseline {bits:06b} dropped {}",
                        entry.dest
                    );
                }
            }
        }
    }

    #[test]
    fn test_time_series_brings_the_request_builder() {
        let manifest = resolve_manifest(&flags(false, false, true, false, true, false));
        let d = dests(&manifest);
        assert!(d.contains(&"src/js/request-builder.js"));
        assert!(d.contains(&"src/js/request-builder.ui.js"));
        // The shared data-fetch files come along too.
        assert!(d.contains(&"src/js/data-builder.js"));
        assert!(d.contains(&"src/js/waiting-builder.ui.js"));
        // But not the quotes or news specific files.
        assert!(!d.contains(&"src/js/quotes-builder.ui.js"));
        assert!(!d.contains(&"src/js/news-builder.ui.js"));
    }

    #[test]
    fn test_render_entries_carry_their_context() {
        let manifest = resolve_manifest(&flags(false, false, false, false, false, false));
        let context_of = |dest: &str| {
            manifest
                .iter()
                .find(|e| e.dest == dest)
                .map(|e| match &e.kind {
                    EntryKind::Render { context, .. } => *context,
                    other => panic!("{dest} is not a render entry: {other:?}"),
                })
                .unwrap()
        };

        assert_eq!(context_of("package.json"), ContextId::Project);
        assert_eq!(context_of("bower.json"), ContextId::Project);
        assert_eq!(context_of(".appsngenrc"), ContextId::Project);
        assert_eq!(context_of("src/application.xml"), ContextId::Metadata);
        assert_eq!(context_of("src/index.html"), ContextId::Composition);
        assert_eq!(context_of("src/js/widget.js"), ContextId::Composition);
    }
}
