//! The feature-to-files dependency table
//!
//! Each feature contributes a fixed, declaratively listed set of entries.
//! Keeping the mapping as data (rather than nested conditionals) means a
//! shared dependency such as the data-fetch core cannot be dropped when
//! features are recombined: it hangs off its own `DataFetchers` condition,
//! not off whichever feature happened to mention it first.

use crate::context::ContextId::{Composition, Metadata, Project};
use crate::features::FeatureFlags;
use crate::manifest::ManifestEntry;

use EntrySpec::{Copy, EnsureDir, Render};

/// Conditions a rule can be gated on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    /// Unconditional project skeleton.
    Always,
    /// Any optional example is selected.
    ComposedUi,
    /// Any data-source example is selected.
    DataFetchers,
    News,
    Quotes,
    TimeSeries,
    Preferences,
    Events,
}

impl Feature {
    pub fn enabled(self, flags: &FeatureFlags) -> bool {
        match self {
            Feature::Always => true,
            Feature::ComposedUi => flags.has_composed_ui(),
            Feature::DataFetchers => flags.has_data_fetchers(),
            Feature::News => flags.news,
            Feature::Quotes => flags.quotes,
            Feature::TimeSeries => flags.time_series,
            Feature::Preferences => flags.preferences,
            Feature::Events => flags.events,
        }
    }
}

/// Declarative form of a manifest entry, usable in a const table.
pub(super) enum EntrySpec {
    Copy(&'static str),
    Render(&'static str, crate::context::ContextId),
    EnsureDir(&'static str),
}

impl EntrySpec {
    pub(super) fn to_entry(&self) -> ManifestEntry {
        match *self {
            Copy(path) => ManifestEntry::copy(path),
            Render(path, context) => ManifestEntry::render(path, context),
            EnsureDir(path) => ManifestEntry::ensure_dir(path),
        }
    }
}

pub(super) struct Rule {
    pub feature: Feature,
    pub entries: &'static [EntrySpec],
}

pub(super) const RULES: &[Rule] = &[
    Rule {
        feature: Feature::Always,
        entries: &[
            Copy("Gruntfile.js"),
            Copy("LICENSE"),
            Copy("README.md"),
            Render("_package.json", Project),
            Render("_bower.json", Project),
            Render("_.appsngenrc", Project),
            Copy("src/js/debug.js"),
            Copy("src/styles"),
            Copy("src/images"),
            Render("src/_application.xml", Metadata),
            Render("src/_index.html", Composition),
            Render("src/js/_widget.js", Composition),
            Copy("tests"),
            EnsureDir("src/fonts"),
            EnsureDir("documentation"),
        ],
    },
    Rule {
        feature: Feature::ComposedUi,
        entries: &[Copy("src/js/base-builder.ui.js")],
    },
    Rule {
        feature: Feature::DataFetchers,
        entries: &[
            Copy("src/js/data-builder.js"),
            Copy("src/js/data-builder.ui.js"),
            Copy("src/js/waiting-builder.ui.js"),
        ],
    },
    Rule {
        feature: Feature::News,
        entries: &[Copy("src/js/news-builder.ui.js")],
    },
    Rule {
        feature: Feature::Quotes,
        entries: &[Copy("src/js/quotes-builder.ui.js")],
    },
    Rule {
        feature: Feature::TimeSeries,
        entries: &[
            Copy("src/js/request-builder.js"),
            Copy("src/js/request-builder.ui.js"),
        ],
    },
    Rule {
        feature: Feature::Preferences,
        entries: &[Copy("src/js/greeting.js"), Copy("src/js/greeting.ui.js")],
    },
    Rule {
        feature: Feature::Events,
        entries: &[
            Copy("src/js/event-builder.js"),
            Copy("src/js/event-builder.ui.js"),
        ],
    },
];
