//! Template data binding: feature flags -> rendering contexts
//!
//! Three independent contexts feed the three template families. All of
//! them are pure derivations of the feature flags; none carries any
//! filesystem state, so rebinding is always cheap and safe.

use serde::Serialize;

use crate::features::FeatureFlags;

/// Which group of templates a context feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContextId {
    /// Package descriptor, dependency descriptor and run-config.
    Project,
    /// The XML widget manifest.
    Metadata,
    /// The HTML page and the root script.
    Composition,
}

impl ContextId {
    pub fn as_str(self) -> &'static str {
        match self {
            ContextId::Project => "project",
            ContextId::Metadata => "metadata",
            ContextId::Composition => "composition",
        }
    }
}

/// Data for the project descriptor templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectContext {
    /// Package name; same as the widget id.
    pub name: String,
    pub description: String,
    pub include_code_mirror: bool,
}

/// Data for the XML widget manifest template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataContext {
    pub id: String,
    pub name: String,
    pub description: String,
    pub include_data_source: bool,
    pub include_preferences: bool,
    pub include_events: bool,
}

/// Data for the HTML page and root script templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositionContext {
    pub include_quotes_data_source: bool,
    pub include_time_series_data_source: bool,
    pub include_news_data_source: bool,
    pub include_event_builder: bool,
    pub include_greeting: bool,
    /// Whether any optional widget region should be emitted at all.
    pub not_empty: bool,
}

/// The bound contexts for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateData {
    pub project: ProjectContext,
    pub metadata: MetadataContext,
    pub composition: CompositionContext,
}

impl TemplateData {
    /// Bind all three contexts from the feature selection.
    pub fn bind(flags: &FeatureFlags) -> Self {
        Self {
            project: ProjectContext {
                name: flags.widget_id.clone(),
                description: flags.widget_description.clone(),
                include_code_mirror: flags.include_code_mirror(),
            },
            metadata: MetadataContext {
                id: flags.widget_id.clone(),
                name: flags.widget_name.clone(),
                description: flags.widget_description.clone(),
                include_data_source: flags.data_source,
                include_preferences: flags.preferences,
                include_events: flags.events,
            },
            composition: CompositionContext {
                include_quotes_data_source: flags.quotes,
                include_time_series_data_source: flags.time_series,
                include_news_data_source: flags.news,
                include_event_builder: flags.events,
                include_greeting: flags.preferences,
                // Recomputed from the flags, never trusted from caller state.
                not_empty: flags.news
                    || flags.events
                    || flags.quotes
                    || flags.preferences
                    || flags.time_series,
            },
        }
    }

    /// The tera context for a template family.
    pub fn context_for(&self, id: ContextId) -> tera::Result<tera::Context> {
        match id {
            ContextId::Project => tera::Context::from_serialize(&self.project),
            ContextId::Metadata => tera::Context::from_serialize(&self.metadata),
            ContextId::Composition => tera::Context::from_serialize(&self.composition),
        }
    }
}
