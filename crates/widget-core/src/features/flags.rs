//! Validated feature selection for a generation run

use crate::error::{Error, Result};
use crate::features::answers::RawAnswers;
use crate::features::slug::slugify;

/// Typed, validated feature selection for one generation run.
///
/// Constructed once from raw answers and never mutated. The data-source
/// sub-flags (`quotes`, `time_series`, `news`) are forced false here when
/// `data_source` is declined; downstream logic relies on that and never
/// re-checks it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureFlags {
    pub widget_name: String,
    pub widget_description: String,
    /// Identifier-safe slug of `widget_name`; doubles as the package name.
    pub widget_id: String,
    pub preferences: bool,
    pub events: bool,
    pub data_source: bool,
    pub quotes: bool,
    pub time_series: bool,
    pub news: bool,
}

impl FeatureFlags {
    /// Normalize raw answers into a validated selection.
    ///
    /// The name check runs here even though the prompt flow already rejects
    /// empty names: answers can also arrive from CLI flags or another
    /// front-end, and the engine does not trust upstream validation.
    pub fn from_answers(answers: &RawAnswers) -> Result<Self> {
        let widget_name = answers.widget_name.trim().to_string();
        if widget_name.is_empty() {
            return Err(Error::Validation("widget name must not be empty".into()));
        }

        let widget_id = slugify(&widget_name);
        if widget_id.is_empty() {
            return Err(Error::Validation(format!(
                "widget name '{widget_name}' contains no usable identifier characters"
            )));
        }

        let data_source = answers.enable_data_source_support;

        Ok(Self {
            widget_name,
            widget_description: answers.widget_description.clone(),
            widget_id,
            preferences: answers.enable_preferences_support,
            events: answers.enable_events_support,
            data_source,
            // Sub-answers are meaningful only when data-source support is on.
            quotes: data_source && answers.enable_quotes_support.unwrap_or(false),
            time_series: data_source && answers.enable_time_series_support.unwrap_or(false),
            news: data_source && answers.enable_news_support.unwrap_or(false),
        })
    }

    /// At least one optional example is selected, so the generated page
    /// composes optional UI regions.
    pub fn has_composed_ui(&self) -> bool {
        self.preferences || self.events || self.data_source
    }

    /// At least one data-source example is selected, so the shared
    /// data-fetch core and its UI wrappers are needed.
    pub fn has_data_fetchers(&self) -> bool {
        self.quotes || self.time_series || self.news
    }

    /// The rendered build files must pull in the code-editor dependency
    /// whenever an example that edits structured data is present.
    pub fn include_code_mirror(&self) -> bool {
        self.events || self.data_source
    }
}
