//! Raw answers from the prompting front-end

use serde::{Deserialize, Serialize};

/// Answers as collected by the prompt flow (or assembled from CLI flags).
///
/// Fields serialize with the wire-format camelCase keys. The three
/// data-source sub-answers are only asked when data-source support is
/// accepted, so they may be absent entirely; absent means declined.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawAnswers {
    pub widget_name: String,
    pub widget_description: String,
    pub enable_preferences_support: bool,
    pub enable_events_support: bool,
    pub enable_data_source_support: bool,
    pub enable_quotes_support: Option<bool>,
    pub enable_time_series_support: Option<bool>,
    pub enable_news_support: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_sub_answers_deserialize_as_none() {
        let answers: RawAnswers = serde_yaml::from_str(
            "widgetName: Stock Ticker\n\
             widgetDescription: shows quotes\n\
             enableDataSourceSupport: false\n",
        )
        .unwrap();

        assert_eq!(answers.widget_name, "Stock Ticker");
        assert!(!answers.enable_data_source_support);
        assert_eq!(answers.enable_quotes_support, None);
        assert_eq!(answers.enable_time_series_support, None);
        assert_eq!(answers.enable_news_support, None);
    }

    #[test]
    fn test_camel_case_keys_round_trip() {
        let answers = RawAnswers {
            widget_name: "Ticker".to_string(),
            enable_data_source_support: true,
            enable_quotes_support: Some(true),
            ..Default::default()
        };

        let yaml = serde_yaml::to_string(&answers).unwrap();
        assert!(yaml.contains("widgetName"));
        assert!(yaml.contains("enableDataSourceSupport"));
        assert!(yaml.contains("enableQuotesSupport"));
    }
}
