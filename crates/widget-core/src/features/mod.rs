//! Feature model: raw answers normalized into typed feature flags
//!
//! This module provides:
//! - The raw answer object as delivered by the prompt flow (`RawAnswers`)
//! - Slug derivation for the widget identifier
//! - The validated, immutable feature selection (`FeatureFlags`)

mod answers;
mod flags;
mod slug;

pub use answers::RawAnswers;
pub use flags::FeatureFlags;
pub use slug::slugify;
