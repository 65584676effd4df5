//! Tag-driven lookups: summary type and impact sentence.

use super::types::{SummaryType, TagCategory};

/// Impact sentence for tags outside the vocabulary.
pub const GENERIC_IMPACT: &str = "Had a positive impact on project development";

impl TagCategory {
    pub fn summary_type(&self) -> SummaryType {
        match self {
            Self::BugFixed => SummaryType::SecurityUpdate,
            Self::FunctionAdded | Self::FunctionModify => SummaryType::FeatureDevelopment,
            Self::Question | Self::Discussion => SummaryType::Discussion,
            Self::Other => SummaryType::Other,
        }
    }

    pub fn impact(&self) -> &'static str {
        match self {
            Self::BugFixed => "Improved system stability and user experience",
            Self::FunctionAdded => "Enhanced functionality and user capabilities",
            Self::FunctionModify => "Optimized existing features and performance",
            Self::Question => "Clarified requirements and improved understanding",
            Self::Discussion => "Promoted knowledge sharing and collaboration",
            Self::Other => GENERIC_IMPACT,
        }
    }
}

/// Map an upstream tag onto a [`SummaryType`]; unknown tags (including case
/// variants) are [`SummaryType::Other`].
pub fn map_type_from_tag(tag: &str) -> SummaryType {
    TagCategory::from_tag(tag)
        .map(|c| c.summary_type())
        .unwrap_or(SummaryType::Other)
}

/// Fixed impact sentence for a tag.
///
/// `_description` is accepted but not consulted: the sentence depends on the
/// tag alone.
pub fn describe_impact(tag: &str, _description: &str) -> &'static str {
    TagCategory::from_tag(tag)
        .map(|c| c.impact())
        .unwrap_or(GENERIC_IMPACT)
}
