//! View model for a set of analysis results.
//!
//! [`render`] is a pure function of the display key and the result: it sorts,
//! rounds and decorates, and leaves the result untouched. The UI layer only
//! maps the returned [`ResultsView`] onto markup.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use std::fmt;

use crate::models::{AnalysisResult, Label};

/// Shown in place of the label list when there are no labels.
pub const NO_LABELS_PLACEHOLDER: &str = "No labels found";

/// Icon for labels missing from [`LABEL_ICONS`].
pub const DEFAULT_LABEL_ICON: &str = "🔍";

/// Emoji for face attributes missing from [`FACE_EMOJIS`].
pub const DEFAULT_FACE_EMOJI: &str = "🙂";

/// Badge prefix for recognized celebrities.
pub const CELEBRITY_ICON: &str = "🌟";

/// Label name to icon.
pub static LABEL_ICONS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("Person", "🧍"),
        ("Face", "🙂"),
        ("Beard", "🧔"),
        ("Glasses", "👓"),
        ("Smile", "😄"),
        ("Orange", "🍊"),
        ("Food", "🍽️"),
        ("Fruit", "🍎"),
        ("Produce", "🥕"),
    ])
});

/// Face attribute (without confidence) to emoji.
pub static FACE_EMOJIS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("Smiling", "😄"),
        ("Has beard", "🧔"),
        ("Has mustache", "👨‍🦰"),
        ("Wearing glasses", "👓"),
    ])
});

static FACE_ATTRIBUTE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.*?)( \(\d+\.\d+%\))?$").expect("valid face attribute regex"));

static EXTENSION: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.[^/.]+$").expect("valid extension regex"));

// =============================================================================
// Confidence
// =============================================================================

/// Visual severity of a label's confidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceTier {
    /// 80% and above
    High,
    /// 50% to 79%
    Medium,
    /// Below 50%
    Low,
}

impl ConfidenceTier {
    /// Tier for a raw confidence score.
    ///
    /// A score displayed as 80% or more is always high; anything strictly
    /// below 50 is low even when it displays as 50%.
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence.round() >= 80.0 {
            ConfidenceTier::High
        } else if confidence >= 50.0 {
            ConfidenceTier::Medium
        } else {
            ConfidenceTier::Low
        }
    }

    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            ConfidenceTier::High => "tier-high",
            ConfidenceTier::Medium => "tier-medium",
            ConfidenceTier::Low => "tier-low",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ConfidenceTier::High => "high",
            ConfidenceTier::Medium => "medium",
            ConfidenceTier::Low => "low",
        }
    }
}

/// One rendered label badge.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelView {
    pub name: String,
    pub icon: &'static str,
    /// Confidence rounded to the nearest integer.
    pub percent: i64,
    pub tier: ConfidenceTier,
}

impl LabelView {
    pub fn from_label(label: &Label) -> Self {
        let percent = label.confidence.round() as i64;
        Self {
            name: label.name.clone(),
            icon: label_icon(&label.name),
            percent,
            tier: ConfidenceTier::from_confidence(label.confidence),
        }
    }

    /// `"95%"`
    pub fn percent_text(&self) -> String {
        format!("{}%", self.percent)
    }

    /// Indicator bar width in percent, clamped to `0..=100`.
    pub fn bar_width(&self) -> i64 {
        self.percent.clamp(0, 100)
    }
}

// =============================================================================
// Face attributes
// =============================================================================

/// A face attribute split into its name and optional confidence suffix.
#[derive(Debug, Clone, PartialEq)]
pub enum FaceAttribute {
    Parsed {
        emoji: &'static str,
        base: String,
        /// e.g. `" (97.3%)"`, kept byte for byte.
        suffix: Option<String>,
    },
    /// Text the pattern could not split, rendered as-is.
    Raw(String),
}

impl FaceAttribute {
    pub fn parse(attr: &str) -> Self {
        match FACE_ATTRIBUTE.captures(attr) {
            Some(caps) => {
                let base = caps.get(1).map_or("", |m| m.as_str());
                FaceAttribute::Parsed {
                    emoji: face_emoji(base.trim()),
                    base: base.to_string(),
                    suffix: caps.get(2).map(|m| m.as_str().to_string()),
                }
            }
            None => FaceAttribute::Raw(attr.to_string()),
        }
    }
}

impl fmt::Display for FaceAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FaceAttribute::Parsed { emoji, base, suffix } => {
                write!(f, "{} {}{}", emoji, base, suffix.as_deref().unwrap_or(""))
            }
            FaceAttribute::Raw(text) => f.write_str(text),
        }
    }
}

// =============================================================================
// Rendering
// =============================================================================

/// Everything the results panel shows.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsView {
    pub title: String,
    /// Sorted by descending confidence. Empty means "no labels found".
    pub labels: Vec<LabelView>,
    /// Empty means the section is omitted.
    pub celebrities: Vec<String>,
    /// Empty means the section is omitted.
    pub faces: Vec<FaceAttribute>,
}

/// Build the view for `result` uploaded under `display_key`.
pub fn render(display_key: &str, result: &AnalysisResult) -> ResultsView {
    let labels = result
        .labels
        .as_deref()
        .map(sorted_labels)
        .unwrap_or_default()
        .iter()
        .map(LabelView::from_label)
        .collect();

    ResultsView {
        title: display_name(display_key),
        labels,
        celebrities: result.celebrities.clone().unwrap_or_default(),
        faces: result
            .faces
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|attr| FaceAttribute::parse(attr))
            .collect(),
    }
}

/// Copy of `labels` ordered by descending confidence; ties keep input order.
pub fn sorted_labels(labels: &[Label]) -> Vec<Label> {
    let mut sorted = labels.to_vec();
    sorted.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
    sorted
}

/// Human readable title: last path segment without its extension.
///
/// Falls back to the raw key when nothing is left.
pub fn display_name(key: &str) -> String {
    let file_name = key.rsplit('/').next().filter(|s| !s.is_empty()).unwrap_or(key);
    let base = strip_extension(file_name);
    if base.is_empty() {
        key.to_string()
    } else {
        base
    }
}

/// Remove a trailing `.ext` from a name or path.
pub fn strip_extension(name: &str) -> String {
    EXTENSION.replace(name, "").into_owned()
}

pub fn label_icon(name: &str) -> &'static str {
    LABEL_ICONS.get(name).copied().unwrap_or(DEFAULT_LABEL_ICON)
}

pub fn face_emoji(attribute: &str) -> &'static str {
    FACE_EMOJIS.get(attribute).copied().unwrap_or(DEFAULT_FACE_EMOJI)
}
