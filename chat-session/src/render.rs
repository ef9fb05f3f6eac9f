//! Display fragments for AI replies.
//!
//! Everything here is a pure function of its input, so rendering the same
//! message twice yields identical fragments.

use std::collections::HashMap;

use shared_types::{Message, SourceRef};

/// Smallest bar width, so a near-zero confidence still shows up.
pub const MIN_BAR_WIDTH: i64 = 5;

const SCHEME_DISPLAY_NAMES: &[(&str, &str)] = &[
    ("pmjdy", "Pradhan Mantri Jan Dhan Yojana (PMJDY)"),
    ("nsp", "National Scholarship Portal (NSP)"),
    ("ayushman", "Ayushman Bharat – PM-JAY"),
    ("pmay-g", "Pradhan Mantri Awas Yojana – Gramin (PMAY-G)"),
    ("pmay-u", "Pradhan Mantri Awas Yojana – Urban (PMAY-U)"),
    ("mudra", "Pradhan Mantri Mudra Yojana (MUDRA)"),
];

// ============================================================================
// Sources
// ============================================================================

/// Citations of one document within a single reply.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceSummary {
    pub name: String,
    pub count: usize,
    pub max_score: f64,
}

impl SourceSummary {
    /// Chip text: the document name, with the chunk count when cited more
    /// than once.
    pub fn label(&self) -> String {
        if self.count > 1 {
            format!("{} ×{}", self.name, self.count)
        } else {
            self.name.clone()
        }
    }
}

/// Group citations by exact document name, in first-occurrence order.
pub fn summarize_sources(sources: &[SourceRef]) -> Vec<SourceSummary> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut out: Vec<SourceSummary> = Vec::new();

    for src in sources {
        if let Some(&i) = index.get(src.source.as_str()) {
            let entry = &mut out[i];
            entry.count += 1;
            entry.max_score = entry.max_score.max(src.similarity_score);
            continue;
        }
        index.insert(src.source.as_str(), out.len());
        out.push(SourceSummary {
            name: src.source.clone(),
            count: 1,
            max_score: src.similarity_score,
        });
    }

    out
}

pub fn format_similarity(score: f64) -> String {
    format!("{}%", (score * 100.0).round() as i64)
}

// ============================================================================
// Scheme badge
// ============================================================================

/// Human-readable name for a detected scheme identifier.
///
/// Known identifiers match case-insensitively; anything else is shown
/// uppercased. Blank or missing identifiers render no badge.
pub fn scheme_label(scheme: Option<&str>) -> Option<String> {
    let scheme = scheme.map(str::trim).filter(|s| !s.is_empty())?;
    let key = scheme.to_lowercase();
    let label = SCHEME_DISPLAY_NAMES
        .iter()
        .find(|(id, _)| *id == key)
        .map(|(_, name)| (*name).to_string())
        .unwrap_or_else(|| scheme.to_uppercase());
    Some(label)
}

// ============================================================================
// Confidence bar
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceTier {
    Low,
    Medium,
    High,
}

impl ConfidenceTier {
    fn from_percent(percent: i64) -> Self {
        if percent < 40 {
            Self::Low
        } else if percent < 70 {
            Self::Medium
        } else {
            Self::High
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Self::Low => "#ef4444",
            Self::Medium => "#f59e0b",
            Self::High => "#10b981",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfidenceBar {
    /// Rounded, unclamped value shown in the label
    pub percent: i64,
    /// Width of the filled bar, floored at [`MIN_BAR_WIDTH`]
    pub width_percent: i64,
    pub tier: ConfidenceTier,
}

impl ConfidenceBar {
    pub fn label(&self) -> String {
        format!("{}%", self.percent)
    }
}

pub fn confidence_bar(confidence: Option<f64>) -> Option<ConfidenceBar> {
    let confidence = confidence.filter(|c| !c.is_nan())?;
    let percent = (confidence * 100.0).round() as i64;
    Some(ConfidenceBar {
        percent,
        width_percent: percent.clamp(MIN_BAR_WIDTH, 100),
        tier: ConfidenceTier::from_percent(percent),
    })
}

// ============================================================================
// Per-message bundle
// ============================================================================

/// Everything drawn under an AI bubble.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AiDecorations {
    pub scheme: Option<String>,
    pub confidence: Option<ConfidenceBar>,
    pub sources: Vec<SourceSummary>,
}

impl AiDecorations {
    /// User messages carry no decorations.
    pub fn for_message(message: &Message) -> Self {
        if message.is_user() {
            return Self::default();
        }
        Self {
            scheme: scheme_label(message.detected_scheme.as_deref()),
            confidence: confidence_bar(message.confidence),
            sources: summarize_sources(&message.sources),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.scheme.is_none() && self.confidence.is_none() && self.sources.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::AnswerResponse;

    #[test]
    fn groups_sources_in_first_occurrence_order() {
        let sources = vec![
            SourceRef::new("A", 0.2),
            SourceRef::new("B", 0.9),
            SourceRef::new("A", 0.5),
        ];
        let summary = summarize_sources(&sources);
        assert_eq!(
            summary,
            vec![
                SourceSummary {
                    name: "A".to_string(),
                    count: 2,
                    max_score: 0.5
                },
                SourceSummary {
                    name: "B".to_string(),
                    count: 1,
                    max_score: 0.9
                },
            ]
        );
        assert_eq!(summary[0].label(), "A ×2");
        assert_eq!(summary[1].label(), "B");
    }

    #[test]
    fn grouping_is_case_sensitive() {
        let sources = vec![SourceRef::new("nsp.pdf", 0.4), SourceRef::new("NSP.pdf", 0.3)];
        assert_eq!(summarize_sources(&sources).len(), 2);
        assert!(summarize_sources(&[]).is_empty());
    }

    #[test]
    fn confidence_bar_floors_width_not_label() {
        let bar = confidence_bar(Some(0.0)).expect("bar");
        assert_eq!(bar.label(), "0%");
        assert_eq!(bar.width_percent, 5);
        assert_eq!(bar.tier, ConfidenceTier::Low);

        let bar = confidence_bar(Some(0.55)).expect("bar");
        assert_eq!((bar.percent, bar.width_percent), (55, 55));
        assert_eq!(bar.tier, ConfidenceTier::Medium);

        let bar = confidence_bar(Some(0.95)).expect("bar");
        assert_eq!((bar.percent, bar.width_percent), (95, 95));
        assert_eq!(bar.tier, ConfidenceTier::High);
    }

    #[test]
    fn confidence_tier_boundaries() {
        assert_eq!(confidence_bar(Some(0.394)).unwrap().tier, ConfidenceTier::Low);
        assert_eq!(confidence_bar(Some(0.40)).unwrap().tier, ConfidenceTier::Medium);
        assert_eq!(confidence_bar(Some(0.694)).unwrap().tier, ConfidenceTier::Medium);
        assert_eq!(confidence_bar(Some(0.70)).unwrap().tier, ConfidenceTier::High);
        assert_eq!(confidence_bar(Some(1.3)).unwrap().width_percent, 100);
    }

    #[test]
    fn missing_confidence_has_no_bar() {
        assert!(confidence_bar(None).is_none());
        assert!(confidence_bar(Some(f64::NAN)).is_none());
    }

    #[test]
    fn scheme_labels() {
        let pmjdy = "Pradhan Mantri Jan Dhan Yojana (PMJDY)";
        assert_eq!(scheme_label(Some("pmjdy")).as_deref(), Some(pmjdy));
        assert_eq!(scheme_label(Some("PMJDY")).as_deref(), Some(pmjdy));
        assert_eq!(
            scheme_label(Some("pmay-u")).as_deref(),
            Some("Pradhan Mantri Awas Yojana – Urban (PMAY-U)")
        );
        assert_eq!(scheme_label(Some("ABC")).as_deref(), Some("ABC"));
        assert_eq!(scheme_label(Some("kisan")).as_deref(), Some("KISAN"));
        assert_eq!(scheme_label(Some("")), None);
        assert_eq!(scheme_label(None), None);
    }

    #[test]
    fn similarity_formats_as_percent() {
        assert_eq!(format_similarity(0.8123), "81%");
        assert_eq!(format_similarity(0.0), "0%");
    }

    #[test]
    fn decorations_are_deterministic() {
        let reply = AnswerResponse {
            answer: "Ayushman Bharat covers 5 lakh per family.".to_string(),
            sources: vec![
                SourceRef::new("ayushman.pdf", 0.61),
                SourceRef::new("ayushman.pdf", 0.66),
            ],
            detected_scheme: Some("ayushman".to_string()),
            confidence: Some(0.62),
            ..AnswerResponse::default()
        };
        let msg = Message::from_answer("ai-1", reply);

        let first = AiDecorations::for_message(&msg);
        let second = AiDecorations::for_message(&msg);
        assert_eq!(first, second);
        assert_eq!(first.scheme.as_deref(), Some("Ayushman Bharat – PM-JAY"));
        assert_eq!(first.sources[0].count, 2);
        assert_eq!(first.confidence.unwrap().tier, ConfidenceTier::Medium);
    }

    #[test]
    fn user_messages_have_no_decorations() {
        let mut msg = Message::user("user-1", "What is NSP?");
        msg.detected_scheme = Some("nsp".to_string());
        assert!(AiDecorations::for_message(&msg).is_empty());
    }
}
