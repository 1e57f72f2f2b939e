//! Best-effort extraction of structured enrichment content from an
//! untrusted natural-language reply.
//!
//! Two-tier strategy: a strict parse of the first embedded object literal,
//! then a heuristic line scan when the reply is not well-formed JSON. The
//! upstream generator's output format is not guaranteed, so this is
//! documented as inherently approximate; extraction failure is always
//! recoverable and degrades to `None`.

use serde::Deserialize;

/// Palette override supplied by enrichment. Absent members keep the base
/// catalog colors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PaletteOverride {
    pub primary: Option<String>,
    pub secondary: Option<String>,
    pub accent: Option<String>,
}

/// Structured enrichment content. Every field is optional; absence is a
/// normal, expected state.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct EnrichmentRecord {
    pub title: Option<String>,
    pub description: Option<String>,
    pub achievement: Option<String>,
    #[serde(alias = "decorativeText", alias = "closing")]
    pub decorative_text: Option<String>,
    pub colors: Option<PaletteOverride>,
    pub style: Option<String>,
}

/// Which enrichment flow the raw text came from. The flows differ only in
/// how the heuristic fallback fills fields the reply never mentioned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractMode {
    /// Free-form enhancement request: fallback synthesizes
    /// category-referencing defaults plus a fixed color triple and a
    /// "modern" style tag. Never yields `None` for non-empty input.
    Enhancement,
    /// Certificate-body request: fallback limits itself to
    /// title/description/achievement/decorative text and leaves unmapped
    /// fields `None` instead of inventing content.
    Certificate,
}

/// Fixed fallback palette used by the enhancement flow.
const FALLBACK_COLORS: (&str, &str, &str) = ("#2c3e50", "#34495e", "#3498db");

/// Extract an [`EnrichmentRecord`] from raw generator output.
///
/// Returns `None` only when nothing usable can be derived; never panics.
pub fn extract(raw: &str, category: &str, mode: ExtractMode) -> Option<EnrichmentRecord> {
    if raw.trim().is_empty() {
        return match mode {
            ExtractMode::Enhancement => Some(synthetic_defaults(category)),
            ExtractMode::Certificate => None,
        };
    }

    if let Some(candidate) = object_literal(raw) {
        if let Ok(record) = serde_json::from_str::<EnrichmentRecord>(candidate) {
            return Some(record);
        }
    }

    heuristic(raw, category, mode)
}

/// First `{` through the final `}` of the raw text, when both exist in
/// order. No schema validation beyond the strict parse that follows.
fn object_literal(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    if end > start {
        Some(&raw[start..=end])
    } else {
        None
    }
}

fn heuristic(raw: &str, category: &str, mode: ExtractMode) -> Option<EnrichmentRecord> {
    let lines: Vec<&str> = raw.lines().map(str::trim).filter(|l| !l.is_empty()).collect();

    let title = lines
        .iter()
        .find(|l| l.to_lowercase().contains("title"))
        .map(|l| l.to_string());

    let description_lines: Vec<&str> = lines
        .iter()
        .filter(|l| {
            let lower = l.to_lowercase();
            lower.contains("achievement") || lower.contains("completion")
        })
        .copied()
        .collect();
    let description = if description_lines.is_empty() {
        None
    } else {
        Some(description_lines.join(" "))
    };

    let decorative = lines
        .iter()
        .find(|l| {
            let lower = l.to_lowercase();
            lower.contains("congratulation") || lower.contains("recognition")
        })
        .map(|l| l.to_string());

    match mode {
        ExtractMode::Enhancement => {
            let defaults = synthetic_defaults(category);
            Some(EnrichmentRecord {
                title: title.or(defaults.title),
                description: description.or(defaults.description),
                decorative_text: decorative.or(defaults.decorative_text),
                achievement: None,
                colors: defaults.colors,
                style: defaults.style,
            })
        }
        ExtractMode::Certificate => {
            // No marker line matched: nothing was derived, so the strict
            // flow reports failure instead of an all-empty record.
            if title.is_none() && description.is_none() && decorative.is_none() {
                return None;
            }
            Some(EnrichmentRecord {
                title,
                description,
                decorative_text: decorative,
                achievement: None,
                colors: None,
                style: None,
            })
        }
    }
}

fn synthetic_defaults(category: &str) -> EnrichmentRecord {
    EnrichmentRecord {
        title: Some(format!("Advanced {category}")),
        description: Some(format!(
            "Has demonstrated exceptional skill and dedication in {category}"
        )),
        decorative_text: Some("Congratulations on this outstanding achievement!".to_string()),
        achievement: None,
        colors: Some(PaletteOverride {
            primary: Some(FALLBACK_COLORS.0.to_string()),
            secondary: Some(FALLBACK_COLORS.1.to_string()),
            accent: Some(FALLBACK_COLORS.2.to_string()),
        }),
        style: Some("modern".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_json_is_parsed_exactly() {
        let raw = "Sure! Here is your content:\n\
                   {\"title\": \"Pythonic Excellence Award\", \
                    \"description\": \"Mastered advanced interpreter internals.\", \
                    \"achievement\": \"Distinguished Performance\", \
                    \"decorativeText\": \"Award of Merit\"}\n\
                   Hope this helps.";
        let record = extract(raw, "Python Mastery", ExtractMode::Certificate).unwrap();
        assert_eq!(record.title.as_deref(), Some("Pythonic Excellence Award"));
        assert_eq!(
            record.description.as_deref(),
            Some("Mastered advanced interpreter internals.")
        );
        assert_eq!(record.decorative_text.as_deref(), Some("Award of Merit"));
        assert!(record.colors.is_none());
    }

    #[test]
    fn closing_alias_maps_to_decorative_text() {
        let raw = "{\"closing\": \"Congratulations on a job well done\"}";
        let record = extract(raw, "X", ExtractMode::Certificate).unwrap();
        assert_eq!(
            record.decorative_text.as_deref(),
            Some("Congratulations on a job well done")
        );
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let raw = "{\"title\": \"T\", \"confidence\": 0.9, \"tags\": [\"a\"]}";
        let record = extract(raw, "X", ExtractMode::Certificate).unwrap();
        assert_eq!(record.title.as_deref(), Some("T"));
    }

    #[test]
    fn marker_lines_drive_the_heuristic() {
        let raw = "Title: Mastery of Distributed Systems\n\
                   \n\
                   This achievement reflects months of dedication.\n\
                   Completion of all practical modules.\n\
                   Congratulations on reaching this milestone!";
        let record = extract(raw, "Distributed Systems", ExtractMode::Enhancement).unwrap();
        assert_eq!(
            record.title.as_deref(),
            Some("Title: Mastery of Distributed Systems")
        );
        assert_eq!(
            record.description.as_deref(),
            Some(
                "This achievement reflects months of dedication. \
                 Completion of all practical modules."
            )
        );
        assert_eq!(
            record.decorative_text.as_deref(),
            Some("Congratulations on reaching this milestone!")
        );
        assert_eq!(record.style.as_deref(), Some("modern"));
        let colors = record.colors.unwrap();
        assert_eq!(colors.primary.as_deref(), Some("#2c3e50"));
    }

    #[test]
    fn enhancement_mode_defaults_reference_the_category() {
        let record = extract("nothing useful here", "Rust", ExtractMode::Enhancement).unwrap();
        assert_eq!(record.title.as_deref(), Some("Advanced Rust"));
        assert_eq!(
            record.description.as_deref(),
            Some("Has demonstrated exceptional skill and dedication in Rust")
        );
        assert_eq!(
            record.decorative_text.as_deref(),
            Some("Congratulations on this outstanding achievement!")
        );
    }

    #[test]
    fn certificate_mode_without_markers_is_none() {
        // The strict flow never synthesizes content; text with no object
        // literal and no marker lines yields nothing at all.
        assert!(extract(
            "The weather is nice today and nothing else matters",
            "Rust",
            ExtractMode::Certificate
        )
        .is_none());
    }

    #[test]
    fn certificate_mode_keeps_partial_matches() {
        let record = extract(
            "Title: Advanced Borrow Checking\nsome filler line",
            "Rust",
            ExtractMode::Certificate,
        )
        .unwrap();
        assert_eq!(record.title.as_deref(), Some("Title: Advanced Borrow Checking"));
        assert!(record.description.is_none());
        assert!(record.decorative_text.is_none());
        assert!(record.colors.is_none());
        assert!(record.style.is_none());
    }

    #[test]
    fn empty_input_is_none_only_in_certificate_mode() {
        assert!(extract("  \n ", "Rust", ExtractMode::Certificate).is_none());
        assert!(extract("  \n ", "Rust", ExtractMode::Enhancement).is_some());
    }

    #[test]
    fn malformed_literal_falls_back_to_heuristic() {
        let raw = "{\"title\": unterminated\nTitle line here\nachievement noted";
        let record = extract(raw, "X", ExtractMode::Certificate).unwrap();
        // No closing brace, so the strict parse never runs and the line
        // scan applies instead.
        assert_eq!(record.title.as_deref(), Some("{\"title\": unterminated"));
        assert_eq!(record.description.as_deref(), Some("achievement noted"));
    }
}
