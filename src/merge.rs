//! Pure merge of the immutable design catalog with enrichment content.
//!
//! Produces one [`EffectiveDescriptor`] per catalog entry, constructed fresh
//! for every (request, variant) pair. The base catalog is never written to;
//! repeated calls with the same inputs yield value-identical outputs.

use crate::catalog::{DesignDescriptor, Variant};
use crate::extract::EnrichmentRecord;
use crate::CertificateRecord;

/// Per-variant, per-request merge of base styling with enrichment overrides.
#[derive(Debug, Clone, PartialEq)]
pub struct EffectiveDescriptor {
    pub variant: Variant,
    pub display_name: String,
    pub summary: String,
    pub background_color: String,
    pub primary_color: String,
    pub secondary_color: String,
    pub accent_color: String,
    pub text_color: String,
    pub ai_title: Option<String>,
    pub ai_description: Option<String>,
    pub ai_achievement: Option<String>,
    pub ai_decorative: Option<String>,
}

impl EffectiveDescriptor {
    fn from_base(base: &DesignDescriptor) -> Self {
        Self {
            variant: base.variant,
            display_name: base.display_name.to_string(),
            summary: base.summary.to_string(),
            background_color: base.background_color.to_string(),
            primary_color: base.primary_color.to_string(),
            secondary_color: base.secondary_color.to_string(),
            accent_color: base.accent_color.to_string(),
            text_color: base.text_color.to_string(),
            ai_title: None,
            ai_description: None,
            ai_achievement: None,
            ai_decorative: None,
        }
    }
}

/// Merge the catalog with enrichment content (possibly absent).
///
/// Palette overrides and derived display fields apply uniformly to every
/// variant; the sole variant-specific rule is the style-tag attribution
/// sentence appended to a matching variant's summary.
pub fn merge(
    designs: &[DesignDescriptor],
    enrichment: Option<&EnrichmentRecord>,
    record: &CertificateRecord,
) -> Vec<EffectiveDescriptor> {
    designs
        .iter()
        .map(|base| {
            let mut effective = EffectiveDescriptor::from_base(base);

            let Some(content) = enrichment else {
                return effective;
            };

            if let Some(colors) = &content.colors {
                if let Some(primary) = &colors.primary {
                    effective.primary_color = primary.clone();
                }
                if let Some(secondary) = &colors.secondary {
                    effective.secondary_color = secondary.clone();
                }
                if let Some(accent) = &colors.accent {
                    effective.accent_color = accent.clone();
                }
            }

            // A generated title equal to the raw category name is not
            // meaningfully different and is discarded.
            if let Some(title) = &content.title {
                if title.trim() != record.category_name {
                    effective.ai_title = Some(title.clone());
                }
            }
            effective.ai_description = content.description.clone();
            effective.ai_achievement = content.achievement.clone();
            effective.ai_decorative = content.decorative_text.clone();

            if let Some(style) = &content.style {
                if style.trim().eq_ignore_ascii_case(base.variant.as_str()) {
                    effective.summary.push_str(&format!(
                        " Enhanced with AI-generated content for {}.",
                        record.category_name
                    ));
                }
            }

            effective
        })
        .collect()
}
