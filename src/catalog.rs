//! The fixed catalog of template variants.
//!
//! Five base descriptors, process-wide constants. The catalog is never
//! mutated; enrichment always produces derived values (see `merge`).

use std::fmt;

/// One of the five fixed visual template identities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Modern,
    Classic,
    Elegant,
    Tech,
    Creative,
}

impl Variant {
    /// Fixed presentation order, variant 0 through 4.
    pub const ALL: [Variant; 5] = [
        Variant::Modern,
        Variant::Classic,
        Variant::Elegant,
        Variant::Tech,
        Variant::Creative,
    ];

    /// Lowercase type tag, matching the enrichment style tag vocabulary.
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Modern => "modern",
            Variant::Classic => "classic",
            Variant::Elegant => "elegant",
            Variant::Tech => "tech",
            Variant::Creative => "creative",
        }
    }

    /// Position within the fixed presentation order.
    pub fn index(&self) -> usize {
        Variant::ALL.iter().position(|v| v == self).unwrap_or(0)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable base descriptor for one template variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesignDescriptor {
    pub variant: Variant,
    pub display_name: &'static str,
    pub summary: &'static str,
    pub background_color: &'static str,
    pub primary_color: &'static str,
    pub secondary_color: &'static str,
    pub accent_color: &'static str,
    pub text_color: &'static str,
}

/// The fixed five-entry design catalog, in presentation order.
pub fn catalog() -> [DesignDescriptor; 5] {
    [
        DesignDescriptor {
            variant: Variant::Modern,
            display_name: "Modern Professional",
            summary: "Clean, contemporary design with geometric elements and professional \
                      typography. Features a minimalist border, bold title, and structured \
                      layout perfect for corporate achievements.",
            background_color: "#ffffff",
            primary_color: "#2c3e50",
            secondary_color: "#34495e",
            accent_color: "#3498db",
            text_color: "#2c3e50",
        },
        DesignDescriptor {
            variant: Variant::Classic,
            display_name: "Classic Elegance",
            summary: "Traditional certificate design with ornate borders and classic \
                      typography. Includes decorative flourishes, elegant spacing, and \
                      timeless styling reminiscent of formal academic certificates.",
            background_color: "#fefefe",
            primary_color: "#8b4513",
            secondary_color: "#a0522d",
            accent_color: "#daa520",
            text_color: "#654321",
        },
        DesignDescriptor {
            variant: Variant::Elegant,
            display_name: "Elegant Premium",
            summary: "Sophisticated design with gradient effects and refined typography. \
                      Features elegant borders, premium color scheme, and professional \
                      layout suitable for high-end certifications.",
            background_color: "#f8f9fa",
            primary_color: "#6c5ce7",
            secondary_color: "#a29bfe",
            accent_color: "#fd79a8",
            text_color: "#2d3436",
        },
        DesignDescriptor {
            variant: Variant::Tech,
            display_name: "Tech Innovation",
            summary: "Modern tech-inspired design with geometric patterns and digital \
                      aesthetics. Includes structured info panels and contemporary styling \
                      perfect for technology-related achievements.",
            background_color: "#ffffff",
            primary_color: "#0984e3",
            secondary_color: "#74b9ff",
            accent_color: "#00b894",
            text_color: "#2d3436",
        },
        DesignDescriptor {
            variant: Variant::Creative,
            display_name: "Creative Artistic",
            summary: "Vibrant and creative design with artistic elements and playful \
                      typography. Features colorful accents, creative shapes, and dynamic \
                      layout ideal for creative fields and artistic achievements.",
            background_color: "#ffffff",
            primary_color: "#e17055",
            secondary_color: "#fdcb6e",
            accent_color: "#6c5ce7",
            text_color: "#2d3436",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_five_distinct_variants() {
        let designs = catalog();
        assert_eq!(designs.len(), 5);
        for (i, d) in designs.iter().enumerate() {
            assert_eq!(d.variant, Variant::ALL[i]);
            assert_eq!(d.variant.index(), i);
        }
    }

    #[test]
    fn variant_tags_are_lowercase() {
        for v in Variant::ALL {
            assert_eq!(v.as_str(), v.as_str().to_lowercase());
            assert_eq!(v.to_string(), v.as_str());
        }
    }
}
