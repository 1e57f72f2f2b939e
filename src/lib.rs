//! Certsmith certificate generator
//!
//! A library for rendering a fixed catalog of certificate layouts from a
//! small record of user-supplied facts, optionally enriched by a remote
//! text-generation call. Each of the five layout variants is produced as an
//! ordered sequence of drawing instructions plus a re-runnable source
//! listing.
//!
//! # Example
//!
//! ```no_run
//! use certsmith::pipeline::Generator;
//! use certsmith::{ProviderConfig, RawInput};
//!
//! let input = RawInput {
//!     category_name: "Python Mastery".into(),
//!     recipient_name: "Jane Doe".into(),
//!     organization_name: "Acme Academy".into(),
//!     date_issued: Some("2024-01-15".into()),
//!     api_key: String::new(),
//! };
//!
//! let generator = Generator::new(ProviderConfig::default());
//! let outcome = generator.run(input);
//! for cert in &outcome.certificates {
//!     println!("{}: {} instructions", cert.variant, cert.commands.len());
//! }
//! ```

use chrono::{Local, NaiveDate};

pub mod error;
pub use error::{Error, Result};

pub mod catalog;
pub mod extract;
pub mod listing;
pub mod merge;
pub mod pipeline;
pub mod provider;
pub mod render;

// Async-friendly generation API (worker-thread backed)
pub mod async_api;

pub use catalog::{catalog, DesignDescriptor, Variant};
pub use extract::{EnrichmentRecord, ExtractMode};
pub use merge::EffectiveDescriptor;
pub use render::paint::{DrawCommand, DrawSink};

/// The unconfigured API key placeholder. A key equal to this value is
/// treated the same as no key at all.
pub const PLACEHOLDER_API_KEY: &str = "YOUR_OPENROUTER_API_KEY_HERE";

/// Raw, possibly incomplete user input for one generation request.
///
/// Blank or whitespace-only fields are legal here; normalization into a
/// [`CertificateRecord`] substitutes literal defaults for them.
#[derive(Debug, Clone, Default)]
pub struct RawInput {
    pub category_name: String,
    pub recipient_name: String,
    pub organization_name: String,
    /// ISO date (`YYYY-MM-DD`); `None` or unparseable means today.
    pub date_issued: Option<String>,
    pub api_key: String,
}

/// Canonical input facts for one generation request.
///
/// Invariant: all textual fields are non-empty. Constructed once per request
/// via [`CertificateRecord::from_input`] and immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificateRecord {
    pub category_name: String,
    pub recipient_name: String,
    pub organization_name: String,
    pub date_issued: NaiveDate,
    pub api_key: String,
}

impl CertificateRecord {
    /// Normalize raw input into a canonical record.
    ///
    /// Returns the record plus a flag indicating whether any required field
    /// was blank and got a default substituted (the caller raises its
    /// one-time warning from this flag).
    pub fn from_input(input: RawInput) -> (Self, bool) {
        let category = input.category_name.trim();
        let recipient = input.recipient_name.trim();
        let organization = input.organization_name.trim();
        let defaulted = category.is_empty() || recipient.is_empty() || organization.is_empty();

        let date_issued = input
            .date_issued
            .as_deref()
            .and_then(|s| NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok())
            .unwrap_or_else(|| Local::now().date_naive());

        let record = Self {
            category_name: non_blank(category, "Certificate of Achievement"),
            recipient_name: non_blank(recipient, "Recipient Name"),
            organization_name: non_blank(organization, "Organization Name"),
            date_issued,
            api_key: input.api_key,
        };
        (record, defaulted)
    }

    /// Long-form issue date, e.g. "January 15, 2024".
    pub fn formatted_date(&self) -> String {
        self.date_issued.format("%B %-d, %Y").to_string()
    }
}

fn non_blank(value: &str, default: &str) -> String {
    if value.is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}

/// Configuration for the enrichment request
///
/// Each key defaults when absent, matching the recognized configuration
/// object keys `{model, maxTokens, temperature}`.
///
/// # Examples
///
/// ```
/// let cfg = certsmith::ProviderConfig::default();
/// assert_eq!(cfg.max_tokens, 500);
/// ```
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Model identifier sent in the request body
    pub model: String,
    /// Maximum output length
    pub max_tokens: u32,
    /// Sampling temperature
    pub temperature: f32,
    /// Chat-completions endpoint URL
    pub endpoint: String,
    /// Request timeout in milliseconds
    pub timeout_ms: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            model: "deepseek/deepseek-r1".to_string(),
            max_tokens: 500,
            temperature: 0.7,
            endpoint: "https://openrouter.ai/api/v1/chat/completions".to_string(),
            timeout_ms: 30000,
        }
    }
}
