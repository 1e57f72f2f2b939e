//! The generation pipeline.
//!
//! One [`Generator`] serves one logical flow per request: normalize input,
//! make at most one best-effort enrichment attempt, merge, then run the five
//! render passes in fixed variant order. Every enrichment failure is caught
//! here and converted into "proceed without enrichment"; rendering always
//! completes.

use std::sync::Arc;

use log::{debug, info, warn};

use crate::catalog::{catalog, Variant};
use crate::extract::{extract, ExtractMode};
use crate::listing::{escape_html, listing};
use crate::merge::merge;
use crate::provider::{ContentProvider, OpenRouterProvider};
use crate::render::paint::DrawCommand;
use crate::render::render;
use crate::{CertificateRecord, Error, ProviderConfig, RawInput};

/// Transient status notifications surfaced during a generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusEvent {
    /// Enrichment attempt in progress (the only non-auto-dismissed state)
    Enhancing,
    /// Enrichment content applied
    Enhanced,
    /// Enrichment failed; defaults in use. Carries the reason.
    EnhancementFailed(String),
    /// Required input fields were blank and defaults were substituted
    /// (raised at most once per request)
    FieldsDefaulted,
}

type StatusHandler = Arc<dyn Fn(&StatusEvent) + Send + Sync>;

/// One rendered certificate variant: the ordered drawing instructions plus
/// the matching source listing (raw and HTML-escaped).
#[derive(Debug, Clone)]
pub struct Certificate {
    pub variant: Variant,
    pub display_name: String,
    pub summary: String,
    pub commands: Vec<DrawCommand>,
    pub listing: String,
    pub escaped_listing: String,
}

/// Result of one generation request. Rendering never fails; enrichment is
/// reflected in `enriched`.
#[derive(Debug, Clone)]
pub struct GenerateOutcome {
    pub record: CertificateRecord,
    pub certificates: Vec<Certificate>,
    pub enriched: bool,
}

/// Per-request pipeline session.
///
/// Construct one per generation call; no state is shared across requests
/// beyond the fixed read-only catalog.
pub struct Generator {
    provider: Box<dyn ContentProvider + Send + Sync>,
    on_status: Option<StatusHandler>,
}

impl Generator {
    /// Generator backed by the real HTTP provider.
    pub fn new(config: ProviderConfig) -> Self {
        match OpenRouterProvider::new(config) {
            Ok(provider) => Self::with_provider(Box::new(provider)),
            Err(e) => {
                // A client that cannot be built behaves like one that always
                // fails: rendering must still proceed.
                warn!("HTTP client unavailable: {}", e);
                Self::with_provider(Box::new(UnavailableProvider))
            }
        }
    }

    /// Generator backed by a caller-supplied provider (used by tests and the
    /// async facade).
    pub fn with_provider(provider: Box<dyn ContentProvider + Send + Sync>) -> Self {
        Self {
            provider,
            on_status: None,
        }
    }

    /// Register a callback for transient status notifications.
    pub fn on_status<F>(&mut self, cb: F)
    where
        F: Fn(&StatusEvent) + Send + Sync + 'static,
    {
        self.on_status = Some(Arc::new(cb));
    }

    /// Remove a previously registered status callback if any.
    pub fn clear_on_status(&mut self) {
        self.on_status = None;
    }

    fn emit(&self, event: StatusEvent) {
        if let Some(cb) = &self.on_status {
            cb(&event);
        }
    }

    /// Run one full generation request.
    pub fn run(&self, input: RawInput) -> GenerateOutcome {
        let (record, defaulted) = CertificateRecord::from_input(input);
        if defaulted {
            self.emit(StatusEvent::FieldsDefaulted);
        }

        let enrichment = self.enrich(&record);
        let enriched = enrichment.is_some();

        let designs = catalog();
        let effective = merge(&designs, enrichment.as_ref(), &record);

        // Five sequential render passes, variant 0 through 4; each gets a
        // fresh sink.
        let certificates = effective
            .iter()
            .map(|desc| {
                let mut commands: Vec<DrawCommand> = Vec::new();
                render(desc, &record, &mut commands);
                let source = listing(desc, &record);
                Certificate {
                    variant: desc.variant,
                    display_name: desc.display_name.clone(),
                    summary: desc.summary.clone(),
                    escaped_listing: escape_html(&source),
                    listing: source,
                    commands,
                }
            })
            .collect();

        GenerateOutcome {
            record,
            certificates,
            enriched,
        }
    }

    /// The enrichment boundary: one attempt, every failure converted to
    /// `None` so the caller proceeds with defaults.
    fn enrich(&self, record: &CertificateRecord) -> Option<crate::EnrichmentRecord> {
        self.emit(StatusEvent::Enhancing);
        match self.provider.generate(record) {
            Ok(raw) => match extract(&raw, &record.category_name, ExtractMode::Certificate) {
                Some(content) => {
                    info!("enrichment applied for category {:?}", record.category_name);
                    self.emit(StatusEvent::Enhanced);
                    Some(content)
                }
                None => {
                    warn!("enrichment reply yielded no usable content");
                    self.emit(StatusEvent::EnhancementFailed(
                        Error::ParseFailure.to_string(),
                    ));
                    None
                }
            },
            Err(Error::MissingApiKey) => {
                // Expected state: skip silently, no failure notification.
                debug!("enrichment skipped: no API key configured");
                None
            }
            Err(e) => {
                warn!("enrichment failed: {}", e);
                self.emit(StatusEvent::EnhancementFailed(e.to_string()));
                None
            }
        }
    }
}

/// Stand-in provider for the rare case where the HTTP client cannot be
/// constructed at all.
struct UnavailableProvider;

impl ContentProvider for UnavailableProvider {
    fn generate(&self, _record: &CertificateRecord) -> crate::Result<String> {
        Err(Error::NetworkError("HTTP client unavailable".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct StaticProvider(crate::Result<String>);

    impl ContentProvider for StaticProvider {
        fn generate(&self, _record: &CertificateRecord) -> crate::Result<String> {
            match &self.0 {
                Ok(s) => Ok(s.clone()),
                Err(_) => Err(Error::RateLimited),
            }
        }
    }

    fn input() -> RawInput {
        RawInput {
            category_name: "Python Mastery".into(),
            recipient_name: "Jane Doe".into(),
            organization_name: "Acme Academy".into(),
            date_issued: Some("2024-01-15".into()),
            api_key: "sk-test".into(),
        }
    }

    #[test]
    fn renders_all_five_variants_in_order() {
        let generator = Generator::with_provider(Box::new(StaticProvider(Err(Error::RateLimited))));
        let outcome = generator.run(input());
        assert!(!outcome.enriched);
        assert_eq!(outcome.certificates.len(), 5);
        for (i, cert) in outcome.certificates.iter().enumerate() {
            assert_eq!(cert.variant, Variant::ALL[i]);
            assert!(!cert.commands.is_empty());
            assert!(!cert.listing.is_empty());
        }
    }

    #[test]
    fn status_events_follow_the_failure_path() {
        let events: Arc<Mutex<Vec<StatusEvent>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = events.clone();
        let mut generator =
            Generator::with_provider(Box::new(StaticProvider(Err(Error::RateLimited))));
        generator.on_status(move |e| sink.lock().unwrap().push(e.clone()));
        generator.run(input());

        let events = events.lock().unwrap();
        assert_eq!(events[0], StatusEvent::Enhancing);
        assert!(matches!(events[1], StatusEvent::EnhancementFailed(_)));
    }

    #[test]
    fn defaulted_fields_raise_one_warning() {
        let events: Arc<Mutex<Vec<StatusEvent>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = events.clone();
        let mut generator =
            Generator::with_provider(Box::new(StaticProvider(Err(Error::RateLimited))));
        generator.on_status(move |e| sink.lock().unwrap().push(e.clone()));
        generator.run(RawInput::default());

        let events = events.lock().unwrap();
        let warnings = events
            .iter()
            .filter(|e| **e == StatusEvent::FieldsDefaulted)
            .count();
        assert_eq!(warnings, 1);
    }

    #[test]
    fn markerless_reply_counts_as_failed_enrichment() {
        let events: Arc<Mutex<Vec<StatusEvent>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = events.clone();
        let mut generator = Generator::with_provider(Box::new(StaticProvider(Ok(
            "The weather is nice today and nothing else matters".to_string(),
        ))));
        generator.on_status(move |e| sink.lock().unwrap().push(e.clone()));
        let outcome = generator.run(input());

        // A reply with no object literal and no marker lines must not be
        // reported as applied enrichment.
        assert!(!outcome.enriched);
        let events = events.lock().unwrap();
        assert!(!events.contains(&StatusEvent::Enhanced));
        assert!(events
            .iter()
            .any(|e| matches!(e, StatusEvent::EnhancementFailed(_))));
    }

    #[test]
    fn successful_enrichment_reaches_the_templates() {
        let reply = "{\"title\": \"Pythonic Excellence Award\", \
                     \"description\": \"Mastered advanced interpreter internals.\"}";
        let generator =
            Generator::with_provider(Box::new(StaticProvider(Ok(reply.to_string()))));
        let outcome = generator.run(input());
        assert!(outcome.enriched);

        let classic = &outcome.certificates[1];
        let texts: Vec<&str> = classic
            .commands
            .iter()
            .filter_map(|c| c.text_content())
            .collect();
        assert!(texts.contains(&"Pythonic Excellence Award"));
        assert!(texts.contains(&"Mastered advanced interpreter internals."));
    }
}
