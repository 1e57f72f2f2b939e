//! End-to-end pipeline scenarios driven through the public API.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use certsmith::pipeline::{Certificate, Generator, StatusEvent};
use certsmith::provider::ContentProvider;
use certsmith::{CertificateRecord, DrawCommand, Error, RawInput, Variant, PLACEHOLDER_API_KEY};

struct ScriptedProvider {
    reply: Result<String, fn() -> Error>,
    calls: Arc<AtomicUsize>,
}

impl ContentProvider for ScriptedProvider {
    fn generate(&self, record: &CertificateRecord) -> certsmith::Result<String> {
        // The real provider never touches the network for a placeholder key.
        let key = record.api_key.trim();
        if key.is_empty() || key == PLACEHOLDER_API_KEY {
            return Err(Error::MissingApiKey);
        }
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.reply {
            Ok(s) => Ok(s.clone()),
            Err(make) => Err(make()),
        }
    }
}

fn scripted(reply: Result<String, fn() -> Error>) -> (Generator, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let generator = Generator::with_provider(Box::new(ScriptedProvider {
        reply,
        calls: calls.clone(),
    }));
    (generator, calls)
}

fn input(api_key: &str) -> RawInput {
    RawInput {
        category_name: "Python Mastery".into(),
        recipient_name: "Jane Doe".into(),
        organization_name: "Acme Academy".into(),
        date_issued: Some("2024-01-15".into()),
        api_key: api_key.into(),
    }
}

fn find_variant(certs: &[Certificate], variant: Variant) -> &Certificate {
    certs.iter().find(|c| c.variant == variant).unwrap()
}

fn text_contents(cert: &Certificate) -> Vec<&str> {
    cert.commands
        .iter()
        .filter_map(DrawCommand::text_content)
        .collect()
}

// Scenario A: no enrichment; the modern variant upper-cases the category and
// uses its canned body sentence.
#[test]
fn scenario_a_modern_defaults() {
    let (generator, _) = scripted(Err(|| Error::NetworkError("offline".into())));
    let outcome = generator.run(input("sk-test"));
    assert!(!outcome.enriched);

    let modern = find_variant(&outcome.certificates, Variant::Modern);
    let texts = text_contents(modern);
    assert!(texts.contains(&"PYTHON MASTERY"));
    assert!(texts.contains(&"has successfully completed the Python Mastery"));
}

// Scenario B: enrichment title/description flow into the classic variant
// verbatim.
#[test]
fn scenario_b_classic_enriched() {
    let reply = "{\"title\": \"Pythonic Excellence Award\", \
                 \"description\": \"Mastered advanced interpreter internals.\"}";
    let (generator, _) = scripted(Ok(reply.to_string()));
    let outcome = generator.run(input("sk-test"));
    assert!(outcome.enriched);

    let classic = find_variant(&outcome.certificates, Variant::Classic);
    let texts = text_contents(classic);
    assert!(texts.contains(&"Pythonic Excellence Award"));
    assert!(texts.contains(&"Mastered advanced interpreter internals."));
}

// Scenario C: placeholder key skips synchronously with no provider call.
#[test]
fn scenario_c_placeholder_key_skips_network() {
    let (generator, calls) = scripted(Ok("unused".to_string()));
    let outcome = generator.run(input(PLACEHOLDER_API_KEY));
    assert!(!outcome.enriched);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert_eq!(outcome.certificates.len(), 5);
}

// Scenario D: a rate-limited provider still yields all five variants with
// default content, and the failure notification mentions retrying later.
#[test]
fn scenario_d_rate_limited_still_renders() {
    let (mut generator, _) = scripted(Err(|| Error::RateLimited));
    let events: Arc<Mutex<Vec<StatusEvent>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = events.clone();
    generator.on_status(move |e| sink.lock().unwrap().push(e.clone()));

    let outcome = generator.run(input("sk-test"));
    assert!(!outcome.enriched);
    assert_eq!(outcome.certificates.len(), 5);
    for (i, cert) in outcome.certificates.iter().enumerate() {
        assert_eq!(cert.variant, Variant::ALL[i]);
        assert!(!cert.commands.is_empty());
    }

    let events = events.lock().unwrap();
    let failed = events
        .iter()
        .find_map(|e| match e {
            StatusEvent::EnhancementFailed(reason) => Some(reason.clone()),
            _ => None,
        })
        .expect("failure notification raised");
    assert!(failed.contains("try again later"));
}

// Blank inputs default everywhere and raise the one-time warning; all five
// variants still carry non-blank text.
#[test]
fn blank_inputs_default_and_warn_once() {
    let (mut generator, _) = scripted(Err(|| Error::NetworkError("offline".into())));
    let events: Arc<Mutex<Vec<StatusEvent>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = events.clone();
    generator.on_status(move |e| sink.lock().unwrap().push(e.clone()));

    let outcome = generator.run(RawInput::default());
    assert_eq!(outcome.record.category_name, "Certificate of Achievement");
    assert_eq!(outcome.record.recipient_name, "Recipient Name");
    assert_eq!(outcome.record.organization_name, "Organization Name");

    let warnings = events
        .lock()
        .unwrap()
        .iter()
        .filter(|e| **e == StatusEvent::FieldsDefaulted)
        .count();
    assert_eq!(warnings, 1);

    for cert in &outcome.certificates {
        assert!(text_contents(cert).contains(&"Recipient Name"));
    }
}

// Enrichment palette overrides reach the drawing instructions of every
// variant.
#[test]
fn palette_override_colors_every_variant() {
    let reply = "{\"colors\": {\"primary\": \"#101010\"}}";
    let (generator, _) = scripted(Ok(reply.to_string()));
    let outcome = generator.run(input("sk-test"));
    assert!(outcome.enriched);

    for cert in &outcome.certificates {
        let uses_override = cert.commands.iter().any(|c| match c {
            DrawCommand::Text { color, .. } => color == "#101010",
            DrawCommand::Rect { stroke, fill, .. } => {
                stroke.as_ref().map(|s| s.color == "#101010").unwrap_or(false)
                    || fill.as_deref() == Some("#101010")
            }
            DrawCommand::Line { color, .. } => color == "#101010",
            DrawCommand::Circle { fill, .. } | DrawCommand::Ellipse { fill, .. } => {
                fill == "#101010"
            }
        });
        assert!(uses_override, "variant {} ignored the override", cert.variant);
    }
}

// Listings are escaped for code-block embedding alongside the raw form.
#[test]
fn escaped_listing_is_embeddable() {
    let (generator, _) = scripted(Err(|| Error::NetworkError("offline".into())));
    let outcome = generator.run(input("sk-test"));
    for cert in &outcome.certificates {
        assert!(cert.listing.contains("new fabric.Canvas"));
        assert!(!cert.escaped_listing.contains('\''));
        assert!(cert.escaped_listing.contains("&#039;"));
    }
}
