//! Remote text-generation provider for certificate content.
//!
//! Builds a natural-language instruction from the certificate record, performs
//! a single request against an OpenRouter-style chat-completions endpoint and
//! returns the raw text of the generated message. One attempt only; every
//! failure surfaces to the caller, which treats enrichment as best-effort.

use std::time::Duration;

use log::{debug, warn};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use crate::{CertificateRecord, Error, ProviderConfig, Result, PLACEHOLDER_API_KEY};

/// Seam for the remote generator so the pipeline can be exercised without a
/// network. Implementations perform at most one request per call.
pub trait ContentProvider {
    /// Request enrichment text for the record's category. Returns the raw
    /// content of the single generated message.
    fn generate(&self, record: &CertificateRecord) -> Result<String>;
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Option<ResponseMessage>,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

/// Provider backed by a blocking HTTP client against an OpenRouter-compatible
/// chat-completions endpoint.
pub struct OpenRouterProvider {
    client: Client,
    config: ProviderConfig,
}

impl OpenRouterProvider {
    pub fn new(config: ProviderConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| Error::NetworkError(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { client, config })
    }

    fn build_prompt(category: &str) -> String {
        format!(
            "You are a professional certificate designer. Generate creative and professional \
             content for a certificate in the category \"{category}\".\n\n\
             Create content that is:\n\
             - Professional yet engaging\n\
             - Specific to the category type\n\
             - Suitable for formal certificates\n\
             - Varied and creative (not generic)\n\n\
             Please provide a JSON response with these keys:\n\
             {{\n\
             \"title\": \"A creative, specific title for this certificate (different from the category name)\",\n\
             \"description\": \"A meaningful 1-2 sentence description of what this certificate represents or what the recipient achieved\",\n\
             \"achievement\": \"A short phrase describing the type of achievement (e.g., 'Excellence in Innovation', 'Distinguished Performance')\",\n\
             \"decorativeText\": \"An alternative certificate type heading (e.g., 'Certificate of Distinction', 'Award of Merit')\"\n\
             }}\n\n\
             Make the content specific to \"{category}\" and avoid generic phrases. \
             Be creative but professional."
        )
    }
}

impl ContentProvider for OpenRouterProvider {
    fn generate(&self, record: &CertificateRecord) -> Result<String> {
        let api_key = record.api_key.trim();
        if api_key.is_empty() || api_key == PLACEHOLDER_API_KEY {
            // Expected state, not a crash: skip without touching the network.
            debug!("API key absent or placeholder; enrichment skipped");
            return Err(Error::MissingApiKey);
        }

        let prompt = Self::build_prompt(&record.category_name);
        let body = ChatRequest {
            model: &self.config.model,
            messages: vec![ChatMessage {
                role: "user",
                content: &prompt,
            }],
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        };

        let response = self
            .client
            .post(&self.config.endpoint)
            .bearer_auth(api_key)
            .json(&body)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().unwrap_or_default();
            warn!("enrichment request failed with status {}", status);
            return Err(match status.as_u16() {
                429 => Error::RateLimited,
                403 => Error::Forbidden,
                401 => Error::RemoteError {
                    status: 401,
                    message: "Invalid API key. Please check your OpenRouter API key.".to_string(),
                },
                code => Error::RemoteError {
                    status: code,
                    message,
                },
            });
        }

        let envelope: ChatResponse = response
            .json()
            .map_err(|e| Error::MalformedResponse(e.to_string()))?;

        let content = envelope
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message)
            .and_then(|m| m.content)
            .ok_or_else(|| {
                Error::MalformedResponse("missing choices[0].message.content".to_string())
            })?;

        Ok(content.trim().to_string())
    }
}
