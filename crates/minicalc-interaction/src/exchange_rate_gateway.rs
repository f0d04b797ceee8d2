//! Exchange-rate gateway backed by Gemini.
//!
//! The upstream is a language model, not a rate feed, so its answer is
//! treated as untrusted: the payload must be a JSON object with a numeric
//! `rate` field, but the value itself is not range-checked.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use minicalc_core::CalcError;
use minicalc_core::config::{GatewaySettings, SecretConfig};
use minicalc_core::rate::ExchangeRateProvider;
use serde_json::{Value, json};

use crate::gemini_api_client::{GeminiApiClient, StructuredGenerator};

/// Everything the gateway needs, injected at construction time.
#[derive(Debug, Clone, Default)]
pub struct GatewayConfig {
    /// Gemini API key. `None` (or blank) disables fetching.
    pub api_key: Option<String>,
    pub settings: GatewaySettings,
}

impl GatewayConfig {
    /// A `model_name` in secret.json overrides the configured model.
    pub fn new(secrets: &SecretConfig, mut settings: GatewaySettings) -> Self {
        if let Some(model) = secrets
            .gemini
            .as_ref()
            .and_then(|gemini| gemini.model_name.as_deref())
            .filter(|model| !model.trim().is_empty())
        {
            settings.model = model.to_string();
        }

        Self {
            api_key: secrets.gemini_api_key().map(str::to_owned),
            settings,
        }
    }
}

/// Per-request timeout. Zero is raised to one second so a misconfigured
/// `timeout_secs` cannot fail every request before it is sent.
pub(crate) fn request_timeout(timeout_secs: u64) -> Duration {
    Duration::from_secs(timeout_secs.max(1))
}

/// Prompt sent for one conversion.
pub fn rate_prompt(from: &str, to: &str) -> String {
    format!("What is the current exchange rate from {from} to {to}?")
}

fn rate_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "rate": {
                "type": "NUMBER",
                "description": "The numeric exchange rate."
            }
        },
        "required": ["rate"]
    })
}

/// Validates the model's answer: an object whose `rate` is a JSON number.
pub fn parse_rate_payload(text: &str) -> Result<f64, CalcError> {
    let value: Value = serde_json::from_str(text.trim())?;
    value
        .get("rate")
        .and_then(Value::as_f64)
        .ok_or_else(|| CalcError::gateway(format!("Invalid response format from Gemini API: {value}")))
}

/// [`ExchangeRateProvider`] that asks Gemini.
///
/// One request per call: no retry, no cache, no de-duplication of
/// concurrent calls. Every failure becomes `None`.
pub struct GeminiRateGateway {
    generator: Option<Arc<dyn StructuredGenerator>>,
}

impl GeminiRateGateway {
    pub fn from_config(config: &GatewayConfig) -> Self {
        let generator = config
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .map(|key| {
                let client = GeminiApiClient::new(key, config.settings.model.clone())
                    .with_base_url(config.settings.base_url.clone())
                    .with_timeout(request_timeout(config.settings.timeout_secs));
                Arc::new(client) as Arc<dyn StructuredGenerator>
            });

        Self { generator }
    }

    /// Uses an arbitrary generator (a different backend, or a stub in tests).
    pub fn with_generator(generator: Arc<dyn StructuredGenerator>) -> Self {
        Self {
            generator: Some(generator),
        }
    }

    /// A gateway with no credential; every fetch yields `None`.
    pub fn disabled() -> Self {
        Self { generator: None }
    }

    pub fn is_configured(&self) -> bool {
        self.generator.is_some()
    }

    async fn try_fetch(&self, from: &str, to: &str) -> Result<f64, CalcError> {
        let generator = self
            .generator
            .as_ref()
            .ok_or_else(|| CalcError::config("API key not found."))?;

        let text = generator
            .generate_json(&rate_prompt(from, to), &rate_schema())
            .await?;
        parse_rate_payload(&text)
    }
}

#[async_trait]
impl ExchangeRateProvider for GeminiRateGateway {
    async fn fetch_exchange_rate(&self, from: &str, to: &str) -> Option<f64> {
        match self.try_fetch(from, to).await {
            Ok(rate) => {
                tracing::debug!(from, to, rate, "fetched exchange rate");
                Some(rate)
            }
            Err(e) => {
                tracing::warn!(from, to, error = %e, "error fetching exchange rate");
                None
            }
        }
    }
}
