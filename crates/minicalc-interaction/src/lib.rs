//! Boundary adapters for external services.
//!
//! - `gemini_api_client`: REST client for Gemini structured (JSON-schema) output
//! - `exchange_rate_gateway`: turns a currency pair into a rate or `None`

pub mod exchange_rate_gateway;
pub mod gemini_api_client;

pub use exchange_rate_gateway::{GatewayConfig, GeminiRateGateway, parse_rate_payload, rate_prompt};
pub use gemini_api_client::{GeminiApiClient, StructuredGenerator};
