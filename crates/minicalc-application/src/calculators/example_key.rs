//! Placeholder Gemini-style API key, for filling in `secret.json` templates.

use rand::Rng;
use rand::distributions::Alphanumeric;

const PREFIX: &str = "AIza";
const BODY_LEN: usize = 35;

/// `AIza` followed by 35 random alphanumeric characters. Never a working key.
pub fn generate_example_key() -> String {
    let body: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(BODY_LEN)
        .map(char::from)
        .collect();
    format!("{PREFIX}{body}")
}
