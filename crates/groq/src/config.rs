/// Default Groq model identifier.
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

/// Default base URL of the OpenAI-compatible Groq API.
pub const DEFAULT_API_URL: &str = "https://api.groq.com/openai/v1";

/// Default outbound call timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Connection settings for the Groq API.
#[derive(Debug, Clone)]
pub struct GroqConfig {
    /// API credential. `None` when `GROQ_API_KEY` is unset; every call then
    /// fails and endpoints serve their fallback payloads.
    pub api_key: Option<String>,
    pub model: String,
    /// Base URL without trailing slash, e.g. `https://api.groq.com/openai/v1`.
    pub api_url: String,
    pub timeout_secs: u64,
}

impl Default for GroqConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl GroqConfig {
    pub fn has_credential(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.is_empty())
    }
}
