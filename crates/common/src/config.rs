use serde::{Deserialize, Serialize};

/// Environment variable holding the Gemini API key. The AI path is skipped
/// entirely when it is unset.
pub const GEMINI_API_KEY_VAR: &str = "GEMINI_API_KEY";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SystemConfig {
    pub server: ServerConfig,
    pub risk: RiskConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8787,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskConfig {
    /// Gemini model used for document analysis
    pub model: String,
    /// Upper bound on the outbound generateContent call
    pub request_timeout_secs: u64,
    /// Cap on reasons extracted from the model response
    pub max_reasons: usize,
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            model: "gemini-2.0-flash-exp".to_string(),
            request_timeout_secs: 20,
            max_reasons: 5,
        }
    }
}

impl SystemConfig {
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: SystemConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.server.port == 0 {
            anyhow::bail!("server.port must be non-zero");
        }
        if self.risk.model.trim().is_empty() {
            anyhow::bail!("risk.model must not be empty");
        }
        if self.risk.request_timeout_secs == 0 || self.risk.request_timeout_secs > 120 {
            anyhow::bail!(
                "risk.request_timeout_secs must be between 1 and 120, got {}",
                self.risk.request_timeout_secs
            );
        }
        if self.risk.max_reasons == 0 || self.risk.max_reasons > 10 {
            anyhow::bail!(
                "risk.max_reasons must be between 1 and 10, got {}",
                self.risk.max_reasons
            );
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

/// Read the Gemini API key from the environment. Whitespace-only values
/// count as absent.
pub fn gemini_api_key() -> Option<String> {
    std::env::var(GEMINI_API_KEY_VAR)
        .ok()
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty())
}
