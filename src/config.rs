use std::env;
use std::time::Duration;

use anyhow::{Context, Result};

pub const DEFAULT_ASI_ONE_URL: &str = "https://api.asi1.ai/v1/chat/completions";
pub const DEFAULT_ASI_ONE_MODEL: &str = "asi1-mini";
pub const DEFAULT_GEMINI_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash-latest";
pub const DEFAULT_SOURCE_ID: &str = "chatwarden";
pub const DEFAULT_PROVIDER_TIMEOUT_SECS: u64 = 20;

/// Wire protocol spoken by a remote classification provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    /// OpenAI-compatible chat completions (ASI:One, OpenAI, ...)
    ChatCompletions,
    /// Google Gemini `generateContent`
    Gemini,
}

/// One configured remote provider.
#[derive(Debug, Clone)]
pub struct ProviderSpec {
    /// Short display name used in logs and status output
    pub name: String,
    pub kind: ProviderKind,
    pub endpoint: String,
    pub api_key: String,
    pub model: String,
}

/// Providers in priority order. Primary first.
#[derive(Debug, Clone, Default)]
pub struct ProviderConfig {
    pub entries: Vec<ProviderSpec>,
}

impl ProviderConfig {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|p| p.name.clone()).collect()
    }
}

/// Central configuration loaded from environment variables.
///
/// Built once at startup and passed by reference from there on. The .env
/// file is loaded by `main` via dotenvy before this runs.
#[derive(Debug, Clone)]
pub struct Config {
    pub providers: ProviderConfig,
    /// Per-call bound on a provider request
    pub provider_timeout: Duration,
    /// Telemetry endpoint (ICP_URL). Telemetry is off when unset.
    pub telemetry_url: Option<String>,
    /// Identifier sent as `source_agent` with each telemetry record
    pub source_id: String,
    /// Terms appended to the built-in blocklist
    pub extra_blocklist: Vec<String>,
    /// Quiet the "no LLM configured" error for local development
    pub allow_no_llm: bool,
}

impl Config {
    /// Load configuration from the process environment.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Empty values are treated the same as missing ones.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mut entries = Vec::new();

        // ASI:One is the primary, Gemini the fallback
        if let Some(api_key) = get("ASI_ONE_API_KEY") {
            entries.push(ProviderSpec {
                name: "asi-one".to_string(),
                kind: ProviderKind::ChatCompletions,
                endpoint: get("ASI_ONE_URL").unwrap_or_else(|| DEFAULT_ASI_ONE_URL.to_string()),
                api_key,
                model: get("ASI_ONE_MODEL").unwrap_or_else(|| DEFAULT_ASI_ONE_MODEL.to_string()),
            });
        }
        if let Some(api_key) = get("GEMINI_API_KEY") {
            entries.push(ProviderSpec {
                name: "gemini".to_string(),
                kind: ProviderKind::Gemini,
                endpoint: get("GEMINI_URL").unwrap_or_else(|| DEFAULT_GEMINI_URL.to_string()),
                api_key,
                model: get("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
            });
        }

        let provider_timeout = match get("CHATWARDEN_PROVIDER_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw.trim().parse().with_context(|| {
                    format!("CHATWARDEN_PROVIDER_TIMEOUT_SECS must be whole seconds, got {raw:?}")
                })?;
                if secs == 0 {
                    anyhow::bail!(
                        "CHATWARDEN_PROVIDER_TIMEOUT_SECS must be at least 1; \
                         0 would time out every provider call"
                    );
                }
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_PROVIDER_TIMEOUT_SECS),
        };

        let extra_blocklist = get("CHATWARDEN_EXTRA_BLOCKLIST")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            providers: ProviderConfig { entries },
            provider_timeout,
            telemetry_url: get("ICP_URL"),
            source_id: get("CHATWARDEN_SOURCE_ID").unwrap_or_else(|| DEFAULT_SOURCE_ID.to_string()),
            extra_blocklist,
            allow_no_llm: get("DEBUG_ALLOW_NO_LLM").as_deref() == Some("1"),
        })
    }

    /// Check that at least one remote provider is configured.
    ///
    /// Classification still works without one (blocklist plus the "not
    /// harmful" default), so callers report this rather than abort.
    pub fn require_provider(&self) -> Result<()> {
        if self.providers.is_empty() {
            anyhow::bail!(
                "No LLM provider configured. Set ASI_ONE_API_KEY or GEMINI_API_KEY in your .env file.\n\
                 Without one, only the local blocklist is applied."
            );
        }
        Ok(())
    }
}
