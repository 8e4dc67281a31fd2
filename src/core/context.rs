//! Platform environment and per-session context.
//!
//! The server never talks to the KV store, the AI binding, the database or
//! the telemetry backend itself. It only carries their configuration so that
//! tool modules can receive it at registration time.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

use super::error::{Error, Result};

/// Default binding name of the OAuth key-value namespace.
pub const DEFAULT_KV_BINDING: &str = "OAUTH_KV";

/// Default binding name of the AI capability.
pub const DEFAULT_AI_BINDING: &str = "AI";

/// Runtime mode, read from `NODE_ENV`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeMode {
    Development,
    #[default]
    Production,
    Test,
}

impl RuntimeMode {
    /// Recognise a runtime mode without logging.
    pub fn try_parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "development" | "dev" => Some(Self::Development),
            "production" | "prod" => Some(Self::Production),
            "test" => Some(Self::Test),
            _ => None,
        }
    }

    /// Parse a runtime mode. Unknown values fall back to production.
    pub fn parse(value: &str) -> Self {
        Self::try_parse(value).unwrap_or_else(|| {
            warn!("Unknown NODE_ENV '{}', assuming production", value.trim());
            Self::Production
        })
    }

    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Test => "test",
        }
    }
}

/// External bindings available to every tool module.
///
/// Secrets are never serialized.
#[derive(Clone, Serialize, Deserialize)]
pub struct Env {
    /// Binding name of the OAuth key-value namespace.
    pub oauth_kv: String,

    /// Binding name of the AI capability.
    pub ai: String,

    /// OAuth client id.
    pub github_client_id: String,

    /// OAuth client secret.
    #[serde(skip_serializing, default)]
    pub github_client_secret: String,

    /// Key used to encrypt session cookies.
    #[serde(skip_serializing, default)]
    pub cookie_encryption_key: String,

    /// Database connection string, if a database is attached.
    #[serde(skip_serializing, default)]
    pub database_url: Option<String>,

    /// Telemetry DSN, if error reporting is enabled.
    #[serde(skip_serializing, default)]
    pub sentry_dsn: Option<String>,

    /// Runtime mode flag.
    pub node_env: Option<RuntimeMode>,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for Env {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Env")
            .field("oauth_kv", &self.oauth_kv)
            .field("ai", &self.ai)
            .field("github_client_id", &self.github_client_id)
            .field("github_client_secret", &"[REDACTED]")
            .field("cookie_encryption_key", &"[REDACTED]")
            .field("database_url", &self.database_url.as_ref().map(|_| "[REDACTED]"))
            .field("sentry_dsn", &self.sentry_dsn.as_ref().map(|_| "[REDACTED]"))
            .field("node_env", &self.node_env)
            .finish()
    }
}

impl Default for Env {
    fn default() -> Self {
        Self {
            oauth_kv: DEFAULT_KV_BINDING.to_string(),
            ai: DEFAULT_AI_BINDING.to_string(),
            github_client_id: "local-client-id".to_string(),
            github_client_secret: "local-client-secret".to_string(),
            cookie_encryption_key: "local-cookie-key".to_string(),
            database_url: None,
            sentry_dsn: None,
            node_env: None,
        }
    }
}

impl Env {
    /// Load the environment record from process environment variables.
    ///
    /// `GITHUB_CLIENT_ID`, `GITHUB_CLIENT_SECRET` and `COOKIE_ENCRYPTION_KEY`
    /// are required. Everything else is optional.
    pub fn from_env() -> Result<Self> {
        let env = Self {
            oauth_kv: optional_var("OAUTH_KV").unwrap_or_else(|| DEFAULT_KV_BINDING.to_string()),
            ai: optional_var("AI").unwrap_or_else(|| DEFAULT_AI_BINDING.to_string()),
            github_client_id: required_var("GITHUB_CLIENT_ID")?,
            github_client_secret: required_var("GITHUB_CLIENT_SECRET")?,
            cookie_encryption_key: required_var("COOKIE_ENCRYPTION_KEY")?,
            database_url: optional_var("DATABASE_URL"),
            sentry_dsn: optional_var("SENTRY_DSN"),
            node_env: optional_var("NODE_ENV").map(|v| RuntimeMode::parse(&v)),
        };

        if env.has_database() {
            info!("Database binding configured");
        }
        if env.has_telemetry() {
            info!("Telemetry DSN configured");
        }

        Ok(env)
    }

    /// Runtime mode, production when unset.
    pub fn runtime_mode(&self) -> RuntimeMode {
        self.node_env.unwrap_or_default()
    }

    pub fn has_database(&self) -> bool {
        self.database_url.is_some()
    }

    pub fn has_telemetry(&self) -> bool {
        self.sentry_dsn.is_some()
    }
}

/// Identity of the session a tool is registered for.
#[derive(Clone, Serialize, Deserialize)]
pub struct Props {
    pub login: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing, default)]
    pub access_token: String,
}

impl std::fmt::Debug for Props {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Props")
            .field("login", &self.login)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("access_token", &"[REDACTED]")
            .finish()
    }
}

impl Default for Props {
    fn default() -> Self {
        Self::anonymous()
    }
}

impl Props {
    /// An unauthenticated identity.
    pub fn anonymous() -> Self {
        Self {
            login: "anonymous".to_string(),
            name: "Anonymous".to_string(),
            email: String::new(),
            access_token: String::new(),
        }
    }

    /// Load props from `MCP_USER_*` variables, anonymous for anything unset.
    pub fn from_env() -> Self {
        let mut props = Self::anonymous();

        if let Some(login) = optional_var("MCP_USER_LOGIN") {
            props.login = login;
        }
        if let Some(name) = optional_var("MCP_USER_NAME") {
            props.name = name;
        }
        if let Some(email) = optional_var("MCP_USER_EMAIL") {
            props.email = email;
        }
        if let Some(token) = optional_var("MCP_USER_ACCESS_TOKEN") {
            props.access_token = token;
        }

        props
    }
}

/// Shared context handed to every tool registration function.
#[derive(Debug, Clone, Default)]
pub struct ToolContext {
    pub env: Arc<Env>,
    pub props: Arc<Props>,
}

impl ToolContext {
    pub fn new(env: Env, props: Props) -> Self {
        Self {
            env: Arc::new(env),
            props: Arc::new(props),
        }
    }
}

fn optional_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn required_var(key: &str) -> Result<String> {
    optional_var(key).ok_or_else(|| Error::config(format!("{} must be set", key)))
}
