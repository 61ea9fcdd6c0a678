use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_API_BASE: &str = "http://localhost:8080";
pub const DEFAULT_CLIENT_ID: &str = "content-platform-client";
pub const DEFAULT_SCOPE: &str = "content.read content.write";
pub const DEFAULT_NAMESPACE: &str = "content-publisher";
pub const DEFAULT_DRAFTS_KEY: &str = "rb_drafts";

/// What the approvals view does with the local entry after a successful publish.
#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ApprovedDraftPolicy {
    /// Drop the entry from the local store.
    #[default]
    Remove,
    /// Keep the entry with its local status untouched.
    Retain,
}

impl FromStr for ApprovedDraftPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "remove" => Ok(ApprovedDraftPolicy::Remove),
            "retain" => Ok(ApprovedDraftPolicy::Retain),
            other => Err(format!("unknown approved draft policy: {other}")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub auth: AuthConfig,
    pub storage: StorageConfig,
    pub workflow: WorkflowConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    pub client_id: String,
    #[serde(skip_serializing)]
    pub client_secret: Option<String>,
    pub scope: String,
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &self.client_secret.as_ref().map(|_| "***"))
            .field("scope", &self.scope)
            .finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
    pub namespace: String,
    pub drafts_key: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowConfig {
    pub approved_draft_policy: ApprovedDraftPolicy,
    pub reconcile_status: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: DEFAULT_API_BASE.to_string(),
            },
            auth: AuthConfig {
                client_id: DEFAULT_CLIENT_ID.to_string(),
                client_secret: None,
                scope: DEFAULT_SCOPE.to_string(),
            },
            storage: StorageConfig {
                data_dir: dirs::data_local_dir().unwrap_or_else(|| PathBuf::from(".")),
                namespace: DEFAULT_NAMESPACE.to_string(),
                drafts_key: DEFAULT_DRAFTS_KEY.to_string(),
            },
            workflow: WorkflowConfig {
                approved_draft_policy: ApprovedDraftPolicy::Remove,
                reconcile_status: true,
            },
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(v) = std::env::var("CONTENT_PUBLISHER_API_BASE") {
            if !v.trim().is_empty() {
                cfg.api.base_url = v.trim().trim_end_matches('/').to_string();
            }
        }
        if let Ok(v) = std::env::var("CONTENT_PUBLISHER_CLIENT_ID") {
            if !v.trim().is_empty() {
                cfg.auth.client_id = v.trim().to_string();
            }
        }
        cfg.auth.client_secret = read_client_secret();
        if let Ok(v) = std::env::var("CONTENT_PUBLISHER_SCOPE") {
            if !v.trim().is_empty() {
                cfg.auth.scope = v.trim().to_string();
            }
        }
        if let Ok(v) = std::env::var("CONTENT_PUBLISHER_DATA_DIR") {
            if !v.trim().is_empty() {
                cfg.storage.data_dir = PathBuf::from(v.trim());
            }
        }
        if let Ok(v) = std::env::var("CONTENT_PUBLISHER_NAMESPACE") {
            if !v.trim().is_empty() {
                cfg.storage.namespace = v.trim().to_string();
            }
        }
        if let Ok(v) = std::env::var("CONTENT_PUBLISHER_APPROVED_DRAFT_POLICY") {
            match v.parse() {
                Ok(policy) => cfg.workflow.approved_draft_policy = policy,
                Err(err) => tracing::warn!("ignoring CONTENT_PUBLISHER_APPROVED_DRAFT_POLICY: {err}"),
            }
        }
        if let Ok(v) = std::env::var("CONTENT_PUBLISHER_RECONCILE_STATUS") {
            cfg.workflow.reconcile_status = parse_bool(&v, cfg.workflow.reconcile_status);
        }

        cfg
    }

    pub fn validate(&self) -> Result<(), String> {
        let base = self.api.base_url.trim();
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err("API base URL scheme must be http or https".to_string());
        }
        if self.auth.client_id.trim().is_empty() {
            return Err("Client id must not be empty".to_string());
        }
        if self.storage.namespace.trim().is_empty() {
            return Err("Storage namespace must not be empty".to_string());
        }
        if has_path_separator(&self.storage.namespace) || has_path_separator(&self.storage.drafts_key) {
            return Err("Storage namespace and key must not contain path separators".to_string());
        }
        if self.storage.drafts_key.trim().is_empty() {
            return Err("Drafts key must not be empty".to_string());
        }
        Ok(())
    }

    pub fn storage_dir(&self) -> PathBuf {
        self.storage.data_dir.join(&self.storage.namespace)
    }
}

fn read_client_secret() -> Option<String> {
    if let Ok(v) = std::env::var("CONTENT_PUBLISHER_CLIENT_SECRET") {
        if !v.is_empty() {
            return Some(v);
        }
    }
    let path = std::env::var("CONTENT_PUBLISHER_CLIENT_SECRET_FILE").ok()?;
    match std::fs::read_to_string(&path) {
        Ok(secret) => Some(secret.trim().to_string()).filter(|s| !s.is_empty()),
        Err(err) => {
            tracing::warn!("Failed to read client secret from {path}: {err}");
            None
        }
    }
}

fn has_path_separator(value: &str) -> bool {
    value.contains(|c: char| c == '/' || c == '\\')
}

fn parse_bool(s: &str, default: bool) -> bool {
    match s.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "0" | "false" | "no" | "off" => false,
        _ => default,
    }
}
