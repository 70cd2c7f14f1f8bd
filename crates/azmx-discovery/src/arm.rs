use std::process::Command as StdCommand;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use azmx_domain::Subscription;
use serde_json::Value;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::discovery::Discovery;
use crate::error::DiscoveryError;

const LIST_API_VERSION: &str = "2022-12-01";

// ── Configuration ─────────────────────────────────────────────────────────────

/// Static configuration for ARM-backed discovery, injected at startup.
/// Operator-level settings, never read from the subscription mapping file.
#[derive(Clone, Default)]
pub struct ArmDiscoveryConfig {
    /// Azure tenant ID (GUID). Required for service principal auth;
    /// the CLI fallback uses the logged-in default tenant when absent.
    pub tenant_id: Option<String>,
    /// Service principal client ID (optional; falls back to env vars, then CLI).
    pub client_id: Option<String>,
    /// Service principal client secret.
    pub client_secret: Option<String>,
}

// ── Base URLs (overridden in tests) ───────────────────────────────────────────

#[derive(Clone)]
pub(crate) struct BaseUrls {
    management: String,
    login:      String,
}

impl Default for BaseUrls {
    fn default() -> Self {
        Self {
            management: "https://management.azure.com".into(),
            login:      "https://login.microsoftonline.com".into(),
        }
    }
}

// ── Token provider ────────────────────────────────────────────────────────────

/// Abstraction over Azure token acquisition — enables test injection.
#[async_trait]
trait TokenProvider: Send + Sync {
    async fn token(&self) -> Result<String, DiscoveryError>;
}

// ── Service Principal ─────────────────────────────────────────────────────────

struct ServicePrincipalTokenProvider {
    tenant_id:     String,
    client_id:     String,
    client_secret: String,
    login_base:    String,
    client:        reqwest::Client,
    cache:         Mutex<Option<(String, Instant)>>,
}

#[async_trait]
impl TokenProvider for ServicePrincipalTokenProvider {
    async fn token(&self) -> Result<String, DiscoveryError> {
        {
            let guard = self.cache.lock().await;
            if let Some((tok, expiry)) = guard.as_ref() {
                if Instant::now() < *expiry {
                    return Ok(tok.clone());
                }
            }
        }

        let url = format!("{}/{}/oauth2/v2.0/token", self.login_base, self.tenant_id);
        let params = [
            ("grant_type", "client_credentials"),
            ("client_id", &self.client_id),
            ("client_secret", &self.client_secret),
            ("scope", "https://management.azure.com/.default"),
        ];
        let resp: Value = self
            .client
            .post(&url)
            .form(&params)
            .send()
            .await
            .map_err(|e| DiscoveryError::Auth(format!("SP token request: {}", e)))?
            .json()
            .await
            .map_err(|e| DiscoveryError::Auth(format!("SP token decode: {}", e)))?;

        let tok = resp["access_token"]
            .as_str()
            .ok_or_else(|| DiscoveryError::Auth(format!("SP token: no access_token in response: {}", resp)))?
            .to_string();
        let expires_in = resp["expires_in"].as_u64().unwrap_or(3600);
        let expiry = Instant::now() + Duration::from_secs(expires_in.saturating_sub(60));

        *self.cache.lock().await = Some((tok.clone(), expiry));
        Ok(tok)
    }
}

// ── Azure CLI ─────────────────────────────────────────────────────────────────

struct AzureCliTokenProvider {
    tenant_id: Option<String>,
}

#[async_trait]
impl TokenProvider for AzureCliTokenProvider {
    async fn token(&self) -> Result<String, DiscoveryError> {
        let mut args = vec![
            "account",
            "get-access-token",
            "--resource",
            "https://management.azure.com",
            "--output",
            "json",
        ];
        if let Some(tenant) = self.tenant_id.as_deref() {
            args.push("--tenant");
            args.push(tenant);
        }

        let output = StdCommand::new("az")
            .args(&args)
            .output()
            .map_err(|e| DiscoveryError::Auth(format!("az CLI not found: {}. Install Azure CLI or configure service principal credentials.", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(DiscoveryError::Auth(format!(
                "az account get-access-token failed: {}. Run 'az login' first.",
                stderr.trim()
            )));
        }

        let resp: Value = serde_json::from_slice(&output.stdout)
            .map_err(|e| DiscoveryError::Auth(format!("az CLI output parse: {}", e)))?;
        let tok = resp["accessToken"]
            .as_str()
            .ok_or_else(|| DiscoveryError::Auth("az CLI: no accessToken in output".into()))?
            .to_string();
        Ok(tok)
    }
}

// ── Static (tests) ────────────────────────────────────────────────────────────

pub struct StaticToken(pub String);

#[async_trait]
impl TokenProvider for StaticToken {
    async fn token(&self) -> Result<String, DiscoveryError> {
        Ok(self.0.clone())
    }
}

// ── ArmDiscovery ──────────────────────────────────────────────────────────────

pub struct ArmDiscovery {
    client: reqwest::Client,
    token:  Box<dyn TokenProvider>,
    base:   BaseUrls,
}

impl ArmDiscovery {
    /// Create an `ArmDiscovery`, auto-selecting the token provider:
    /// 1. `client_id` + `client_secret` in config → Service Principal
    /// 2. `AZURE_CLIENT_ID` + `AZURE_CLIENT_SECRET` env vars → Service Principal
    /// 3. Otherwise → Azure CLI (`az account get-access-token`)
    pub fn new(config: ArmDiscoveryConfig) -> Result<Self, DiscoveryError> {
        let client = reqwest::Client::new();
        let base   = BaseUrls::default();

        let sp_creds = match (config.client_id.as_deref(), config.client_secret.as_deref()) {
            (Some(cid), Some(cs)) => Some((cid.to_string(), cs.to_string())),
            _ => match (std::env::var("AZURE_CLIENT_ID"), std::env::var("AZURE_CLIENT_SECRET")) {
                (Ok(cid), Ok(cs)) => Some((cid, cs)),
                _ => None,
            },
        };

        let token: Box<dyn TokenProvider> = if let Some((client_id, client_secret)) = sp_creds {
            let tenant_id = config.tenant_id.clone().ok_or_else(|| {
                DiscoveryError::Auth(
                    "service principal credentials require a tenant id (--tenant-id or AZURE_TENANT_ID)".into(),
                )
            })?;
            Box::new(ServicePrincipalTokenProvider {
                tenant_id,
                client_id,
                client_secret,
                login_base: base.login.clone(),
                client:     client.clone(),
                cache:      Mutex::new(None),
            })
        } else {
            Box::new(AzureCliTokenProvider {
                tenant_id: config.tenant_id.clone(),
            })
        };

        Ok(Self { client, token, base })
    }

    /// Create an `ArmDiscovery` with a static bearer token and custom base URLs.
    /// Used exclusively in tests.
    #[cfg(test)]
    pub(crate) fn with_static_token(token: &str, base: BaseUrls) -> Self {
        Self {
            client: reqwest::Client::new(),
            token:  Box::new(StaticToken(token.to_string())),
            base,
        }
    }

    async fn bearer(&self) -> Result<String, DiscoveryError> {
        self.token.token().await
    }

    fn parse_arm_error(body: &Value) -> String {
        let err = body
            .get("error")
            .or_else(|| body.get("Error"))
            .unwrap_or(body);
        let code    = err["code"].as_str().unwrap_or("Unknown");
        let message = err["message"].as_str().unwrap_or("unknown error");
        format!("{}: {}", code, message)
    }

    fn convert_subscription(entry: &Value) -> Option<Subscription> {
        let id = entry["subscriptionId"].as_str().unwrap_or("").trim();
        if id.is_empty() {
            return None;
        }
        let name = entry["displayName"].as_str().unwrap_or("").trim();
        let state = entry["state"].as_str().unwrap_or("");
        Some(Subscription::new(
            id,
            if name.is_empty() { id } else { name },
            state.eq_ignore_ascii_case("enabled"),
        ))
    }
}

#[async_trait]
impl Discovery for ArmDiscovery {
    fn name(&self) -> &'static str {
        "arm"
    }

    async fn list_subscriptions(&self) -> Result<Vec<Subscription>, DiscoveryError> {
        let token = self.bearer().await?;
        let mut url = format!(
            "{}/subscriptions?api-version={}",
            self.base.management, LIST_API_VERSION
        );
        let mut subscriptions = Vec::new();

        loop {
            debug!(url = %url, "Azure ARM GET");
            let resp = self
                .client
                .get(&url)
                .bearer_auth(&token)
                .send()
                .await
                .map_err(|e| DiscoveryError::ListFailed(format!("GET {}: {}", url, e)))?;

            let status = resp.status().as_u16();
            let body: Value = resp
                .json()
                .await
                .map_err(|e| DiscoveryError::ListFailed(format!("decode {}: {}", url, e)))?;

            if !(200..300).contains(&status) {
                return Err(DiscoveryError::ListFailed(format!(
                    "list subscriptions: status {} — {}",
                    status,
                    Self::parse_arm_error(&body)
                )));
            }

            let page = body["value"].as_array().cloned().unwrap_or_default();
            subscriptions.extend(page.iter().filter_map(Self::convert_subscription));

            match body["nextLink"].as_str() {
                Some(next) if !next.is_empty() => url = next.to_string(),
                _ => break,
            }
        }

        info!(count = subscriptions.len(), "discovered subscriptions");
        Ok(subscriptions)
    }
}
