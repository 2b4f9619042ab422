use serde::{Deserialize, Serialize};
use url::Url;

/// Public object path served by the storage bucket
const PUBLIC_OBJECT_PATH: &str = "/storage/v1/object/public/";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    pub supabase_url: Option<String>,
}

/// One allowed origin for remotely hosted images
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemotePattern {
    pub protocol: String,
    pub hostname: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    pub pathname: String,
}

impl StorageConfig {
    pub fn new(supabase_url: Option<String>) -> Self {
        Self { supabase_url }
    }

    /// Allowlist derived from the storage base URL; empty when unset or unparsable
    pub fn image_remote_patterns(&self) -> Vec<RemotePattern> {
        let Some(raw) = self.supabase_url.as_deref() else {
            return Vec::new();
        };

        match Url::parse(raw) {
            Ok(url) => match url.host_str() {
                Some(host) => vec![RemotePattern {
                    protocol: url.scheme().to_string(),
                    hostname: host.to_string(),
                    port: url.port(),
                    pathname: format!("{}**", PUBLIC_OBJECT_PATH),
                }],
                None => Vec::new(),
            },
            Err(e) => {
                tracing::warn!("Ignoring invalid storage URL '{}': {}", raw, e);
                Vec::new()
            }
        }
    }

    pub fn is_allowed_image_url(&self, candidate: &str) -> bool {
        let Ok(url) = Url::parse(candidate) else {
            return false;
        };

        self.image_remote_patterns().iter().any(|pattern| pattern.matches(&url))
    }
}

impl RemotePattern {
    pub fn matches(&self, url: &Url) -> bool {
        let prefix = self.pathname.trim_end_matches("**");

        url.scheme() == self.protocol
            && url.host_str() == Some(self.hostname.as_str())
            && url.port() == self.port
            && url.path().starts_with(prefix)
            && url.path().len() > prefix.len()
    }
}
