use std::env;

const DEFAULT_REGION: &str = "us-east-1";

/// Resolved AWS settings, assembled once at startup and passed by value.
/// The rest of the crate never looks at the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AwsSettings {
    pub access_key: Option<String>,
    pub secret_key: Option<String>,
    pub region: String,
}

impl AwsSettings {
    /// Explicit values win, environment variables fill the gaps and the
    /// region falls back to us-east-1
    pub fn resolve(
        access_key: Option<String>,
        secret_key: Option<String>,
        region: Option<String>,
    ) -> AwsSettings {
        let access_key = pick(access_key, env::var("AWS_ACCESS_KEY_ID").ok());
        let secret_key = pick(secret_key, env::var("AWS_SECRET_ACCESS_KEY").ok());
        let region = pick(region, env::var("AWS_REGION").ok())
            .unwrap_or_else(|| DEFAULT_REGION.to_string());
        AwsSettings {
            access_key,
            secret_key,
            region,
        }
    }

    /// True when both keys were supplied and the SDK should not consult
    /// its own credential chain
    pub fn has_static_keys(&self) -> bool {
        self.access_key.is_some() && self.secret_key.is_some()
    }
}

/// Empty strings count as unset, matching the original check scripts
fn pick(explicit: Option<String>, fallback: Option<String>) -> Option<String> {
    explicit
        .filter(|value| !value.is_empty())
        .or_else(|| fallback.filter(|value| !value.is_empty()))
}
