use std::env;

pub const LOCAL_ENDPOINT: &str = "http://localhost:8080/api/hello";
pub const REMOTE_ENDPOINT: &str = "https://d2wdksfxj1l691.cloudfront.net/api/hello";

/// Deployment indicator driving endpoint selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    Development,
    #[default]
    Production,
}

impl Environment {
    /// Only the literal `development` selects the local backend.
    pub fn parse(value: &str) -> Self {
        if value == "development" {
            Environment::Development
        } else {
            Environment::Production
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Environment::Development => "development",
            Environment::Production => "production",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub environment: Environment,
    pub local_endpoint: String,
    pub remote_endpoint: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(Environment::default())
    }
}

impl ClientConfig {
    pub fn new(environment: Environment) -> Self {
        Self {
            environment,
            local_endpoint: LOCAL_ENDPOINT.to_string(),
            remote_endpoint: REMOTE_ENDPOINT.to_string(),
        }
    }

    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let environment = env::var("APP_ENV")
            .map(|v| Environment::parse(&v))
            .unwrap_or_default();
        Self::new(environment)
    }

    /// Replace both endpoints, keeping the environment switch intact.
    pub fn with_endpoints(mut self, local: impl Into<String>, remote: impl Into<String>) -> Self {
        self.local_endpoint = local.into();
        self.remote_endpoint = remote.into();
        self
    }

    pub fn endpoint(&self) -> &str {
        match self.environment {
            Environment::Development => &self.local_endpoint,
            Environment::Production => &self.remote_endpoint,
        }
    }
}
