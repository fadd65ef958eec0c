use serde_derive::Deserialize;

const CONFIG_FILE: &str = "eco-route.toml";

const DEFAULT_ROUTING_BASE_URL: &str = "https://router.project-osrm.org/route/v1/driving";
const DEFAULT_ESTIMATOR_URL: &str = "http://localhost:8000/predict";

/// Endpoints of the two external collaborators. Read from eco-route.toml in the
/// working directory when present, then overridden by environment variables.
#[derive(Debug, Deserialize, Clone)]
pub struct ServiceConfig {
    #[serde(default = "default_routing_base_url")]
    pub routing_base_url: String,

    #[serde(default = "default_estimator_url")]
    pub estimator_url: String,
}

fn default_routing_base_url() -> String {
    DEFAULT_ROUTING_BASE_URL.to_string()
}

fn default_estimator_url() -> String {
    DEFAULT_ESTIMATOR_URL.to_string()
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            routing_base_url: default_routing_base_url(),
            estimator_url: default_estimator_url(),
        }
    }
}

impl ServiceConfig {
    pub fn load() -> Self {
        let mut config: ServiceConfig = std::fs::read_to_string(CONFIG_FILE)
            .ok()
            .and_then(|content| toml::from_str(&content).ok())
            .unwrap_or_default();

        if let Ok(url) = std::env::var("ROUTING_BASE_URL") {
            config.routing_base_url = url;
        }
        if let Ok(url) = std::env::var("ML_URL") {
            config.estimator_url = url;
        }

        config
    }
}
