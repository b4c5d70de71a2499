//! Configuration model loaded from external sources.

use serde::Deserialize;

fn default_seed_demo_data() -> bool {
    true
}

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    /// Load the demo clients into the store at start-up.
    #[serde(default = "default_seed_demo_data")]
    pub seed_demo_data: bool,
}
