use std::env;

use serde::{Deserialize, Serialize};

fn default_user_agent() -> String {
    concat!("glosa/", env!("CARGO_PKG_VERSION")).to_string()
}

/// Settings shared by every upstream HTTP client.
/// No request timeout is applied: a hung upstream blocks that lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl NetworkConfig {
    pub fn new() -> Self {
        let user_agent = env::var("GLOSA_USER_AGENT").unwrap_or_else(|_| default_user_agent());

        Self { user_agent }
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
        }
    }
}
