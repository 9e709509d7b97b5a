//! Database connection settings.

use serde::{Deserialize, Serialize};

fn default_url() -> String {
    "postgres://localhost/taskboard".to_owned()
}

const fn default_max_connections() -> u32 {
    8
}

/// `PostgreSQL` connection settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Connection URL.
    #[serde(default = "default_url")]
    pub url: String,

    /// Upper bound on pooled connections.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            max_connections: default_max_connections(),
        }
    }
}
