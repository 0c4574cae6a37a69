//! SDK environment flag.

use serde::{Deserialize, Serialize};

/// Environment the host application runs in.
///
/// Tagged onto every dispatched event so the backend can segregate
/// development traffic from production traffic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

impl Default for Environment {
    fn default() -> Self {
        Environment::Production
    }
}
