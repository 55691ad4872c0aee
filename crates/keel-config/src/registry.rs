//! Type registry lifecycle configuration.

use serde::{Deserialize, Serialize};

const fn default_seal_on_bootstrap() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RegistryConfig {
    /// Seal the global type registry during bootstrap. Hosts that register
    /// models after bootstrap turn this off and seal explicitly.
    #[serde(default = "default_seal_on_bootstrap")]
    pub seal_on_bootstrap: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            seal_on_bootstrap: default_seal_on_bootstrap(),
        }
    }
}
