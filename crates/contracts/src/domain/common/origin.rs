use serde::{Deserialize, Serialize};

/// Where a record entered the system from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Origin {
    /// Entry form
    Manual,
    /// Invoice importer (already-parsed batch rows)
    Invoice,
    /// System-maintained configuration
    Config,
}

impl Origin {
    pub fn as_str(&self) -> &'static str {
        match self {
            Origin::Manual => "manual",
            Origin::Invoice => "invoice",
            Origin::Config => "config",
        }
    }
}

impl std::fmt::Display for Origin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
