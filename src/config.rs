//! Credentials loading for porkbun-ddns.

use crate::error::{DdnsError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// API credentials document, read once at startup.
///
/// The file is JSON with a nested `registrar` object holding the Porkbun
/// key pair. Loaded in the entry point and passed by reference into every
/// component that needs it; never process-global.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    /// Registrar API key pair, sent as the request body of authenticated
    /// provider calls.
    pub registrar: RegistrarCredentials,
}

/// The Porkbun API key pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrarCredentials {
    pub apikey: String,
    pub secretapikey: String,
}

impl Credentials {
    /// Candidate locations checked when no path is given on the command
    /// line, in order.
    pub fn default_path() -> PathBuf {
        let candidates = [
            Some(PathBuf::from("credentials.json")),
            dirs::config_dir().map(|p| p.join("porkbun-ddns/credentials.json")),
            Some(PathBuf::from("/etc/porkbun-ddns/credentials.json")),
        ];

        for candidate in candidates.iter().flatten() {
            if candidate.exists() {
                return candidate.clone();
            }
        }

        PathBuf::from("credentials.json")
    }

    /// Load credentials from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DdnsError::Config(format!(
                "could not locate {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let credentials: Credentials = serde_json::from_str(&content)?;
        Ok(credentials)
    }
}
