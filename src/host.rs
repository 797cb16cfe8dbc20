//! Local host identity.

use crate::error::{DdnsError, Result};

/// Return the local machine's hostname, trimmed of surrounding whitespace.
///
/// The hostname doubles as the managed subdomain: the run looks for an A
/// record carrying it as a name label and writes `<hostname>.<domain>`.
pub fn hostname() -> Result<String> {
    let raw = hostname::get().map_err(DdnsError::Io)?;
    let name = raw
        .into_string()
        .map_err(|raw| DdnsError::Config(format!("hostname is not valid UTF-8: {:?}", raw)))?;

    Ok(name.trim().to_string())
}
