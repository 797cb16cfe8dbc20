//! # porkbun-ddns
//!
//! A dynamic DNS updater for Porkbun-managed domains.
//!
//! One invocation performs a single pass: verify the Porkbun API is
//! reachable, detect the machine's public IPv4 address and hostname, then
//! make sure the A record for `<hostname>.<domain>` carries that address,
//! creating it if absent or updating it if stale.
//!
//! ## Usage
//!
//! ```bash
//! # keep <hostname>.example.com pointed at this machine
//! porkbun-ddns example.com
//!
//! # explicit credentials file
//! porkbun-ddns --config /etc/porkbun-ddns/credentials.json example.com
//! ```
//!
//! The credentials file is JSON with a nested `registrar` key pair:
//!
//! ```json
//! { "registrar": { "apikey": "pk1_...", "secretapikey": "sk1_..." } }
//! ```

pub mod config;
pub mod detector;
pub mod error;
pub mod host;
pub mod providers;
pub mod updater;

pub use config::Credentials;
pub use detector::IpDetector;
pub use error::{DdnsError, Result};
