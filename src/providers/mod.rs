//! DNS provider implementations.

mod porkbun;

#[cfg(test)]
mod tests;

pub use porkbun::PorkbunProvider;

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::net::IpAddr;

/// One provider-side DNS record, as returned by the retrieve endpoint.
///
/// All fields arrive as strings, TTL included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsRecord {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub ttl: String,
    pub content: String,
}

/// Result of a connectivity probe against the provider.
///
/// `your_ip` is the caller's address as the provider sees it, printed for
/// diagnostics only. The record write uses the detector's address instead.
#[derive(Debug, Clone)]
pub struct Pong {
    pub status: String,
    pub your_ip: String,
}

/// Trait for DNS record providers.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DnsProvider: Send + Sync {
    /// Probe provider reachability and report the caller's address.
    async fn ping(&self) -> Result<Pong>;

    /// Fetch all DNS records registered for `domain`.
    async fn records(&self, domain: &str) -> Result<Vec<DnsRecord>>;

    /// Point the existing A record `subdomain.domain` at `ip`.
    async fn update_record(&self, domain: &str, subdomain: &str, ip: IpAddr) -> Result<()>;

    /// Create a new A record `subdomain.domain` pointing at `ip`.
    async fn create_record(&self, domain: &str, subdomain: &str, ip: IpAddr) -> Result<()>;
}
