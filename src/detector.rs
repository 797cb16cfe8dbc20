//! Public IP detection.

use crate::error::{DdnsError, Result};
use std::net::IpAddr;
use std::time::Duration;

/// Public IP detector with fallback echo services.
///
/// Services are queried in order; the first one that yields a parsable
/// IPv4 address wins. The record write later in the run uses this value,
/// never the address reported by the provider's ping endpoint.
pub struct IpDetector {
    client: reqwest::Client,
    services: Vec<String>,
}

impl IpDetector {
    /// Create a new IP detector with the default services.
    pub fn new() -> Self {
        Self::with_services(vec![
            "https://checkip.amazonaws.com/".to_string(),
            "https://api.ipify.org".to_string(),
            "https://icanhazip.com".to_string(),
        ])
    }

    /// Create a new IP detector with custom services.
    pub fn with_services(services: Vec<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .expect("Failed to create HTTP client");

        Self { client, services }
    }

    /// Detect the public IPv4 address.
    pub async fn detect_ipv4(&self) -> Result<IpAddr> {
        for service in &self.services {
            match self.try_service(service).await {
                Ok(ip) => {
                    if ip.is_ipv4() {
                        tracing::debug!("Detected IPv4 {} from {}", ip, service);
                        return Ok(ip);
                    }
                }
                Err(e) => {
                    tracing::warn!("Service {} failed: {}", service, e);
                }
            }
        }

        Err(DdnsError::Network(
            "all public IP detection services failed".to_string(),
        ))
    }

    /// Try a single IP echo service.
    async fn try_service(&self, url: &str) -> Result<IpAddr> {
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(DdnsError::Network(format!(
                "HTTP {} from {}",
                response.status(),
                url
            )));
        }

        let text = response.text().await?;
        let ip_str = text.trim();

        ip_str
            .parse()
            .map_err(|_| DdnsError::Network(format!("invalid IP response: {}", ip_str)))
    }
}

impl Default for IpDetector {
    fn default() -> Self {
        Self::new()
    }
}
