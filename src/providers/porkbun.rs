//! Porkbun DNS provider.

use super::{DnsProvider, DnsRecord, Pong};
use crate::config::RegistrarCredentials;
use crate::error::{DdnsError, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://porkbun.com/api/json/v3";

/// HTTP statuses the provider documents as success.
const SUCCESS_STATUSES: [u16; 3] = [200, 201, 202];

/// TTL sent on every record write, in seconds. The API wants a string.
const RECORD_TTL: &str = "600";

/// Porkbun DNS provider.
///
/// Every endpoint is a JSON POST authenticated by the registrar key pair
/// in the request body.
pub struct PorkbunProvider {
    client: reqwest::Client,
    credentials: RegistrarCredentials,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct PingResponse {
    status: String,
    #[serde(rename = "yourIp")]
    your_ip: String,
}

#[derive(Debug, Deserialize)]
struct RetrieveResponse {
    records: Vec<DnsRecord>,
}

#[derive(Debug, Deserialize)]
struct StatusResponse {
    status: String,
}

#[derive(Debug, Serialize)]
struct EditRequest {
    apikey: String,
    secretapikey: String,
    content: String,
    ttl: String,
}

#[derive(Debug, Serialize)]
struct CreateRequest {
    apikey: String,
    secretapikey: String,
    name: String,
    #[serde(rename = "type")]
    record_type: String,
    content: String,
    ttl: String,
}

impl PorkbunProvider {
    /// Create a new Porkbun provider.
    pub fn new(credentials: RegistrarCredentials) -> Self {
        Self::with_base_url(credentials, DEFAULT_BASE_URL.to_string())
    }

    /// Create with custom base URL (for testing).
    pub fn with_base_url(credentials: RegistrarCredentials, base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            credentials,
            base_url,
        }
    }

    fn is_success(status: reqwest::StatusCode) -> bool {
        SUCCESS_STATUSES.contains(&status.as_u16())
    }
}

#[async_trait]
impl DnsProvider for PorkbunProvider {
    async fn ping(&self) -> Result<Pong> {
        let url = format!("{}/ping", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(&self.credentials)
            .send()
            .await
            .map_err(|e| DdnsError::Connectivity(e.to_string()))?;

        if !Self::is_success(response.status()) {
            return Err(DdnsError::Connectivity(
                "error communicating with Porkbun, check your internet connection".to_string(),
            ));
        }

        let pong: PingResponse = response.json().await?;
        Ok(Pong {
            status: pong.status,
            your_ip: pong.your_ip,
        })
    }

    async fn records(&self, domain: &str) -> Result<Vec<DnsRecord>> {
        let url = format!("{}/dns/retrieve/{}", self.base_url, domain);

        let response = self.client.post(&url).json(&self.credentials).send().await?;

        if !Self::is_success(response.status()) {
            return Err(DdnsError::Api {
                target: domain.to_string(),
                message: "error fetching domain information, make sure domain API access is enabled"
                    .to_string(),
            });
        }

        let retrieved: RetrieveResponse = response.json().await?;
        tracing::debug!("Retrieved {} records for {}", retrieved.records.len(), domain);
        Ok(retrieved.records)
    }

    async fn update_record(&self, domain: &str, subdomain: &str, ip: IpAddr) -> Result<()> {
        let url = format!(
            "{}/dns/editByNameType/{}/A/{}",
            self.base_url, domain, subdomain
        );

        let body = EditRequest {
            apikey: self.credentials.apikey.clone(),
            secretapikey: self.credentials.secretapikey.clone(),
            content: ip.to_string(),
            ttl: RECORD_TTL.to_string(),
        };

        let response = self.client.post(&url).json(&body).send().await?;

        if !Self::is_success(response.status()) {
            return Err(DdnsError::Api {
                target: format!("{}.{}", subdomain, domain),
                message: "record update failed".to_string(),
            });
        }

        let reported: StatusResponse = response.json().await?;
        if reported.status != "SUCCESS" {
            return Err(DdnsError::Api {
                target: format!("{}.{}", subdomain, domain),
                message: format!("record update failed (status {})", reported.status),
            });
        }

        Ok(())
    }

    async fn create_record(&self, domain: &str, subdomain: &str, ip: IpAddr) -> Result<()> {
        let url = format!("{}/dns/create/{}", self.base_url, domain);

        let body = CreateRequest {
            apikey: self.credentials.apikey.clone(),
            secretapikey: self.credentials.secretapikey.clone(),
            name: subdomain.to_string(),
            record_type: "A".to_string(),
            content: ip.to_string(),
            ttl: RECORD_TTL.to_string(),
        };

        let response = self.client.post(&url).json(&body).send().await?;

        // The failure diagnostic echoes the provider-reported status when
        // one can be read from the body.
        let http_ok = Self::is_success(response.status());
        let reported = response.json::<StatusResponse>().await.ok();

        match reported {
            Some(r) if http_ok && r.status == "SUCCESS" => Ok(()),
            Some(r) => Err(DdnsError::Api {
                target: format!("{}.{}", subdomain, domain),
                message: format!("record creation failed (status {})", r.status),
            }),
            None => Err(DdnsError::Api {
                target: format!("{}.{}", subdomain, domain),
                message: "record creation failed".to_string(),
            }),
        }
    }
}
