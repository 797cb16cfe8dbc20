//! Record matching and the single read-decide-write pass.

use crate::error::Result;
use crate::providers::{DnsProvider, DnsRecord};
use std::net::IpAddr;

/// What a pass did to the managed record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A matching record already carries the current IP; nothing written.
    UpToDate,
    /// An existing record was pointed at the new IP.
    Updated,
    /// No record matched; a new one was created.
    Created,
}

/// Find the record to manage: the first A record, in provider order,
/// whose dot-separated name labels contain `hostname` as an exact label.
pub fn find_record<'a>(records: &'a [DnsRecord], hostname: &str) -> Option<&'a DnsRecord> {
    records
        .iter()
        .find(|r| r.record_type == "A" && r.name.split('.').any(|label| label == hostname))
}

/// Render the record table, one row per record with a 1-based index.
pub fn render_table(records: &[DnsRecord]) -> String {
    let header = format!(
        " {:>5} | {:>9} | {:>32} | {:>5} | {:>3} | {:>16}",
        "Index", "Id", "Name", "Type", "TTL", "Content"
    );
    let rule = "-".repeat(header.len());

    let mut table = String::new();
    table.push_str(&header);
    table.push('\n');
    table.push_str(&rule);
    table.push('\n');

    for (index, record) in records.iter().enumerate() {
        table.push_str(&format!(
            " {:>5} | {:>9} | {:>32} | {:>5} | {:>3} | {:>16}\n",
            index + 1,
            record.id,
            record.name,
            record.record_type,
            record.ttl,
            record.content
        ));
    }

    table.push_str(&rule);
    table
}

/// One pass over `domain` for `hostname`: fetch the record set, print it,
/// and bring the A record for `hostname.domain` in line with `ip`.
///
/// Writes happen only after the read succeeded, and at most once per pass.
pub async fn run_once(
    provider: &dyn DnsProvider,
    domain: &str,
    hostname: &str,
    ip: IpAddr,
) -> Result<Outcome> {
    let records = provider.records(domain).await?;

    println!("Found the following records for {}:", domain);
    println!("{}", render_table(&records));

    let outcome = match find_record(&records, hostname) {
        Some(record) if record.content == ip.to_string() => {
            println!("IP on record already up to date!");
            Outcome::UpToDate
        }
        Some(_) => {
            println!("Record already exists, updating existing record");
            provider.update_record(domain, hostname, ip).await?;
            println!("> Updated: {}.{}", hostname, domain);
            Outcome::Updated
        }
        None => {
            println!("Record does not exist, creating new record");
            provider.create_record(domain, hostname, ip).await?;
            println!("> Created: {}.{}", hostname, domain);
            Outcome::Created
        }
    };

    Ok(outcome)
}
