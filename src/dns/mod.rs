//! DNS resolution and record querying.
//!
//! This module provides async DNS operations using `hickory-resolver`:
//! - Text record queries (TXT, reported as SPF)
//! - Mail exchanger queries (MX)
//! - IPv6 address queries (AAAA)
//! - Alias and nameserver queries (CNAME, NS)
//!
//! All operations are async and respect system DNS configuration.

mod records;
mod types;

// Re-export public API
pub(crate) use records::{collect_records, RecordSource};
pub use records::{check_dns, rdata_to_text, records_or_diagnostic, LookupFailure};
pub use types::{DnsRecordSet, RecordKind};

#[cfg(test)]
pub(crate) mod test_helpers;
