//! DNS record queries.
//!
//! One lookup per `RecordKind`. "No records" and NXDOMAIN are ordinary empty
//! results; any other failure is kept as an `Error: ...` value so it shows up
//! in the report next to the records that did resolve.

use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use hickory_resolver::proto::rr::RData;
use hickory_resolver::TokioAsyncResolver;
use log::{debug, warn};
use strum::IntoEnumIterator;

use super::types::{DnsRecordSet, RecordKind};

/// Why a lookup produced no values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupFailure {
    /// The name exists without records of this type, or does not exist.
    NoRecords,
    /// Timeouts, refused queries, network errors.
    Other(String),
}

impl From<&ResolveError> for LookupFailure {
    fn from(error: &ResolveError) -> Self {
        match error.kind() {
            ResolveErrorKind::NoRecordsFound { .. } => LookupFailure::NoRecords,
            _ => LookupFailure::Other(error.to_string()),
        }
    }
}

/// Collapses a lookup result into report values.
///
/// `NoRecords` becomes an empty list; other failures become a single
/// `Error: <message>` value.
pub fn records_or_diagnostic(result: Result<Vec<String>, LookupFailure>) -> Vec<String> {
    match result {
        Ok(values) => values,
        Err(LookupFailure::NoRecords) => Vec::new(),
        Err(LookupFailure::Other(message)) => vec![format!("Error: {message}")],
    }
}

/// Renders record data of the queried kind as text.
///
/// Answers for other types (e.g. the CNAME preceding an AAAA answer) are skipped.
pub fn rdata_to_text(kind: RecordKind, rdata: &RData) -> Option<String> {
    match (kind, rdata) {
        // TXT records can contain multiple strings - join them
        (RecordKind::Spf, RData::TXT(txt)) => Some(
            txt.iter()
                .map(|bytes| String::from_utf8_lossy(bytes).to_string())
                .collect::<Vec<String>>()
                .join(""),
        ),
        (RecordKind::Mx, RData::MX(mx)) => {
            Some(format!("{} {}", mx.preference(), mx.exchange().to_utf8()))
        }
        (RecordKind::Aaaa, RData::AAAA(aaaa)) => Some(aaaa.0.to_string()),
        (RecordKind::Cname, RData::CNAME(cname)) => Some(cname.0.to_utf8()),
        (RecordKind::Ns, RData::NS(ns)) => Some(ns.0.to_utf8()),
        _ => None,
    }
}

/// Something that can answer a single record query.
pub(crate) trait RecordSource {
    async fn lookup_records(
        &self,
        domain: &str,
        kind: RecordKind,
    ) -> Result<Vec<String>, LookupFailure>;
}

impl RecordSource for TokioAsyncResolver {
    async fn lookup_records(
        &self,
        domain: &str,
        kind: RecordKind,
    ) -> Result<Vec<String>, LookupFailure> {
        let lookup = self
            .lookup(domain, kind.record_type())
            .await
            .map_err(|e| LookupFailure::from(&e))?;
        Ok(lookup
            .iter()
            .filter_map(|rdata| rdata_to_text(kind, rdata))
            .collect())
    }
}

/// Queries every `RecordKind` for `domain`, in order.
pub(crate) async fn collect_records<S: RecordSource>(source: &S, domain: &str) -> DnsRecordSet {
    let mut records = Vec::new();
    let mut failed = Vec::new();

    for kind in RecordKind::iter() {
        let result = source.lookup_records(domain, kind).await;
        match &result {
            Ok(values) => debug!("{kind} lookup for {domain}: {} record(s)", values.len()),
            Err(LookupFailure::NoRecords) => debug!("{kind} lookup for {domain}: no records"),
            Err(LookupFailure::Other(message)) => {
                warn!("Failed to lookup {kind} records for {domain}: {message}");
                failed.push(kind);
            }
        }
        records.push((kind, records_or_diagnostic(result)));
    }

    DnsRecordSet {
        domain: domain.to_string(),
        records,
        failed,
    }
}

/// Looks up the SPF (TXT), MX, AAAA, CNAME and NS records of a domain.
///
/// Never fails as a whole: each record kind succeeds or fails on its own.
pub async fn check_dns(resolver: &TokioAsyncResolver, domain: &str) -> DnsRecordSet {
    collect_records(resolver, domain).await
}
