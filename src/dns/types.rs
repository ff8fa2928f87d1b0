//! DNS record set types.

use hickory_resolver::proto::rr::RecordType;
use strum_macros::EnumIter;

/// Record categories reported for every domain, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum RecordKind {
    /// Sender policy, looked up as TXT
    Spf,
    Mx,
    Aaaa,
    Cname,
    Ns,
}

impl RecordKind {
    /// Label used in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Spf => "SPF",
            RecordKind::Mx => "MX",
            RecordKind::Aaaa => "AAAA",
            RecordKind::Cname => "CNAME",
            RecordKind::Ns => "NS",
        }
    }

    /// The DNS record type queried for this category.
    pub fn record_type(&self) -> RecordType {
        match self {
            RecordKind::Spf => RecordType::TXT,
            RecordKind::Mx => RecordType::MX,
            RecordKind::Aaaa => RecordType::AAAA,
            RecordKind::Cname => RecordType::CNAME,
            RecordKind::Ns => RecordType::NS,
        }
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The records found for one domain.
///
/// Every `RecordKind` has an entry. A kind without records holds an empty list;
/// a kind whose lookup failed holds a single `Error: ...` value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsRecordSet {
    pub domain: String,
    pub records: Vec<(RecordKind, Vec<String>)>,
    pub failed: Vec<RecordKind>,
}

impl DnsRecordSet {
    /// Values recorded for `kind`.
    pub fn get(&self, kind: RecordKind) -> &[String] {
        self.records
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, values)| values.as_slice())
            .unwrap_or(&[])
    }

    /// One `KIND: v1, v2` line per record kind, `KIND: None` when empty.
    pub fn summary_lines(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|(kind, values)| {
                if values.is_empty() {
                    format!("{kind}: None")
                } else {
                    format!("{kind}: {}", values.join(", "))
                }
            })
            .collect()
    }
}
