//! Certificate log response models.

use serde::Deserialize;

/// One certificate record returned by the search service.
///
/// Only the names are used. `name_value` holds every name on the certificate,
/// one per line.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CtEntry {
    #[serde(default)]
    pub name_value: String,
}
