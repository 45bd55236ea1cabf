//! Shared fixtures for sponsor matching tests.

use crate::sponsor_matching::index::{RegistryRow, SponsorIndex};
use crate::sponsor_matching::normalize::normalize_company_name;

/// Build registry rows from a header list and cell values.
pub fn registry_rows(headers: &[&str], rows: &[&[&str]]) -> Vec<RegistryRow> {
    rows.iter()
        .map(|cells| {
            headers
                .iter()
                .zip(cells.iter())
                .map(|(header, cell)| (header.to_string(), cell.to_string()))
                .collect()
        })
        .collect()
}

/// Index keyed by the normalized form of each display name, in the given order.
pub fn index_of(names: &[&str]) -> SponsorIndex {
    SponsorIndex::from_entries(
        names
            .iter()
            .map(|name| (normalize_company_name(name), name.to_string())),
    )
}
