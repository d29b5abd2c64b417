//! Catalog construction from embedded JSON content documents.

use super::catalog::{Catalog, CatalogLoad};
use crate::domain::common::CatalogEntry;
use crate::shared::error::ContentError;
use serde::de::DeserializeOwned;

/// Parse a JSON array of entries into a catalog.
///
/// A document that is not a JSON array of `T` is an error; individual
/// entries that break the item invariants end up in `rejected`.
pub fn parse_catalog<T>(json: &str) -> Result<CatalogLoad<T>, ContentError>
where
    T: CatalogEntry + DeserializeOwned,
{
    let entries: Vec<T> = serde_json::from_str(json)?;
    Ok(Catalog::build(entries))
}
