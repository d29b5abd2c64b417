//! Error types shared by the catalog, the forms and the submission boundary.

use crate::domain::common::ItemId;
use thiserror::Error;

/// A single content entry that cannot enter a catalog.
///
/// Rejections are reported next to the catalog that was still built from
/// the remaining entries; they never abort page setup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("entry #{position} has an empty id")]
    EmptyId { position: usize },

    #[error("entry `{id}` has an empty category")]
    EmptyCategory { id: ItemId },

    #[error("entry `{id}` uses the reserved category `all`")]
    ReservedCategory { id: ItemId },

    #[error("entry `{id}` appears more than once")]
    DuplicateId { id: ItemId },
}

/// Content document that could not be read at all.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("malformed content document: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("{field} must be at least {min} characters")]
    TooShort { field: &'static str, min: usize },
}

/// Outcome of a failed form submission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
