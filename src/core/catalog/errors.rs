use std::fmt;

use thiserror::Error;

/// Which registry an identifier was looked up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Movie,
    Collection,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::Movie => f.write_str("movie"),
            EntryKind::Collection => f.write_str("collection"),
        }
    }
}

/// Failures of the catalog mutators. The `Display` output is meant to be shown to the user as is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("A {kind} named '{name}' already exists")]
    DuplicateName { kind: EntryKind, name: String },

    #[error("No {kind} named '{name}'")]
    NotFound { kind: EntryKind, name: String },

    #[error("Movie '{movie}' is already in collection '{collection}'")]
    AlreadyMember { collection: String, movie: String },
}

impl CatalogError {
    pub(super) fn duplicate(kind: EntryKind, name: &str) -> Self {
        Self::DuplicateName {
            kind,
            name: name.to_string(),
        }
    }

    pub(super) fn not_found(kind: EntryKind, name: &str) -> Self {
        Self::NotFound {
            kind,
            name: name.to_string(),
        }
    }
}
