//! Error types for flowfmt.

use thiserror::Error;

/// Errors returned by lookups and option parsing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Application protocol id past the end of the table
    #[error("application protocol id {id} out of range (0..{max})")]
    L7ProtoOutOfRange { id: usize, max: usize },

    /// Firewall event taxonomy name not recognised
    #[error("unknown firewall event taxonomy: {0} (expected standard or junos)")]
    UnknownTaxonomy(String),
}

pub type Result<T> = std::result::Result<T, Error>;
