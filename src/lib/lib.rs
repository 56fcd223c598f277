//! Protocol name tables and field formatters for network flow records.
//!
//! Everything here is static data plus pure functions. Results are either
//! `&'static str` table entries or freshly owned `String`s, so every call is
//! safe to make from any thread.

pub mod addr;
pub mod error;
pub mod event;
pub mod flags;
pub mod format;
pub mod l7;
pub mod logging;
pub mod proto;

pub use error::{Error, Result};
pub use event::FwEventTaxonomy;
pub use format::FieldFormatter;
pub use proto::ProtoResolver;
