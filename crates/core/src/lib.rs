//! Domain building blocks shared by the catalog crates.
//!
//! Holds the error taxonomy, identifier helpers, input validation and the
//! pure (storage-free) half of seed record checking.

pub mod error;
pub mod seed;
pub mod types;
pub mod validation;
