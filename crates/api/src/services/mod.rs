//! Catalog operations with their integrity rules.
//!
//! Every operation runs inside one transaction taken from the pool. The
//! transaction is committed on success; any early return drops it, which
//! rolls it back, so a failed call never leaves a partial write behind.

pub mod movie;
pub mod theater;
