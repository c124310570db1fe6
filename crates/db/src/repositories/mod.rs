//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods that
//! accept `&mut SqliteConnection` as the first argument, so callers decide
//! whether a call runs on a plain pooled connection or inside a transaction.

pub mod movie_repo;
pub mod theater_repo;

pub use movie_repo::MovieRepo;
pub use theater_repo::TheaterRepo;
