pub mod movie;
pub mod theater;
