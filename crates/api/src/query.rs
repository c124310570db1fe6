//! Query parameter types for API handlers.

use serde::Deserialize;

/// Query parameters for `GET /movies` (`?theater_id=`).
#[derive(Debug, Default, Deserialize)]
pub struct MovieListParams {
    pub theater_id: Option<String>,
}

impl MovieListParams {
    /// The theater filter, if any. An empty value means no filter.
    pub fn theater_filter(&self) -> Option<&str> {
        self.theater_id.as_deref().filter(|id| !id.is_empty())
    }
}
