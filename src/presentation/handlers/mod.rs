mod api_error;
mod check_redundancy;
mod status;

pub use api_error::{ApiError, ErrorResponse};
pub use check_redundancy::{RedundancyEntry, RedundancyResponse, check_redundancy_handler};
pub use status::{health_handler, home_handler};
