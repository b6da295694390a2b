mod redundancy_service;

pub use redundancy_service::{RedundancyError, RedundancyReport, RedundancyService};
