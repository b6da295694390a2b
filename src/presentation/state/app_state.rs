use std::sync::Arc;

use crate::application::ports::SpreadsheetReader;
use crate::application::services::RedundancyService;

pub struct AppState<R>
where
    R: SpreadsheetReader + ?Sized,
{
    pub redundancy_service: Arc<RedundancyService<R>>,
    pub max_upload_bytes: usize,
}

impl<R> Clone for AppState<R>
where
    R: SpreadsheetReader + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            redundancy_service: Arc::clone(&self.redundancy_service),
            max_upload_bytes: self.max_upload_bytes,
        }
    }
}
