use axum::Json;
use axum::body::Bytes;
use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use serde::Serialize;

use super::api_error::ApiError;
use crate::application::ports::SpreadsheetReader;
use crate::application::services::RedundancyReport;
use crate::domain::RedundantPair;
use crate::presentation::state::AppState;

const FILE_FIELD: &str = "file";

#[derive(Debug, Serialize)]
pub struct RedundancyResponse {
    pub redundancies: Vec<RedundancyEntry>,
}

#[derive(Debug, Serialize)]
pub struct RedundancyEntry {
    pub pair: (String, String),
    pub similarity: f64,
}

impl From<RedundantPair> for RedundancyEntry {
    fn from(pair: RedundantPair) -> Self {
        Self {
            pair: (pair.course_a, pair.course_b),
            similarity: pair.similarity,
        }
    }
}

impl From<RedundancyReport> for RedundancyResponse {
    fn from(report: RedundancyReport) -> Self {
        Self {
            redundancies: report.pairs.into_iter().map(RedundancyEntry::from).collect(),
        }
    }
}

struct Upload {
    filename: String,
    data: Bytes,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn check_redundancy_handler<R>(
    State(state): State<AppState<R>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<RedundancyResponse>, ApiError>
where
    R: SpreadsheetReader + 'static + ?Sized,
{
    // A body that is not multipart carries no file part at all.
    let mut multipart = multipart.map_err(|rejection| {
        tracing::debug!(rejection = %rejection, "Request is not multipart");
        ApiError::MissingFile
    })?;

    let upload = read_upload(&mut multipart).await?;

    tracing::debug!(
        filename = %upload.filename,
        bytes = upload.data.len(),
        "Spreadsheet received"
    );

    let report = state
        .redundancy_service
        .check_redundancy(&upload.data)
        .await?;

    Ok(Json(RedundancyResponse::from(report)))
}

/// Finds the first `file` part that carries a filename. Parts without a
/// filename are plain form fields and are skipped.
async fn read_upload(multipart: &mut Multipart) -> Result<Upload, ApiError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let Some(filename) = field.file_name().map(str::to_string) else {
            continue;
        };
        if filename.is_empty() {
            return Err(ApiError::EmptyFilename);
        }

        let data = field.bytes().await?;
        return Ok(Upload { filename, data });
    }

    Err(ApiError::MissingFile)
}
