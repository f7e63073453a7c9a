//! Axum route handlers for the Analysis API.

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use serde::Serialize;
use tracing::debug;

use crate::analysis::pipeline::analyze_resume;
use crate::analysis::upload::{AnalyzeForm, UploadedFile};
use crate::errors::AppError;
use crate::state::AppState;

const RESUME_FIELD: &str = "resume";
const JOB_DESCRIPTION_FIELD: &str = "jobDescription";

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub analysis: String,
}

/// POST /analyze
///
/// Multipart body: `resume` (pdf/docx file) and `jobDescription` (text).
/// A body that is not multipart at all is treated as carrying no file.
pub async fn handle_analyze(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let form = match multipart {
        Ok(multipart) => read_form(multipart).await?,
        Err(rejection) => {
            debug!("Request is not multipart: {rejection}");
            AnalyzeForm::default()
        }
    };

    let upload = form.validate()?;
    let analysis = analyze_resume(&state.config, state.model.as_ref(), upload).await?;

    Ok(Json(AnalyzeResponse { analysis }))
}

/// Collects the two known fields. When a field repeats, the first occurrence wins.
/// A `resume` part without a filename is a plain text field, not a file.
async fn read_form(mut multipart: Multipart) -> Result<AnalyzeForm, AppError> {
    let mut form = AnalyzeForm::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some(RESUME_FIELD) if form.resume.is_none() => {
                let Some(file_name) = field.file_name().map(str::to_owned) else {
                    continue;
                };
                let data = field.bytes().await?;
                form.resume = Some(UploadedFile { file_name, data });
            }
            Some(JOB_DESCRIPTION_FIELD) if form.job_description.is_none() => {
                form.job_description = Some(field.text().await?);
            }
            _ => {}
        }
    }

    Ok(form)
}
