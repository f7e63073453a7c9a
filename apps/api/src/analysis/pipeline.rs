//! Analysis pipeline: store → extract → prompt → complete.
//!
//! Runs strictly in sequence. Any stage failure ends the request; nothing is retried.

use tracing::{debug, info};

use crate::analysis::prompts::build_prompt;
use crate::analysis::upload::{StoredUpload, ValidatedUpload};
use crate::config::Config;
use crate::errors::AppError;
use crate::extraction;
use crate::llm_client::CompletionModel;

/// Produces the model's feedback for one validated upload.
///
/// The stored file is released right after extraction on both the success and
/// the failure path, before the model is called.
pub async fn analyze_resume(
    config: &Config,
    model: &dyn CompletionModel,
    upload: ValidatedUpload,
) -> Result<String, AppError> {
    let ValidatedUpload {
        file_name,
        format,
        data,
        job_description,
    } = upload;

    info!(
        "Analyzing upload '{file_name}' ({} bytes, {})",
        data.len(),
        format.extension()
    );

    let stored = StoredUpload::persist(&config.upload_dir, &file_name, format, data)
        .await
        .map_err(AppError::Storage)?;
    debug!("Stored upload at {}", stored.path().display());

    let extracted = extraction::extract(stored.path(), format).await;
    stored.close();
    let resume_text = extracted?;

    let prompt = build_prompt(&resume_text, &job_description);
    debug!("Built analysis prompt ({} chars)", prompt.len());

    let analysis = model.complete(&prompt).await?;
    info!("Analysis complete ({} chars)", analysis.len());

    Ok(analysis)
}
