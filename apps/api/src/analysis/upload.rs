//! Upload validation and scoped on-disk storage for the résumé file.

use std::io::Write;
use std::path::Path;

use bytes::Bytes;
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::warn;

use crate::extraction::DocumentFormat;

/// Client-caused request problems. Checked in declaration order; the first failure wins.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("No resume file uploaded")]
    MissingFile,

    #[error("No job description provided")]
    MissingJobDescription,

    #[error("No selected file")]
    EmptyFilename,

    #[error("Invalid file type")]
    UnsupportedFileType,
}

/// A file part received under the `resume` field.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: String,
    pub data: Bytes,
}

/// The raw `POST /analyze` form, before any checks.
#[derive(Debug, Default)]
pub struct AnalyzeForm {
    pub resume: Option<UploadedFile>,
    pub job_description: Option<String>,
}

/// A request that passed validation and is ready for processing.
#[derive(Debug)]
pub struct ValidatedUpload {
    /// Sanitized name, safe to use as part of a storage path.
    pub file_name: String,
    pub format: DocumentFormat,
    pub data: Bytes,
    pub job_description: String,
}

impl AnalyzeForm {
    pub fn validate(self) -> Result<ValidatedUpload, ValidationError> {
        let resume = self.resume.ok_or(ValidationError::MissingFile)?;

        let job_description = self
            .job_description
            .filter(|jd| !jd.is_empty())
            .ok_or(ValidationError::MissingJobDescription)?;

        if resume.file_name.is_empty() {
            return Err(ValidationError::EmptyFilename);
        }

        let format = file_extension(&resume.file_name)
            .and_then(DocumentFormat::from_extension)
            .ok_or(ValidationError::UnsupportedFileType)?;

        Ok(ValidatedUpload {
            file_name: sanitize_filename(&resume.file_name),
            format,
            data: resume.data,
            job_description,
        })
    }
}

/// Text after the last `.`, if the name has one.
pub fn file_extension(file_name: &str) -> Option<&str> {
    file_name.rsplit_once('.').map(|(_, ext)| ext)
}

/// Reduces a client-supplied filename to `[A-Za-z0-9_.-]`.
///
/// Path separators become word breaks, whitespace runs collapse to `_`, and
/// leading/trailing `.`/`_` are stripped so the result can never climb out of
/// the upload directory. Returns an empty string if nothing survives.
pub fn sanitize_filename(file_name: &str) -> String {
    let spaced: String = file_name
        .chars()
        .map(|c| if c == '/' || c == '\\' { ' ' } else { c })
        .collect();

    let joined = spaced.split_whitespace().collect::<Vec<_>>().join("_");

    let filtered: String = joined
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
        .collect();

    filtered.trim_matches(|c| c == '.' || c == '_').to_string()
}

/// An upload written to the upload directory. The file is removed when this
/// guard is closed or dropped, whichever comes first.
pub struct StoredUpload {
    file: NamedTempFile,
}

impl StoredUpload {
    /// Writes `data` to a uniquely named file in `dir`.
    ///
    /// The name keeps the sanitized stem for traceability and always ends in the
    /// validated extension. Uniqueness means two requests with the same filename
    /// never share a path.
    pub async fn persist(
        dir: &Path,
        file_name: &str,
        format: DocumentFormat,
        data: Bytes,
    ) -> std::io::Result<Self> {
        let dir = dir.to_path_buf();
        let stem = storage_stem(file_name);

        tokio::task::spawn_blocking(move || {
            let mut file = tempfile::Builder::new()
                .prefix(&format!("{stem}-"))
                .suffix(&format!(".{}", format.extension()))
                .tempfile_in(&dir)?;
            file.write_all(&data)?;
            file.flush()?;
            Ok(StoredUpload { file })
        })
        .await
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Deletes the file now, logging rather than failing if removal goes wrong.
    pub fn close(self) {
        let path = self.file.path().to_path_buf();
        if let Err(e) = self.file.close() {
            warn!("Failed to remove upload {}: {e}", path.display());
        }
    }
}

/// Longest stem kept in a storage name; keeps the full path under filesystem name limits.
const MAX_STEM_CHARS: usize = 64;

fn storage_stem(sanitized: &str) -> String {
    let stem = sanitized
        .rsplit_once('.')
        .map(|(stem, _)| stem)
        .unwrap_or(sanitized);
    if stem.is_empty() {
        "upload".to_string()
    } else {
        stem.chars().take(MAX_STEM_CHARS).collect()
    }
}
