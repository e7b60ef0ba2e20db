use super::types::{BatchResponse, DepartmentList, DepartmentOption, ValidationResult};
use crate::config::ApiConfig;
use crate::error::{ClientError, Result};
use reqwest::multipart::{Form, Part};
use serde_json::Value;
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct UploadPart {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    pub async fn fetch_departments(&self) -> Result<Vec<DepartmentOption>> {
        let url = self.endpoint(&self.config.departments_path);
        debug!(%url, "requesting department list");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::HttpStatus(status));
        }

        let body = response.bytes().await?;
        let list: DepartmentList = serde_json::from_slice(&body)?;
        let items = list.into_options();
        info!(count = items.len(), "department list loaded");
        Ok(items)
    }

    pub async fn submit_batch(&self, files: Vec<UploadPart>) -> Result<Vec<ValidationResult>> {
        let url = self.endpoint(&self.config.batch_upload_path);
        let count = files.len();

        let form = files.into_iter().fold(Form::new(), |form, file| {
            let part = Part::bytes(file.bytes).file_name(file.file_name);
            form.part(self.config.upload_field.clone(), part)
        });

        debug!(%url, count, "submitting batch for validation");
        let response = self.http.post(&url).multipart(form).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::HttpStatus(status));
        }

        let body = response.bytes().await?;
        let value: Value = serde_json::from_slice(&body)?;
        let parsed = BatchResponse::from_value(value);
        info!(
            submitted = count,
            results = parsed.results.len(),
            "batch validation finished"
        );
        Ok(parsed.results)
    }
}
