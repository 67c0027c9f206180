//! Pretrained model retrieval from the Hugging Face Hub.
//!
//! Checkpoints are fetched into the hub's local cache on first use and
//! reused afterwards. The access token is never embedded in source: it is
//! read from the `HF_TOKEN` environment variable, or supplied explicitly
//! with [`HubClient::with_token`].

use std::path::PathBuf;

use hf_hub::api::sync::{Api, ApiBuilder};
use log::info;

use crate::error::AsrError;
use crate::languages::ModelInfo;

/// Environment variable holding the Hub access token.
pub const TOKEN_ENV_VAR: &str = "HF_TOKEN";

pub struct HubClient {
    api: Api,
}

impl HubClient {
    /// Build a client authenticated from `HF_TOKEN`, if set.
    pub fn new() -> Result<Self, AsrError> {
        Self::with_token(std::env::var(TOKEN_ENV_VAR).ok())
    }

    /// Build a client with an explicit token (`None` for anonymous access).
    pub fn with_token(token: Option<String>) -> Result<Self, AsrError> {
        let api = ApiBuilder::new()
            .with_token(token)
            .build()
            .map_err(|e| AsrError::Download {
                repo_id: String::new(),
                reason: e.to_string(),
            })?;

        Ok(Self { api })
    }

    /// Download the checkpoint's weight file, or reuse the cached copy.
    /// Returns the local path to the file.
    pub fn fetch(&self, model: &ModelInfo) -> Result<PathBuf, AsrError> {
        info!("fetching {} from {}", model.display_name, model.repo_id);

        let repo = self.api.model(model.repo_id.to_string());
        let path = repo.get(model.file_name).map_err(|e| AsrError::Download {
            repo_id: model.repo_id.to_string(),
            reason: e.to_string(),
        })?;

        info!("checkpoint ready at {}", path.display());
        Ok(path)
    }
}
