use thiserror::Error;

use crate::api::ProcessingRequest;

/// Platforms accepted by `/process`, matched case-insensitively.
pub const SUPPORTED_PLATFORMS: [&str; 4] = ["huggingface", "openai", "local", "ollama"];

/// Model families accepted by `/process`. A model name is accepted when it
/// contains any of these, case-insensitively, so `llama-7b` matches `llama`.
pub const SUPPORTED_MODELS: [&str; 5] = ["llama", "deepseek", "gpt", "mistral", "phi"];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Platform '{platform}' is not supported. Supported platforms: {:?}", SUPPORTED_PLATFORMS)]
    UnsupportedPlatform { platform: String },

    #[error("Model '{model}' is not supported. Supported models: {:?}", SUPPORTED_MODELS)]
    UnsupportedModel { model: String },

    #[error("Prompt must not be empty")]
    EmptyPrompt,
}

/// Checks platform, then model, then prompt. The first failing check wins.
pub fn validate(request: &ProcessingRequest) -> Result<(), ValidationError> {
    let platform = request.platform.to_lowercase();
    if !SUPPORTED_PLATFORMS.contains(&platform.as_str()) {
        return Err(ValidationError::UnsupportedPlatform {
            platform: request.platform.clone(),
        });
    }

    let model = request.model.to_lowercase();
    if !SUPPORTED_MODELS.iter().any(|family| model.contains(family)) {
        return Err(ValidationError::UnsupportedModel {
            model: request.model.clone(),
        });
    }

    if request.prompt.trim().is_empty() {
        return Err(ValidationError::EmptyPrompt);
    }

    Ok(())
}
