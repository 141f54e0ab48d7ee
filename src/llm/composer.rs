use std::fmt::Write;

use crate::api::ProcessingRequest;

/// Number of artifacts summarized inline, the rest are only counted.
pub const MAX_SUMMARIZED_ARTIFACTS: usize = 3;
/// Characters kept from each summarized artifact.
pub const ARTIFACT_PREVIEW_CHARS: usize = 100;

/// Renders the simulated model output for an already validated request.
pub fn compose(request: &ProcessingRequest) -> String {
    let model = &request.model;
    let platform = &request.platform;
    let prompt = &request.prompt;
    let artifact_context = summarize_artifacts(&request.artifacts);

    format!(
        "Response generated by LLM {model} on platform {platform}:\n\
         \n\
         Artifact context:\n\
         {artifact_context}\n\
         \n\
         Original prompt: \"{prompt}\"\n\
         \n\
         Simulated response:\n\
         Based on the supplied artifacts and the prompt \"{prompt}\",\n\
         the analysis indicates the system should consider the following aspects:\n\
         \n\
         1. Analysis of the supplied artifacts\n\
         2. Application of model {model} for processing\n\
         3. Generation of a contextualized response\n\
         \n\
         This is a simulated response. In production it would be generated by the real model {model}."
    )
}

fn summarize_artifacts(artifacts: &[String]) -> String {
    if artifacts.is_empty() {
        return "No artifacts supplied".to_string();
    }

    let mut summary = format!("Processing {} artifact(s): ", artifacts.len());
    for (i, artifact) in artifacts.iter().take(MAX_SUMMARIZED_ARTIFACTS).enumerate() {
        let preview: String = artifact.chars().take(ARTIFACT_PREVIEW_CHARS).collect();
        // Writing into a String cannot fail.
        let _ = write!(summary, "\n- Artifact {}: {}...", i + 1, preview);
    }

    if artifacts.len() > MAX_SUMMARIZED_ARTIFACTS {
        let _ = write!(
            summary,
            "\n- ... and {} more artifact(s)",
            artifacts.len() - MAX_SUMMARIZED_ARTIFACTS
        );
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(artifacts: Vec<String>) -> ProcessingRequest {
        ProcessingRequest {
            artifacts,
            platform: "ollama".into(),
            model: "mistral-7b".into(),
            prompt: "Summarize the design".into(),
        }
    }

    #[test]
    fn empty_artifacts_are_called_out() {
        let text = compose(&request(vec![]));
        assert!(text.contains("Artifact context:\nNo artifacts supplied\n"));
        assert!(!text.contains("- Artifact"));
    }

    #[test]
    fn restates_model_platform_and_prompt() {
        let text = compose(&request(vec!["README".into()]));
        assert!(text.starts_with("Response generated by LLM mistral-7b on platform ollama:"));
        assert!(text.contains("Original prompt: \"Summarize the design\""));
        assert!(text.contains("Processing 1 artifact(s): \n- Artifact 1: README..."));
        assert!(text.ends_with("generated by the real model mistral-7b."));
    }

    #[test]
    fn is_deterministic() {
        let req = request(vec!["a".into(), "b".into()]);
        assert_eq!(compose(&req), compose(&req.clone()));
    }

    #[test]
    fn summarizes_at_most_three_and_counts_the_rest() {
        let artifacts: Vec<String> = (1..=7).map(|i| format!("artifact body {i}")).collect();
        let text = compose(&request(artifacts));

        assert_eq!(text.matches("\n- Artifact ").count(), MAX_SUMMARIZED_ARTIFACTS);
        assert!(text.contains("- Artifact 3: artifact body 3..."));
        assert!(!text.contains("artifact body 4"));
        assert!(text.contains("\n- ... and 4 more artifact(s)"));
    }

    #[test]
    fn exactly_three_has_no_remainder_line() {
        let artifacts = vec!["x".into(), "y".into(), "z".into()];
        let text = compose(&request(artifacts));
        assert!(!text.contains("more artifact(s)"));
    }

    #[test]
    fn previews_are_truncated_by_characters() {
        let long = "é".repeat(250);
        let text = compose(&request(vec![long]));

        let line = text
            .lines()
            .find(|line| line.starts_with("- Artifact 1: "))
            .unwrap();
        let preview = line
            .trim_start_matches("- Artifact 1: ")
            .trim_end_matches("...");
        assert_eq!(preview.chars().count(), ARTIFACT_PREVIEW_CHARS);
    }
}
