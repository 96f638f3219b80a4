//! Contract for AI-assisted document generation.
//!
//! The engine only describes the request and the prompt; the network call
//! lives behind [`MarkdownGenerator`] and is supplied by the front end. Nothing
//! else in the engine depends on this module.

use serde::{Deserialize, Serialize};

/// What to generate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub doc_type: String,
    pub topic: String,
    pub context: String,
    pub tone: String,
    pub sections: Vec<String>,
    pub include_table_of_contents: bool,
    pub include_code: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("Generation request failed: {0}")]
    Transport(String),
    #[error("Generation service returned {status}: {message}")]
    Api { status: u16, message: String },
}

/// A text generation backend returning raw markdown
pub trait MarkdownGenerator {
    fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError>;
}

/// Build the prompt sent to the generation backend
pub fn build_prompt(request: &GenerationRequest) -> String {
    let mut lines = vec![
        "You are an expert technical writer and developer.".to_string(),
        format!("Generate a {} in Markdown format.", request.doc_type),
        String::new(),
        format!("Topic: {}", request.topic),
        format!("Context/Description: {}", request.context),
        format!("Tone: {}", request.tone),
        String::new(),
        "Required Sections:".to_string(),
    ];
    lines.extend(request.sections.iter().map(|s| format!("- {s}")));
    lines.push(String::new());
    lines.push("Requirements:".to_string());
    if request.include_table_of_contents {
        lines.push("- Include a Table of Contents at the top.".to_string());
    }
    if request.include_code {
        lines.push("- Include relevant code examples in code blocks.".to_string());
    }
    lines.extend(
        [
            "- Ensure the markdown is valid and well-structured.",
            "- Use appropriate headings (H1 for title, H2/H3 for subsections).",
            "- Do not include any conversational filler (e.g. \"Here is your markdown\"). Just output the raw Markdown.",
        ]
        .map(str::to_string),
    );
    lines.join("\n")
}
