use crate::generation::GenerationKind;

/// A user-facing transient notification (the shell renders it as a toast).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: Option<String>,
}

impl Notice {
    pub fn new(title: impl Into<String>, description: Option<String>) -> Self {
        Self {
            title: title.into(),
            description,
        }
    }

    pub fn missing_credential() -> Self {
        Self::new(
            "Gemini API key is not set",
            Some("Click the key icon in the top-right to add it.".to_string()),
        )
    }

    pub fn generation_failed(kind: GenerationKind, message: impl Into<String>) -> Self {
        let title = match kind {
            GenerationKind::Initial => "Image generation failed",
            GenerationKind::Regenerate => "Image regeneration failed",
        };
        Self::new(title, Some(message.into()))
    }
}
