use crate::wire::{Content, GenerateContentRequest, Part};
use nb_core::image::{ImageSource, InlineImage};

/// What to generate: a prompt plus zero or more reference images.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub prompt: String,
    pub sources: Vec<InlineImage>,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>, sources: impl IntoIterator<Item = InlineImage>) -> Self {
        Self {
            prompt: prompt.into(),
            sources: sources.into_iter().collect(),
        }
    }

    /// Instruction text: an edit of the source image(s) when there are any,
    /// otherwise a fresh generation.
    pub fn instruction(&self) -> String {
        match self.sources.len() {
            0 => format!("Generate an image: {}", self.prompt),
            1 => format!("Edit this image: {}", self.prompt),
            _ => format!("Edit these images: {}", self.prompt),
        }
    }

    /// Image parts first, then the single instruction part.
    pub fn to_wire(&self) -> GenerateContentRequest {
        let mut parts: Vec<Part> = self.sources.iter().map(Part::inline).collect();
        parts.push(Part::text(self.instruction()));
        GenerateContentRequest {
            contents: vec![Content { role: None, parts }],
        }
    }
}

/// A successfully generated image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedImage {
    pub image: InlineImage,
}

impl GeneratedImage {
    pub fn mime_type(&self) -> &str {
        &self.image.mime_type
    }

    /// `data:<mime>;base64,<payload>` form stored on image nodes.
    pub fn to_uri(&self) -> String {
        self.image.to_uri()
    }

    pub fn into_source(self) -> ImageSource {
        ImageSource::Embedded(self.image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn img(data: &str) -> InlineImage {
        InlineImage::new("image/png", data)
    }

    #[test]
    fn instruction_by_source_count() {
        assert_eq!(GenerationRequest::new("a fox", []).instruction(), "Generate an image: a fox");
        assert_eq!(
            GenerationRequest::new("a fox", [img("QQ==")]).instruction(),
            "Edit this image: a fox"
        );
        assert_eq!(
            GenerationRequest::new("a fox", [img("QQ=="), img("Qg==")]).instruction(),
            "Edit these images: a fox"
        );
    }

    #[test]
    fn wire_puts_images_before_text() {
        let wire = GenerationRequest::new("blend", [img("QQ=="), img("Qg==")]).to_wire();
        let parts = &wire.contents[0].parts;
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0].inline_data.as_ref().map(|b| b.data.as_str()), Some("QQ=="));
        assert_eq!(parts[1].inline_data.as_ref().map(|b| b.data.as_str()), Some("Qg=="));
        assert_eq!(parts[2].text.as_deref(), Some("Edit these images: blend"));
    }

    #[test]
    fn generated_image_uri() {
        let generated = GeneratedImage {
            image: InlineImage::new("image/webp", "UklG"),
        };
        assert_eq!(generated.to_uri(), "data:image/webp;base64,UklG");
    }
}
