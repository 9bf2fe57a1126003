//! JSON shapes of the `generateContent` call. Only the fields this crate
//! reads or writes are modelled; everything else is ignored.

use nb_core::image::{DEFAULT_MIME, InlineImage};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// A content part: text or inline binary data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<Blob>,
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Part {
            text: Some(text.into()),
            inline_data: None,
        }
    }

    pub fn inline(image: &InlineImage) -> Self {
        Part {
            text: None,
            inline_data: Some(Blob {
                mime_type: image.mime_type.clone(),
                data: image.data.clone(),
            }),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blob {
    #[serde(default)]
    pub mime_type: String,
    #[serde(default)]
    pub data: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
}

impl GenerateContentResponse {
    /// First inline payload with data, scanning candidates then parts in
    /// order. A missing MIME type means PNG.
    pub fn first_inline_image(&self) -> Option<InlineImage> {
        self.candidates
            .iter()
            .filter_map(|c| c.content.as_ref())
            .flat_map(|content| content.parts.iter())
            .filter_map(|part| part.inline_data.as_ref())
            .find(|blob| !blob.data.is_empty())
            .map(|blob| {
                let mime = if blob.mime_type.is_empty() {
                    DEFAULT_MIME
                } else {
                    blob.mime_type.as_str()
                };
                InlineImage::new(mime, blob.data.clone())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn picks_first_inline_part_across_candidates() {
        let json = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "Here you go"}]}},
                {"content": {"parts": [
                    {"inlineData": {"mimeType": "image/jpeg", "data": "AAAA"}},
                    {"inlineData": {"mimeType": "image/png", "data": "BBBB"}}
                ]}}
            ]
        }"#;
        let response: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            response.first_inline_image(),
            Some(InlineImage::new("image/jpeg", "AAAA"))
        );
    }

    #[test]
    fn missing_mime_defaults_to_png() {
        let json = r#"{"candidates": [{"content": {"parts": [{"inlineData": {"data": "AAAA"}}]}}]}"#;
        let response: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.first_inline_image().unwrap().mime_type, "image/png");
    }

    #[test]
    fn text_only_response_has_no_image() {
        let json = r#"{"candidates": [{"content": {"parts": [{"text": "I can't do that"}]}}, {}]}"#;
        let response: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert!(response.first_inline_image().is_none());

        let empty: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(empty.first_inline_image().is_none());
    }

    #[test]
    fn request_uses_camel_case_and_skips_absent_fields() {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: None,
                parts: vec![Part::inline(&InlineImage::new("image/png", "QQ==")), Part::text("Edit this image: x")],
            }],
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "contents": [{
                    "parts": [
                        {"inlineData": {"mimeType": "image/png", "data": "QQ=="}},
                        {"text": "Edit this image: x"}
                    ]
                }]
            })
        );
    }
}
