//! Image payloads stored on image nodes.
//!
//! Payloads are kept as self-describing URIs: either an embedded
//! `data:<mime>;base64,<payload>` composite or a plain externally-fetchable
//! reference. The embedded prefix is what tells the two apart.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use winnow::combinator::preceded;
use winnow::prelude::*;
use winnow::token::{rest, take_until};

/// MIME type assumed when an embedded payload does not name one.
pub const DEFAULT_MIME: &str = "image/png";

#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    #[error("image is a remote reference, not an embedded payload")]
    NotEmbedded,

    #[error("invalid base64 payload: {0}")]
    InvalidBase64(#[from] base64::DecodeError),
}

/// An embedded image: MIME type plus base64 payload (no `data:` prefix).
///
/// Field names follow the generation service's `inlineData` shape so the
/// same value can be sent on the wire unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineImage {
    pub mime_type: String,
    pub data: String,
}

impl InlineImage {
    pub fn new(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data: data.into(),
        }
    }

    /// Encode raw bytes.
    pub fn from_bytes(mime_type: impl Into<String>, bytes: &[u8]) -> Self {
        Self::new(mime_type, STANDARD.encode(bytes))
    }

    /// Decode the base64 payload back to raw bytes.
    pub fn decode(&self) -> Result<Vec<u8>, ImageError> {
        Ok(STANDARD.decode(self.data.as_bytes())?)
    }

    pub fn to_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }
}

/// The image held by an image node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    Embedded(InlineImage),
    Remote(String),
}

impl ImageSource {
    /// Classify a URI. Anything without the embedded-encoding prefix is a
    /// remote reference.
    pub fn parse(uri: &str) -> Self {
        match data_uri.parse(uri) {
            Ok((mime, payload)) => {
                let mime = if mime.is_empty() { DEFAULT_MIME } else { mime };
                ImageSource::Embedded(InlineImage::new(mime, payload))
            }
            Err(_) => ImageSource::Remote(uri.to_string()),
        }
    }

    pub fn from_bytes(mime_type: impl Into<String>, bytes: &[u8]) -> Self {
        ImageSource::Embedded(InlineImage::from_bytes(mime_type, bytes))
    }

    pub fn to_uri(&self) -> String {
        match self {
            ImageSource::Embedded(inline) => inline.to_uri(),
            ImageSource::Remote(url) => url.clone(),
        }
    }

    /// The embedded payload, if this is not a remote reference.
    pub fn inline(&self) -> Option<&InlineImage> {
        match self {
            ImageSource::Embedded(inline) => Some(inline),
            ImageSource::Remote(_) => None,
        }
    }

    pub fn is_embedded(&self) -> bool {
        matches!(self, ImageSource::Embedded(_))
    }

    /// Raw bytes of an embedded payload.
    pub fn decode(&self) -> Result<Vec<u8>, ImageError> {
        match self {
            ImageSource::Embedded(inline) => inline.decode(),
            ImageSource::Remote(_) => Err(ImageError::NotEmbedded),
        }
    }
}

impl Serialize for ImageSource {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_uri())
    }
}

impl<'de> Deserialize<'de> for ImageSource {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(ImageSource::parse(&s))
    }
}

/// File extension for a MIME type: `jpeg` becomes `jpg`, otherwise the
/// subtype, falling back to `png`.
pub fn file_extension(mime: &str) -> &str {
    if mime.contains("jpeg") {
        return "jpg";
    }
    match mime.split('/').nth(1) {
        Some(subtype) if !subtype.is_empty() => subtype,
        _ => "png",
    }
}

/// `data:<mime>;base64,<payload>`. The mime is everything up to the first
/// `;base64,` marker.
fn data_uri<'a>(input: &mut &'a str) -> ModalResult<(&'a str, &'a str)> {
    (
        preceded("data:", take_until(0.., ";base64,")),
        preceded(";base64,", rest),
    )
        .parse_next(input)
}
