//! Client side of the generative-image service: the credential capability,
//! request/response types, and the [`ImageGenerator`] seam.

pub mod client;
pub mod config;
pub mod credential;
pub mod error;
pub mod request;
pub mod wire;

pub use client::{GeminiClient, ImageGenerator};
pub use config::GeminiConfig;
pub use credential::{Credential, CredentialState, CredentialStore};
pub use error::GenerationError;
pub use request::{GeneratedImage, GenerationRequest};
