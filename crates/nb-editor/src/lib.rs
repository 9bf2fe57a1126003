//! Interaction layer of the canvas: input tools, node controllers, slash
//! dialogs, generation dispatch and downloads.

pub mod config;
pub mod dispatch;
pub mod download;
pub mod editor;
pub mod error;
pub mod generation;
pub mod ingest;
pub mod input;
pub mod mutation;
pub mod notice;
pub mod shortcuts;
pub mod slash;
pub mod tools;

pub use config::LayoutConfig;
pub use dispatch::Dispatcher;
pub use download::{DownloadDebouncer, DownloadError, DownloadFile, DownloadRequest};
pub use editor::{CanvasEditor, KeyOutcome};
pub use error::ActionError;
pub use generation::{CompletionOutcome, GenerationCompletion, GenerationJob, GenerationKind};
pub use ingest::DroppedFile;
pub use input::{InputEvent, Modifiers};
pub use mutation::GraphMutation;
pub use notice::Notice;
pub use slash::{SlashSession, SlashState};
pub use tools::{CanvasTool, Tool};
