pub mod id;
pub mod image;
pub mod model;
pub mod prompt;

pub use id::{EdgeId, NodeId};
pub use image::{ImageError, ImageSource, InlineImage, file_extension};
pub use model::*;
pub use prompt::{FieldValues, SlashCommand, filter_commands, find_command, list_commands};
