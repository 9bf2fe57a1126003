use nb_core::model::Position;
use std::time::Duration;

/// Placement constants for nodes the editor creates, plus the download
/// debounce window.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    /// Half the rendered node width; both kinds are the same width.
    pub half_width: f32,
    /// Half the rendered height of an empty text node.
    pub text_half_height: f32,
    /// Half the rendered height of an image node.
    pub image_half_height: f32,
    /// Vertical shift of the image node that replaces a chained text node.
    pub chained_image_offset: f32,
    /// Vertical gap from an image node to the text node "add next" creates.
    pub add_next_offset: f32,
    /// Per-file shift of a multi-file drop.
    pub drop_cascade_step: f32,
    /// Files per cascade row.
    pub drop_cascade_columns: usize,
    /// Minimum interval between two downloads of the same node.
    pub download_debounce: Duration,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            half_width: 175.0,
            text_half_height: 30.0,
            image_half_height: 260.0,
            chained_image_offset: 50.0,
            add_next_offset: 450.0,
            drop_cascade_step: 30.0,
            drop_cascade_columns: 3,
            download_debounce: Duration::from_millis(1200),
        }
    }
}

impl LayoutConfig {
    /// Top-left corner that centres a text node on `click`.
    pub fn text_origin(&self, click: Position) -> Position {
        click.offset(-self.half_width, -self.text_half_height)
    }

    /// Top-left corner that centres an image node on `click`.
    pub fn image_origin(&self, click: Position) -> Position {
        click.offset(-self.half_width, -self.image_half_height)
    }

    /// Position of the `index`-th file of a drop at `point`.
    pub fn drop_origin(&self, point: Position, index: usize) -> Position {
        let columns = self.drop_cascade_columns.max(1);
        let col = (index % columns) as f32;
        let row = (index / columns) as f32;
        self.image_origin(point)
            .offset(col * self.drop_cascade_step, row * self.drop_cascade_step)
    }
}
