//! Per-text-node slash-command state: palette, then parameter dialog.
//!
//! ```text
//! Closed ──"/…" typed──▶ Palette ──select──▶ Dialog ──confirm──▶ Closed
//!    ▲                     │ Escape             │ cancel
//!    └─────────────────────┴────────────────────┘
//! ```

use nb_core::prompt::options::resolve_options;
use nb_core::prompt::{
    CustomOptions, FieldValues, OptionEntry, Preset, SlashCommand, filter_commands, find_command,
    slash_query,
};

#[derive(Debug, Clone, Default)]
pub enum SlashState {
    #[default]
    Closed,
    Palette {
        query: String,
    },
    Dialog {
        command: &'static SlashCommand,
        values: FieldValues,
    },
}

/// Slash-command editing state for one text node. User-added options
/// survive across dialogs for the lifetime of the session.
#[derive(Debug, Clone, Default)]
pub struct SlashSession {
    state: SlashState,
    custom: CustomOptions,
}

impl SlashSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SlashState {
        &self.state
    }

    pub fn is_palette_open(&self) -> bool {
        matches!(self.state, SlashState::Palette { .. })
    }

    pub fn is_dialog_open(&self) -> bool {
        matches!(self.state, SlashState::Dialog { .. })
    }

    // ─── Palette ─────────────────────────────────────────────────────────

    /// React to the node's text changing. Opens (or re-filters) the palette
    /// for single-line `/…` text, closes it otherwise. An open dialog is
    /// left alone.
    pub fn on_text(&mut self, text: &str) {
        if self.is_dialog_open() {
            return;
        }
        self.state = match slash_query(text) {
            Some(query) => SlashState::Palette {
                query: query.to_string(),
            },
            None => SlashState::Closed,
        };
    }

    /// Edit the palette's own filter input.
    pub fn set_query(&mut self, query: &str) {
        if let SlashState::Palette { query: current } = &mut self.state {
            *current = query.to_string();
        }
    }

    pub fn dismiss_palette(&mut self) -> bool {
        if self.is_palette_open() {
            self.state = SlashState::Closed;
            true
        } else {
            false
        }
    }

    /// Commands matching the palette query; empty when the palette is shut.
    pub fn matches(&self) -> Vec<&'static SlashCommand> {
        match &self.state {
            SlashState::Palette { query } => filter_commands(query),
            _ => Vec::new(),
        }
    }

    /// Open the dialog for `id`, seeded with the command's initial values.
    pub fn select(&mut self, id: &str) -> bool {
        let Some(command) = find_command(id) else {
            log::warn!("slash: unknown command {id}");
            return false;
        };
        self.state = SlashState::Dialog {
            command,
            values: command.initial_values(),
        };
        true
    }

    // ─── Dialog ──────────────────────────────────────────────────────────

    pub fn command(&self) -> Option<&'static SlashCommand> {
        match &self.state {
            SlashState::Dialog { command, .. } => Some(*command),
            _ => None,
        }
    }

    pub fn values(&self) -> Option<&FieldValues> {
        match &self.state {
            SlashState::Dialog { values, .. } => Some(values),
            _ => None,
        }
    }

    fn dialog_mut(&mut self) -> Option<(&'static SlashCommand, &mut FieldValues)> {
        match &mut self.state {
            SlashState::Dialog { command, values } => Some((*command, values)),
            _ => None,
        }
    }

    pub fn value(&self, field: &str) -> Option<&str> {
        self.values()?.get(field).map(String::as_str)
    }

    pub fn set_value(&mut self, field: &str, value: &str) -> bool {
        match self.dialog_mut() {
            Some((_, values)) => {
                values.insert(field.to_string(), value.to_string());
                true
            }
            None => false,
        }
    }

    pub fn is_selected(&self, field: &str, option: &str) -> bool {
        self.value(field)
            .is_some_and(|v| v.to_lowercase() == option.to_lowercase())
    }

    /// Options to render for `field`, custom ones last.
    pub fn options(&self, field: &str) -> Vec<OptionEntry> {
        match &self.state {
            SlashState::Dialog { command, values } => {
                resolve_options(command, field, values, &self.custom)
            }
            _ => Vec::new(),
        }
    }

    /// Current variant discriminator (e.g. the hair gender tab).
    pub fn variant(&self) -> Option<&str> {
        let command = self.command()?;
        let table = command.variants?;
        Some(
            self.value(table.key)
                .filter(|v| !v.is_empty())
                .unwrap_or(table.default),
        )
    }

    /// Switch the variant tab; fields the variants override are cleared.
    pub fn switch_variant(&mut self, value: &str) -> bool {
        let Some((command, values)) = self.dialog_mut() else {
            return false;
        };
        let Some(table) = command.variants else {
            return false;
        };
        values.insert(table.key.to_string(), value.to_string());
        for field in table.affected_fields() {
            values.remove(field);
        }
        true
    }

    pub fn presets(&self) -> Vec<&'static Preset> {
        match &self.state {
            SlashState::Dialog { command, values } => command.presets_for(values),
            _ => Vec::new(),
        }
    }

    pub fn is_preset_active(&self, preset: &Preset) -> bool {
        self.values().is_some_and(|values| preset.is_active(values))
    }

    /// Replace all values with the preset's.
    pub fn apply_preset(&mut self, preset: &Preset) -> bool {
        match self.dialog_mut() {
            Some((_, values)) => {
                *values = preset.to_values();
                true
            }
            None => false,
        }
    }

    /// Add a user option to `field` and select it. Blank input is ignored.
    pub fn add_custom_option(&mut self, field: &str, text: &str) -> Option<String> {
        if !self.is_dialog_open() {
            return None;
        }
        let rendered = self.options(field);
        let value = self.custom.add(field, text, &rendered)?;
        self.set_value(field, &value);
        Some(value)
    }

    /// Drop a user option, unselecting it if it was selected.
    pub fn remove_custom_option(&mut self, field: &str, option: &str) -> bool {
        if !self.custom.remove(field, option) {
            return false;
        }
        if self.is_selected(field, option)
            && let Some((_, values)) = self.dialog_mut()
        {
            values.remove(field);
        }
        true
    }

    /// Compose the prompt and close the dialog.
    pub fn confirm(&mut self) -> Option<String> {
        let prompt = match &self.state {
            SlashState::Dialog { command, values } => command.build_prompt(values),
            _ => return None,
        };
        self.state = SlashState::Closed;
        Some(prompt)
    }

    /// Discard the dialog without producing a prompt.
    pub fn cancel(&mut self) {
        if self.is_dialog_open() {
            self.state = SlashState::Closed;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn palette_follows_text() {
        let mut session = SlashSession::new();
        session.on_text("/ha");
        assert!(session.is_palette_open());
        let ids: Vec<&str> = session.matches().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec!["hair"]);

        session.on_text("/ha\nmore");
        assert!(!session.is_palette_open());

        session.on_text("/");
        assert_eq!(session.matches().len(), 9);
        assert!(session.dismiss_palette());
        assert!(session.matches().is_empty());
    }

    #[test]
    fn palette_query_can_be_edited() {
        let mut session = SlashSession::new();
        session.on_text("/");
        session.set_query("film");
        let ids: Vec<&str> = session.matches().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec!["film"]);
    }

    #[test]
    fn select_seeds_values() {
        let mut session = SlashSession::new();
        session.on_text("/fi");
        assert!(session.select("film"));
        assert!(!session.is_palette_open());
        assert_eq!(session.value("subject"), Some("person"));
        assert_eq!(session.value("simulation"), None);
        assert!(!session.select("nope"));
    }

    #[test]
    fn hair_tabs_reset_fields_and_filter_presets() {
        let mut session = SlashSession::new();
        session.select("hair");
        assert_eq!(session.variant(), Some("women"));
        session.set_value("style", "bob");
        session.set_value("color", "auburn");

        assert!(session.switch_variant("men"));
        assert_eq!(session.variant(), Some("men"));
        assert_eq!(session.value("style"), None);
        assert_eq!(session.value("color"), None);
        assert_eq!(session.options("style")[0].value, "buzz cut");

        let labels: Vec<&str> = session.presets().iter().map(|p| p.label).collect();
        assert_eq!(
            labels,
            vec!["Men · Fade · Jet Black · Matte", "Men · Pompadour · Ash Brown · Clean"]
        );
    }

    #[test]
    fn preset_application_and_activity() {
        let mut session = SlashSession::new();
        session.select("style");
        let preset = session.presets()[1];
        assert!(!session.is_preset_active(preset));
        session.apply_preset(preset);
        assert!(session.is_preset_active(preset));
        assert_eq!(session.value("look"), Some("film noir"));
        session.set_value("extras", "grain");
        assert!(!session.is_preset_active(preset));
    }

    #[test]
    fn custom_options_select_and_unselect() {
        let mut session = SlashSession::new();
        session.select("background");

        assert_eq!(session.add_custom_option("scene", " rooftop "), Some("rooftop".into()));
        assert_eq!(session.value("scene"), Some("rooftop"));
        let last = session.options("scene").pop().unwrap();
        assert_eq!(last, OptionEntry { value: "rooftop".into(), custom: true });

        // Matching an existing option selects it without adding a duplicate.
        assert_eq!(session.add_custom_option("scene", "STUDIO GRAY"), Some("STUDIO GRAY".into()));
        assert!(session.is_selected("scene", "studio gray"));
        assert_eq!(session.options("scene").len(), 6);

        session.set_value("scene", "rooftop");
        assert!(session.remove_custom_option("scene", "rooftop"));
        assert_eq!(session.value("scene"), None);
        assert_eq!(session.options("scene").len(), 5);
    }

    #[test]
    fn confirm_builds_prompt_and_closes() {
        let mut session = SlashSession::new();
        session.select("background");
        session.set_value("scene", "coffee shop");
        assert_eq!(
            session.confirm().as_deref(),
            Some("Replace background to coffee shop . Keep subject edges clean and natural shadows.")
        );
        assert!(matches!(session.state(), SlashState::Closed));
        assert_eq!(session.confirm(), None);
    }

    #[test]
    fn cancel_discards_dialog() {
        let mut session = SlashSession::new();
        session.select("weather");
        session.cancel();
        assert!(session.command().is_none());
    }
}
