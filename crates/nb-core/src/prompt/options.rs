//! User-added options layered over the static catalog for one editing
//! session. The catalog itself is never touched.

use super::{FieldValues, SlashCommand};
use std::collections::{BTreeMap, HashSet};

/// One renderable option of a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionEntry {
    pub value: String,
    /// Added by the user this session (and therefore removable).
    pub custom: bool,
}

/// Session overlay: field name → extra options, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomOptions {
    by_field: BTreeMap<String, Vec<String>>,
}

impl CustomOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: &str) -> &[String] {
        self.by_field.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_custom(&self, field: &str, option: &str) -> bool {
        let option = option.to_lowercase();
        self.get(field).iter().any(|o| o.to_lowercase() == option)
    }

    /// Register user input for `field`. Blank input is ignored (`None`).
    /// The trimmed text is appended unless an option already rendered for
    /// the field matches it case-insensitively; either way it is returned so
    /// the caller can select it.
    pub fn add(&mut self, field: &str, text: &str, rendered: &[OptionEntry]) -> Option<String> {
        let value = text.trim();
        if value.is_empty() {
            return None;
        }
        let lowered = value.to_lowercase();
        let exists = rendered.iter().any(|o| o.value.to_lowercase() == lowered);
        if !exists {
            self.by_field
                .entry(field.to_string())
                .or_default()
                .push(value.to_string());
        }
        Some(value.to_string())
    }

    /// Drop a user-added option. Returns whether anything was removed.
    pub fn remove(&mut self, field: &str, option: &str) -> bool {
        let Some(list) = self.by_field.get_mut(field) else {
            return false;
        };
        let before = list.len();
        list.retain(|o| o != option);
        before != list.len()
    }
}

/// Options to render for `field`: the variant (or base) list followed by
/// the session's custom options, deduplicated case-insensitively with the
/// first spelling winning.
pub fn resolve_options(
    command: &SlashCommand,
    field: &str,
    values: &FieldValues,
    custom: &CustomOptions,
) -> Vec<OptionEntry> {
    let mut seen: HashSet<String> = HashSet::new();
    let catalog = command.options_for(field, values).iter().copied();
    let user = custom.get(field).iter().map(String::as_str);

    catalog
        .chain(user)
        .filter(|o| seen.insert(o.to_lowercase()))
        .map(|o| OptionEntry {
            value: o.to_string(),
            custom: custom.is_custom(field, o),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::find_command;
    use pretty_assertions::assert_eq;

    fn names(entries: &[OptionEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.value.as_str()).collect()
    }

    #[test]
    fn custom_options_append_after_catalog() {
        let bg = find_command("background").unwrap();
        let mut custom = CustomOptions::new();
        let values = FieldValues::new();

        let rendered = resolve_options(bg, "scene", &values, &custom);
        assert_eq!(custom.add("scene", "  rooftop garden ", &rendered), Some("rooftop garden".into()));

        let rendered = resolve_options(bg, "scene", &values, &custom);
        assert_eq!(
            names(&rendered),
            vec!["studio gray", "sunset beach", "urban night", "forest trail", "coffee shop", "rooftop garden"]
        );
        assert!(rendered.last().unwrap().custom);
        assert!(!rendered[0].custom);
    }

    #[test]
    fn duplicate_input_is_selected_not_appended() {
        let bg = find_command("background").unwrap();
        let mut custom = CustomOptions::new();
        let rendered = resolve_options(bg, "scene", &FieldValues::new(), &custom);

        assert_eq!(custom.add("scene", "Studio Gray", &rendered), Some("Studio Gray".into()));
        assert!(custom.get("scene").is_empty());
        assert_eq!(custom.add("scene", "   ", &rendered), None);
    }

    #[test]
    fn remove_custom_option() {
        let mut custom = CustomOptions::new();
        custom.add("look", "bleach bypass", &[]);
        assert!(custom.remove("look", "bleach bypass"));
        assert!(!custom.remove("look", "bleach bypass"));
        assert!(custom.get("look").is_empty());
    }

    #[test]
    fn variant_lists_replace_base() {
        let hair = find_command("hair").unwrap();
        let mut values = FieldValues::new();
        values.insert("gender".into(), "men".into());
        let rendered = resolve_options(hair, "vibe", &values, &CustomOptions::new());
        assert_eq!(names(&rendered), vec!["clean", "matte", "textured", "messy", "windblown"]);
    }
}
