//! Slash-command prompt templates.
//!
//! A fixed catalog of commands, each turning a field → value mapping into
//! a natural-language edit instruction. The catalog is static; per-session
//! state (chosen values, user-added options) lives with the caller and is
//! passed in.

mod catalog;
pub mod options;

pub use options::{CustomOptions, OptionEntry};

use std::collections::BTreeMap;

/// Chosen value per field name for one command invocation.
pub type FieldValues = BTreeMap<String, String>;

/// Longest text (in characters) that still opens the command palette.
pub const MAX_SLASH_LEN: usize = 64;

// ─── Catalog types ───────────────────────────────────────────────────────

/// One parameter of a command.
#[derive(Debug)]
pub struct SlashField {
    pub name: &'static str,
    pub label: &'static str,
    pub placeholder: Option<&'static str>,
    pub required: bool,
    /// Fixed option list; empty for free-text fields.
    pub options: &'static [&'static str],
}

/// A named bundle of field values.
#[derive(Debug)]
pub struct Preset {
    pub label: &'static str,
    pub values: &'static [(&'static str, &'static str)],
}

impl Preset {
    pub fn get(&self, name: &str) -> Option<&'static str> {
        self.values.iter().find(|(k, _)| *k == name).map(|(_, v)| *v)
    }

    /// A preset is active when every one of its values is the current one.
    pub fn is_active(&self, values: &FieldValues) -> bool {
        self.values
            .iter()
            .all(|(k, v)| values.get(*k).map(String::as_str).unwrap_or("") == *v)
    }

    pub fn to_values(&self) -> FieldValues {
        self.values
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }
}

/// Alternate option lists for one discriminator value.
#[derive(Debug)]
pub struct Variant {
    pub value: &'static str,
    pub options: &'static [(&'static str, &'static [&'static str])],
}

/// Per-command option overrides keyed by a discriminator field
/// (e.g. `gender` for hair edits).
#[derive(Debug)]
pub struct VariantTable {
    pub key: &'static str,
    pub default: &'static str,
    pub variants: &'static [Variant],
}

impl VariantTable {
    pub fn variant(&self, value: &str) -> Option<&'static Variant> {
        self.variants.iter().find(|v| v.value == value)
    }

    /// Field names any variant overrides.
    pub fn affected_fields(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = Vec::new();
        for variant in self.variants {
            for &(name, _) in variant.options {
                if !names.contains(&name) {
                    names.push(name);
                }
            }
        }
        names
    }
}

/// Read access to field values as the builders see them: blank values
/// count as absent.
#[derive(Clone, Copy)]
pub struct Values<'a>(&'a FieldValues);

impl<'a> Values<'a> {
    pub fn get(&self, name: &str) -> Option<&'a str> {
        self.0
            .get(name)
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
    }

    pub fn is(&self, name: &str, expected: &str) -> bool {
        self.get(name) == Some(expected)
    }
}

/// A catalog entry.
pub struct SlashCommand {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub fields: &'static [SlashField],
    pub presets: &'static [Preset],
    pub variants: Option<&'static VariantTable>,
    builder: fn(Values<'_>) -> String,
}

impl std::fmt::Debug for SlashCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlashCommand")
            .field("id", &self.id)
            .field("title", &self.title)
            .finish_non_exhaustive()
    }
}

impl SlashCommand {
    /// Compose the prompt. Total: missing fields fall back to the
    /// command's own defaults or drop their clause.
    pub fn build_prompt(&self, values: &FieldValues) -> String {
        normalize(&(self.builder)(Values(values)))
    }

    pub fn field(&self, name: &str) -> Option<&'static SlashField> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Option list for `field` under the current values. A known
    /// discriminator selects the variant list; anything else falls back to
    /// the field's base options.
    pub fn options_for(&self, field: &str, values: &FieldValues) -> &'static [&'static str] {
        if let Some(table) = self.variants
            && let Some(value) = values.get(table.key)
            && let Some(variant) = table.variant(value)
            && let Some((_, options)) = variant.options.iter().find(|(name, _)| *name == field)
        {
            return *options;
        }
        self.field(field).map(|f| f.options).unwrap_or(&[])
    }

    /// Presets applicable to the current values. With a variant table only
    /// presets for the current discriminator are offered, treating a missing
    /// discriminator as the table default on both sides.
    pub fn presets_for(&self, values: &FieldValues) -> Vec<&'static Preset> {
        match self.variants {
            None => self.presets.iter().collect(),
            Some(table) => {
                let current = values
                    .get(table.key)
                    .map(String::as_str)
                    .filter(|s| !s.is_empty())
                    .unwrap_or(table.default);
                self.presets
                    .iter()
                    .filter(|p| p.get(table.key).unwrap_or(table.default) == current)
                    .collect()
            }
        }
    }

    /// Values a fresh dialog starts with: the first option of every field
    /// that is required or acts as a subject/gender selector, plus the
    /// variant discriminator's default.
    pub fn initial_values(&self) -> FieldValues {
        let mut values = FieldValues::new();
        for field in self.fields {
            let seeded = field.required || field.name == "gender" || field.name == "subject";
            if seeded && let Some(first) = field.options.first() {
                values.insert(field.name.to_string(), first.to_string());
            }
        }
        if let Some(table) = self.variants {
            values
                .entry(table.key.to_string())
                .or_insert_with(|| table.default.to_string());
        }
        values
    }
}

// ─── Registry ────────────────────────────────────────────────────────────

/// All commands, in declaration order.
pub fn list_commands() -> &'static [SlashCommand] {
    catalog::COMMANDS
}

pub fn find_command(id: &str) -> Option<&'static SlashCommand> {
    catalog::COMMANDS.iter().find(|c| c.id == id)
}

/// Case-insensitive substring match on id or title, in declaration order.
/// A blank query returns the whole catalog.
pub fn filter_commands(query: &str) -> Vec<&'static SlashCommand> {
    let q = query.trim().to_lowercase();
    catalog::COMMANDS
        .iter()
        .filter(|c| q.is_empty() || c.id.contains(&q) || c.title.to_lowercase().contains(&q))
        .collect()
}

/// Palette query for prompt text: the text after a leading `/`, provided
/// the text is a single line of at most [`MAX_SLASH_LEN`] characters.
pub fn slash_query(text: &str) -> Option<&str> {
    if text.contains('\n') || text.chars().count() > MAX_SLASH_LEN {
        return None;
    }
    text.strip_prefix('/')
}

/// Collapse whitespace runs to one space and trim. Punctuation is left
/// where the builder put it, so `"to . Keep"` stays as written.
pub fn normalize(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
