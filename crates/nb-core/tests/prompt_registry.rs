//! Integration tests: slash-command registry as seen from outside the crate.

use nb_core::prompt::{self, CustomOptions, FieldValues, options::resolve_options};
use pretty_assertions::assert_eq;

fn values(pairs: &[(&str, &str)]) -> FieldValues {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

// ─── Catalog ────────────────────────────────────────────────────────────

#[test]
fn catalog_declaration_order() {
    let ids: Vec<&str> = prompt::list_commands().iter().map(|c| c.id).collect();
    assert_eq!(
        ids,
        vec![
            "film",
            "retouch",
            "makeup",
            "remove",
            "weather",
            "hair",
            "outfit",
            "background",
            "style"
        ]
    );
}

#[test]
fn every_command_builds_from_empty_values() {
    for cmd in prompt::list_commands() {
        let text = cmd.build_prompt(&FieldValues::new());
        assert!(!text.is_empty(), "{} built an empty prompt", cmd.id);
        assert_eq!(text, text.trim(), "{} not trimmed", cmd.id);
        assert!(!text.contains("  "), "{} has repeated spaces: {text}", cmd.id);
    }
}

#[test]
fn film_defaults_to_person_classic_chrome() {
    let film = prompt::find_command("film").unwrap();
    assert_eq!(
        film.build_prompt(&FieldValues::new()),
        "Edit this photo to look like it was shot on a Fujifilm X-T4 with a 56mm f/1.2 lens. \
         Apply the Fujifilm Classic Chrome film simulation: slightly muted tones, natural skin warmth, \
         and rich greens/blues with cinematic contrast. \
         Introduce strong subject isolation by simulating the creamy bokeh and background compression of the 56mm f/1.2 lens. \
         Subject should stand out dramatically against a softly blurred backdrop, evoking a cinematic movie still \
         with shallow depth of field. Add fine film grain for texture."
    );
}

#[test]
fn film_landscape_classic_chrome_ignores_grain() {
    let film = prompt::find_command("film").unwrap();
    let text = film.build_prompt(&values(&[("subject", "landscape"), ("grain", "none")]));
    assert!(text.starts_with(
        "Edit this photo to look like it was shot on a Fujifilm X-T4 with a 23mm f/1.4 lens."
    ));
    assert!(text.contains("Add subtle film grain and cinematic tonal balance."));
}

#[test]
fn weather_full_composition() {
    let weather = prompt::find_command("weather").unwrap();
    assert_eq!(
        weather.build_prompt(&values(&[
            ("condition", "rain"),
            ("intensity", "heavy"),
            ("time", "night"),
            ("season", "summer"),
            ("extras", "puddles & reflections"),
        ])),
        "Change weather to rain with heavy intensity at night in summer ; add puddles & reflections . \
         Adjust lighting, shadows and reflections to be physically plausible."
    );
}

#[test]
fn clause_punctuation_stays_where_builders_put_it() {
    let background = prompt::find_command("background").unwrap();
    assert_eq!(
        background.build_prompt(&values(&[("scene", "  urban   night "), ("lighting", "warm key")])),
        "Replace background to urban night with warm key . Keep subject edges clean and natural shadows."
    );
    let style = prompt::find_command("style").unwrap();
    assert_eq!(
        style.build_prompt(&FieldValues::new()),
        "Apply overall style . Keep composition and key details consistent."
    );
}

// ─── Filtering ──────────────────────────────────────────────────────────

#[test]
fn empty_filter_returns_everything() {
    let all: Vec<&str> = prompt::list_commands().iter().map(|c| c.id).collect();
    let filtered: Vec<&str> = prompt::filter_commands("").iter().map(|c| c.id).collect();
    assert_eq!(filtered, all);
    let blank: Vec<&str> = prompt::filter_commands("   ").iter().map(|c| c.id).collect();
    assert_eq!(blank, all);
}

#[test]
fn hai_matches_only_hair() {
    let ids: Vec<&str> = prompt::filter_commands("hai").iter().map(|c| c.id).collect();
    assert_eq!(ids, vec!["hair"]);
}

#[test]
fn filter_keeps_declaration_order() {
    // "Weather / Atmosphere" matches on its title.
    let ids: Vec<&str> = prompt::filter_commands("re").iter().map(|c| c.id).collect();
    assert_eq!(ids, vec!["retouch", "remove", "weather"]);
}

// ─── Variants ───────────────────────────────────────────────────────────

#[test]
fn unknown_discriminator_falls_back_to_base_options() {
    let hair = prompt::find_command("hair").unwrap();
    let unknown = values(&[("gender", "robot")]);
    for field in hair.fields {
        assert_eq!(
            hair.options_for(field.name, &unknown),
            field.options,
            "field {} did not fall back",
            field.name
        );
    }
}

#[test]
fn known_discriminator_uses_variant_options() {
    let hair = prompt::find_command("hair").unwrap();
    let women = values(&[("gender", "women")]);
    assert_eq!(hair.options_for("style", &women).len(), 11);
    assert_eq!(hair.options_for("color", &women)[1], "golden blonde");
}

#[test]
fn custom_option_merges_with_variant_list() {
    let hair = prompt::find_command("hair").unwrap();
    let men = values(&[("gender", "men")]);
    let mut custom = CustomOptions::new();

    let rendered = resolve_options(hair, "color", &men, &custom);
    custom.add("color", "Cool Ash", &rendered);
    custom.add("color", "silver fox", &rendered);

    let rendered = resolve_options(hair, "color", &men, &custom);
    let labels: Vec<&str> = rendered.iter().map(|o| o.value.as_str()).collect();
    assert_eq!(
        labels,
        vec![
            "natural black",
            "dark brown",
            "cool ash",
            "warm chestnut",
            "salt and pepper",
            "silver fox"
        ]
    );
}
