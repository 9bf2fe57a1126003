use super::{Preset, SlashCommand, SlashField, Values, Variant, VariantTable};

pub(super) static COMMANDS: &[SlashCommand] = &[
    FILM, RETOUCH, MAKEUP, REMOVE, WEATHER, HAIR, OUTFIT, BACKGROUND, STYLE,
];

const fn field(name: &'static str, label: &'static str, options: &'static [&'static str]) -> SlashField {
    SlashField {
        name,
        label,
        placeholder: None,
        required: false,
        options,
    }
}

const fn hinted(
    name: &'static str,
    label: &'static str,
    placeholder: &'static str,
    options: &'static [&'static str],
) -> SlashField {
    SlashField {
        name,
        label,
        placeholder: Some(placeholder),
        required: false,
        options,
    }
}

/// Join the present clauses with single spaces.
fn join<const N: usize>(clauses: [Option<String>; N]) -> String {
    clauses.into_iter().flatten().collect::<Vec<_>>().join(" ")
}

fn always(s: &str) -> Option<String> {
    Some(s.to_string())
}

// ─── film ────────────────────────────────────────────────────────────────

const FILM: SlashCommand = SlashCommand {
    id: "film",
    title: "Fujifilm Film Look",
    description: "Create or edit with Fujifilm simulations",
    fields: &[
        SlashField {
            name: "subject",
            label: "Subject",
            placeholder: Some("person | landscape"),
            required: true,
            options: &["person", "landscape"],
        },
        hinted(
            "simulation",
            "Film Simulation",
            "Classic Chrome (default)",
            &["Classic Chrome", "Classic Neg", "Provia", "Velvia", "Astia", "Eterna"],
        ),
        hinted(
            "camera",
            "Camera",
            "Fujifilm X-T4 (default)",
            &["Fujifilm X-T4", "Fujifilm X-H2", "Fujifilm X-Pro3"],
        ),
        hinted(
            "lens",
            "Lens",
            "56mm f/1.2 (person) / 23mm f/1.4 (landscape)",
            &["56mm f/1.2", "90mm f/2", "23mm f/1.4", "16mm f/1.4"],
        ),
        hinted("grain", "Grain", "fine (optional)", &["none", "fine", "medium", "strong"]),
    ],
    presets: &[
        Preset {
            label: "Portrait · Classic Chrome · 56mm",
            values: &[
                ("subject", "person"),
                ("simulation", "Classic Chrome"),
                ("camera", "Fujifilm X-T4"),
                ("lens", "56mm f/1.2"),
                ("grain", "fine"),
            ],
        },
        Preset {
            label: "Portrait · Classic Neg · 90mm",
            values: &[
                ("subject", "person"),
                ("simulation", "Classic Neg"),
                ("camera", "Fujifilm X-T4"),
                ("lens", "90mm f/2"),
                ("grain", "fine"),
            ],
        },
        Preset {
            label: "Landscape · Classic Chrome · 23mm",
            values: &[
                ("subject", "landscape"),
                ("simulation", "Classic Chrome"),
                ("camera", "Fujifilm X-T4"),
                ("lens", "23mm f/1.4"),
                ("grain", "medium"),
            ],
        },
        Preset {
            label: "Landscape · Eterna · 16mm",
            values: &[
                ("subject", "landscape"),
                ("simulation", "Eterna"),
                ("camera", "Fujifilm X-T4"),
                ("lens", "16mm f/1.4"),
                ("grain", "none"),
            ],
        },
    ],
    variants: None,
    builder: film,
};

fn simulation_look(key: &str) -> Option<&'static str> {
    Some(match key {
        "classic chrome" => "slightly muted tones, natural skin warmth, and rich greens/blues with cinematic contrast",
        "classic neg" => "subdued colors, soft contrast, a vintage street-film palette",
        "provia" => "balanced contrast and neutral color rendition",
        "velvia" => "high saturation with crisp contrast and vibrant greens/blues",
        "astia" => "soft contrast and smooth skin tones",
        "eterna" => "cinematic low-saturation look with gentle highlights",
        _ => return None,
    })
}

fn film(v: Values<'_>) -> String {
    let landscape = v
        .get("subject")
        .is_some_and(|s| s.to_lowercase().contains("land"));
    let sim = v
        .get("simulation")
        .map(|s| s.split_whitespace().collect::<Vec<_>>().join(" "))
        .unwrap_or_else(|| "Classic Chrome".to_string());
    let camera = v.get("camera").unwrap_or("Fujifilm X-T4");
    let lens = v
        .get("lens")
        .unwrap_or(if landscape { "23mm f/1.4" } else { "56mm f/1.2" });
    let grain = !v.get("grain").is_some_and(|g| g.to_lowercase().contains("no"));

    let key = sim.to_lowercase();
    let look = simulation_look(&key)
        .map(str::to_string)
        .unwrap_or_else(|| format!("{sim} film simulation look"));
    let shot = Some(format!(
        "Edit this photo to look like it was shot on a {camera} with a {lens} lens."
    ));

    match (landscape, key.as_str()) {
        (false, "classic chrome") => join([
            shot,
            always(
                "Apply the Fujifilm Classic Chrome film simulation: slightly muted tones, natural skin warmth, and rich greens/blues with cinematic contrast.",
            ),
            Some(format!(
                "Introduce strong subject isolation by simulating the creamy bokeh and background compression of the {lens} lens."
            )),
            always(
                "Subject should stand out dramatically against a softly blurred backdrop, evoking a cinematic movie still with shallow depth of field.",
            ),
            grain.then(|| "Add fine film grain for texture.".to_string()),
        ]),
        (true, "classic chrome") => join([
            shot,
            always(
                "Apply the Fujifilm Classic Chrome film simulation: slightly muted colors, soft contrast, rich greens, deep blues, and warm highlights.",
            ),
            always("Add subtle film grain and cinematic tonal balance."),
            always(
                "Emphasize high dynamic range so details in sky, land, and water are preserved, with a gentle roll-off in highlights and shadows.",
            ),
            always(
                "The look should feel like a cinematic still frame, natural yet moody, with a timeless Fujifilm film aesthetic.",
            ),
        ]),
        (false, _) => join([
            shot,
            Some(format!("Apply the Fujifilm {sim} film simulation: {look}.")),
            always(
                "Simulate shallow depth of field and pleasing background separation so the subject stands out.",
            ),
            grain.then(|| "Add fine film grain for subtle texture.".to_string()),
        ]),
        (true, _) => join([
            shot,
            Some(format!("Apply the Fujifilm {sim} film simulation: {look}.")),
            always(
                "Emphasize natural color, balanced contrast, and preserved highlight/shadow detail across the scene.",
            ),
            grain.then(|| "Add subtle film grain for a timeless look.".to_string()),
        ]),
    }
}

// ─── retouch ─────────────────────────────────────────────────────────────

const RETOUCH: SlashCommand = SlashCommand {
    id: "retouch",
    title: "Retouch",
    description: "Skin, eyes, teeth, flyaways — with texture preserved",
    fields: &[
        field("style", "Style", &["subtle", "clean commercial", "natural film", "beauty editorial"]),
        field("skin", "Skin Smoothing", &["off", "soft", "medium", "high"]),
        field("texture", "Texture Preservation", &["high", "medium", "low"]),
        field("teeth", "Teeth Whitening", &["no", "yes"]),
        field("eyes", "Eye Enhance", &["no", "yes"]),
        field("flyaways", "Flyaway Hair", &["keep", "reduce", "remove"]),
        field("grade", "Color Grade", &["neutral", "warm", "cool"]),
    ],
    presets: &[
        Preset {
            label: "Subtle · Texture High · Neutral",
            values: &[
                ("style", "subtle"),
                ("skin", "soft"),
                ("texture", "high"),
                ("teeth", "no"),
                ("eyes", "no"),
                ("flyaways", "reduce"),
                ("grade", "neutral"),
            ],
        },
        Preset {
            label: "Clean Commercial · Soft · Warm",
            values: &[
                ("style", "clean commercial"),
                ("skin", "soft"),
                ("texture", "medium"),
                ("teeth", "yes"),
                ("eyes", "yes"),
                ("flyaways", "reduce"),
                ("grade", "warm"),
            ],
        },
        Preset {
            label: "Beauty Editorial · Medium · Cool",
            values: &[
                ("style", "beauty editorial"),
                ("skin", "medium"),
                ("texture", "medium"),
                ("teeth", "no"),
                ("eyes", "yes"),
                ("flyaways", "remove"),
                ("grade", "cool"),
            ],
        },
    ],
    variants: None,
    builder: retouch,
};

fn retouch(v: Values<'_>) -> String {
    let skin = v.get("skin").filter(|s| *s != "off");
    let flyaways = v.get("flyaways").filter(|s| *s != "keep");
    join([
        Some(match v.get("style") {
            Some(style) => format!("Retouch in a {style} style."),
            None => "Retouch subtly.".to_string(),
        }),
        Some(match skin {
            Some(skin) => format!("Apply {skin} skin smoothing while preserving pores."),
            None => "Keep skin natural; avoid plastic look.".to_string(),
        }),
        Some(match v.get("texture") {
            Some(texture) => format!("Texture preservation: {texture}."),
            None => "Preserve texture.".to_string(),
        }),
        v.is("teeth", "yes").then(|| "Whiten teeth naturally.".to_string()),
        v.is("eyes", "yes")
            .then(|| "Brighten eyes slightly; remove red veins.".to_string()),
        flyaways.map(|f| {
            let verb = if f == "remove" { "Remove" } else { "Reduce" };
            format!("{verb} flyaway hairs.")
        }),
        v.get("grade").map(|g| format!("Overall color grade: {g}.")),
        always("Avoid over-retouching; maintain realistic skin and features."),
    ])
}

// ─── makeup ──────────────────────────────────────────────────────────────

const MAKEUP: SlashCommand = SlashCommand {
    id: "makeup",
    title: "Makeup",
    description: "Add or adjust makeup by style and palette",
    fields: &[
        field("gender", "Subject", &["women", "men"]),
        field(
            "style",
            "Style",
            &["no-makeup look", "soft glam", "evening glam", "smokey eye", "editorial"],
        ),
        field("lip", "Lip Color", &["nude", "soft pink", "classic red", "berry"]),
        field("shadow", "Eyeshadow", &["neutral", "bronze", "plum", "rose", "emerald"]),
        field("liner", "Eyeliner", &["none", "soft wing", "classic wing", "dramatic"]),
        field("blush", "Blush", &["peach", "rose", "bronze"]),
        field("finish", "Finish", &["matte", "dewy", "glossy"]),
    ],
    presets: &[
        Preset {
            label: "No‑Makeup · Nude · Neutral",
            values: &[
                ("gender", "women"),
                ("style", "no-makeup look"),
                ("lip", "nude"),
                ("shadow", "neutral"),
                ("liner", "none"),
                ("blush", "peach"),
                ("finish", "dewy"),
            ],
        },
        Preset {
            label: "Soft Glam · Rose · Wing",
            values: &[
                ("gender", "women"),
                ("style", "soft glam"),
                ("lip", "soft pink"),
                ("shadow", "rose"),
                ("liner", "classic wing"),
                ("blush", "rose"),
                ("finish", "dewy"),
            ],
        },
        Preset {
            label: "Classic Red · Bronze · Matte",
            values: &[
                ("gender", "women"),
                ("style", "evening glam"),
                ("lip", "classic red"),
                ("shadow", "bronze"),
                ("liner", "soft wing"),
                ("blush", "bronze"),
                ("finish", "matte"),
            ],
        },
        Preset {
            label: "Men · Groomed · Natural",
            values: &[
                ("gender", "men"),
                ("style", "no-makeup look"),
                ("lip", "nude"),
                ("shadow", "neutral"),
                ("liner", "none"),
                ("blush", "bronze"),
                ("finish", "matte"),
            ],
        },
    ],
    variants: None,
    builder: makeup,
};

fn makeup(v: Values<'_>) -> String {
    join([
        Some(match v.get("style") {
            Some(style) => format!("Apply {style} makeup."),
            None => "Apply subtle, natural makeup.".to_string(),
        }),
        v.get("lip").map(|s| format!("Lips: {s}.")),
        v.get("shadow").map(|s| format!("Eyeshadow: {s}.")),
        v.get("liner").map(|s| format!("Eyeliner: {s}.")),
        v.get("blush").map(|s| format!("Blush: {s}.")),
        v.get("finish").map(|s| format!("Overall finish: {s}.")),
        always("Blend realistically; respect lighting and skin tone."),
    ])
}

// ─── remove ──────────────────────────────────────────────────────────────

const REMOVE: SlashCommand = SlashCommand {
    id: "remove",
    title: "Object Removal",
    description: "Remove people/objects and fill background naturally",
    fields: &[
        field(
            "target",
            "Targets",
            &["people", "crowd", "random bystanders", "cars", "trash", "street signs", "wires"],
        ),
        field("intensity", "Amount", &["light", "medium", "heavy"]),
        field(
            "fill",
            "Background Fill",
            &["continue background", "natural bokeh", "sky", "foliage", "water"],
        ),
        field("shadows", "Shadows", &["auto", "preserve", "remove"]),
    ],
    presets: &[
        Preset {
            label: "Remove Stray People (Light)",
            values: &[
                ("target", "random bystanders"),
                ("intensity", "light"),
                ("fill", "continue background"),
                ("shadows", "auto"),
            ],
        },
        Preset {
            label: "Clean Street (Cars + Signs)",
            values: &[
                ("target", "cars"),
                ("intensity", "medium"),
                ("fill", "continue background"),
                ("shadows", "preserve"),
            ],
        },
        Preset {
            label: "Uncrowd Beach (Heavy)",
            values: &[
                ("target", "crowd"),
                ("intensity", "heavy"),
                ("fill", "natural bokeh"),
                ("shadows", "auto"),
            ],
        },
    ],
    variants: None,
    builder: remove,
};

fn remove(v: Values<'_>) -> String {
    join([
        Some(format!(
            "Remove {} from the scene",
            v.get("target").unwrap_or("distractions")
        )),
        v.get("intensity").map(|s| format!("with {s} aggressiveness")),
        v.get("fill").map(|s| format!("and fill with {s}")),
        v.get("shadows").map(|s| {
            let verb = match s {
                "preserve" => "preserve",
                "remove" => "remove",
                _ => "match",
            };
            format!("; {verb} shadows and lighting naturally")
        }),
        always(". Seamlessly inpaint backgrounds; avoid artifacts and repetitions."),
    ])
}

// ─── weather ─────────────────────────────────────────────────────────────

const WEATHER: SlashCommand = SlashCommand {
    id: "weather",
    title: "Weather / Atmosphere",
    description: "Change time, weather, season and mood",
    fields: &[
        field(
            "condition",
            "Condition",
            &[
                "clear",
                "golden hour",
                "overcast",
                "rain",
                "snow",
                "fog",
                "storm",
                "sunset",
                "sunrise",
            ],
        ),
        field("intensity", "Intensity", &["light", "normal", "heavy"]),
        field("time", "Time", &["day", "night", "blue hour"]),
        field("season", "Season", &["spring", "summer", "autumn", "winter"]),
        field(
            "extras",
            "Extras",
            &["wet surfaces", "puddles & reflections", "raindrops on lens", "mist layers"],
        ),
    ],
    presets: &[
        Preset {
            label: "Golden Hour Glow",
            values: &[
                ("condition", "golden hour"),
                ("intensity", "normal"),
                ("time", "day"),
                ("season", "summer"),
                ("extras", "warm reflections"),
            ],
        },
        Preset {
            label: "Moody Overcast",
            values: &[
                ("condition", "overcast"),
                ("intensity", "normal"),
                ("time", "day"),
                ("season", "autumn"),
                ("extras", "mist layers"),
            ],
        },
        Preset {
            label: "Misty Sunrise",
            values: &[
                ("condition", "sunrise"),
                ("intensity", "light"),
                ("time", "blue hour"),
                ("season", "spring"),
                ("extras", "mist layers"),
            ],
        },
        Preset {
            label: "Heavy Rain · Night Neon",
            values: &[
                ("condition", "rain"),
                ("intensity", "heavy"),
                ("time", "night"),
                ("season", "summer"),
                ("extras", "puddles & reflections"),
            ],
        },
        Preset {
            label: "Snowy Winter",
            values: &[
                ("condition", "snow"),
                ("intensity", "normal"),
                ("time", "day"),
                ("season", "winter"),
                ("extras", "soft haze"),
            ],
        },
    ],
    variants: None,
    builder: weather,
};

fn weather(v: Values<'_>) -> String {
    join([
        Some(format!(
            "Change weather to {}",
            v.get("condition").unwrap_or("clear")
        )),
        v.get("intensity").map(|s| format!("with {s} intensity")),
        v.get("time").map(|s| format!("at {s}")),
        v.get("season").map(|s| format!("in {s}")),
        v.get("extras").map(|s| format!("; add {s}")),
        always(". Adjust lighting, shadows and reflections to be physically plausible."),
    ])
}

// ─── hair ────────────────────────────────────────────────────────────────

const HAIR: SlashCommand = SlashCommand {
    id: "hair",
    title: "Hair Edit",
    description: "Edit hairstyle, color and vibe",
    fields: &[
        hinted(
            "style",
            "Style",
            "bob, curly, pixie",
            &["bob", "curly", "pixie", "wavy", "slicked back"],
        ),
        hinted(
            "color",
            "Color",
            "platinum blonde, auburn",
            &["platinum blonde", "auburn", "jet black", "ash brown", "copper"],
        ),
        hinted(
            "vibe",
            "Vibe",
            "natural, glossy, edgy",
            &["natural", "glossy", "edgy", "windswept"],
        ),
    ],
    presets: &[
        Preset {
            label: "Women · Wavy · Platinum · Glossy",
            values: &[
                ("gender", "women"),
                ("style", "wavy"),
                ("color", "platinum blonde"),
                ("vibe", "glossy"),
            ],
        },
        Preset {
            label: "Women · Bob · Jet Black · Natural",
            values: &[
                ("gender", "women"),
                ("style", "bob"),
                ("color", "jet black"),
                ("vibe", "natural"),
            ],
        },
        Preset {
            label: "Women · Curly · Auburn · Volume",
            values: &[
                ("gender", "women"),
                ("style", "curly"),
                ("color", "auburn"),
                ("vibe", "windswept"),
            ],
        },
        Preset {
            label: "Men · Fade · Jet Black · Matte",
            values: &[
                ("gender", "men"),
                ("style", "mid fade"),
                ("color", "jet black"),
                ("vibe", "matte"),
            ],
        },
        Preset {
            label: "Men · Pompadour · Ash Brown · Clean",
            values: &[
                ("gender", "men"),
                ("style", "pompadour"),
                ("color", "ash brown"),
                ("vibe", "clean"),
            ],
        },
    ],
    variants: Some(&HAIR_VARIANTS),
    builder: hair,
};

const HAIR_VARIANTS: VariantTable = VariantTable {
    key: "gender",
    default: "women",
    variants: &[
        Variant {
            value: "women",
            options: &[
                (
                    "style",
                    &[
                        "bob",
                        "lob",
                        "pixie",
                        "wavy",
                        "curly",
                        "long layers",
                        "shag",
                        "wolf cut",
                        "slicked back",
                        "updo",
                        "bangs",
                    ],
                ),
                (
                    "color",
                    &[
                        "platinum blonde",
                        "golden blonde",
                        "strawberry blonde",
                        "auburn",
                        "copper",
                        "chocolate brown",
                        "ash brown",
                        "jet black",
                        "balayage",
                        "highlights",
                    ],
                ),
                ("vibe", &["natural", "glossy", "voluminous", "textured", "windswept"]),
            ],
        },
        Variant {
            value: "men",
            options: &[
                (
                    "style",
                    &[
                        "buzz cut",
                        "crew cut",
                        "pompadour",
                        "quiff",
                        "undercut",
                        "slick back",
                        "mid fade",
                        "high fade",
                        "low fade",
                        "curly top",
                        "man bun",
                        "long layers",
                    ],
                ),
                (
                    "color",
                    &[
                        "natural black",
                        "dark brown",
                        "cool ash",
                        "warm chestnut",
                        "salt and pepper",
                    ],
                ),
                ("vibe", &["clean", "matte", "textured", "messy", "windblown"]),
            ],
        },
    ],
};

fn hair(v: Values<'_>) -> String {
    join([
        always("Edit the subject's hair"),
        v.get("style").map(|s| format!("to a {s} style")),
        v.get("color").map(|s| format!("with {s} color")),
        v.get("vibe").map(|s| format!(", {s} finish")),
        always(
            ". Keep face structure and identity consistent. Natural hairlines, realistic strands, high detail.",
        ),
    ])
}

// ─── outfit ──────────────────────────────────────────────────────────────

const OUTFIT: SlashCommand = SlashCommand {
    id: "outfit",
    title: "Outfit Edit",
    description: "Change clothing style and colors",
    fields: &[
        hinted(
            "style",
            "Style",
            "streetwear, formal suit",
            &[
                "streetwear",
                "formal suit",
                "casual",
                "athleisure",
                "business casual",
                "club",
                "party",
                "swimwear",
                "evening gown",
                "cocktail dress",
                "festival",
                "beachwear",
            ],
        ),
        hinted(
            "colors",
            "Colors",
            "black & white",
            &[
                "black & white",
                "earth tones",
                "pastel",
                "monochrome",
                "neon",
                "metallics",
                "bright primaries",
                "tropical palette",
            ],
        ),
        hinted(
            "notes",
            "Notes",
            "minimal logos, tailored fit",
            &[
                "minimal logos",
                "tailored fit",
                "oversized",
                "layered",
                "sequins",
                "reflective",
                "sporty",
                "lightweight fabrics",
                "water-friendly",
            ],
        ),
    ],
    presets: &[
        Preset {
            label: "Formal · B&W · Tailored",
            values: &[("style", "formal suit"), ("colors", "black & white"), ("notes", "tailored fit")],
        },
        Preset {
            label: "Streetwear · Earth · Oversized",
            values: &[("style", "streetwear"), ("colors", "earth tones"), ("notes", "oversized")],
        },
        Preset {
            label: "Club · Neon · Sequins",
            values: &[("style", "club"), ("colors", "neon"), ("notes", "sequins")],
        },
        Preset {
            label: "Party · Metallics · Tailored",
            values: &[("style", "party"), ("colors", "metallics"), ("notes", "tailored fit")],
        },
        Preset {
            label: "Swim · Tropical · Lightweight",
            values: &[
                ("style", "swimwear"),
                ("colors", "tropical palette"),
                ("notes", "lightweight fabrics, water-friendly"),
            ],
        },
        Preset {
            label: "Festival · Bright · Layered",
            values: &[("style", "festival"), ("colors", "bright primaries"), ("notes", "layered")],
        },
    ],
    variants: None,
    builder: outfit,
};

fn outfit(v: Values<'_>) -> String {
    join([
        always("Edit the outfit"),
        v.get("style").map(|s| format!("to {s}")),
        v.get("colors").map(|s| format!("in {s}")),
        v.get("notes").map(|s| format!("({s})")),
        always(
            ". Preserve pose and body proportions. Fabric folds and lighting should match the scene.",
        ),
    ])
}

// ─── background ──────────────────────────────────────────────────────────

const BACKGROUND: SlashCommand = SlashCommand {
    id: "background",
    title: "Background",
    description: "Replace background scene",
    fields: &[
        hinted(
            "scene",
            "Scene",
            "sunset beach, studio gray",
            &["studio gray", "sunset beach", "urban night", "forest trail", "coffee shop"],
        ),
        hinted(
            "lighting",
            "Lighting",
            "soft rim light, warm key",
            &["soft rim light", "warm key", "golden hour", "overcast softbox"],
        ),
    ],
    presets: &[
        Preset {
            label: "Studio · Soft Rim",
            values: &[("scene", "studio gray"), ("lighting", "soft rim light")],
        },
        Preset {
            label: "Sunset · Golden Hour",
            values: &[("scene", "sunset beach"), ("lighting", "golden hour")],
        },
    ],
    variants: None,
    builder: background,
};

fn background(v: Values<'_>) -> String {
    join([
        always("Replace background to"),
        v.get("scene").map(str::to_string),
        v.get("lighting").map(|s| format!("with {s}")),
        always(". Keep subject edges clean and natural shadows."),
    ])
}

// ─── style ───────────────────────────────────────────────────────────────

const STYLE: SlashCommand = SlashCommand {
    id: "style",
    title: "Style Grade",
    description: "Overall style and color grading",
    fields: &[
        hinted(
            "look",
            "Look",
            "cinematic teal-orange, film noir",
            &["cinematic teal-orange", "film noir", "warm vintage", "high-contrast bw"],
        ),
        hinted("extras", "Extras", "grain, soft bloom", &["grain", "soft bloom", "halation"]),
    ],
    presets: &[
        Preset {
            label: "Cinematic + Grain",
            values: &[("look", "cinematic teal-orange"), ("extras", "grain")],
        },
        Preset {
            label: "Film Noir + Halation",
            values: &[("look", "film noir"), ("extras", "halation")],
        },
    ],
    variants: None,
    builder: style,
};

fn style(v: Values<'_>) -> String {
    join([
        always("Apply overall style"),
        v.get("look").map(str::to_string),
        v.get("extras").map(|s| format!("with {s}")),
        always(". Keep composition and key details consistent."),
    ])
}
