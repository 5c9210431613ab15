use serde_json::Value;

use super::{model::OverviewRow, tree};

fn version_url(sprites: &Value, gen: &str, game: &str, field: &str) -> Option<String> {
    tree::descend(sprites, &["versions", gen, game]).and_then(|game| tree::url(game, field))
}

fn home_url(sprites: &Value, field: &str) -> Option<String> {
    tree::descend(sprites, &["other", "home"]).and_then(|home| tree::url(home, field))
}

/// The two-row, nine-generation summary table, built from the primary entry's
/// tree only. Gen 7 falls back from Ultra Sun/Ultra Moon to the Let's Go icon
/// set, gen 8 from the Home set to the root-level sprite fields.
pub fn build_overview(sprites: &Value) -> Vec<OverviewRow> {
    vec![
        OverviewRow {
            kind: "Normal".to_string(),
            gen1: version_url(sprites, "generation-i", "red-blue", "front_default"),
            gen2: version_url(sprites, "generation-ii", "silver", "front_default"),
            gen3: version_url(sprites, "generation-iii", "ruby-sapphire", "front_default"),
            gen4: version_url(sprites, "generation-iv", "diamond-pearl", "front_default"),
            gen5: version_url(sprites, "generation-v", "black-white", "front_default"),
            gen6: version_url(sprites, "generation-vi", "x-y", "front_default"),
            gen7: version_url(sprites, "generation-vii", "ultra-sun-ultra-moon", "front_default")
                .or_else(|| version_url(sprites, "generation-vii", "icons", "front_default")),
            gen8: home_url(sprites, "front_default").or_else(|| tree::url(sprites, "front_default")),
            gen9: version_url(sprites, "generation-ix", "scarlet-violet", "front_default"),
        },
        OverviewRow {
            kind: "Shiny".to_string(),
            // no shiny sprites existed in generation 1
            gen1: None,
            gen2: version_url(sprites, "generation-ii", "silver", "front_shiny"),
            gen3: version_url(sprites, "generation-iii", "ruby-sapphire", "front_shiny"),
            gen4: version_url(sprites, "generation-iv", "diamond-pearl", "front_shiny"),
            gen5: version_url(sprites, "generation-v", "black-white", "front_shiny"),
            gen6: version_url(sprites, "generation-vi", "x-y", "front_shiny"),
            gen7: version_url(sprites, "generation-vii", "ultra-sun-ultra-moon", "front_shiny"),
            gen8: home_url(sprites, "front_shiny").or_else(|| tree::url(sprites, "front_shiny")),
            gen9: version_url(sprites, "generation-ix", "scarlet-violet", "front_shiny"),
        },
    ]
}
