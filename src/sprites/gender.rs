use serde_json::Value;

use super::{model::SpriteVariant, tree};

/// The four sprite slots a game can carry for one form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantKind {
    Front,
    FrontShiny,
    Back,
    BackShiny,
}

impl VariantKind {
    /// Field holding the default (male or ungendered) sprite. Shiny kinds
    /// name their field outright, the others carry a `_default` suffix.
    pub fn default_field(self) -> &'static str {
        match self {
            VariantKind::Front => "front_default",
            VariantKind::FrontShiny => "front_shiny",
            VariantKind::Back => "back_default",
            VariantKind::BackShiny => "back_shiny",
        }
    }

    pub fn female_field(self) -> &'static str {
        match self {
            VariantKind::Front => "front_female",
            VariantKind::FrontShiny => "front_shiny_female",
            VariantKind::Back => "back_female",
            VariantKind::BackShiny => "back_shiny_female",
        }
    }
}

/// Extracts up to two gender-labeled variants of one kind from a game's
/// sprite map. The default sprite is labeled "Male" only when a female
/// counterpart exists; on its own it stays unlabeled. Absent fields are
/// omitted, never emitted with a null url.
pub fn gender_variants(game: Option<&Value>, kind: VariantKind) -> Vec<SpriteVariant> {
    let mut variants = Vec::new();
    let Some(game) = game else {
        return variants;
    };

    let female = tree::url(game, kind.female_field());
    if let Some(url) = tree::url(game, kind.default_field()) {
        let label = if female.is_some() { "Male" } else { "" };
        variants.push(SpriteVariant {
            label: label.to_string(),
            url: Some(url),
        });
    }
    if let Some(url) = female {
        variants.push(SpriteVariant {
            label: "Female".to_string(),
            url: Some(url),
        });
    }
    variants
}
