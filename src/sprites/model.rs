use serde::Serialize;
use utoipa::ToSchema;

/// One labeled sprite url. The label is empty for a sprite with no gender
/// counterpart; "Male" appears only when a "Female" entry is paired with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct SpriteVariant {
    pub label: String,
    pub url: Option<String>,
}

/// Sprites of one game within a generation. Back lists are only present for
/// generations that shipped back sprites; an empty list means the game has
/// the capability but no data, which is not the same as omission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GameRow {
    pub game: String,
    pub normal_sprites: Vec<SpriteVariant>,
    pub shiny_sprites: Vec<SpriteVariant>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub back_sprites: Option<Vec<SpriteVariant>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub back_shiny_sprites: Option<Vec<SpriteVariant>>,
}

/// `has_back`/`has_shiny` are the generation's static capability flags, not
/// derived from the data at hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerationBlock {
    pub title: String,
    pub has_back: bool,
    pub has_shiny: bool,
    pub games: Vec<GameRow>,
}

/// One row of the nine-generation summary table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct OverviewRow {
    #[serde(rename = "type")]
    pub kind: String,
    pub gen1: Option<String>,
    pub gen2: Option<String>,
    pub gen3: Option<String>,
    pub gen4: Option<String>,
    pub gen5: Option<String>,
    pub gen6: Option<String>,
    pub gen7: Option<String>,
    pub gen8: Option<String>,
    pub gen9: Option<String>,
}

/// The complete render model for one entry's detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct SpriteGallery {
    pub name: String,
    pub id: u32,
    pub overview: Vec<OverviewRow>,
    pub generations: Vec<GenerationBlock>,
}
