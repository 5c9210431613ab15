pub mod form_name;
pub mod gender;
pub mod generations;
pub mod model;
pub mod overview;
pub mod tree;
pub mod varieties;

use serde_json::Value;

use self::model::SpriteGallery;
use self::varieties::ResolvedVariety;

/// Builds the complete detail-view render model from one entry's sprite tree
/// and its already-resolved alternate forms. Pure and synchronous; the same
/// inputs always produce the same gallery.
pub fn build_gallery(
    name: &str,
    id: u32,
    sprites: &Value,
    varieties: &[ResolvedVariety],
) -> SpriteGallery {
    SpriteGallery {
        name: name.to_string(),
        id,
        overview: overview::build_overview(sprites),
        generations: generations::build_generations(sprites, varieties),
    }
}
