use utoipa::{Modify, OpenApi};

use crate::{
    models::catalog::{CatalogEntry, GenGroup},
    paths,
    sprites::model::{GameRow, GenerationBlock, OverviewRow, SpriteGallery, SpriteVariant},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        paths::sprites::get_catalog::get_catalog,
        paths::sprites::get_by_name::get_by_name,
    ),
    components(schemas(
        CatalogEntry,
        GenGroup,
        SpriteVariant,
        GameRow,
        GenerationBlock,
        OverviewRow,
        SpriteGallery,
    )),
    modifiers(&AutoTagAddon)
)]
pub struct ApiDoc;

pub struct AutoTagAddon;

impl Modify for AutoTagAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        for path in openapi.paths.paths.values_mut() {
            for operation in path.operations.values_mut() {
                let tags = operation.tags.take().unwrap_or_default();

                let mut new_tags = tags
                    .into_iter()
                    .filter(|t| !t.starts_with("crate::"))
                    .collect::<Vec<_>>();
                new_tags.push("All routes".into());

                operation.tags = Some(new_tags);
            }
        }
    }
}
