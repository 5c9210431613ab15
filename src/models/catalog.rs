use serde::Serialize;
use utoipa::ToSchema;

use super::remote_api::ApiPokemonListItem;

#[derive(Serialize, ToSchema)]
pub struct CatalogEntry {
    pub id: u32,
    pub name: String,
}

/// One browsable generation bucket of the catalog list view.
#[derive(Serialize, ToSchema)]
pub struct GenGroup {
    pub id: u32,
    pub name: String,
    pub pokemons: Vec<CatalogEntry>,
}

/// Fixed national-dex index ranges per generation, end exclusive.
const GEN_RANGES: [(u32, &str, usize, usize); 9] = [
    (1, "Generation I", 0, 151),
    (2, "Generation II", 151, 251),
    (3, "Generation III", 251, 386),
    (4, "Generation IV", 386, 493),
    (5, "Generation V", 493, 649),
    (6, "Generation VI", 649, 721),
    (7, "Generation VII", 721, 809),
    (8, "Generation VIII", 809, 905),
    (9, "Generation IX", 905, 1025),
];

impl GenGroup {
    /// Groups the raw entry list into generation buckets. Ids are positional,
    /// the list endpoint returns entries in dex order.
    pub fn group(results: &[ApiPokemonListItem]) -> Vec<GenGroup> {
        GEN_RANGES
            .iter()
            .map(|&(id, name, start, end)| GenGroup {
                id,
                name: name.to_string(),
                pokemons: results
                    .iter()
                    .enumerate()
                    .skip(start)
                    .take(end - start)
                    .map(|(i, item)| CatalogEntry {
                        id: i as u32 + 1,
                        name: item.name.clone(),
                    })
                    .collect(),
            })
            .collect()
    }
}
