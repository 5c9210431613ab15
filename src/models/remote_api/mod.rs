mod pokemon;
mod pokemon_list;
mod species;

pub use pokemon::ApiPokemon;
pub use pokemon_list::{ApiPokemonList, ApiPokemonListItem};
pub use species::{ApiNamedResource, ApiPokemonSpecies, ApiVariety};
