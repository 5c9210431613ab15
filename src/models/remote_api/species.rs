use serde::Deserialize;

#[derive(Deserialize, Clone)]
pub struct ApiPokemonSpecies {
    #[serde(default)]
    pub varieties: Vec<ApiVariety>,
}

/// Alternate-form pointer from the species endpoint. `is_default` marks the
/// base form, which already carries its sprites on the main entry.
#[derive(Deserialize, Clone)]
pub struct ApiVariety {
    pub is_default: bool,
    pub pokemon: ApiNamedResource,
}

#[derive(Deserialize, Clone)]
pub struct ApiNamedResource {
    pub name: String,
}
