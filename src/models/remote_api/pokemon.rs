use serde::Deserialize;
use serde_json::Value;

/// One catalog entry as the remote api returns it. The sprite tree has no
/// fixed schema across generations, so it stays an untyped `Value` and is
/// only read through `sprites::tree`.
#[derive(Deserialize)]
pub struct ApiPokemon {
    pub id: u32,
    pub name: String,
    pub sprites: Value,
}
