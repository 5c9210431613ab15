use actix_web::{
    get,
    http::StatusCode,
    web::{self, Data},
    HttpResponse, Responder,
};

use crate::{
    macros::{resp_200_Ok_json, yeet_error},
    models::remote_api::{ApiPokemon, ApiPokemonSpecies},
    req_caching::{self, response_from_error},
    sprites::{self, model::SpriteGallery, varieties::resolve_varieties},
};

#[utoipa::path(
    responses(
        (status = 200, description = "Returns the full sprite gallery for one entry", body = SpriteGallery),
        (status = 404, description = "Unknown entry name"),
        (status = 500, description = "Failed to fetch/deserialize data from remote api"),
    )
)]
#[get("/sprites/get_by_name/{name}")]
pub async fn get_by_name(
    name: web::Path<String>,
    req_client: Data<reqwest::Client>,
) -> impl Responder {
    let name = name.into_inner();

    let res = req_caching::get_json::<ApiPokemon, HttpResponse>(
        &req_client,
        &format!("https://pokeapi.co/api/v2/pokemon/{name}"),
        |error| {
            let status = if error.status().is_some_and(|s| s.as_u16() == 404) {
                StatusCode::NOT_FOUND
            } else {
                StatusCode::INTERNAL_SERVER_ERROR
            };
            response_from_error(format!("Error encountered: {error}"), status)
        },
    )
    .await;
    let pokemon = yeet_error!(res);

    // species failure is non-fatal: the gallery just carries no alternate forms
    let varieties = req_caching::get_json::<ApiPokemonSpecies, ()>(
        &req_client,
        &format!("https://pokeapi.co/api/v2/pokemon-species/{name}"),
        |_| (),
    )
    .await
    .map(|species| species.varieties.clone())
    .unwrap_or_default();

    let resolved = resolve_varieties(&pokemon.name, &varieties, |form_name| {
        let req_client = req_client.clone();
        async move {
            req_caching::get_json::<ApiPokemon, ()>(
                &req_client,
                &format!("https://pokeapi.co/api/v2/pokemon/{form_name}"),
                |_| (),
            )
            .await
            .ok()
            .map(|form| form.sprites.clone())
        }
    })
    .await;

    let gallery = sprites::build_gallery(&pokemon.name, pokemon.id, &pokemon.sprites, &resolved);
    resp_200_Ok_json!(gallery)
}
