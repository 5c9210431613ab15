use actix_web::{get, http::StatusCode, web::Data, Either, HttpResponse, Responder};

use crate::{
    cache::CACHE,
    macros::{resp_200_Ok_json, yeet_error},
    models::{catalog::GenGroup, remote_api::ApiPokemonList},
    req_caching::{self, response_from_error},
};

#[utoipa::path(
    responses(
        (status = 200, description = "Returns the catalog grouped by generation", body = [GenGroup]),
        (status = 500, description = "Failed to fetch/deserialize data from remote api"),
    )
)]
#[get("/sprites/get_catalog")]
pub async fn get_catalog(req_client: Data<reqwest::Client>) -> impl Responder {
    let entry = CACHE.entry::<String>("get_catalog route".into()).await;
    let mut data_lock = match entry.get_or_write_lock().await {
        Either::Left(data) => return resp_200_Ok_json!(data.clone(), raw),
        Either::Right(write_lock) => write_lock,
    };

    let res = req_caching::get_json::<ApiPokemonList, HttpResponse>(
        &req_client,
        "https://pokeapi.co/api/v2/pokemon?limit=1025",
        |error| {
            response_from_error(
                format!("Error encountered: {error}"),
                StatusCode::INTERNAL_SERVER_ERROR,
            )
        },
    )
    .await;

    let pokemon_list = yeet_error!(res);
    let groups = GenGroup::group(&pokemon_list.results);

    let data = serde_json::to_string(&groups).unwrap();
    data_lock.set(data.clone());
    resp_200_Ok_json!(data, raw)
}
