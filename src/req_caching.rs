use actix_web::{http::StatusCode, Either, HttpResponse, ResponseError};
use serde::de::DeserializeOwned;

use crate::{
    cache::{RefVal, CACHE},
    errors::{EmptyError, JsonError},
    IS_DEBUG_ON,
};

/// Fetches `url` and decodes the response as `T`, memoized by url. Both
/// transport and decode failures go through `on_error`; nothing is cached on
/// failure, so a later request retries the fetch.
pub async fn get_json<T, E>(
    req_client: &reqwest::Client,
    url: &str,
    on_error: impl Fn(reqwest::Error) -> E,
) -> Result<RefVal<T>, E>
where
    T: DeserializeOwned + Send + Sync + 'static,
{
    let entry = CACHE.entry::<T>(url.to_string()).await;
    let mut write_lock = match entry.get_or_write_lock().await {
        Either::Left(data) => return Ok(data),
        Either::Right(write_lock) => write_lock,
    };

    let response = req_client.get(url).send().await;
    match response.and_then(reqwest::Response::error_for_status) {
        Ok(res) => match res.json::<T>().await {
            Ok(data) => {
                write_lock.set(data);
                Ok(RefVal(write_lock.downgrade()))
            }
            Err(e) => Err((on_error)(e)),
        },
        Err(e) => Err((on_error)(e)),
    }
}

pub fn response_from_error(error: String, status_code: StatusCode) -> HttpResponse {
    if *IS_DEBUG_ON {
        JsonError::new(error, status_code).error_response()
    } else {
        EmptyError::new(status_code).error_response()
    }
}
