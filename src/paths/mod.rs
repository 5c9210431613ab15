pub mod sprites;

use actix_web::web::ServiceConfig;

pub fn configure(cfg: &mut ServiceConfig) {
    sprites::configure(cfg);
}
