pub mod get_by_name;
pub mod get_catalog;

use actix_web::web::ServiceConfig;

pub fn configure(cfg: &mut ServiceConfig) {
    cfg.service(get_catalog::get_catalog)
        .service(get_by_name::get_by_name);
}
