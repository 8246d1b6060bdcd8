// Route exports
pub mod errors;
pub mod recommend;

pub use errors::{handle_json_payload_error, JsonError};

use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(recommend::welcome))
        // Path the web client posts to
        .route("/recommend", web::post().to(recommend::recommend))
        .service(
            web::scope("/api/v1")
                .configure(recommend::configure),
        );
}
