pub mod handlers;

use actix_web::http::Method;
use actix_web::middleware::DefaultHeaders;
use actix_web::{web, HttpResponse};

pub const CORS_ALLOW_ORIGIN: (&str, &str) = ("Access-Control-Allow-Origin", "*");
pub const CORS_ALLOW_HEADERS: (&str, &str) = (
    "Access-Control-Allow-Headers",
    "authorization, x-client-info, apikey, content-type",
);

/// Permissive cross-origin headers attached to every response.
pub fn cors_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add(CORS_ALLOW_ORIGIN)
        .add(CORS_ALLOW_HEADERS)
}

/// Pre-flight requests get an empty success body.
async fn preflight() -> HttpResponse {
    HttpResponse::Ok().finish()
}

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/generate-image")
            .route(web::post().to(handlers::generate_image))
            .route(web::method(Method::OPTIONS).to(preflight)),
    )
    .service(
        web::resource("/edit-image")
            .route(web::post().to(handlers::edit_image))
            .route(web::method(Method::OPTIONS).to(preflight)),
    )
    .service(
        web::resource("/enhance-prompt")
            .route(web::post().to(handlers::enhance_prompt))
            .route(web::method(Method::OPTIONS).to(preflight)),
    )
    .service(
        web::resource("/image-to-prompt")
            .route(web::post().to(handlers::image_to_prompt))
            .route(web::method(Method::OPTIONS).to(preflight)),
    )
    .service(
        web::resource("/remix-images")
            .route(web::post().to(handlers::remix_images))
            .route(web::method(Method::OPTIONS).to(preflight)),
    )
    .service(
        web::resource("/chat")
            .route(web::post().to(handlers::chat))
            .route(web::method(Method::OPTIONS).to(preflight)),
    );
}
