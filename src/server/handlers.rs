use crate::{
    error::GatewayError,
    gateway::GatewayClient,
    models::{
        ChatRequest, EditImageRequest, EnhancePromptRequest, GenerateImageRequest,
        PromptPackRequest, RemixImagesRequest,
    },
};
use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

/// Maps a pipeline failure onto the external contract. Validation messages
/// are surfaced verbatim with a 400; anything else gets the endpoint's
/// generic message while the detail stays in the server logs.
fn error_response(err: &GatewayError, generic_message: &str) -> HttpResponse {
    match err {
        GatewayError::ValidationError(msg) => {
            HttpResponse::BadRequest().json(json!({ "error": msg }))
        }
        GatewayError::RateLimited(_) => HttpResponse::TooManyRequests().json(json!({
            "error": "Rate limit exceeded. Please try again later."
        })),
        GatewayError::QuotaExhausted(_) => HttpResponse::PaymentRequired().json(json!({
            "error": "AI credits exhausted. Please add credits to continue."
        })),
        other => {
            log::error!("Request failed: {}", other);
            HttpResponse::InternalServerError().json(json!({ "error": generic_message }))
        }
    }
}

pub async fn generate_image(
    client: web::Data<GatewayClient>,
    request: web::Json<GenerateImageRequest>,
) -> impl Responder {
    match client.image().generate(request.into_inner()).await {
        Ok(result) => HttpResponse::Ok().json(json!({ "imageUrl": result.image_url })),
        Err(e) => error_response(&e, "Failed to generate image"),
    }
}

pub async fn edit_image(
    client: web::Data<GatewayClient>,
    request: web::Json<EditImageRequest>,
) -> impl Responder {
    match client.image().edit(request.into_inner()).await {
        Ok(result) => HttpResponse::Ok().json(json!({ "imageUrl": result.image_url })),
        Err(e) => error_response(&e, "Failed to edit image. Please try again."),
    }
}

pub async fn enhance_prompt(
    client: web::Data<GatewayClient>,
    request: web::Json<EnhancePromptRequest>,
) -> impl Responder {
    match client.text().enhance(request.into_inner()).await {
        Ok(result) => {
            HttpResponse::Ok().json(json!({ "enhancedPrompt": result.enhanced_prompt }))
        }
        Err(e) => error_response(&e, "Failed to enhance prompt. Please try again."),
    }
}

pub async fn image_to_prompt(
    client: web::Data<GatewayClient>,
    request: web::Json<PromptPackRequest>,
) -> impl Responder {
    match client.text().prompt_pack(request.into_inner()).await {
        Ok(pack) => HttpResponse::Ok().json(json!({ "prompts": pack })),
        Err(e) => error_response(&e, "Failed to generate prompts"),
    }
}

pub async fn remix_images(
    client: web::Data<GatewayClient>,
    request: web::Json<RemixImagesRequest>,
) -> impl Responder {
    match client.image().remix(request.into_inner()).await {
        Ok(result) => HttpResponse::Ok().json(json!({ "imageUrl": result.image_url })),
        Err(e) => error_response(&e, "Failed to remix images"),
    }
}

pub async fn chat(
    client: web::Data<GatewayClient>,
    request: web::Json<ChatRequest>,
) -> impl Responder {
    match client.text().chat(request.into_inner()).await {
        Ok(reply) => HttpResponse::Ok().json(json!({ "message": reply.message })),
        Err(e) => error_response(&e, "Failed to process chat request"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GatewayConfig;
    use crate::server;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};

    fn offline_gateway() -> web::Data<GatewayClient> {
        // Unroutable base URL so no test can reach a real provider.
        web::Data::new(GatewayClient::new(
            GatewayConfig::new()
                .with_base_url("http://127.0.0.1:1")
                .with_api_key("key-test"),
        ))
    }

    macro_rules! test_app {
        () => {
            test::init_service(
                App::new()
                    .app_data(offline_gateway())
                    .wrap(server::cors_headers())
                    .configure(server::routes),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn preflight_returns_an_empty_success_with_cors_headers() {
        let app = test_app!();
        let request = test::TestRequest::with_uri("/generate-image")
            .method(actix_web::http::Method::OPTIONS)
            .to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get("Access-Control-Allow-Origin")
                .unwrap(),
            "*"
        );
        let body = test::read_body(response).await;
        assert!(body.is_empty());
    }

    #[actix_web::test]
    async fn overlong_prompt_is_rejected_with_400_and_a_verbatim_message() {
        let app = test_app!();
        let request = test::TestRequest::post()
            .uri("/edit-image")
            .set_json(json!({
                "prompt": "x".repeat(crate::validate::MAX_PROMPT_CHARS + 1),
                "imageBase64": "aGVsbG8="
            }))
            .to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(response).await;
        assert!(body["error"]
            .as_str()
            .unwrap()
            .contains("maximum length"));
    }

    #[actix_web::test]
    async fn empty_remix_list_is_rejected() {
        let app = test_app!();
        let request = test::TestRequest::post()
            .uri("/remix-images")
            .set_json(json!({ "images": [] }))
            .to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(response).await;
        assert!(body["error"]
            .as_str()
            .unwrap()
            .contains("At least one image"));
    }

    #[actix_web::test]
    async fn five_remix_images_exceed_the_maximum() {
        let app = test_app!();
        let images: Vec<String> = (0..5).map(|i| format!("https://img/{}", i)).collect();
        let request = test::TestRequest::post()
            .uri("/remix-images")
            .set_json(json!({ "images": images }))
            .to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(response).await;
        assert!(body["error"].as_str().unwrap().contains("Maximum 4"));
    }

    #[actix_web::test]
    async fn unknown_enhance_purpose_is_rejected() {
        let app = test_app!();
        let request = test::TestRequest::post()
            .uri("/enhance-prompt")
            .set_json(json!({ "prompt": "a cat in space", "type": "remix" }))
            .to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(response).await;
        assert_eq!(body["error"], "Invalid type parameter");
    }

    #[actix_web::test]
    async fn rate_limit_and_quota_map_to_their_status_codes() {
        let rate = error_response(&GatewayError::RateLimited("status 429".into()), "generic");
        assert_eq!(rate.status(), StatusCode::TOO_MANY_REQUESTS);

        let quota = error_response(&GatewayError::QuotaExhausted("status 402".into()), "generic");
        assert_eq!(quota.status(), StatusCode::PAYMENT_REQUIRED);
    }

    #[actix_web::test]
    async fn missing_credentials_surface_the_generic_error() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(GatewayClient::new(
                    GatewayConfig::new().with_base_url("http://127.0.0.1:1"),
                )))
                .wrap(server::cors_headers())
                .configure(server::routes),
        )
        .await;

        let request = test::TestRequest::post()
            .uri("/generate-image")
            .set_json(json!({ "prompt": "a lighthouse at dusk" }))
            .to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: serde_json::Value = test::read_body_json(response).await;
        assert_eq!(body["error"], "Failed to generate image");
    }
}
