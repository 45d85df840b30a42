use actix_web::{get, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{
        request::{ChatRequestDto, ResetRequestDto},
        response::{ChatResponseDto, ResetResponseDto},
    },
    services::chat_service::DEFAULT_CONVERSATION_ID,
};

#[post("/api/chat")]
async fn chat(
    state: web::Data<AppState>,
    request: web::Json<ChatRequestDto>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();

    let message = request
        .message
        .as_deref()
        .map(str::trim)
        .filter(|message| !message.is_empty())
        .ok_or_else(|| AppError::ValidationError("Message is required".to_string()))?;
    let conversation_id = request
        .conversation_id
        .unwrap_or_else(|| DEFAULT_CONVERSATION_ID.to_string());

    let turn = state
        .chat_service
        .send_message(&conversation_id, message)
        .await?;

    Ok(HttpResponse::Ok().json(ChatResponseDto {
        response: turn.response,
        history: turn.history,
        conversation_id,
    }))
}

#[post("/api/reset")]
async fn reset(
    state: web::Data<AppState>,
    request: Option<web::Json<ResetRequestDto>>,
) -> Result<HttpResponse, AppError> {
    let conversation_id = request
        .and_then(|body| body.into_inner().conversation_id)
        .unwrap_or_else(|| DEFAULT_CONVERSATION_ID.to_string());

    state.chat_service.reset(&conversation_id).await;

    Ok(HttpResponse::Ok().json(ResetResponseDto::success()))
}

#[get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use actix_web::{test, App};

    use crate::{
        config::Config,
        services::model_service::MockCompletionClient,
        test_utils::test_helpers,
    };

    fn scripted_state(reply: &str) -> AppState {
        let reply = reply.to_string();
        let mut mock = MockCompletionClient::new();
        mock.expect_complete()
            .returning(move |_| Ok(reply.clone()));
        AppState::with_completion_client(Config::test_config(), Arc::new(mock))
    }

    #[actix_web::test]
    async fn test_health_check() {
        let app = test::init_service(App::new().service(health_check)).await;

        let req = test::TestRequest::get().uri("/health").to_request();

        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
    }

    #[actix_web::test]
    async fn chat_without_message_is_a_validation_error() {
        let state = scripted_state("unused");
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(chat),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/chat")
            .set_json(serde_json::json!({}))
            .to_request();

        let resp = test::call_service(&app, req).await;
        test_helpers::assert_error_status(resp.status());

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], "VALIDATION_ERROR");
    }

    #[actix_web::test]
    async fn chat_returns_reply_and_history() {
        let state = scripted_state("the reply");
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(chat),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/chat")
            .set_json(serde_json::json!({"message": "a question"}))
            .to_request();

        let resp = test::call_service(&app, req).await;
        test_helpers::assert_success_status(resp.status());

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["response"], "the reply");
        assert_eq!(body["conversation_id"], DEFAULT_CONVERSATION_ID);
        assert_eq!(body["history"].as_array().unwrap().len(), 2);
    }

    #[actix_web::test]
    async fn reset_accepts_an_empty_body() {
        let state = scripted_state("unused");
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(reset),
        )
        .await;

        let req = test::TestRequest::post().uri("/api/reset").to_request();

        let resp = test::call_service(&app, req).await;
        test_helpers::assert_success_status(resp.status());

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "success");
    }
}
