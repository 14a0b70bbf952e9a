use metagen_core::{ChatCompletionsGenerator, MetagenError, Provider, TextGenerator};
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_partial_json, header, method, path},
};

fn generator(server: &MockServer) -> ChatCompletionsGenerator {
    ChatCompletionsGenerator::new(reqwest::Client::new(), Provider::Gemini, "g-key")
        .with_api_url(format!("{}/chat/completions", server.uri()))
}

#[tokio::test]
async fn posts_prompt_and_returns_message_content() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("Authorization", "Bearer g-key"))
        .and(body_partial_json(json!({
            "model": "gemini-2.0-flash",
            "messages": [{ "role": "user", "content": "write me a title" }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{
                "message": { "role": "assistant", "content": "  Title: Hello\n" }
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let text = generator(&server).generate("write me a title").await.unwrap();
    assert_eq!(text, "Title: Hello");
}

#[tokio::test]
async fn model_override_is_sent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({ "model": "gemini-1.5-pro" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{ "message": { "content": "ok" } }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let generator = generator(&server).with_model("gemini-1.5-pro");
    assert_eq!(generator.model(), "gemini-1.5-pro");
    assert_eq!(generator.generate("p").await.unwrap(), "ok");
}

#[tokio::test]
async fn error_status_is_a_generation_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429).set_body_string("quota exceeded"))
        .mount(&server)
        .await;

    let err = generator(&server).generate("p").await.unwrap_err();
    match err {
        MetagenError::GenerationFailed { reason } => {
            assert!(reason.contains("429"));
            assert!(reason.contains("quota exceeded"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn missing_content_is_a_generation_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
        .mount(&server)
        .await;

    let err = generator(&server).generate("p").await.unwrap_err();
    assert!(matches!(err, MetagenError::GenerationFailed { .. }));
}

#[tokio::test]
async fn blank_content_is_returned_empty() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{ "message": { "content": "   " } }]
        })))
        .mount(&server)
        .await;

    let reply = generator(&server).generate("p").await.unwrap();
    assert_eq!(reply, "");
}
