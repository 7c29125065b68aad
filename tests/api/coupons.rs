use wiremock::{
    Mock, ResponseTemplate,
    matchers::{any, method, path},
};

use crate::helpers::{generation_reply, spawn_app};

#[tokio::test]
async fn signup_returns_200_for_valid_form_data() {
    let app = spawn_app().await;
    let body = "name=le%20guin&email=ursula_le_guin%40gmail.com";

    Mock::given(path("/v1beta/models/gemini-3-flash-preview:generateContent"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(generation_reply()))
        .expect(1)
        .mount(&app.ai_server)
        .await;

    let response = app.post_signup(body.into()).await;

    assert_eq!(200, response.status().as_u16());
}

#[tokio::test]
async fn signup_shows_the_issued_coupon() {
    let app = spawn_app().await;
    let body = "name=le%20guin&email=ursula_le_guin%40gmail.com";

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_json(generation_reply()))
        .mount(&app.ai_server)
        .await;

    let page = app.post_signup(body.into()).await.text().await.unwrap();

    assert!(page.contains(r#"data-state="success""#));
    assert!(page.contains("쿠폰 발급 성공!"));
    assert!(page.contains("le guin"));
    assert!(page.contains("K7P2Q9R4"));
    assert!(page.contains("2026.09.23"));
    assert!(page.contains("가입을 진심으로 환영합니다"));
    assert!(page.contains("코드 복사하기"));
    assert!(page.contains("코드가 복사되었습니다!"));
}

#[tokio::test]
async fn signup_calls_the_generation_api_exactly_once() {
    let app = spawn_app().await;
    let body = "name=le%20guin&email=ursula_le_guin%40gmail.com";

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(generation_reply()))
        .expect(1)
        .mount(&app.ai_server)
        .await;

    app.post_signup(body.into()).await;
}

#[tokio::test]
async fn signup_returns_400_when_data_is_missing() {
    let app = spawn_app().await;

    let test_cases = vec![
        ("name=le%20guin", "missing the email"),
        ("email=ursula_le_guin%40gmail.com", "missing the name"),
        ("", "missing both name and email"),
    ];

    for (body, err_message) in test_cases {
        let response = app.post_signup(body.into()).await;

        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with 400 Bad Request when the payload was {}.",
            err_message
        );
    }
}

#[tokio::test]
async fn signup_returns_400_when_fields_are_present_but_invalid() {
    let app = spawn_app().await;
    let test_cases = vec![
        ("name=&email=ursula_le_guin%40gmail.com", "empty name"),
        (
            "name=%20%20&email=ursula_le_guin%40gmail.com",
            "whitespace-only name",
        ),
        ("name=Ursula&email=", "empty email"),
        ("name=Ursula&email=definitely-not-an-email", "invalid email"),
    ];

    for (body, description) in test_cases {
        let response = app.post_signup(body.into()).await;

        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not return a 400 Bad Request when the payload was {}.",
            description
        )
    }
}

#[tokio::test]
async fn signup_does_not_call_the_generation_api_when_validation_fails() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_json(generation_reply()))
        .expect(0)
        .mount(&app.ai_server)
        .await;

    app.post_signup("name=&email=".into()).await;
}

#[tokio::test]
async fn signup_shows_the_error_page_when_the_generation_api_is_down() {
    let app = spawn_app().await;
    let body = "name=le%20guin&email=ursula_le_guin%40gmail.com";

    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&app.ai_server)
        .await;

    let response = app.post_signup(body.into()).await;

    assert_eq!(500, response.status().as_u16());
    let page = response.text().await.unwrap();
    assert!(page.contains(r#"data-state="error""#));
    assert!(page.contains("문제가 발생했습니다"));
    assert!(page.contains("쿠폰을 생성하는 중 오류가 발생했습니다. 잠시 후 다시 시도해주세요."));
    assert!(page.contains("다시 시도하기"));
}

#[tokio::test]
async fn signup_shows_the_error_page_when_the_reply_is_not_a_coupon() {
    let app = spawn_app().await;
    let body = "name=le%20guin&email=ursula_le_guin%40gmail.com";

    let reply = serde_json::json!({
        "candidates": [{
            "content": {
                "parts": [{ "text": "이건 쿠폰이 아닙니다." }]
            }
        }]
    });
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_json(reply))
        .expect(1)
        .mount(&app.ai_server)
        .await;

    let response = app.post_signup(body.into()).await;

    assert_eq!(500, response.status().as_u16());
    let page = response.text().await.unwrap();
    assert!(page.contains("문제가 발생했습니다"));
}
