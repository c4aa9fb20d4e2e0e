mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use tradelens::config::AppConfig;

use common::{body_json, build_test_app, build_test_app_with, get, post_json};

#[tokio::test]
async fn test_health_check() {
    let resp = get(build_test_app(), "/health").await;

    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp).await;
    assert_eq!(json["status"], "healthy");
}

#[tokio::test]
async fn test_metrics_endpoint() {
    // Record something first so the payload is not empty.
    let app = build_test_app();
    post_json(app.clone(), "/api/analysis/parse", json!({ "text": "bullish" })).await;

    let resp = get(app, "/metrics").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let text = String::from_utf8(body.to_vec()).unwrap();
    assert!(text.contains("analysis_responses_parsed_total"));
}

#[tokio::test]
async fn test_risk_calculation() {
    let resp = post_json(
        build_test_app(),
        "/api/risk",
        json!({
            "entry_price": 100.0,
            "stop_loss_price": 95.0,
            "take_profit_price": 120.0,
            "trading_capital": 10000.0,
            "risk_percentage": 2.0
        }),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp).await;
    assert_eq!(json["success"], true);

    let data = &json["data"];
    assert_eq!(data["metrics"]["risk_reward_ratio"], 4.0);
    assert_eq!(data["metrics"]["position_size"], 40.0);
    assert_eq!(data["metrics"]["potential_profit"], 800.0);
    assert_eq!(data["metrics"]["potential_loss"], 200.0);
    assert_eq!(data["profit_percentage"], 20.0);
    assert_eq!(data["formatted"]["potential_profit"], "$800.00");
    assert_eq!(data["formatted"]["position_size"], "40.00 units");
    assert_eq!(data["formatted"]["profit_percentage"], "20.00%");
}

#[tokio::test]
async fn test_risk_uses_default_risk_percentage() {
    let resp = post_json(
        build_test_app(),
        "/api/risk",
        json!({
            "entry_price": 50.0,
            "stop_loss_price": 40.0,
            "take_profit_price": 70.0,
            "trading_capital": 5000.0
        }),
    )
    .await;

    let json = body_json(resp).await;
    assert_eq!(json["data"]["inputs"]["risk_percentage"], 1.0);
    // 1% of 5000 over a 10.0 gap
    assert_eq!(json["data"]["metrics"]["position_size"], 5.0);
}

#[tokio::test]
async fn test_risk_degenerate_setup_is_zero() {
    let resp = post_json(
        build_test_app(),
        "/api/risk",
        json!({
            "entry_price": 100.0,
            "stop_loss_price": 100.0,
            "take_profit_price": 120.0,
            "trading_capital": 10000.0
        }),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp).await;
    assert_eq!(json["data"]["metrics"]["risk_reward_ratio"], 0.0);
    assert_eq!(json["data"]["metrics"]["position_size"], 0.0);
    assert_eq!(json["data"]["formatted"]["potential_loss"], "$0.00");
}

#[tokio::test]
async fn test_parse_english_response() {
    let resp = post_json(
        build_test_app(),
        "/api/analysis/parse",
        json!({
            "text": "The market is BULLISH.\nTrading recommendation: Buy the dip\nDetails follow.",
            "language": "en"
        }),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp).await;
    let data = &json["data"];
    assert_eq!(data["trend"], "bullish");
    assert_eq!(data["recommendation"], "Buy the dip");
    assert_eq!(data["confidence"], 0.85);
    assert!(data["support_levels"].as_array().unwrap().is_empty());
    assert!(data["detailed_analysis"].as_str().unwrap().starts_with("The market"));
}

#[tokio::test]
async fn test_parse_uses_configured_language() {
    let app = build_test_app_with(AppConfig {
        default_language: tradelens::models::Language::Arabic,
        ..AppConfig::default()
    });

    let resp = post_json(
        app,
        "/api/analysis/parse",
        json!({ "text": "الاتجاه هابط\nالتوصية: بيع" }),
    )
    .await;

    let json = body_json(resp).await;
    assert_eq!(json["data"]["trend"], "bearish");
    assert_eq!(json["data"]["recommendation"], "بيع");
}

#[tokio::test]
async fn test_parse_empty_text() {
    let resp = post_json(build_test_app(), "/api/analysis/parse", json!({ "text": "" })).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp).await;
    assert_eq!(json["data"]["trend"], "sideways");
    assert_eq!(json["data"]["recommendation"], "");
    assert_eq!(json["data"]["detailed_analysis"], "");
}

#[tokio::test]
async fn test_unknown_language_is_bad_request() {
    let resp = post_json(
        build_test_app(),
        "/api/analysis/parse",
        json!({ "text": "bullish", "language": "fr" }),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let json = body_json(resp).await;
    assert_eq!(json["success"], false);
    assert!(json["error"].as_str().unwrap().contains("fr"));
}

#[tokio::test]
async fn test_build_prompt() {
    let resp = post_json(
        build_test_app(),
        "/api/analysis/prompt",
        json!({ "level": "intermediate", "language": "ar" }),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp).await;
    assert_eq!(json["data"]["level"], "intermediate");
    assert_eq!(json["data"]["language"], "ar");
    let prompt = json["data"]["prompt"].as_str().unwrap();
    assert!(prompt.starts_with("Analyze this trading chart image"));
    assert!(prompt.contains("الدعم/المقاومة"));
}

#[tokio::test]
async fn test_unknown_level_is_bad_request() {
    let resp = post_json(
        build_test_app(),
        "/api/analysis/prompt",
        json!({ "level": "expert" }),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_config_and_languages() {
    let app = build_test_app();

    let json = body_json(get(app.clone(), "/api/config").await).await;
    assert_eq!(json["data"]["default_language"], "en");
    assert_eq!(json["data"]["currency_symbol"], "$");

    let json = body_json(get(app, "/api/languages").await).await;
    let languages = json["data"].as_array().unwrap();
    assert_eq!(languages.len(), 2);
    assert_eq!(languages[1]["code"], "ar");
    assert_eq!(languages[1]["rtl"], true);
}

#[tokio::test]
async fn test_auth_required_when_token_set() {
    let app = build_test_app_with(AppConfig {
        api_token: Some("secret".into()),
        ..AppConfig::default()
    });

    // public route stays open
    let resp = get(app.clone(), "/health").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = get(app.clone(), "/api/config").await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/config")
                .header("authorization", "Bearer wrong")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let resp = app
        .oneshot(
            Request::builder()
                .uri("/api/config")
                .header("authorization", "Bearer secret")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}
