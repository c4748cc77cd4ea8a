//! End-to-end tests for the image generation tools.

mod common;

use common::{fixture, png_mock};
use pictor_core::{BackgroundMode, ImageSize, ImageStyle, OutputFormat};
use pictor_mcp::IconTheme;
use pictor_models::MockImageProvider;
use serde_json::json;
use std::sync::Arc;

#[tokio::test]
async fn test_generate_icon_end_to_end() {
    let mock = png_mock();
    let fx = fixture(Arc::new(mock.clone()), 20);

    let result = fx
        .dispatcher
        .dispatch(
            "generate_icon",
            json!({"concept": "a rocket", "theme": "minimal", "size": "512x512"}),
        )
        .await
        .unwrap();

    assert_eq!(result["ok"], true, "unexpected result: {}", result);
    assert_eq!(result["mime_type"], "image/png");
    assert_eq!(result["width"], 512);
    assert_eq!(result["height"], 512);

    let file_path = result["file_path"].as_str().unwrap();
    assert!(file_path.starts_with("generated"));
    assert!(file_path.ends_with(".png"));
    let saved = fx.root().join(file_path);
    assert!(saved.is_file());
    assert!(saved.starts_with(fx.output_dir()));
    assert_eq!(&std::fs::read(&saved).unwrap()[1..4], b"PNG");

    let requests = mock.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(*requests[0].style(), ImageStyle::Minimal);
    assert_eq!(*requests[0].background(), BackgroundMode::Transparent);
    assert!(requests[0].prompt().contains("a rocket"));
}

#[tokio::test]
async fn test_generate_icon_accepts_concept_near_limit() {
    let mock = png_mock();
    let fx = fixture(Arc::new(mock.clone()), 20);
    let concept = "x".repeat(1950);

    let result = fx
        .dispatcher
        .dispatch("generate_icon", json!({"concept": &concept}))
        .await
        .unwrap();

    assert_eq!(result["ok"], true, "unexpected result: {}", result);
    let request = &mock.requests()[0];
    assert_eq!(request.prompt(), &concept);
    assert!(
        request
            .detail()
            .as_deref()
            .unwrap()
            .contains(IconTheme::Minimal.phrase())
    );

    let too_long = fx
        .dispatcher
        .dispatch("generate_icon", json!({"concept": "x".repeat(2001)}))
        .await
        .unwrap();
    assert_eq!(too_long["ok"], false);
    assert!(too_long["error"].as_str().unwrap().contains("concept"));
    assert_eq!(mock.call_count(), 1);
}

#[tokio::test]
async fn test_generate_image_accepts_prompt_at_limit_with_style() {
    let mock = png_mock();
    let fx = fixture(Arc::new(mock.clone()), 20);

    let result = fx
        .dispatcher
        .dispatch(
            "generate_image",
            json!({"prompt": "y".repeat(2000), "style": "3d", "background": "gradient"}),
        )
        .await
        .unwrap();

    assert_eq!(result["ok"], true, "unexpected result: {}", result);
    assert_eq!(mock.call_count(), 1);
}

#[tokio::test]
async fn test_generate_icon_playful_uses_flat_style() {
    let mock = png_mock();
    let fx = fixture(Arc::new(mock.clone()), 20);

    let result = fx
        .dispatcher
        .dispatch("generate_icon", json!({"concept": "a cat", "theme": "playful"}))
        .await
        .unwrap();

    assert_eq!(result["ok"], true);
    assert_eq!(result["width"], 512);
    assert_eq!(*mock.requests()[0].style(), ImageStyle::Flat);
}

#[tokio::test]
async fn test_generate_image_defaults_and_output_path() {
    let mock = png_mock();
    let fx = fixture(Arc::new(mock.clone()), 20);

    let result = fx
        .dispatcher
        .dispatch(
            "generate_image",
            json!({"prompt": "a lighthouse at dusk", "output_format": "webp", "output_path": "lighthouse.webp"}),
        )
        .await
        .unwrap();

    assert_eq!(result["ok"], true, "unexpected result: {}", result);
    assert_eq!(result["mime_type"], "image/webp");
    assert_eq!(result["width"], 1024);
    assert!(fx.output_dir().join("lighthouse.webp").is_file());

    let request = &mock.requests()[0];
    assert_eq!(*request.style(), ImageStyle::Illustration);
    assert_eq!(*request.size(), ImageSize::new(1024, 1024));
    assert_eq!(*request.output_format(), OutputFormat::Webp);
}

#[tokio::test]
async fn test_output_path_traversal_rejected_before_provider_call() {
    let mock = png_mock();
    let fx = fixture(Arc::new(mock.clone()), 20);

    let result = fx
        .dispatcher
        .dispatch(
            "generate_image",
            json!({"prompt": "a cat", "output_path": "../../escape.png"}),
        )
        .await
        .unwrap();

    assert_eq!(result["ok"], false);
    assert!(result["error"].as_str().unwrap().starts_with("Path error"));
    assert_eq!(mock.call_count(), 0);
    assert!(!fx.root().join("escape.png").exists());
}

#[tokio::test]
async fn test_output_path_directory_rejected_before_provider_call() {
    let mock = png_mock();
    let fx = fixture(Arc::new(mock.clone()), 20);
    std::fs::create_dir(fx.output_dir().join("icons")).unwrap();

    let result = fx
        .dispatcher
        .dispatch(
            "generate_image",
            json!({"prompt": "a cat", "output_path": "icons"}),
        )
        .await
        .unwrap();

    assert_eq!(result["ok"], false);
    assert!(result["error"].as_str().unwrap().contains("is a directory"));
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn test_invalid_arguments_never_reach_provider() {
    let mock = png_mock();
    let fx = fixture(Arc::new(mock.clone()), 20);

    let cases = [
        ("generate_image", json!({})),
        ("generate_image", json!({"prompt": "   "})),
        ("generate_image", json!({"prompt": "x".repeat(2001)})),
        ("generate_image", json!({"prompt": "a cat", "size": "999x999"})),
        ("generate_image", json!({"prompt": "a cat", "style": "cubist"})),
        ("generate_icon", json!({"concept": "a cat", "size": "1024x1024"})),
        ("generate_hero", json!({"product_name": "Acme"})),
        ("generate_hero", json!({"product_name": "Acme", "tagline": "x".repeat(501)})),
    ];

    for (tool, args) in cases {
        let result = fx.dispatcher.dispatch(tool, args.clone()).await.unwrap();
        assert_eq!(result["ok"], false, "{} accepted {}", tool, args);
        assert!(
            result["error"]
                .as_str()
                .unwrap()
                .starts_with("Invalid arguments"),
            "unexpected error for {}: {}",
            tool,
            result
        );
    }
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn test_unconfigured_provider_reports_configuration_error() {
    let fx = fixture(Arc::new(MockImageProvider::unconfigured()), 20);

    let result = fx
        .dispatcher
        .dispatch("generate_image", json!({"prompt": "a cat"}))
        .await
        .unwrap();

    assert_eq!(result["ok"], false);
    assert!(result["error"].as_str().unwrap().starts_with("Not configured"));
}

#[tokio::test]
async fn test_hero_unconfigured_returns_suggested_prompt() {
    let mock = MockImageProvider::unconfigured();
    let fx = fixture(Arc::new(mock.clone()), 20);

    let result = fx
        .dispatcher
        .dispatch(
            "generate_hero",
            json!({"product_name": "Acme", "tagline": "Ship faster", "vibe": "bold"}),
        )
        .await
        .unwrap();

    assert_eq!(result["ok"], false);
    let suggested = result["suggested_prompt"].as_str().unwrap();
    assert!(suggested.contains("Acme"));
    assert!(suggested.contains("Ship faster"));
    assert!(result["message"].as_str().unwrap().contains("GEMINI_API_KEY"));
    assert!(result.get("error").is_none());
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn test_hero_configured_generates_wide_photo() {
    let mock = png_mock();
    let fx = fixture(Arc::new(mock.clone()), 20);

    let result = fx
        .dispatcher
        .dispatch(
            "generate_hero",
            json!({"product_name": "Acme", "tagline": "Ship faster"}),
        )
        .await
        .unwrap();

    assert_eq!(result["ok"], true, "unexpected result: {}", result);
    assert_eq!(result["width"], 1536);
    assert_eq!(result["height"], 1024);

    let request = &mock.requests()[0];
    assert_eq!(*request.style(), ImageStyle::Photo);
    assert_eq!(*request.background(), BackgroundMode::Gradient);
}

#[tokio::test]
async fn test_url_payload_fetch_failure_reported() {
    let mock = MockImageProvider::responding(pictor_core::ImagePayload::Url(
        "http://127.0.0.1:9/image.png".to_string(),
    ));
    let fx = fixture(Arc::new(mock), 20);

    let result = fx
        .dispatcher
        .dispatch("generate_image", json!({"prompt": "a cat"}))
        .await
        .unwrap();

    assert_eq!(result["ok"], false);
    assert!(result["error"].as_str().unwrap().starts_with("Provider error"));
    let leftovers = std::fs::read_dir(fx.output_dir()).unwrap().count();
    assert_eq!(leftovers, 0);
}
