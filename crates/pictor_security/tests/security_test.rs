//! Tests for output path confinement and rate limiting.

use pictor_error::PathErrorKind;
use pictor_security::*;
use std::fs;
use std::time::{Duration, Instant};

// ============================================================================
// Path Guard Tests
// ============================================================================

#[test]
fn test_safe_join_accepts_bare_filename() {
    let dir = tempfile::tempdir().unwrap();
    let guard = PathGuard::new(dir.path()).unwrap();

    let path = guard.safe_join("rocket.png").unwrap();
    assert!(path.starts_with(guard.root()));
    assert_eq!(path.file_name().unwrap(), "rocket.png");
}

#[test]
fn test_safe_join_rejects_traversal() {
    let dir = tempfile::tempdir().unwrap();
    let guard = PathGuard::new(dir.path()).unwrap();

    let err = guard.safe_join("../../etc/passwd").unwrap_err();
    assert!(matches!(err.kind(), PathErrorKind::Traversal(_)));
}

#[test]
fn test_safe_join_rejects_separators() {
    let dir = tempfile::tempdir().unwrap();
    let guard = PathGuard::new(dir.path()).unwrap();

    for name in ["nested/image.png", "nested\\image.png", "/abs.png", "..", ""] {
        assert!(guard.safe_join(name).is_err(), "accepted {:?}", name);
    }
}

#[test]
fn test_validate_rejects_outside_path() {
    let dir = tempfile::tempdir().unwrap();
    let outside = tempfile::tempdir().unwrap();
    let stray = outside.path().join("stray.png");
    fs::write(&stray, b"x").unwrap();
    let guard = PathGuard::new(dir.path()).unwrap();

    let err = guard.validate(&stray).unwrap_err();
    assert!(matches!(err.kind(), PathErrorKind::OutsideRoot(_)));
}

#[test]
fn test_validate_rejects_relative_escape() {
    let parent = tempfile::tempdir().unwrap();
    let root = parent.path().join("out");
    fs::write(parent.path().join("secret.txt"), b"x").unwrap();
    let guard = PathGuard::new(&root).unwrap();

    let err = guard.validate("../secret.txt").unwrap_err();
    assert!(matches!(err.kind(), PathErrorKind::OutsideRoot(_)));
}

#[test]
fn test_validate_accepts_existing_file_under_root() {
    let dir = tempfile::tempdir().unwrap();
    let guard = PathGuard::new(dir.path()).unwrap();
    let shot = guard.root().join("screenshot.png");
    fs::write(&shot, b"png").unwrap();

    assert_eq!(guard.validate(&shot).unwrap(), shot);
    assert_eq!(guard.validate("screenshot.png").unwrap(), shot);
}

#[test]
fn test_validate_missing_parent_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let guard = PathGuard::new(dir.path()).unwrap();

    let err = guard.validate("missing/dir/file.png").unwrap_err();
    assert!(matches!(err.kind(), PathErrorKind::NotFound(_)));
}

#[test]
fn test_resolve_output_routes_by_shape() {
    let dir = tempfile::tempdir().unwrap();
    let guard = PathGuard::new(dir.path()).unwrap();
    fs::create_dir(guard.root().join("icons")).unwrap();

    assert!(guard.resolve_output("hero.png").is_ok());
    assert!(guard.resolve_output("icons/app.png").is_ok());
    assert!(guard.resolve_output("../escape.png").is_err());
}

#[test]
fn test_resolve_output_rejects_existing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let guard = PathGuard::new(dir.path()).unwrap();
    fs::create_dir_all(guard.root().join("icons/nested")).unwrap();

    for target in ["icons", "icons/nested"] {
        let err = guard.resolve_output(target).unwrap_err();
        assert!(
            matches!(err.kind(), PathErrorKind::IsDirectory(_)),
            "unexpected error for {}: {:?}",
            target,
            err.kind()
        );
    }
}

#[test]
fn test_new_creates_missing_root() {
    let parent = tempfile::tempdir().unwrap();
    let root = parent.path().join("generated").join("images");
    let guard = PathGuard::new(&root).unwrap();
    assert!(guard.root().is_dir());
}

// ============================================================================
// Rate Limiter Tests
// ============================================================================

#[tokio::test]
async fn test_rate_limit_allows_capacity() {
    let limiter = RateLimiter::new(5);
    let now = Instant::now();

    for _ in 0..5 {
        assert!(limiter.check_at("generate_image", now).await.is_ok());
    }
    assert_eq!(limiter.remaining_at("generate_image", now).await, 0);
}

#[tokio::test]
async fn test_rate_limit_twenty_first_call_fails_then_recovers() {
    let limiter = RateLimiter::default();
    let start = Instant::now();

    for i in 0..20 {
        let at = start + Duration::from_secs(i);
        limiter.check_at("generate_icon", at).await.unwrap();
    }

    let err = limiter
        .check_at("generate_icon", start + Duration::from_secs(30))
        .await
        .unwrap_err();
    assert_eq!(err.tool, "generate_icon");
    assert_eq!(err.capacity, 20);
    assert_eq!(err.window_secs, 60);
    assert_eq!(err.retry_after_secs, 30);

    // The earliest requests have left the window.
    assert!(
        limiter
            .check_at("generate_icon", start + Duration::from_secs(61))
            .await
            .is_ok()
    );
}

#[tokio::test]
async fn test_rate_limit_is_per_tool() {
    let limiter = RateLimiter::new(1);
    let now = Instant::now();

    limiter.check_at("generate_image", now).await.unwrap();
    assert!(limiter.check_at("generate_image", now).await.is_err());
    assert!(limiter.check_at("generate_hero", now).await.is_ok());
}

#[tokio::test]
async fn test_rejected_requests_are_not_recorded() {
    let limiter = RateLimiter::with_window(1, Duration::from_secs(10));
    let start = Instant::now();

    limiter.check_at("beautify_screenshot", start).await.unwrap();
    for s in 1..10 {
        let at = start + Duration::from_secs(s);
        assert!(limiter.check_at("beautify_screenshot", at).await.is_err());
    }
    let later = start + Duration::from_secs(10);
    assert!(limiter.check_at("beautify_screenshot", later).await.is_ok());
}

#[tokio::test]
async fn test_unseen_tool_has_full_capacity() {
    let limiter = RateLimiter::new(7);
    assert_eq!(limiter.remaining("server_info").await, 7);
    assert_eq!(*limiter.capacity(), 7);
}
