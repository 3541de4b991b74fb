use super::*;

use axum::http::header::SET_COOKIE;

// =============================================================================
// session transport — set and clear cookies carry identical flags
// =============================================================================

#[test]
fn session_cookie_carries_security_flags() {
    let cookie = session_cookie("tok123".into());
    assert_eq!(cookie.name(), "token");
    assert_eq!(cookie.value(), "tok123");
    assert_eq!(cookie.path(), Some("/"));
    assert_eq!(cookie.http_only(), Some(true));
    assert_eq!(cookie.secure(), Some(true));
    assert_eq!(cookie.same_site(), Some(SameSite::Strict));
}

#[test]
fn session_cookie_max_age_matches_token_ttl() {
    let cookie = session_cookie("tok".into());
    assert_eq!(cookie.max_age(), Some(Duration::seconds(TOKEN_TTL_SECS)));
}

#[test]
fn clear_cookie_is_an_expired_empty_cookie() {
    let cookie = clear_cookie();
    assert_eq!(cookie.name(), "token");
    assert_eq!(cookie.value(), "");
    assert_eq!(cookie.max_age(), Some(Duration::ZERO));
}

#[test]
fn clear_cookie_flags_match_session_cookie() {
    let set = session_cookie("tok".into());
    let clear = clear_cookie();
    assert_eq!(set.path(), clear.path());
    assert_eq!(set.http_only(), clear.http_only());
    assert_eq!(set.secure(), clear.secure());
    assert_eq!(set.same_site(), clear.same_site());
}

// =============================================================================
// gate rejections
// =============================================================================

#[test]
fn no_token_rejection_is_401() {
    let resp = AuthRejection::NoToken.into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[test]
fn invalid_token_rejection_is_403_and_clears_cookie() {
    let resp = AuthRejection::InvalidToken.into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let set_cookie = resp.headers().get(SET_COOKIE).unwrap().to_str().unwrap();
    assert!(set_cookie.starts_with("token="));
    assert!(set_cookie.contains("Max-Age=0"));
}

#[test]
fn not_approved_rejection_is_401() {
    let resp = AuthRejection::NotApproved.into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[test]
fn no_token_rejection_does_not_touch_cookies() {
    let resp = AuthRejection::NoToken.into_response();
    assert!(resp.headers().get(SET_COOKIE).is_none());
}

// =============================================================================
// request/response bodies
// =============================================================================

#[test]
fn register_body_requires_all_fields() {
    let missing_img: Result<RegisterBody, _> =
        serde_json::from_str(r#"{"name":"A","email":"a@x.com","password":"p1"}"#);
    assert!(missing_img.is_err());

    let complete: Result<RegisterBody, _> = serde_json::from_str(
        r#"{"name":"A","email":"a@x.com","password":"p1","img_url":"https://example.com/a.png"}"#,
    );
    assert!(complete.is_ok());
}

#[test]
fn login_body_requires_password() {
    let missing: Result<LoginBody, _> = serde_json::from_str(r#"{"email":"a@x.com"}"#);
    assert!(missing.is_err());
}

#[test]
fn user_response_never_contains_the_hash() {
    let record = UserRecord {
        id: Uuid::new_v4(),
        name: "A".into(),
        email: "a@x.com".into(),
        password_hash: "$2b$10$secret-material".into(),
        img_url: "https://example.com/a.png".into(),
        status: ApprovalStatus::Unapproved,
        created_at: "2026-01-01 00:00:00".into(),
    };

    let json = serde_json::to_string(&UserResponse::from(record)).unwrap();
    assert!(!json.contains("password"));
    assert!(!json.contains("secret-material"));
    assert!(json.contains(r#""status":"unapproved""#));
}
