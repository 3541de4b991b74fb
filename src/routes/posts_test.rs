use super::*;

use uuid::Uuid;

// =============================================================================
// request/response bodies
// =============================================================================

#[test]
fn create_post_body_requires_all_fields() {
    let missing_quota: Result<CreatePostBody, _> =
        serde_json::from_str(r#"{"title":"t","description":"d","price":"10"}"#);
    assert!(missing_quota.is_err());
}

#[test]
fn create_post_body_keeps_price_and_quota_as_strings() {
    let body: CreatePostBody = serde_json::from_str(
        r#"{"title":"t","description":"d","price":"10.50","quota":"3"}"#,
    )
    .unwrap();
    assert_eq!(body.price, "10.50");
    assert_eq!(body.quota, "3");
}

#[test]
fn post_record_serializes_author_snapshot() {
    let author_id = Uuid::new_v4();
    let record = PostRecord {
        id: Uuid::new_v4(),
        title: "t".into(),
        description: "d".into(),
        price: "10".into(),
        quota: "2".into(),
        author_id,
        author: "A".into(),
        status: "active".into(),
        created_at: "2026-01-01 00:00:00".into(),
    };

    let json: serde_json::Value = serde_json::to_value(&record).unwrap();
    assert_eq!(json["author"], "A");
    assert_eq!(json["author_id"], author_id.to_string());
    assert_eq!(json["price"], "10");
    assert_eq!(json["status"], "active");
}

#[test]
fn store_error_is_400_with_fixed_message() {
    let resp = store_error();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
