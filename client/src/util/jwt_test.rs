use super::*;

fn token_with_payload(payload: &str) -> String {
    let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload);
    format!("{header}.{body}.signature")
}

#[test]
fn decode_claims_reads_first_group() {
    let token = token_with_payload(r#"{"user_id":7,"username":"ana","groups":["admin","user"]}"#);
    let claims = decode_claims(&token).unwrap();
    assert_eq!(claims.primary_group(), Some("admin"));
}

#[test]
fn resolve_role_ignores_unexpected_types_in_other_claims() {
    let token = token_with_payload(
        r#"{"username":42,"user_id":"7","exp":"soon","email":null,"groups":["admin"]}"#,
    );
    assert_eq!(resolve_role(Some(&token)), Some("admin".to_owned()));
}

#[test]
fn primary_group_requires_list_with_leading_string() {
    for payload in [
        r#"{"groups":"admin"}"#,
        r#"{"groups":[7,"admin"]}"#,
        r#"{"groups":null}"#,
        r#"{"groups":{"0":"admin"}}"#,
    ] {
        let claims = decode_claims(&token_with_payload(payload)).unwrap();
        assert_eq!(claims.primary_group(), None, "payload {payload}");
    }
}

#[test]
fn decode_claims_accepts_padded_payload() {
    let header = URL_SAFE_NO_PAD.encode("{}");
    let body = base64::engine::general_purpose::URL_SAFE.encode(r#"{"groups":["jefe"]}"#);
    let claims = decode_claims(&format!("{header}.{body}.sig")).unwrap();
    assert_eq!(claims.primary_group(), Some("jefe"));
}

#[test]
fn decode_claims_rejects_token_without_payload() {
    assert!(matches!(decode_claims("no-dots-here"), Err(JwtError::Malformed)));
}

#[test]
fn decode_claims_rejects_invalid_base64() {
    assert!(matches!(decode_claims("a.!!!.c"), Err(JwtError::Base64(_))));
}

#[test]
fn decode_claims_rejects_non_json_payload() {
    let body = URL_SAFE_NO_PAD.encode("not json");
    assert!(matches!(decode_claims(&format!("h.{body}.s")), Err(JwtError::Json(_))));
}

#[test]
fn resolve_role_is_none_without_token() {
    assert_eq!(resolve_role(None), None);
}

#[test]
fn resolve_role_is_none_for_malformed_token() {
    assert_eq!(resolve_role(Some("garbage")), None);
    assert_eq!(resolve_role(Some("a.%%%.c")), None);
    assert_eq!(resolve_role(Some("")), None);
}

#[test]
fn resolve_role_is_first_group() {
    let token = token_with_payload(r#"{"groups":["coordinador","user"]}"#);
    assert_eq!(resolve_role(Some(&token)), Some("coordinador".to_owned()));
}

#[test]
fn resolve_role_is_none_for_empty_or_missing_groups() {
    let empty = token_with_payload(r#"{"groups":[]}"#);
    let missing = token_with_payload(r#"{"username":"ana"}"#);
    assert_eq!(resolve_role(Some(&empty)), None);
    assert_eq!(resolve_role(Some(&missing)), None);
}
