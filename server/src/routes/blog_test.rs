use super::*;

#[test]
fn is_truthy_accepts_one_and_true() {
    assert!(is_truthy(Some("1")));
    assert!(is_truthy(Some("true")));
}

#[test]
fn is_truthy_rejects_everything_else() {
    assert!(!is_truthy(None));
    assert!(!is_truthy(Some("0")));
    assert!(!is_truthy(Some("false")));
    assert!(!is_truthy(Some("yes")));
    assert!(!is_truthy(Some("TRUE")));
}

#[test]
fn blog_params_deserialize_from_query_shape() {
    let params: BlogParams =
        serde_json::from_str(r#"{"limit":6,"flair":"Blog","author":"host","debug":"1"}"#)
            .expect("deserialize");
    assert_eq!(params.limit, Some(6));
    assert_eq!(params.flair.as_deref(), Some("Blog"));
    assert_eq!(params.author.as_deref(), Some("host"));
    assert!(is_truthy(params.debug.as_deref()));
}

#[test]
fn blog_params_all_optional() {
    let params: BlogParams = serde_json::from_str("{}").expect("deserialize");
    assert_eq!(params.limit, None);
    assert!(params.flair.is_none());
    assert!(params.author.is_none());
    assert!(!is_truthy(params.debug.as_deref()));
}
