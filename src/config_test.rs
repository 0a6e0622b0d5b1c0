use super::*;

#[test]
fn default_points_at_local_backend() {
    let cfg = ClientConfig::default();
    assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
    assert_eq!(cfg.validation, ValidationMode::FieldValue);
    assert_eq!(cfg.items_endpoint(), "http://localhost:9000/items");
}

#[test]
fn image_url_appends_image_name() {
    let cfg = ClientConfig::default();
    assert_eq!(cfg.image_url("abc123.jpg"), "http://localhost:9000/image/abc123.jpg");
}

#[test]
fn image_url_joins_with_single_slash() {
    let cfg = ClientConfig::default().with_image_base_url("https://cdn.example.com/images/");
    assert_eq!(cfg.image_url("/a.jpg"), "https://cdn.example.com/images/a.jpg");
    assert_eq!(cfg.image_url("b.jpg"), "https://cdn.example.com/images/b.jpg");
}

#[test]
fn api_base_url_trailing_slash_is_trimmed() {
    let cfg = ClientConfig::default().with_api_base_url("https://api.example.com/");
    assert_eq!(cfg.api_base_url, "https://api.example.com");
    assert_eq!(cfg.items_endpoint(), "https://api.example.com/items");
}

#[test]
fn items_endpoint_tolerates_directly_assigned_slash() {
    let cfg = ClientConfig { api_base_url: "http://h:1/".to_owned(), ..ClientConfig::default() };
    assert_eq!(cfg.items_endpoint(), "http://h:1/items");
}

#[test]
fn with_validation_overrides_mode() {
    let cfg = ClientConfig::default().with_validation(ValidationMode::FieldKey);
    assert_eq!(cfg.validation, ValidationMode::FieldKey);
}
