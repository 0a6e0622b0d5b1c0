use super::*;

#[test]
fn http_api_targets_items_endpoint() {
    let api = HttpApi::new(&ClientConfig::default().with_api_base_url("https://shop.example.com/"));
    assert_eq!(api.items_url(), "https://shop.example.com/items");
}

#[test]
fn listing_parts_match_backend_form_fields() {
    assert_eq!(LISTING_PARTS, ["name", "category", "image"]);
}

#[cfg(not(feature = "csr"))]
#[tokio::test]
async fn fetch_items_is_unavailable_natively() {
    let api = HttpApi::new(&ClientConfig::default());
    assert_eq!(api.fetch_items().await, Err(ApiError::Unavailable));
}

#[cfg(not(feature = "csr"))]
#[tokio::test]
async fn post_item_is_unavailable_natively() {
    let api = HttpApi::new(&ClientConfig::default());
    let item = NewItem { name: "Bike".to_owned(), category: String::new(), image: None };
    assert_eq!(api.post_item(&item).await, Err(ApiError::Unavailable));
}
