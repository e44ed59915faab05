mod common;

use axum_test::TestServer;
use serde_json::Value;

fn make_server() -> TestServer {
    let state = common::create_test_state(&std::env::temp_dir());
    TestServer::new(common::test_router(state)).unwrap()
}

// ─── USERS ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_users_default_count() {
    let server = make_server();

    let response = server.get("/mock/users").await;

    response.assert_status_ok();
    let users = response.json::<Vec<Value>>();
    assert_eq!(users.len(), 10);
}

#[tokio::test]
async fn test_users_count_is_clamped() {
    let server = make_server();

    let low = server.get("/mock/users?count=0").await.json::<Vec<Value>>();
    assert_eq!(low.len(), 1);

    let negative = server.get("/mock/users?count=-50").await.json::<Vec<Value>>();
    assert_eq!(negative.len(), 1);

    let high = server.get("/mock/users?count=5000").await.json::<Vec<Value>>();
    assert_eq!(high.len(), 1000);
}

#[tokio::test]
async fn test_users_shape_is_camel_case() {
    let server = make_server();

    let users = server
        .get("/mock/users?count=1&seed=1")
        .await
        .json::<Vec<Value>>();
    let user = &users[0];

    for field in ["id", "firstName", "lastName", "email", "phone", "birthDate"] {
        assert!(user[field].is_string(), "missing {field}");
    }
    for field in ["street", "city", "state", "postalCode", "country"] {
        assert!(user["address"][field].is_string(), "missing address.{field}");
    }
    assert!(user["email"].as_str().unwrap().contains('@'));
}

#[tokio::test]
async fn test_users_same_seed_same_records() {
    let server = make_server();

    let first = server
        .get("/mock/users?count=5&seed=42")
        .await
        .json::<Vec<Value>>();
    let second = server
        .get("/mock/users?count=5&seed=42")
        .await
        .json::<Vec<Value>>();

    // Birth dates move with the clock; every other field must match.
    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a["id"], b["id"]);
        assert_eq!(a["firstName"], b["firstName"]);
        assert_eq!(a["email"], b["email"]);
        assert_eq!(a["address"], b["address"]);
    }
}

#[tokio::test]
async fn test_users_invalid_count_is_rejected() {
    let server = make_server();

    let response = server.get("/mock/users?count=many").await;

    response.assert_status_bad_request();
}

// ─── PRODUCTS ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_products_shape() {
    let server = make_server();

    let products = server
        .get("/mock/products?count=20&seed=3")
        .await
        .json::<Vec<Value>>();
    assert_eq!(products.len(), 20);

    for product in &products {
        let sku = product["sku"].as_str().unwrap();
        assert_eq!(sku.len(), 13);
        assert!(sku.chars().all(|c| c.is_ascii_digit()));

        let price = product["price"].as_f64().unwrap();
        assert!((1.0..=999.0).contains(&price));

        for field in ["id", "name", "category", "description", "color"] {
            assert!(product[field].is_string(), "missing {field}");
        }
    }
}

/// Every `"price":` literal in the raw body has exactly two fractional digits.
#[tokio::test]
async fn test_product_prices_keep_two_decimals_on_the_wire() {
    let server = make_server();

    let body = server.get("/mock/products?count=1000&seed=11").await.text();

    let prices: Vec<&str> = body
        .split("\"price\":")
        .skip(1)
        .map(|rest| {
            let end = rest.find([',', '}']).unwrap();
            rest[..end].trim()
        })
        .collect();
    assert_eq!(prices.len(), 1000);

    for price in prices {
        let (whole, fraction) = price
            .split_once('.')
            .unwrap_or_else(|| panic!("price {price} has no decimal point"));
        assert!(!whole.is_empty() && whole.chars().all(|c| c.is_ascii_digit()));
        assert_eq!(fraction.len(), 2, "price {price} does not have two decimals");
        assert!(fraction.chars().all(|c| c.is_ascii_digit()));
    }
}

#[tokio::test]
async fn test_products_same_seed_same_records() {
    let server = make_server();

    let first = server.get("/mock/products?count=8&seed=99").await.text();
    let second = server.get("/mock/products?count=8&seed=99").await.text();

    assert_eq!(first, second);
}

// ─── COMPANY ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_company_shape() {
    let server = make_server();

    let response = server.get("/mock/company?seed=11").await;

    response.assert_status_ok();
    let company = response.json::<Value>();
    for field in ["name", "catchPhrase", "bs", "phone"] {
        assert!(company[field].is_string(), "missing {field}");
    }
    assert!(company["address"]["postalCode"].is_string());
}

#[tokio::test]
async fn test_company_seeded_is_reproducible() {
    let server = make_server();

    let a = server.get("/mock/company?seed=5").await.text();
    let b = server.get("/mock/company?seed=5").await.text();
    let c = server.get("/mock/company?seed=6").await.text();

    assert_eq!(a, b);
    assert_ne!(a, c);
}
