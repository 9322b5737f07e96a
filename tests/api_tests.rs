use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use repairdesk::config::Config;
use tower::ServiceExt;

async fn spawn_app() -> Router {
    let db_path =
        std::env::temp_dir().join(format!("repairdesk-api-test-{}.db", uuid::Uuid::new_v4()));

    let mut config = Config::default();
    config.general.database_path = format!("sqlite:{}", db_path.display());

    let state = repairdesk::api::create_app_state_from_config(config, None)
        .await
        .expect("Failed to create app state");
    repairdesk::api::router(state).await
}

async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

async fn post_form(app: &Router, body: &str) -> axum::response::Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/orderform")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

#[tokio::test]
async fn test_root_redirects_to_form() {
    let app = spawn_app().await;

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/orderform");
}

#[tokio::test]
async fn test_order_form_lists_configured_brands() {
    let app = spawn_app().await;

    let (status, body) = get(&app, "/orderform").await;

    assert_eq!(status, StatusCode::OK);
    for brand in ["HP", "Dell", "Lenovo", "Asus", "Acer", "Apple"] {
        assert!(body.contains(&format!("name=\"laptop_brand[]\" value=\"{brand}\"")));
    }
    assert!(body.contains("name=\"username\""));
}

#[tokio::test]
async fn test_submit_order_redirects_to_listing() {
    let app = spawn_app().await;

    let response = post_form(
        &app,
        "username=alice&laptop_brand%5B%5D=HP&laptop_brand%5B%5D=Dell",
    )
    .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/view_orders");

    let (status, body) = get(&app, "/view_orders").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<td>1</td><td>alice</td><td>HP, Dell</td>"));
    assert!(!body.contains("No repair orders found"));
}

#[tokio::test]
async fn test_submit_without_brand_is_rejected() {
    let app = spawn_app().await;

    let response = post_form(&app, "username=alice").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body = String::from_utf8(body.to_vec()).unwrap();
    assert!(body.contains("Error: At least one laptop brand must be selected"));

    let (_, listing) = get(&app, "/view_orders").await;
    assert!(listing.contains("No repair orders found in the database."));
}

#[tokio::test]
async fn test_submit_without_username_is_rejected() {
    let app = spawn_app().await;

    let response = post_form(&app, "username=&laptop_brand%5B%5D=HP").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body = String::from_utf8(body.to_vec()).unwrap();
    assert!(body.contains("Error: Username is required"));

    let (_, listing) = get(&app, "/view_orders").await;
    assert!(listing.contains("No repair orders found in the database."));
}

#[tokio::test]
async fn test_orders_listed_most_recent_first() {
    let app = spawn_app().await;

    post_form(&app, "username=first&laptop_brand%5B%5D=Acer").await;
    post_form(&app, "username=second&laptop_brand%5B%5D=Asus").await;
    post_form(&app, "username=first&laptop_brand%5B%5D=Apple").await;

    let (_, body) = get(&app, "/view_orders").await;

    let newest = body.find("<td>3</td>").unwrap();
    let middle = body.find("<td>2</td>").unwrap();
    let oldest = body.find("<td>1</td>").unwrap();
    assert!(newest < middle && middle < oldest);
}

#[tokio::test]
async fn test_markup_in_username_is_escaped() {
    let app = spawn_app().await;

    post_form(
        &app,
        "username=%3Cscript%3Ealert(1)%3C%2Fscript%3E&laptop_brand%5B%5D=HP",
    )
    .await;

    for uri in ["/view_orders", "/normalize"] {
        let (_, body) = get(&app, uri).await;
        assert!(!body.contains("<script>alert(1)"), "raw markup on {uri}");
        assert!(body.contains("&lt;script&gt;alert(1)"), "escaped text on {uri}");
    }
}

#[tokio::test]
async fn test_normalize_page_with_empty_table() {
    let app = spawn_app().await;

    let (status, body) = get(&app, "/normalize").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.matches("No data</td>").count(), 7);
    assert!(!body.contains("class=\"error\""));
}

#[tokio::test]
async fn test_normalize_page_renders_all_views() {
    let app = spawn_app().await;

    post_form(
        &app,
        "username=alice&laptop_brand%5B%5D=HP&laptop_brand%5B%5D=Dell",
    )
    .await;
    post_form(&app, "username=bob&laptop_brand%5B%5D=Lenovo").await;

    let (status, body) = get(&app, "/normalize").await;
    assert_eq!(status, StatusCode::OK);

    for table in [
        "repairs",
        "repairs_1nf",
        "repairs_2nf",
        "laptop_brands_2nf",
        "users_3nf",
        "repairs_3nf",
        "laptop_brands_3nf",
    ] {
        assert!(body.contains(&format!("<h3>Table: {table}</h3>")), "{table}");
    }

    // 1NF splits alice's order into one row per brand
    assert!(body.contains("<td>alice</td><td>HP</td>"));
    assert!(body.contains("<td>alice</td><td>Dell</td>"));
    // 3NF users in first-seen order
    assert!(body.contains("<tr><td>alice</td><td>1</td></tr><tr><td>bob</td><td>2</td></tr>"));
    // 2NF and 3NF brands tables: (1,HP) (1,Dell) (2,Lenovo)
    assert_eq!(
        body.matches("<tr><td>1</td><td>HP</td></tr><tr><td>1</td><td>Dell</td></tr><tr><td>2</td><td>Lenovo</td></tr>")
            .count(),
        2
    );
    assert!(body.contains("<th>user_id (FK)</th>"));
    assert!(body.contains("<script src=\"/static/normalize.js\"></script>"));
}

#[tokio::test]
async fn test_static_assets_are_served() {
    let app = spawn_app().await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/static/normalize.js")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
    assert!(content_type.contains("javascript"));

    let (status, _) = get(&app, "/static/missing.css").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = spawn_app().await;

    let (status, body) = get(&app, "/api/health").await;
    assert_eq!(status, StatusCode::OK);

    let body_json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body_json["success"], true);
    assert_eq!(body_json["data"]["database"], true);
}

#[tokio::test]
async fn test_security_headers_present() {
    let app = spawn_app().await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/view_orders")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.headers()["x-content-type-options"], "nosniff");
    assert!(
        response.headers()["content-security-policy"]
            .to_str()
            .unwrap()
            .contains("script-src 'self'")
    );
}
