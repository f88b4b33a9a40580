use super::*;

/// Tests that the OpenAPI document is served with every tag and the bearer scheme.
///
/// Expected: 200 with the documented paths
#[tokio::test]
async fn serves_openapi_document() -> Result<(), AppError> {
    let app = TestApp::new(&[]).await?;

    let (status, body) = app.get("/api-docs/openapi.json").await;

    assert_eq!(status, StatusCode::OK);
    for path in [
        "/api/starships",
        "/api/starships/{id}/load",
        "/api/inventory",
        "/api/load",
        "/api/history",
    ] {
        assert!(body["paths"].get(path).is_some(), "missing path {}", path);
    }
    let tags: Vec<&str> = body["tags"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|tag| tag["name"].as_str())
        .collect();
    for tag in ["starships", "cargo", "shipments", "history"] {
        assert!(tags.contains(&tag), "missing tag {}", tag);
    }
    assert!(body["components"]["securitySchemes"]
        .get("bearer_token")
        .is_some());

    Ok(())
}
