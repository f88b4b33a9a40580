use std::{collections::HashMap, net::SocketAddr};

use axum::{
    body::Body,
    extract::ConnectInfo,
    http::{header, Method, Request, StatusCode},
    Extension, Router,
};
use entity::{
    shipment_history::ShipmentStatus as EntityShipmentStatus,
    starship::StarshipStatus as EntityStarshipStatus,
};
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use test_utils::{
    builder::TestBuilder,
    context::TestContext,
    factory::{self, cargo::CargoFactory, shipment::ShipmentFactory, starship::StarshipFactory},
};
use tower::ServiceExt;

use crate::server::{
    config::Config,
    error::AppError,
    router::router,
    state::AppState,
};

mod docs;
mod history;

const TOKEN: &str = "test-token";

/// Full application router over an in-memory database.
struct TestApp {
    /// Keeps the database alive for the duration of the test.
    _context: TestContext,
    db: DatabaseConnection,
    router: Router,
}

impl TestApp {
    /// Builds the app with `API_TOKEN` set to `TOKEN` plus the given overrides.
    async fn new(overrides: &[(&str, &str)]) -> Result<Self, AppError> {
        let context = TestBuilder::new()
            .with_warehouse_tables()
            .build()
            .await
            .unwrap();
        let db = context.db.clone().unwrap();

        let mut vars: HashMap<String, String> = HashMap::from([
            ("DATABASE_URL".to_string(), "sqlite::memory:".to_string()),
            ("API_TOKEN".to_string(), TOKEN.to_string()),
        ]);
        for (key, value) in overrides {
            vars.insert(key.to_string(), value.to_string());
        }
        let config = Config::from_lookup(|key| vars.get(key).cloned())?;

        let state = AppState::new(db.clone(), config.api_token.clone(), config.name_matching);
        // The limiters read the peer address from the request extensions, which
        // `into_make_service_with_connect_info` fills in when serving for real.
        let router = router(state, &config)?.layer(Extension(ConnectInfo(SocketAddr::from((
            [127, 0, 0, 1],
            40000,
        )))));

        Ok(Self {
            _context: context,
            db,
            router,
        })
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        (status, body)
    }

    async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Request::get(uri).body(Body::empty()).unwrap()).await
    }

    /// Sends an authorized request with an optional JSON body.
    async fn call(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::AUTHORIZATION, format!("Bearer {}", TOKEN));

        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        self.send(request).await
    }
}

/// Asserts a field-level validation body naming `field`.
fn assert_validation_error(body: &Value, field: &str) {
    assert_eq!(body["error"], "Validation failed");
    let errors = body["errors"].as_array().unwrap();
    assert!(
        errors.iter().any(|e| e["field"] == field),
        "no error for field {} in {}",
        field,
        body
    );
}
