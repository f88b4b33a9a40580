use chrono::{Duration, Utc};

use super::*;

/// Tests history filtering over HTTP.
///
/// Expected: newest first; filtered by starship and status; dates accepted as
/// plain days
#[tokio::test]
async fn filters_history() -> Result<(), AppError> {
    let app = TestApp::new(&[]).await?;
    let starship = factory::create_starship(&app.db).await?;
    let other = factory::create_starship(&app.db).await?;
    let cargo = factory::create_cargo(&app.db).await?;
    let now = Utc::now();

    let older = ShipmentFactory::new(&app.db, starship.id, cargo.id)
        .status(EntityShipmentStatus::Cancelled)
        .created_at(now - Duration::hours(2))
        .build()
        .await?;
    let newer = ShipmentFactory::new(&app.db, starship.id, cargo.id)
        .created_at(now - Duration::hours(1))
        .build()
        .await?;
    ShipmentFactory::new(&app.db, other.id, cargo.id)
        .created_at(now - Duration::hours(1))
        .build()
        .await?;

    let (status, body) = app
        .get(&format!("/api/history?starship_id={}", starship.id))
        .await;
    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["id"], newer.id);
    assert_eq!(rows[1]["id"], older.id);
    assert_eq!(rows[0]["starship_name"], starship.name);

    let (status, body) = app
        .get(&format!(
            "/api/history?starship_id={}&status=cancelled",
            starship.id
        ))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);

    let from = (now - Duration::days(1)).format("%Y-%m-%d");
    let to = (now + Duration::days(1)).format("%Y-%m-%d");
    let (status, body) = app
        .get(&format!("/api/history?from_date={}&to_date={}", from, to))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 3);

    Ok(())
}

/// Tests an RFC 3339 bound whose `+` offset sign was not percent-encoded.
///
/// Expected: 200 and the offset is applied as `+02:00`
#[tokio::test]
async fn accepts_unencoded_offset() -> Result<(), AppError> {
    let app = TestApp::new(&[]).await?;
    let starship = factory::create_starship(&app.db).await?;
    let cargo = factory::create_cargo(&app.db).await?;
    let now = Utc::now();

    ShipmentFactory::new(&app.db, starship.id, cargo.id)
        .created_at(now - Duration::hours(1))
        .build()
        .await?;

    // Local time at +02:00, so the bound is one hour from now in UTC
    let to = (now + Duration::hours(3)).format("%Y-%m-%dT%H:%M:%S+02:00");
    let (status, body) = app.get(&format!("/api/history?to_date={}", to)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);

    // Ninety minutes ago in UTC, before the shipment
    let to = (now + Duration::minutes(30)).format("%Y-%m-%dT%H:%M:%S+02:00");
    let (status, body) = app.get(&format!("/api/history?to_date={}", to)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.as_array().unwrap().is_empty());

    Ok(())
}

/// Tests invalid date filters.
///
/// Expected: 422 for an unparsable date and for a reversed range
#[tokio::test]
async fn rejects_invalid_dates() -> Result<(), AppError> {
    let app = TestApp::new(&[]).await?;

    let (status, body) = app.get("/api/history?from_date=yesterday").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_validation_error(&body, "from_date");

    let (status, body) = app
        .get("/api/history?from_date=2024-02-01&to_date=2024-01-01")
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_validation_error(&body, "from_date");

    Ok(())
}

/// Tests the per-client limit of the history route group.
///
/// Expected: the request past the configured burst gets 429
#[tokio::test]
async fn rate_limits_history() -> Result<(), AppError> {
    let app = TestApp::new(&[("RATE_LIMIT_HISTORY", "2")]).await?;

    let (first, _) = app.get("/api/history").await;
    let (second, _) = app.get("/api/history").await;
    let (third, body) = app.get("/api/history").await;

    assert_eq!(first, StatusCode::OK);
    assert_eq!(second, StatusCode::OK);
    assert_eq!(third, StatusCode::TOO_MANY_REQUESTS);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("Too many requests"));

    // Other route groups keep their own budget
    let (status, _) = app.get("/api/starships").await;
    assert_eq!(status, StatusCode::OK);

    Ok(())
}
