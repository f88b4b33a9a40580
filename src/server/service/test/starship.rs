use super::*;
use crate::server::{
    model::starship::{
        CreateStarshipParams, StarshipStatus, UpdateStarshipParams, UpdateStarshipStatusParams,
    },
    service::starship::StarshipService,
};

fn create_params(name: &str) -> CreateStarshipParams {
    CreateStarshipParams {
        name: name.to_string(),
        capacity: 1000.0,
        volume: 500.0,
        range: 10000.0,
        status: StarshipStatus::Available,
    }
}

/// Tests that a duplicate name is rejected.
///
/// Expected: Err(Conflict) and only one starship stored
#[tokio::test]
async fn create_rejects_duplicate_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_warehouse_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = StarshipService::new(db, NameMatching::Exact);
    service.create(create_params("Avenger")).await?;

    let result = service.create(create_params("Avenger")).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert_eq!(service.get_all().await?.len(), 1);

    Ok(())
}

/// Tests duplicate detection when names are compared case-insensitively.
///
/// Expected: Err(Conflict) for a name differing only in case
#[tokio::test]
async fn create_rejects_duplicate_name_ignoring_case() -> Result<(), AppError> {
    let test = TestBuilder::new().with_warehouse_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = StarshipService::new(db, NameMatching::CaseInsensitive);
    service.create(create_params("Executor")).await?;

    let result = service.create(create_params("EXECUTOR")).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests that a loading starship cannot be modified.
///
/// Expected: Err(Conflict), stored capacity unchanged
#[tokio::test]
async fn update_rejects_loading_starship() -> Result<(), AppError> {
    let test = TestBuilder::new().with_warehouse_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let starship = StarshipFactory::new(db)
        .status(EntityStarshipStatus::Loading)
        .build()
        .await?;

    let service = StarshipService::new(db, NameMatching::Exact);
    let result = service
        .update(UpdateStarshipParams {
            id: starship.id,
            capacity: Some(2000.0),
            ..Default::default()
        })
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert_eq!(reload_starship(db, starship.id).await?.capacity, starship.capacity);

    Ok(())
}

/// Tests renaming a starship to a name another starship uses.
///
/// Expected: Err(Conflict); renaming to its own name is allowed
#[tokio::test]
async fn update_checks_name_against_other_starships() -> Result<(), AppError> {
    let test = TestBuilder::new().with_warehouse_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let starship = StarshipFactory::new(db).name("Lucrehulk").build().await?;
    StarshipFactory::new(db).name("Invisible Hand").build().await?;

    let service = StarshipService::new(db, NameMatching::Exact);

    let result = service
        .update(UpdateStarshipParams {
            id: starship.id,
            name: Some("Invisible Hand".to_string()),
            ..Default::default()
        })
        .await;
    assert!(matches!(result, Err(AppError::Conflict(_))));

    let updated = service
        .update(UpdateStarshipParams {
            id: starship.id,
            name: Some("Lucrehulk".to_string()),
            range: Some(42000.0),
            ..Default::default()
        })
        .await?
        .unwrap();
    assert_eq!(updated.range, 42000.0);

    Ok(())
}

/// Tests updating a starship that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn update_returns_none_for_missing_starship() -> Result<(), AppError> {
    let test = TestBuilder::new().with_warehouse_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = StarshipService::new(db, NameMatching::Exact);
    let result = service
        .update(UpdateStarshipParams {
            id: 999,
            range: Some(1.0),
            ..Default::default()
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests the operational status transitions.
///
/// Expected: in_flight starships return to available; loading starships are refused
#[tokio::test]
async fn update_status_guards_loading() -> Result<(), AppError> {
    let test = TestBuilder::new().with_warehouse_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let flying = StarshipFactory::new(db)
        .status(EntityStarshipStatus::InFlight)
        .build()
        .await?;
    let loading = StarshipFactory::new(db)
        .status(EntityStarshipStatus::Loading)
        .build()
        .await?;

    let service = StarshipService::new(db, NameMatching::Exact);

    let landed = service
        .update_status(UpdateStarshipStatusParams {
            id: flying.id,
            status: StarshipStatus::Available,
        })
        .await?
        .unwrap();
    assert_eq!(landed.status, StarshipStatus::Available);

    let result = service
        .update_status(UpdateStarshipStatusParams {
            id: loading.id,
            status: StarshipStatus::Maintenance,
        })
        .await;
    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests the delete guards.
///
/// Verifies that a starship with shipment history or in flight is kept, and an
/// unreferenced available starship is removed.
///
/// Expected: Conflict, Conflict, then Ok(true) and Ok(false) once gone
#[tokio::test]
async fn delete_honors_status_and_history_guards() -> Result<(), AppError> {
    let test = TestBuilder::new().with_warehouse_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let with_history = factory::create_starship(db).await?;
    let cargo = factory::create_cargo(db).await?;
    factory::create_shipment(db, with_history.id, cargo.id).await?;
    let flying = StarshipFactory::new(db)
        .status(EntityStarshipStatus::InFlight)
        .build()
        .await?;
    let idle = factory::create_starship(db).await?;

    let service = StarshipService::new(db, NameMatching::Exact);

    assert!(matches!(
        service.delete(with_history.id).await,
        Err(AppError::Conflict(_))
    ));
    assert!(matches!(
        service.delete(flying.id).await,
        Err(AppError::Conflict(_))
    ));
    assert!(service.delete(idle.id).await?);
    assert!(!service.delete(idle.id).await?);
    assert!(service.get_by_id(idle.id).await?.is_none());

    Ok(())
}

/// Tests the load summary of a starship with one loading shipment.
///
/// Expected: current weight 100 (10 x 10) and volume 50 (10 x 5) with one line
#[tokio::test]
async fn get_load_sums_loading_shipments() -> Result<(), AppError> {
    let test = TestBuilder::new().with_warehouse_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (starship, cargo, shipment) = factory::helpers::create_loading_shipment(db).await?;

    let service = StarshipService::new(db, NameMatching::Exact);
    let load = service.get_load(starship.id).await?.unwrap();

    assert_eq!(load.lines.len(), 1);
    assert_eq!(load.lines[0].shipment_id, shipment.id);
    assert_eq!(load.lines[0].cargo_id, cargo.id);
    assert_eq!(load.current_weight, 100.0);
    assert_eq!(load.current_volume, 50.0);
    assert_eq!(load.available_weight(), starship.capacity - 100.0);

    assert!(service.get_load(999).await?.is_none());

    Ok(())
}
