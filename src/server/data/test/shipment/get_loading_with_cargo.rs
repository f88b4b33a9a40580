use super::*;

/// Tests that only the starship's loading shipments are returned with their cargo.
///
/// Verifies that finished shipments and other starships' shipments are excluded.
///
/// Expected: Ok with one row paired with its cargo
#[tokio::test]
async fn returns_loading_rows_with_cargo() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_warehouse_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (starship, cargo, loading) = factory::helpers::create_loading_shipment(db).await?;
    ShipmentFactory::new(db, starship.id, cargo.id)
        .status(EntityShipmentStatus::Completed)
        .build()
        .await?;
    let other = factory::create_starship(db).await?;
    ShipmentFactory::new(db, other.id, cargo.id)
        .status(EntityShipmentStatus::Loading)
        .build()
        .await?;

    let repo = ShipmentRepository::new(db);
    let rows = repo.get_loading_with_cargo(starship.id).await?;

    assert_eq!(rows.len(), 1);
    let (shipment, related) = &rows[0];
    assert_eq!(shipment.id, loading.id);
    assert_eq!(related.as_ref().map(|c| c.id), Some(cargo.id));

    assert!(repo.has_loading(starship.id).await?);

    Ok(())
}

/// Tests a starship without loading shipments.
///
/// Expected: Ok with no rows and `has_loading` false
#[tokio::test]
async fn returns_nothing_for_idle_starship() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_warehouse_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let starship = factory::create_starship(db).await?;
    let cargo = factory::create_cargo(db).await?;
    ShipmentFactory::new(db, starship.id, cargo.id)
        .status(EntityShipmentStatus::Cancelled)
        .build()
        .await?;

    let repo = ShipmentRepository::new(db);

    assert!(repo.get_loading_with_cargo(starship.id).await?.is_empty());
    assert!(!repo.has_loading(starship.id).await?);
    assert!(repo.exists_for_starship(starship.id).await?);
    assert!(repo.exists_for_cargo(cargo.id).await?);

    Ok(())
}
