use super::*;

/// Tests detecting cargo that a loading shipment still carries.
///
/// Expected: true only for the cargo with a `loading` row
#[tokio::test]
async fn detects_loading_cargo() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_warehouse_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (starship, loading_cargo, _) = factory::helpers::create_loading_shipment(db).await?;
    let delivered_cargo = factory::create_cargo(db).await?;
    let unused_cargo = factory::create_cargo(db).await?;
    ShipmentFactory::new(db, starship.id, delivered_cargo.id)
        .status(EntityShipmentStatus::Completed)
        .build()
        .await?;

    let repo = ShipmentRepository::new(db);

    assert!(repo.has_loading_for_cargo(loading_cargo.id).await?);
    assert!(!repo.has_loading_for_cargo(delivered_cargo.id).await?);
    assert!(!repo.has_loading_for_cargo(unused_cargo.id).await?);

    Ok(())
}
