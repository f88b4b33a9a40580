use super::*;

/// Tests the most recent shipment timestamp of a starship.
///
/// Expected: the newest `created_at`, or None without shipments
#[tokio::test]
async fn returns_most_recent_timestamp() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_warehouse_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let starship = factory::create_starship(db).await?;
    let idle = factory::create_starship(db).await?;
    let cargo = factory::create_cargo(db).await?;
    let now = Utc::now();

    ShipmentFactory::new(db, starship.id, cargo.id)
        .created_at(now - Duration::hours(5))
        .build()
        .await?;
    let latest = ShipmentFactory::new(db, starship.id, cargo.id)
        .created_at(now - Duration::minutes(5))
        .build()
        .await?;

    let repo = ShipmentRepository::new(db);

    assert_eq!(
        repo.latest_created_at(starship.id).await?,
        Some(latest.created_at)
    );
    assert_eq!(repo.latest_created_at(idle.id).await?, None);

    Ok(())
}
