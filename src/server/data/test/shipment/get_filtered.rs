use super::*;

/// Tests history ordering and name resolution.
///
/// Expected: newest first, each row carrying its starship and cargo names
#[tokio::test]
async fn returns_newest_first_with_names() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_warehouse_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let starship = StarshipFactory::new(db).name("Home One").build().await?;
    let cargo = CargoFactory::new(db).name("Tibanna Gas").build().await?;
    let now = Utc::now();

    let older = ShipmentFactory::new(db, starship.id, cargo.id)
        .created_at(now - Duration::hours(2))
        .build()
        .await?;
    let newer = ShipmentFactory::new(db, starship.id, cargo.id)
        .created_at(now - Duration::hours(1))
        .build()
        .await?;

    let repo = ShipmentRepository::new(db);
    let history = repo.get_filtered(ShipmentHistoryFilter::default()).await?;

    let ids: Vec<i32> = history.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![newer.id, older.id]);
    assert!(history
        .iter()
        .all(|s| s.starship_name == "Home One" && s.cargo_name == "Tibanna Gas"));

    Ok(())
}

/// Tests combined id, status and date filters.
///
/// Expected: only the completed shipment of the first starship inside the window
#[tokio::test]
async fn combines_filters() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_warehouse_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let starship = factory::create_starship(db).await?;
    let other = factory::create_starship(db).await?;
    let cargo = factory::create_cargo(db).await?;
    let now = Utc::now();

    let wanted = ShipmentFactory::new(db, starship.id, cargo.id)
        .status(EntityShipmentStatus::Completed)
        .created_at(now - Duration::hours(3))
        .build()
        .await?;
    // Outside the window
    ShipmentFactory::new(db, starship.id, cargo.id)
        .status(EntityShipmentStatus::Completed)
        .created_at(now - Duration::days(3))
        .build()
        .await?;
    ShipmentFactory::new(db, starship.id, cargo.id)
        .status(EntityShipmentStatus::Failed)
        .created_at(now - Duration::hours(3))
        .build()
        .await?;
    ShipmentFactory::new(db, other.id, cargo.id)
        .status(EntityShipmentStatus::Completed)
        .created_at(now - Duration::hours(3))
        .build()
        .await?;

    let repo = ShipmentRepository::new(db);
    let history = repo
        .get_filtered(ShipmentHistoryFilter {
            starship_id: Some(starship.id),
            cargo_id: Some(cargo.id),
            status: Some(ShipmentStatus::Completed),
            from: Some(now - Duration::days(1)),
            to: Some(now),
        })
        .await?;

    assert_eq!(history.len(), 1);
    assert_eq!(history[0].id, wanted.id);
    assert_eq!(history[0].status, ShipmentStatus::Completed);

    Ok(())
}
