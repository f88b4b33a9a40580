use super::*;

/// Tests a partial cargo update.
///
/// Expected: Ok with the new name and quantity, unit weight and volume untouched
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_warehouse_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let cargo = CargoFactory::new(db)
        .name("Bacta")
        .weight(2.5)
        .volume(1.5)
        .build()
        .await?;

    let repo = CargoRepository::new(db);
    let updated = repo
        .update(
            cargo.clone(),
            UpdateCargoParams {
                id: cargo.id,
                name: Some("Bacta Tanks".to_string()),
                quantity: Some(7),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.name, "Bacta Tanks");
    assert_eq!(updated.quantity, 7);
    assert_eq!(updated.weight, 2.5);
    assert_eq!(updated.volume, 1.5);

    Ok(())
}

/// Tests that a cargo name check is scoped to cargo and honors the matching mode.
///
/// Expected: taken case-insensitively, free when matching exactly
#[tokio::test]
async fn name_taken_honors_matching_mode() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_warehouse_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    CargoFactory::new(db).name("Spice").build().await?;
    StarshipFactory::new(db).name("Coaxium").build().await?;

    let repo = CargoRepository::new(db);

    assert!(repo.name_taken("SPICE", NameMatching::CaseInsensitive, None).await?);
    assert!(!repo.name_taken("SPICE", NameMatching::Exact, None).await?);
    assert!(!repo.name_taken("Coaxium", NameMatching::Exact, None).await?);

    Ok(())
}

/// Tests setting the on-hand quantity.
///
/// Expected: Ok with the stored quantity replaced
#[tokio::test]
async fn sets_quantity() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_warehouse_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let cargo = CargoFactory::new(db).quantity(80).build().await?;

    let repo = CargoRepository::new(db);
    repo.set_quantity(cargo.clone(), 20).await?;

    let stored = repo.find_by_id(cargo.id).await?.unwrap();
    assert_eq!(stored.quantity, 20);

    Ok(())
}
