use super::*;

/// Tests a partial update.
///
/// Verifies that only the provided fields change.
///
/// Expected: Ok with new capacity, other fields untouched
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_warehouse_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let starship = StarshipFactory::new(db)
        .name("Razor Crest")
        .capacity(1000.0)
        .volume(500.0)
        .build()
        .await?;

    let repo = StarshipRepository::new(db);
    let updated = repo
        .update(
            starship.clone(),
            UpdateStarshipParams {
                id: starship.id,
                capacity: Some(1500.0),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.name, "Razor Crest");
    assert_eq!(updated.capacity, 1500.0);
    assert_eq!(updated.volume, 500.0);

    let stored = entity::prelude::Starship::find_by_id(starship.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.capacity, 1500.0);

    Ok(())
}

/// Tests that an empty update returns the row unchanged.
///
/// Expected: Ok with the original model
#[tokio::test]
async fn empty_update_is_noop() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_warehouse_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let starship = factory::create_starship(db).await?;

    let repo = StarshipRepository::new(db);
    let updated = repo
        .update(
            starship.clone(),
            UpdateStarshipParams {
                id: starship.id,
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated, starship);

    Ok(())
}

/// Tests creation and status change through the repository.
///
/// Expected: stored status follows `set_status`
#[tokio::test]
async fn creates_and_sets_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_warehouse_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StarshipRepository::new(db);
    let starship = repo
        .create(CreateStarshipParams {
            name: "Outrider".to_string(),
            capacity: 800.0,
            volume: 300.0,
            range: 9000.0,
            status: StarshipStatus::Available,
        })
        .await?;
    assert_eq!(starship.status, EntityStarshipStatus::Available);

    let updated = repo
        .set_status(starship, StarshipStatus::Maintenance)
        .await?;
    assert_eq!(updated.status, EntityStarshipStatus::Maintenance);

    let stored = repo.find_by_id(updated.id).await?.unwrap();
    assert_eq!(stored.status, EntityStarshipStatus::Maintenance);

    Ok(())
}
