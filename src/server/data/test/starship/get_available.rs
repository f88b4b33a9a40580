use super::*;

/// Tests that only `available` starships are returned.
///
/// Expected: starships in maintenance, loading or in flight are excluded
#[tokio::test]
async fn returns_only_available_starships() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_warehouse_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let available = factory::create_starship(db).await?;
    for status in [
        EntityStarshipStatus::Maintenance,
        EntityStarshipStatus::Loading,
        EntityStarshipStatus::InFlight,
    ] {
        StarshipFactory::new(db).status(status).build().await?;
    }

    let repo = StarshipRepository::new(db);
    let result = repo.get_available(AvailableStarshipsFilter::default()).await?;

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, available.id);

    Ok(())
}

/// Tests the minimum capacity and range filters.
///
/// Verifies that both bounds are inclusive and combine.
///
/// Expected: only the starship meeting both minimums
#[tokio::test]
async fn filters_by_minimum_capacity_and_range() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_warehouse_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let big_short = StarshipFactory::new(db)
        .capacity(5000.0)
        .range(100.0)
        .build()
        .await?;
    let big_long = StarshipFactory::new(db)
        .capacity(5000.0)
        .range(20000.0)
        .build()
        .await?;
    StarshipFactory::new(db)
        .capacity(100.0)
        .range(20000.0)
        .build()
        .await?;

    let repo = StarshipRepository::new(db);

    let by_capacity = repo
        .get_available(AvailableStarshipsFilter {
            min_capacity: Some(5000.0),
            min_range: None,
        })
        .await?;
    let ids: Vec<i32> = by_capacity.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![big_short.id, big_long.id]);

    let by_both = repo
        .get_available(AvailableStarshipsFilter {
            min_capacity: Some(1000.0),
            min_range: Some(20000.0),
        })
        .await?;
    assert_eq!(by_both.len(), 1);
    assert_eq!(by_both[0].id, big_long.id);

    Ok(())
}
