use super::*;

/// Tests exact name matching.
///
/// Verifies that an identical name is taken while a name differing only in case is
/// free when matching is exact.
///
/// Expected: true for the same name, false for a different case
#[tokio::test]
async fn exact_matching_is_case_sensitive() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_warehouse_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    StarshipFactory::new(db).name("Millennium Falcon").build().await?;

    let repo = StarshipRepository::new(db);

    assert!(repo.name_taken("Millennium Falcon", NameMatching::Exact, None).await?);
    assert!(!repo.name_taken("millennium falcon", NameMatching::Exact, None).await?);

    Ok(())
}

/// Tests case-insensitive name matching.
///
/// Expected: true for a name differing only in case
#[tokio::test]
async fn case_insensitive_matching_ignores_case() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_warehouse_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    StarshipFactory::new(db).name("Millennium Falcon").build().await?;

    let repo = StarshipRepository::new(db);

    assert!(
        repo.name_taken("MILLENNIUM falcon", NameMatching::CaseInsensitive, None)
            .await?
    );
    assert!(
        !repo.name_taken("Slave I", NameMatching::CaseInsensitive, None)
            .await?
    );

    Ok(())
}

/// Tests that the starship being renamed does not conflict with itself.
///
/// Expected: false when the only match is the excluded starship
#[tokio::test]
async fn ignores_excluded_starship() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_warehouse_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let starship = StarshipFactory::new(db).name("Tantive IV").build().await?;
    let other = StarshipFactory::new(db).name("Ghost").build().await?;

    let repo = StarshipRepository::new(db);

    assert!(
        !repo.name_taken("Tantive IV", NameMatching::Exact, Some(starship.id))
            .await?
    );
    assert!(
        repo.name_taken("Tantive IV", NameMatching::Exact, Some(other.id))
            .await?
    );

    Ok(())
}
