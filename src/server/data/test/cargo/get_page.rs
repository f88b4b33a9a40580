use super::*;

/// Tests offset pagination of the inventory.
///
/// Verifies that pages are ordered by id and that `skip` and `limit` select the
/// expected window.
///
/// Expected: Ok with the second and third cargo items
#[tokio::test]
async fn returns_requested_window_ordered_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_warehouse_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let mut ids = Vec::new();
    for _ in 0..4 {
        ids.push(factory::create_cargo(db).await?.id);
    }

    let repo = CargoRepository::new(db);
    let page = repo.get_page(InventoryPage { skip: 1, limit: 2 }).await?;

    let page_ids: Vec<i32> = page.iter().map(|c| c.id).collect();
    assert_eq!(page_ids, vec![ids[1], ids[2]]);

    Ok(())
}

/// Tests a page starting past the end of the inventory.
///
/// Expected: Ok with an empty page
#[tokio::test]
async fn returns_empty_page_past_the_end() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_warehouse_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_cargo(db).await?;

    let repo = CargoRepository::new(db);
    let page = repo.get_page(InventoryPage { skip: 5, limit: 10 }).await?;

    assert!(page.is_empty());

    Ok(())
}
