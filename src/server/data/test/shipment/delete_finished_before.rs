use super::*;

/// Tests the history purge.
///
/// Verifies that old finished rows are deleted while recent rows and old `loading`
/// rows are kept.
///
/// Expected: Ok(2), leaving the recent row and the old loading row
#[tokio::test]
async fn deletes_old_finished_rows_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_warehouse_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let starship = factory::create_starship(db).await?;
    let cargo = factory::create_cargo(db).await?;
    let now = Utc::now();
    let old = now - Duration::days(2);

    ShipmentFactory::new(db, starship.id, cargo.id)
        .status(EntityShipmentStatus::Completed)
        .created_at(old)
        .build()
        .await?;
    ShipmentFactory::new(db, starship.id, cargo.id)
        .status(EntityShipmentStatus::Cancelled)
        .created_at(old)
        .build()
        .await?;
    let old_loading = ShipmentFactory::new(db, starship.id, cargo.id)
        .status(EntityShipmentStatus::Loading)
        .created_at(old)
        .build()
        .await?;
    let recent = ShipmentFactory::new(db, starship.id, cargo.id)
        .status(EntityShipmentStatus::Completed)
        .created_at(now)
        .build()
        .await?;

    let repo = ShipmentRepository::new(db);
    let deleted = repo.delete_finished_before(now - Duration::days(1)).await?;

    assert_eq!(deleted, 2);

    let mut remaining: Vec<i32> = entity::prelude::ShipmentHistory::find()
        .all(db)
        .await?
        .into_iter()
        .map(|s| s.id)
        .collect();
    remaining.sort();
    assert_eq!(remaining, vec![old_loading.id, recent.id]);

    Ok(())
}
