use super::*;

/// Tests adding the first copy of a card.
///
/// Expected: Ok with count 1, is_new true and first_acquired set to now
#[tokio::test]
async fn first_copy_is_new() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GachaInventory)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
    let (entry, is_new) = InventoryRepository::new(db)
        .add_copy(1, "mitsuki", now)
        .await?;

    assert!(is_new);
    assert_eq!(entry.count, 1);
    assert_eq!(entry.first_acquired, now);

    Ok(())
}

/// Tests adding a duplicate copy.
///
/// Verifies that the count increments and first_acquired never changes.
///
/// Expected: Ok with count 3, is_new false and the original first_acquired
#[tokio::test]
async fn duplicate_keeps_first_acquired() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GachaInventory)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
    factory::inventory::InventoryFactory::new(db, "1", "mitsuki")
        .count(2)
        .first_acquired(first)
        .build()
        .await?;

    let repo = InventoryRepository::new(db);
    let (entry, is_new) = repo.add_copy(1, "mitsuki", first + TimeDelta::days(10)).await?;

    assert!(!is_new);
    assert_eq!(entry.count, 3);
    assert_eq!(entry.first_acquired, first);
    assert_eq!(repo.get_by_user(1).await?.len(), 1);

    Ok(())
}
