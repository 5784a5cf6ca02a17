use super::*;

/// Tests reading every inventory entry.
///
/// Verifies that entries of all users are returned with their copy counts.
///
/// Expected: Ok with 3 entries holding 4 copies in total
#[tokio::test]
async fn returns_entries_of_all_users() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GachaInventory)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::inventory::InventoryFactory::new(db, "1", "mitsuki")
        .count(2)
        .build()
        .await?;
    factory::create_inventory(db, "2", "mitsuki").await?;
    factory::create_inventory(db, "2", "arona").await?;

    let entries = InventoryRepository::new(db).get_all().await?;

    assert_eq!(entries.len(), 3);
    assert_eq!(entries.iter().map(|entry| entry.count).sum::<i64>(), 4);
    assert!(entries.iter().any(|entry| entry.user_id == 2 && entry.card_id == "arona"));

    Ok(())
}
