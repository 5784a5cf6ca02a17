use super::*;

/// Tests counting distinct owners of a card.
///
/// Verifies that copy counts do not inflate the owner count.
///
/// Expected: Ok with 2 owners
#[tokio::test]
async fn counts_each_owner_once() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GachaInventory)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::inventory::InventoryFactory::new(db, "1", "mitsuki")
        .count(5)
        .build()
        .await?;
    factory::create_inventory(db, "2", "mitsuki").await?;
    factory::create_inventory(db, "2", "arona").await?;

    let owners = InventoryRepository::new(db).count_owners("mitsuki").await?;

    assert_eq!(owners, 2);

    Ok(())
}
