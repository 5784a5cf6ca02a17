use super::*;

/// Tests upserting a card that already exists.
///
/// Verifies that the stored card takes the new name and rarity and is relisted.
///
/// Expected: Ok with card updated and listed
#[tokio::test]
async fn updates_and_relists_existing_card() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GachaCard)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::card::CardFactory::new(db, 1)
        .id("mitsuki")
        .name("Old Name")
        .unlisted(true)
        .build()
        .await?;

    let repo = CardRepository::new(db);
    repo.upsert_many(vec![
        Card::new("mitsuki", "Mitsuki", 2, "Character", "Originals"),
        Card::new("arona", "Arona", 1, "Character", "Originals"),
    ])
    .await?;

    let mitsuki = repo.find_by_id("mitsuki").await?.unwrap();
    assert_eq!(mitsuki.name, "Mitsuki");
    assert_eq!(mitsuki.rarity, 2);
    assert!(!mitsuki.unlisted);

    assert_eq!(repo.get_listed().await?.len(), 2);

    Ok(())
}
