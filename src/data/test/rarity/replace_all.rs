use super::*;

/// Tests storing tiers into an empty table.
///
/// Verifies that every tier is inserted and read back in ascending rarity order with
/// pity thresholds preserved.
///
/// Expected: Ok with all tiers stored
#[tokio::test]
async fn inserts_new_tiers() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GachaRarity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RarityRepository::new(db);
    repo.replace_all(&[
        RaritySetting::new(2, 0.1).with_pity(5).with_dupe_shards(50),
        RaritySetting::new(1, 0.9),
    ])
    .await?;

    let stored = repo.get_all().await?;
    assert_eq!(stored.len(), 2);
    assert_eq!(stored[0].rarity, 1);
    assert_eq!(stored[1].pity, Some(5));
    assert_eq!(stored[1].dupe_shards, 50);

    Ok(())
}

/// Tests replacing previously stored tiers.
///
/// Verifies that existing tiers are updated and tiers missing from the new list
/// are deleted.
///
/// Expected: Ok with only the new tiers stored
#[tokio::test]
async fn updates_and_removes_tiers() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GachaRarity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_rarity(db, 1).await?;
    factory::create_rarity(db, 3).await?;

    let repo = RarityRepository::new(db);
    repo.replace_all(&[RaritySetting::new(1, 0.5).with_dupe_shards(7)])
        .await?;

    let stored = entity::prelude::GachaRarity::find().all(db).await?;
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].rarity, 1);
    assert_eq!(stored[0].rate, 0.5);
    assert_eq!(stored[0].dupe_shards, 7);

    Ok(())
}
