use super::*;

/// Tests saving counters for a user without stored counters.
///
/// Expected: Ok with one row per rarity
#[tokio::test]
async fn creates_counters_lazily() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GachaPity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PityRepository::new(db);
    assert!(repo.get_for_user(1).await?.is_empty());

    repo.save_for_user(1, &BTreeMap::from([(1, 0), (2, 3)]))
        .await?;

    assert_eq!(
        repo.get_for_user(1).await?,
        BTreeMap::from([(1, 0), (2, 3)])
    );

    Ok(())
}

/// Tests saving counters over existing rows.
///
/// Verifies that rows are updated in place rather than duplicated and that other
/// users are untouched.
///
/// Expected: Ok with updated counts and no extra rows
#[tokio::test]
async fn updates_existing_counters() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GachaPity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_pity(db, "1", 2, 4).await?;
    factory::create_pity(db, "9", 2, 4).await?;

    let repo = PityRepository::new(db);
    repo.save_for_user(1, &BTreeMap::from([(2, 0)])).await?;

    assert_eq!(repo.get_for_user(1).await?, BTreeMap::from([(2, 0)]));
    assert_eq!(repo.get_for_user(9).await?, BTreeMap::from([(2, 4)]));
    assert_eq!(entity::prelude::GachaPity::find().count(db).await?, 2);

    Ok(())
}
