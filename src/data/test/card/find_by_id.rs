use super::*;

/// Tests finding an unlisted card.
///
/// Verifies that cards removed from the roster are still found by id so inventories
/// keep resolving.
///
/// Expected: Ok with Some(card) flagged unlisted
#[tokio::test]
async fn finds_unlisted_card() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GachaCard)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::card::CardFactory::new(db, 1)
        .unlisted(true)
        .build()
        .await?;

    let card = CardRepository::new(db).find_by_id(&stored.id).await?;

    assert!(card.is_some());
    assert!(card.unwrap().unlisted);

    Ok(())
}

/// Tests finding a card id that was never stored.
///
/// Expected: Ok with None
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GachaCard)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let card = CardRepository::new(db).find_by_id("missing").await?;

    assert!(card.is_none());

    Ok(())
}
