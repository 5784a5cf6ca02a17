use super::*;

/// Tests listing rollable cards.
///
/// Verifies that unlisted cards are excluded and that `get_all` still returns them.
///
/// Expected: Ok with the two roster cards listed out of three stored
#[tokio::test]
async fn excludes_unlisted_cards() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GachaRarity)
        .with_table(entity::prelude::GachaCard)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, cards) = factory::helpers::create_two_tier_roster(db).await?;
    factory::card::CardFactory::new(db, 1)
        .unlisted(true)
        .build()
        .await?;

    let repo = CardRepository::new(db);
    let listed = repo.get_listed().await?;

    assert_eq!(listed.len(), 2);
    assert!(listed.iter().all(|card| !card.unlisted));
    assert!(listed.iter().any(|card| card.id == cards[1].id));
    assert_eq!(repo.get_all().await?.len(), 3);

    Ok(())
}
