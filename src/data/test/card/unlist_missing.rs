use super::*;

/// Tests unlisting cards absent from a new roster.
///
/// Verifies that only listed cards outside `keep` are unlisted and that nothing is
/// deleted.
///
/// Expected: Ok with one card unlisted
#[tokio::test]
async fn unlists_cards_not_kept() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GachaCard)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let kept = factory::create_card(db, 1).await?;
    let removed = factory::create_card(db, 1).await?;
    factory::card::CardFactory::new(db, 1)
        .unlisted(true)
        .build()
        .await?;

    let repo = CardRepository::new(db);
    let unlisted = repo.unlist_missing(&[kept.id.clone()]).await?;

    assert_eq!(unlisted, 1);
    assert!(repo.find_by_id(&removed.id).await?.unwrap().unlisted);
    assert_eq!(repo.get_listed().await?.len(), 1);
    assert_eq!(repo.get_all().await?.len(), 3);

    Ok(())
}
