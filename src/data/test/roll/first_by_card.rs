use super::*;

/// Tests finding the first and last acquirer of a card.
///
/// Verifies that ordering follows the log id even when timestamps tie.
///
/// Expected: Ok with user 1 first and user 3 last
#[tokio::test]
async fn orders_by_log_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GachaRoll)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    factory::create_roll(db, "1", "mitsuki", now - TimeDelta::hours(1)).await?;
    factory::create_roll(db, "2", "mitsuki", now).await?;
    factory::create_roll(db, "3", "mitsuki", now).await?;

    let repo = RollRepository::new(db);
    let first = repo.first_by_card("mitsuki").await?.unwrap();
    let last = repo.last_by_card("mitsuki").await?.unwrap();

    assert_eq!(first.user_id, 1);
    assert_eq!(last.user_id, 3);
    assert!(repo.first_by_card("arona").await?.is_none());

    Ok(())
}
