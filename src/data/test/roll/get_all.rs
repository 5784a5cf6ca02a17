use super::*;

/// Tests reading the whole roll log.
///
/// Verifies that rolls of every user and card are returned in log order.
///
/// Expected: Ok with 3 rolls ordered by id
#[tokio::test]
async fn returns_every_roll_in_order() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GachaRoll)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    factory::create_roll(db, "2", "arona", now).await?;
    factory::create_roll(db, "1", "mitsuki", now - TimeDelta::hours(1)).await?;
    factory::create_roll(db, "1", "arona", now).await?;

    let rolls = RollRepository::new(db).get_all().await?;

    let cards: Vec<&str> = rolls.iter().map(|roll| roll.card_id.as_str()).collect();
    assert_eq!(cards, vec!["arona", "mitsuki", "arona"]);
    assert!(rolls.windows(2).all(|pair| pair[0].id < pair[1].id));

    Ok(())
}
