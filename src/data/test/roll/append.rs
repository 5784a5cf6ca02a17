use super::*;

/// Tests appending rolls.
///
/// Verifies that ids increase monotonically and that per-card counts include every
/// user's rolls.
///
/// Expected: Ok with increasing ids and a count of 2
#[tokio::test]
async fn assigns_increasing_ids() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GachaRoll)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RollRepository::new(db);
    let now = Utc::now();
    let first = repo.append(1, "mitsuki", now).await?;
    let second = repo.append(2, "mitsuki", now).await?;
    repo.append(1, "arona", now).await?;

    assert!(second.id > first.id);
    assert_eq!(repo.count_by_card("mitsuki").await?, 2);
    assert_eq!(repo.get_by_user(1).await?.len(), 2);

    Ok(())
}
