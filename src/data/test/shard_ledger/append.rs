use super::*;

/// Tests appending ledger rows for two users.
///
/// Verifies that rows are returned per user in insertion order with their reasons.
///
/// Expected: Ok with two rows for the first user
#[tokio::test]
async fn appends_in_order_per_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GachaShardLedger)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ShardLedgerRepository::new(db);
    let now = Utc::now();
    repo.append(1, 600, ShardReason::Daily, now).await?;
    repo.append(2, 120, ShardReason::Daily, now).await?;
    repo.append(1, -100, ShardReason::Roll, now).await?;

    let entries = repo.get_by_user(1).await?;

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].reason, ShardReason::Daily);
    assert_eq!(entries[1].delta, -100);
    assert_eq!(entries[1].reason, ShardReason::Roll);
    assert_eq!(entries.iter().map(|e| e.delta).sum::<i64>(), 500);

    Ok(())
}
