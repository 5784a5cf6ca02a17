use super::*;

/// Tests recording the first daily claim of a user.
///
/// Verifies that both claim timestamps are set and the amount credited.
///
/// Expected: Ok with balance 600 and both timestamps equal to now
#[tokio::test]
async fn first_claim_sets_both_timestamps() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GachaCurrency)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
    let account = CurrencyRepository::new(db).record_daily(1, 600, now).await?;

    assert_eq!(account.balance, 600);
    assert_eq!(account.last_daily, Some(now));
    assert_eq!(account.first_daily, Some(now));

    Ok(())
}

/// Tests recording a later daily claim.
///
/// Verifies that `first_daily` keeps its original value.
///
/// Expected: Ok with only last_daily moved
#[tokio::test]
async fn later_claim_keeps_first_daily() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GachaCurrency)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
    factory::currency::CurrencyFactory::new(db)
        .user_id("5")
        .amount(10)
        .claimed_at(first)
        .build()
        .await?;

    let now = first + chrono::TimeDelta::days(3);
    let account = CurrencyRepository::new(db).record_daily(5, 120, now).await?;

    assert_eq!(account.balance, 130);
    assert_eq!(account.first_daily, Some(first));
    assert_eq!(account.last_daily, Some(now));

    Ok(())
}
