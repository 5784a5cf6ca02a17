use super::*;

/// Tests saving an account that does not exist yet.
///
/// Expected: Ok with the account readable afterwards
#[tokio::test]
async fn creates_account() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GachaCurrency)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CurrencyRepository::new(db);
    let account = CurrencyAccount {
        balance: 300,
        ..CurrencyAccount::empty(42)
    };
    repo.save(&account).await?;

    assert_eq!(repo.find_by_user(42).await?, Some(account));

    Ok(())
}

/// Tests saving over an existing account.
///
/// Expected: Ok with the balance replaced
#[tokio::test]
async fn updates_existing_account() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GachaCurrency)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::create_currency(db, 500).await?;
    let user_id: u64 = stored.user_id.parse().unwrap();

    let repo = CurrencyRepository::new(db);
    let mut account = repo.get_or_empty(user_id).await?;
    account.balance = 20;
    repo.save(&account).await?;

    assert_eq!(repo.get_or_empty(user_id).await?.balance, 20);

    Ok(())
}

/// Tests reading an unknown user.
///
/// Expected: Ok with an empty account
#[tokio::test]
async fn unknown_user_has_empty_account() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GachaCurrency)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CurrencyRepository::new(db);

    assert!(repo.find_by_user(7).await?.is_none());
    assert_eq!(repo.get_or_empty(7).await?, CurrencyAccount::empty(7));

    Ok(())
}
