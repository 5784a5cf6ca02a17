use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{GachaCurrency, GachaShardLedger};
///
/// let test = TestBuilder::new()
///     .with_table(GachaCurrency)
///     .with_table(GachaShardLedger)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with empty table configuration
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. The table will be created when `build()` is called.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the shard balance tables.
    ///
    /// Adds `GachaCurrency` and `GachaShardLedger`. Use this for daily claim and transfer
    /// tests that never touch the roster.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_currency_tables(self) -> Self {
        self.with_table(GachaCurrency).with_table(GachaShardLedger)
    }

    /// Adds every gacha table.
    ///
    /// This convenience method adds the roster tables (`GachaRarity`, `GachaCard`), the
    /// currency tables and the per-user roll state (`GachaPity`, `GachaInventory`,
    /// `GachaRoll`).
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_gacha_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_gacha_tables(self) -> Self {
        self.with_table(GachaRarity)
            .with_table(GachaCard)
            .with_currency_tables()
            .with_table(GachaPity)
            .with_table(GachaInventory)
            .with_table(GachaRoll)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
