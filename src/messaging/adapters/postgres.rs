//! `PostgreSQL` implementations of the `MessageStore` and
//! `ChannelDirectory` ports using Diesel ORM.
//!
//! Production-grade persistence with connection pooling via r2d2. The
//! two composite indexes documented in [`super::schema`] keep
//! `fetch_touching` and `count_unread` sub-linear in total history size.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool, PooledConnection};
use diesel::result::DatabaseErrorKind;

use super::models::{ChannelRow, MessageRow, NewMessageRow};
use super::schema::{channels, messages};
use crate::messaging::{
    domain::{ChannelId, ChannelProfile, Message},
    error::StoreError,
    ports::directory::ChannelDirectory,
    ports::store::{MessageStore, StoreResult},
};

/// `PostgreSQL` connection pool type.
pub type PgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL` implementation of [`MessageStore`].
///
/// Uses Diesel ORM with connection pooling via r2d2. Thread-safe for
/// concurrent access; every mutation is a single-row statement, so append
/// atomicity and per-message read-flag atomicity come from the database.
///
/// # Example
///
/// ```ignore
/// use diesel::r2d2::{ConnectionManager, Pool, PooledConnection};
/// use diesel::PgConnection;
/// use courier::messaging::adapters::postgres::PostgresMessageStore;
///
/// let manager = ConnectionManager::<PgConnection>::new("postgres://...");
/// let pool = Pool::builder().build(manager).expect("pool");
/// let store = PostgresMessageStore::new(pool);
/// ```
#[derive(Debug, Clone)]
pub struct PostgresMessageStore {
    pool: PgPool,
}

impl PostgresMessageStore {
    /// Creates a new store with the given connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns a reference to the connection pool.
    #[must_use]
    pub const fn pool(&self) -> &PgPool {
        &self.pool
    }

    fn conn(&self) -> StoreResult<PooledConnection<ConnectionManager<PgConnection>>> {
        self.pool
            .get()
            .map_err(|e| StoreError::connection(e.to_string()))
    }
}

#[async_trait]
impl MessageStore for PostgresMessageStore {
    async fn append(&self, message: &Message) -> StoreResult<()> {
        let mut conn = self.conn()?;
        let row = NewMessageRow::from(message);

        diesel::insert_into(messages::table)
            .values(&row)
            .execute(&mut conn)
            .map_err(|err| match err {
                diesel::result::Error::DatabaseError(
                    DatabaseErrorKind::UniqueViolation,
                    _,
                ) => StoreError::DuplicateMessage(message.id()),
                other => StoreError::database(other),
            })?;

        Ok(())
    }

    async fn mark_read(&self, counterpart: ChannelId, recipient: ChannelId) -> StoreResult<u64> {
        let mut conn = self.conn()?;

        let flipped = diesel::update(
            messages::table.filter(
                messages::sender
                    .eq(counterpart.to_string())
                    .and(messages::recipient.eq(recipient.to_string()))
                    .and(messages::read.eq(false)),
            ),
        )
        .set(messages::read.eq(true))
        .execute(&mut conn)
        .map_err(StoreError::database)?;

        Ok(u64::try_from(flipped).unwrap_or(u64::MAX))
    }

    async fn fetch_conversation(&self, a: ChannelId, b: ChannelId) -> StoreResult<Vec<Message>> {
        let mut conn = self.conn()?;
        let (a_hex, b_hex) = (a.to_string(), b.to_string());

        let rows = messages::table
            .filter(
                messages::sender
                    .eq(a_hex.clone())
                    .and(messages::recipient.eq(b_hex.clone()))
                    .or(messages::sender
                        .eq(b_hex)
                        .and(messages::recipient.eq(a_hex))),
            )
            .order((messages::sent_at.asc(), messages::id.asc()))
            .select(MessageRow::as_select())
            .load::<MessageRow>(&mut conn)
            .map_err(StoreError::database)?;

        rows.into_iter().map(MessageRow::into_domain).collect()
    }

    async fn fetch_touching(&self, channel: ChannelId) -> StoreResult<Vec<Message>> {
        let mut conn = self.conn()?;
        let hex = channel.to_string();

        let rows = messages::table
            .filter(
                messages::sender
                    .eq(hex.clone())
                    .or(messages::recipient.eq(hex)),
            )
            .select(MessageRow::as_select())
            .load::<MessageRow>(&mut conn)
            .map_err(StoreError::database)?;

        rows.into_iter().map(MessageRow::into_domain).collect()
    }

    async fn count_unread(&self, channel: ChannelId) -> StoreResult<u64> {
        let mut conn = self.conn()?;

        let count: i64 = messages::table
            .filter(
                messages::recipient
                    .eq(channel.to_string())
                    .and(messages::read.eq(false)),
            )
            .count()
            .get_result(&mut conn)
            .map_err(StoreError::database)?;

        Ok(u64::try_from(count).unwrap_or(0))
    }

    async fn healthy(&self) -> bool {
        self.conn()
            .and_then(|mut conn| {
                diesel::sql_query("SELECT 1")
                    .execute(&mut conn)
                    .map_err(StoreError::database)
            })
            .is_ok()
    }
}

/// `PostgreSQL` implementation of [`ChannelDirectory`].
///
/// Reads the channel collaborator's table; this adapter never writes.
#[derive(Debug, Clone)]
pub struct PostgresChannelDirectory {
    pool: PgPool,
}

impl PostgresChannelDirectory {
    /// Creates a new directory with the given connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> StoreResult<PooledConnection<ConnectionManager<PgConnection>>> {
        self.pool
            .get()
            .map_err(|e| StoreError::connection(e.to_string()))
    }
}

#[async_trait]
impl ChannelDirectory for PostgresChannelDirectory {
    async fn exists(&self, id: ChannelId) -> StoreResult<bool> {
        let mut conn = self.conn()?;

        let count: i64 = channels::table
            .filter(channels::id.eq(id.to_string()))
            .count()
            .get_result(&mut conn)
            .map_err(StoreError::database)?;

        Ok(count > 0)
    }

    async fn resolve(&self, id: ChannelId) -> StoreResult<Option<ChannelProfile>> {
        let mut conn = self.conn()?;

        let row = channels::table
            .filter(channels::id.eq(id.to_string()))
            .select(ChannelRow::as_select())
            .first::<ChannelRow>(&mut conn)
            .optional()
            .map_err(StoreError::database)?;

        match row {
            Some(found) => Ok(Some(found.into_domain()?)),
            None => Ok(None),
        }
    }
}
