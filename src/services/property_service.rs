use chrono::Utc;
use sqlx::PgPool;
use thiserror::Error;
use uuid::Uuid;

use crate::database::models::{Account, Property, PropertyRow};
use crate::sanitize;

#[derive(Debug, Error)]
pub enum PropertyError {
    #[error("Account not found: {0}")]
    AccountNotFound(String),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Shared SELECT resolving each property together with its owning account.
/// Account columns are aliased with an `account_` prefix for PropertyRow.
const POPULATED_SELECT: &str = "\
    SELECT p.id, p.key, p.value, p.active, p.created_at, p.updated_at, \
           a.id AS account_id, \
           a.username AS account_username, \
           a.created_at AS account_created_at, \
           a.updated_at AS account_updated_at \
      FROM properties p \
      JOIN accounts a ON a.id = p.account_id";

/// Store access for player account properties. Cloning shares the
/// underlying pool.
#[derive(Clone)]
pub struct PropertyService {
    pool: PgPool,
}

impl PropertyService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All properties across all accounts, account-populated.
    pub async fn list_all(&self) -> Result<Vec<Property>, PropertyError> {
        let rows: Vec<PropertyRow> =
            sqlx::query_as(&format!("{POPULATED_SELECT} ORDER BY p.created_at"))
                .fetch_all(&self.pool)
                .await?;
        Ok(rows.into_iter().map(Property::from).collect())
    }

    /// All properties across all accounts whose key exactly equals the
    /// input. Case-sensitive, no partial match.
    pub async fn list_by_key(&self, key: &str) -> Result<Vec<Property>, PropertyError> {
        let rows: Vec<PropertyRow> = sqlx::query_as(&format!(
            "{POPULATED_SELECT} WHERE p.key = $1 ORDER BY p.created_at"
        ))
        .bind(key)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(Property::from).collect())
    }

    /// All properties across all accounts whose value exactly equals the
    /// input.
    pub async fn list_by_value(&self, value: &str) -> Result<Vec<Property>, PropertyError> {
        let rows: Vec<PropertyRow> = sqlx::query_as(&format!(
            "{POPULATED_SELECT} WHERE p.value = $1 ORDER BY p.created_at"
        ))
        .bind(value)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(Property::from).collect())
    }

    /// All properties owned by the given account.
    pub async fn list_for_account(&self, account_id: &str) -> Result<Vec<Property>, PropertyError> {
        let rows: Vec<PropertyRow> = sqlx::query_as(&format!(
            "{POPULATED_SELECT} WHERE p.account_id = $1 ORDER BY p.created_at"
        ))
        .bind(account_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(Property::from).collect())
    }

    /// The single matching property for that account and key, oldest first
    /// when several share the key.
    pub async fn get_for_account_by_key(
        &self,
        account_id: &str,
        key: &str,
    ) -> Result<Option<Property>, PropertyError> {
        let row: Option<PropertyRow> = sqlx::query_as(&format!(
            "{POPULATED_SELECT} WHERE p.account_id = $1 AND p.key = $2 \
             ORDER BY p.created_at LIMIT 1"
        ))
        .bind(account_id)
        .bind(key)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(Property::from))
    }

    /// All matching properties for that account and value.
    pub async fn list_for_account_by_value(
        &self,
        account_id: &str,
        value: &str,
    ) -> Result<Vec<Property>, PropertyError> {
        let rows: Vec<PropertyRow> = sqlx::query_as(&format!(
            "{POPULATED_SELECT} WHERE p.account_id = $1 AND p.value = $2 ORDER BY p.created_at"
        ))
        .bind(account_id)
        .bind(value)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(Property::from).collect())
    }

    /// Look up the owning account; used for the creation existence check.
    pub async fn get_account(&self, account_id: &str) -> Result<Option<Account>, PropertyError> {
        let account = sqlx::query_as::<_, Account>(
            "SELECT id, username, created_at, updated_at FROM accounts WHERE id = $1",
        )
        .bind(account_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(account)
    }

    /// Create a property for an existing account. Key and value are
    /// HTML-escaped before storage; both timestamps start at now.
    ///
    /// Two sequential round-trips: the insert, then a populated read-back.
    /// Not atomic; a concurrent mutation between the two calls is accepted.
    pub async fn create(
        &self,
        account_id: &str,
        key: &str,
        value: &str,
        active: bool,
    ) -> Result<Property, PropertyError> {
        let account = self
            .get_account(account_id)
            .await?
            .ok_or_else(|| PropertyError::AccountNotFound(account_id.to_string()))?;

        let id = Uuid::new_v4();
        let now = Utc::now();

        sqlx::query(
            "INSERT INTO properties (id, account_id, key, value, active, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(id)
        .bind(&account.id)
        .bind(sanitize::escape(key))
        .bind(sanitize::escape(value))
        .bind(active)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        self.get_by_id(id).await
    }

    /// Update the value of the oldest property matching (account, key).
    /// Refreshes updated_at. Returns None, with no mutation, when nothing
    /// matches.
    pub async fn update_for_account_by_key(
        &self,
        account_id: &str,
        key: &str,
        value: &str,
    ) -> Result<Option<Property>, PropertyError> {
        let updated: Option<(Uuid,)> = sqlx::query_as(
            "UPDATE properties \
                SET value = $3, updated_at = $4 \
              WHERE id = ( \
                    SELECT id FROM properties \
                     WHERE account_id = $1 AND key = $2 \
                     ORDER BY created_at \
                     LIMIT 1) \
              RETURNING id",
        )
        .bind(account_id)
        .bind(key)
        .bind(sanitize::escape(value))
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;

        match updated {
            Some((id,)) => Ok(Some(self.get_by_id(id).await?)),
            None => Ok(None),
        }
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Property, PropertyError> {
        let row: PropertyRow = sqlx::query_as(&format!("{POPULATED_SELECT} WHERE p.id = $1"))
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(row.into())
    }
}
