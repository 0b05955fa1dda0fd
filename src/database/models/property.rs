use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::account::Account;

/// A single key/value property, always serialized with its owning account
/// populated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Property {
    pub id: Uuid,
    pub account: Account,
    pub key: String,
    pub value: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Flat join row: property columns plus the owning account's columns
/// aliased with an `account_` prefix.
#[derive(Debug, Clone, FromRow)]
pub struct PropertyRow {
    pub id: Uuid,
    pub key: String,
    pub value: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub account_id: String,
    pub account_username: String,
    pub account_created_at: DateTime<Utc>,
    pub account_updated_at: DateTime<Utc>,
}

impl From<PropertyRow> for Property {
    fn from(row: PropertyRow) -> Self {
        Property {
            id: row.id,
            key: row.key,
            value: row.value,
            active: row.active,
            created_at: row.created_at,
            updated_at: row.updated_at,
            account: Account {
                id: row.account_id,
                username: row.account_username,
                created_at: row.account_created_at,
                updated_at: row.account_updated_at,
            },
        }
    }
}
