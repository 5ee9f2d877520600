use serde::Serialize;
use sqlx::FromRow;
use time::OffsetDateTime;

/// Full user row as persisted. Not `Serialize`: responses go through
/// `PublicUser` or `UserSummary`, so the hash cannot leak.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,                    // assigned by SQLite, never reused
    pub username: String,
    pub email: String,
    #[sqlx(rename = "password")]
    pub password_hash: String,      // argon2 PHC string, never plaintext
    pub created_at: OffsetDateTime,
}

/// Password-free projection served by `GET /api/users`.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}
