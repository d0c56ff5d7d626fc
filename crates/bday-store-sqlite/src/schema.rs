//! SQL schema for the birthday bot SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS users (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    telegram_id INTEGER NOT NULL UNIQUE,
    first_name  TEXT NOT NULL DEFAULT '',
    last_name   TEXT NOT NULL DEFAULT '',
    birth_date  TEXT                -- YYYY-MM-DD, NULL while unknown
);

-- Directed edges: subscriber_id follows subscribed_to_id's birthday.
-- The subscriber does not need a users row of its own.
CREATE TABLE IF NOT EXISTS subscriptions (
    id               INTEGER PRIMARY KEY AUTOINCREMENT,
    subscriber_id    INTEGER NOT NULL,
    subscribed_to_id INTEGER NOT NULL REFERENCES users(telegram_id),
    UNIQUE (subscriber_id, subscribed_to_id)
);

CREATE INDEX IF NOT EXISTS subscriptions_target_idx ON subscriptions(subscribed_to_id);

PRAGMA user_version = 1;
";
