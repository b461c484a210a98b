//! Database schema and migrations for opine.
//!
//! This module contains all database migrations that will be applied
//! sequentially when the database is first opened or upgraded.

/// Database migrations.
///
/// Each migration is a SQL script that will be executed in order.
/// The schema_version table tracks which migrations have been applied.
#[cfg(feature = "sqlite")]
pub const MIGRATIONS: &[&str] = &[
    // v1: Initial schema - posts and comments tables
    r#"
-- Posts table for top-level content items
CREATE TABLE posts (
    id              INTEGER PRIMARY KEY AUTOINCREMENT,
    title           TEXT NOT NULL,
    text            TEXT NOT NULL,
    allow_comments  INTEGER NOT NULL DEFAULT 1,
    author          TEXT NOT NULL,
    created_at      TEXT NOT NULL
);

-- Comments table, flat per-post with an optional reply parent
CREATE TABLE comments (
    id                  INTEGER PRIMARY KEY AUTOINCREMENT,
    post_id             INTEGER NOT NULL REFERENCES posts(id),
    parent_comment_id   INTEGER,
    text                TEXT NOT NULL,
    author              TEXT NOT NULL,
    created_at          TEXT NOT NULL
);

CREATE INDEX idx_comments_post_id ON comments(post_id);
"#,
];

/// Database migrations (PostgreSQL variant).
#[cfg(feature = "postgres")]
pub const MIGRATIONS: &[&str] = &[
    // v1: Initial schema - posts and comments tables
    r#"
-- Posts table for top-level content items
CREATE TABLE posts (
    id              BIGSERIAL PRIMARY KEY,
    title           TEXT NOT NULL,
    text            TEXT NOT NULL,
    allow_comments  BOOLEAN NOT NULL DEFAULT TRUE,
    author          TEXT NOT NULL,
    created_at      TIMESTAMPTZ NOT NULL
);

-- Comments table, flat per-post with an optional reply parent
CREATE TABLE comments (
    id                  BIGSERIAL PRIMARY KEY,
    post_id             BIGINT NOT NULL REFERENCES posts(id),
    parent_comment_id   BIGINT,
    text                TEXT NOT NULL,
    author              TEXT NOT NULL,
    created_at          TIMESTAMPTZ NOT NULL
);

CREATE INDEX idx_comments_post_id ON comments(post_id);
"#,
];
