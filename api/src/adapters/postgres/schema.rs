//! Startup schema
//!
//! Applies the SQL under `migrations/` one statement at a time. Every statement
//! uses `if not exists`, so running it against an existing database is a no-op.

use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr};

const SCHEMA: &str = include_str!("../../../migrations/0001_create_accounts_and_rides.sql");

/// Create the tables and indexes if they are missing
pub async fn apply_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let mut applied = 0;
    for statement in statements(SCHEMA) {
        db.execute_unprepared(&statement).await?;
        applied += 1;
    }

    tracing::info!(statements = applied, "Database schema applied");
    Ok(())
}

/// Split a script on `;`, dropping `--` comment lines and empty statements
fn statements(script: &str) -> Vec<String> {
    script
        .split(';')
        .map(|chunk| {
            chunk
                .lines()
                .filter(|line| !line.trim_start().starts_with("--"))
                .collect::<Vec<_>>()
                .join("\n")
                .trim()
                .to_string()
        })
        .filter(|statement| !statement.is_empty())
        .collect()
}
