use std::time::Instant;

use migration::{count_applied_migrations, migrate, MigrationCommand};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};
use tracing::{debug, info};

use crate::config::db::{db_url, DbProfile, DbSettings};
use crate::error::AppError;

/// Open a SQLite pool for `settings`. Does NOT run any migrations.
///
/// The pool holds a single connection: an in-memory database only exists
/// on the connection that created it, and SQLite admits one writer at a
/// time anyway.
pub async fn connect_db(settings: &DbSettings) -> Result<DatabaseConnection, AppError> {
    let url = db_url(&settings.profile);
    let busy_timeout = settings.busy_timeout;

    let mut opts = ConnectOptions::new(url);
    opts.max_connections(1)
        .min_connections(1)
        .acquire_timeout(busy_timeout)
        .sqlx_logging(false)
        .map_sqlx_sqlite_opts(move |o| o.foreign_keys(true).busy_timeout(busy_timeout));

    let conn = Database::connect(opts).await?;
    log_pragma_snapshot(&conn).await?;
    Ok(conn)
}

/// Connect and bring the schema up to date. Used once at startup; request
/// handling never migrates.
pub async fn bootstrap_db(settings: &DbSettings) -> Result<DatabaseConnection, AppError> {
    let started = Instant::now();
    let conn = connect_db(settings).await?;

    migrate(&conn, MigrationCommand::Up).await?;
    let applied = count_applied_migrations(&conn).await?;

    info!(
        profile = profile_label(&settings.profile),
        applied_migrations = applied,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "database ready"
    );
    Ok(conn)
}

fn profile_label(profile: &DbProfile) -> &'static str {
    match profile {
        DbProfile::InMemory => "memory",
        DbProfile::File(_) => "file",
    }
}

async fn log_pragma_snapshot<C: ConnectionTrait>(conn: &C) -> Result<(), AppError> {
    let backend = conn.get_database_backend();
    let mut values = Vec::with_capacity(3);
    for pragma in ["foreign_keys", "busy_timeout", "journal_mode"] {
        let row = conn
            .query_one(Statement::from_string(backend, format!("PRAGMA {pragma}")))
            .await?;
        let value = row
            .and_then(|r| {
                r.try_get_by_index::<i64>(0)
                    .map(|v| v.to_string())
                    .or_else(|_| r.try_get_by_index::<String>(0))
                    .ok()
            })
            .unwrap_or_else(|| "<unknown>".to_string());
        values.push(format!("{pragma}={value}"));
    }
    debug!(pragmas = %values.join(" "), "sqlite connection opened");
    Ok(())
}
