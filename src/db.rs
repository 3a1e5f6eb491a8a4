use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};
use tokio::fs;

pub const MIGRATIONS_DIR: &str = "migrations";

/// Open the SeaORM connection pool shared by every request handler.
pub async fn create_orm_conn(database_url: &str) -> Result<DatabaseConnection> {
    let mut options = ConnectOptions::new(database_url.to_owned());
    options.sqlx_logging(false);
    let conn = Database::connect(options)
        .await
        .context("connect to database")?;
    Ok(conn)
}

/// Executes every `.sql` file under `dir` in filename order.
///
/// Migration files are expected to be idempotent (`IF NOT EXISTS`), since the
/// server applies them on every start.
pub async fn run_migrations(conn: &DatabaseConnection, dir: impl AsRef<Path>) -> Result<()> {
    let dir = dir.as_ref();
    let mut entries = fs::read_dir(dir)
        .await
        .with_context(|| format!("read migrations dir {}", dir.display()))?;
    let mut files: Vec<PathBuf> = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "sql") {
            files.push(path);
        }
    }
    files.sort();

    let backend = conn.get_database_backend();
    for file in files {
        let sql = fs::read_to_string(&file).await?;
        // Postgres prepared statements cannot contain multiple commands,
        // so split the migration file and run each statement individually.
        for stmt in sql.split(';') {
            let stmt = stmt.trim();
            if stmt.is_empty() {
                continue;
            }
            conn.execute(Statement::from_string(backend, format!("{stmt};")))
                .await
                .with_context(|| format!("apply migration {}", file.display()))?;
        }
        tracing::debug!(file = %file.display(), "migration applied");
    }

    Ok(())
}
