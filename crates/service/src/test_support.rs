#![cfg(test)]
use migration::MigratorTrait;
use models::db::connect_with_config;
use sea_orm::DatabaseConnection;
use tokio::sync::OnceCell;

// Ensure migrations run only once across the entire test process
static MIGRATED: OnceCell<()> = OnceCell::const_new();

/// Connection for DB-backed tests; `None` means the test should skip
/// (SKIP_DB_TESTS set, or no database reachable).
pub async fn get_db() -> Result<Option<DatabaseConnection>, anyhow::Error> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(None);
    }
    let mut cfg = configs::DatabaseConfig::default();
    cfg.normalize_from_env();
    let db = match connect_with_config(&cfg).await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("skip: cannot connect to db: {e}");
            return Ok(None);
        }
    };
    MIGRATED
        .get_or_try_init(|| async {
            migration::Migrator::up(&db, None).await.map_err(anyhow::Error::from)
        })
        .await?;
    Ok(Some(db))
}
