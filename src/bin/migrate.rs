use order_service::{
    config::AppConfig,
    db::{MIGRATIONS_DIR, create_orm_conn, run_migrations},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;
    let orm = create_orm_conn(&config.database_url).await?;
    run_migrations(&orm, MIGRATIONS_DIR).await?;
    println!("Migrations applied from {MIGRATIONS_DIR}/");
    Ok(())
}
