use ecommerce_cli::{
    config::AppConfig,
    db::{connect, run_migrations},
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env();
    let orm = connect(&config.database_url()?).await?;
    run_migrations(&orm, "migrations").await?;
    orm.close().await?;
    println!("Migrations applied");
    Ok(())
}
