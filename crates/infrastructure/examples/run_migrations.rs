use infrastructure::AppConfig;
use migration::MigratorTrait;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenv::dotenv().ok();

    let config = AppConfig::load("config")?;
    let Some(database_url) = config.remote_url() else {
        println!("No remote database configured (FACILITY__REMOTE__DATABASE_URL); nothing to migrate.");
        return Ok(());
    };

    println!("Connecting to database...");
    let connection = infrastructure::database::connect(database_url, 1).await?;

    println!("Running migrations...");
    migration::Migrator::up(&connection, None).await?;

    println!("✅ Migrations applied successfully.");

    Ok(())
}
