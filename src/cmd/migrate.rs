use sqlx::migrate::Migrator;

use crate::{conf::settings, pkg::state::db_pool, prelude::Result};

pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

pub async fn apply() -> Result<()> {
    let pool = db_pool(&settings.database_url, 1).await?;
    tracing::debug!("connected to db");

    MIGRATOR.run(&pool).await?;
    pool.close().await;

    tracing::info!("migrations applied to {}", &settings.database_url);
    println!("Migrations applied successfully");
    Ok(())
}
