//! Dump every stored term, oldest first.

use models::term;
use sea_orm::{EntityTrait, QueryOrder};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    common::utils::logging::init_logging_from_env();

    let db = models::db::connect().await?;
    let rows = term::Entity::find()
        .order_by_asc(term::Column::Id)
        .all(&db)
        .await?;
    info!(count = rows.len(), "loaded terms");

    println!("Terms in database:");
    for t in rows {
        println!("ID: {}, Term: {}, Description: {}", t.id, t.term, t.description);
    }
    Ok(())
}
