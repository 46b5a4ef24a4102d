//! Migrator registering the glossary schema migrations in order.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_terms;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20240101_000001_create_terms::Migration)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm_migration::sea_orm::{ConnectOptions, Database, DatabaseConnection};

    async fn memory_db() -> DatabaseConnection {
        let mut opts = ConnectOptions::new("sqlite::memory:");
        opts.max_connections(1).min_connections(1).sqlx_logging(false);
        Database::connect(opts).await.expect("connect sqlite memory")
    }

    #[tokio::test]
    async fn up_is_idempotent() {
        let db = memory_db().await;
        Migrator::up(&db, None).await.expect("first up");
        Migrator::up(&db, None).await.expect("second up");

        let manager = SchemaManager::new(&db);
        assert!(manager.has_table("terms").await.unwrap());
        assert!(manager.has_index("terms", "idx_terms_term").await.unwrap());
        assert_eq!(Migrator::get_applied_migrations(&db).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn down_drops_terms_table() {
        let db = memory_db().await;
        Migrator::up(&db, None).await.unwrap();
        Migrator::down(&db, None).await.unwrap();

        let manager = SchemaManager::new(&db);
        assert!(!manager.has_table("terms").await.unwrap());
        assert!(Migrator::get_pending_migrations(&db).await.unwrap().len() == 1);
    }
}
