//! Database migrations module

pub use sea_orm_migration::prelude::*;

mod m20241202_000001_create_bags;
mod m20241202_000002_create_tags;
mod m20241202_000003_create_entrupy_items;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20241202_000001_create_bags::Migration),
            Box::new(m20241202_000002_create_tags::Migration),
            Box::new(m20241202_000003_create_entrupy_items::Migration),
        ]
    }
}
