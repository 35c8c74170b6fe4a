pub use sea_orm_migration::prelude::*;

mod m20250901_000001_create_members;
mod m20250901_000002_create_driving_records;
mod m20250901_000003_create_reset_tokens;
mod m20250901_000004_create_quiz;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250901_000001_create_members::Migration),
            Box::new(m20250901_000002_create_driving_records::Migration),
            Box::new(m20250901_000003_create_reset_tokens::Migration),
            Box::new(m20250901_000004_create_quiz::Migration),
        ]
    }
}
