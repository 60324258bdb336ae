use sea_orm_migration::prelude::*;

mod m20260301_000001_create_groups;
mod m20260301_000002_create_locations;
mod m20260301_000003_create_labels;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_groups::Migration),
            Box::new(m20260301_000002_create_locations::Migration),
            Box::new(m20260301_000003_create_labels::Migration),
        ]
    }
}
