mod utils;

pub use sea_orm_migration::prelude::*;

mod m20241018_000001_create_users_table;
mod m20241018_000002_create_instructors_table;
mod m20241018_000003_create_courses_table;
mod m20241018_000004_create_students_table;
mod m20241018_000005_create_enrollments_table;
mod m20241018_000006_create_transactions_table;
mod m20241018_000007_create_reviews_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20241018_000001_create_users_table::Migration),
            Box::new(m20241018_000002_create_instructors_table::Migration),
            Box::new(m20241018_000003_create_courses_table::Migration),
            Box::new(m20241018_000004_create_students_table::Migration),
            Box::new(m20241018_000005_create_enrollments_table::Migration),
            Box::new(m20241018_000006_create_transactions_table::Migration),
            Box::new(m20241018_000007_create_reviews_table::Migration),
        ]
    }
}
