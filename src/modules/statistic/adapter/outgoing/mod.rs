pub mod sea_orm_entity;
mod statistic_repository_postgres;

pub use statistic_repository_postgres::StatisticRepositoryPostgres;
