mod statistic_repository;

pub use statistic_repository::{StatisticRepository, StatisticRepositoryError, StatisticResult};
