pub mod domain;
pub mod ports;
pub mod services;
pub mod statistic_use_cases;
