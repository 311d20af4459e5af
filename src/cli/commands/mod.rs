pub mod capture;
pub mod config;
pub mod day;
pub mod holidays;
pub mod init;
pub mod month;
pub mod week;
