pub mod account;
pub mod database;
