pub mod database;
pub mod hashing;
pub mod jwt;
