pub mod car_repository;

pub use car_repository::{CarRepository, MySqlCarRepository};
