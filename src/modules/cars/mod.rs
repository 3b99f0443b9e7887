// Cars module

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{Car, CarInput};
pub use repositories::{CarRepository, MySqlCarRepository};
pub use services::CarService;
