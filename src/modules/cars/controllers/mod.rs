mod car_controller;

pub use car_controller::configure;
