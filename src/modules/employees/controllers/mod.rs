mod employee_controller;

pub use employee_controller::configure;
