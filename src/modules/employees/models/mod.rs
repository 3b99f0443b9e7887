mod employee;

pub use employee::{is_valid_email, is_valid_phone, Employee, EmployeeInput};
