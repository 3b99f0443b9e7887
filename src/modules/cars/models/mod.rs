mod car;

pub use car::{Car, CarInput, MIN_CAR_YEAR};
