pub mod fixture;

pub use fixture::{DataSnapshot, FixtureEntry, FixtureModel, Keyed, SaleFields};
