pub mod application;
pub mod cli;
pub mod domain;

pub use application::{RentalError, RentalLedger};
pub use domain::*;
