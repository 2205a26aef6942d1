mod car;
mod datetime;
mod money;
mod rental;

pub use car::*;
pub use datetime::*;
pub use money::*;
pub use rental::*;
