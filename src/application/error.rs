use thiserror::Error;

#[derive(Error, Debug)]
pub enum RentalError {
    #[error("Car not found: {0}")]
    CarNotFound(String),

    #[error("Car is already rented: {0}")]
    CarUnavailable(String),

    #[error("Car is not currently rented: {0}")]
    NotRented(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error(
        "Cannot cancel rental for {car_id}: pickup is {hours_until_pickup}h away \
         (cancellable only within 24h before pickup)"
    )]
    CancellationWindowExpired {
        car_id: String,
        hours_until_pickup: i64,
    },
}
