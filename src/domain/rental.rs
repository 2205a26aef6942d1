use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::{format_cents, format_datetime, Car, CarId, Cents};

/// How far ahead of pickup a rental may still be cancelled, in whole hours.
pub const CANCEL_WINDOW_HOURS: i64 = 24;

/// An active rental of one car. Rentals are immutable once created; a rental
/// ends by being removed from the ledger (return or cancellation).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rental {
    pub car_id: CarId,
    /// Model captured at creation so summaries need no fleet lookup.
    pub car_model: String,
    pub customer_name: String,
    pub pickup_time: NaiveDateTime,
    pub return_time: NaiveDateTime,
    /// Derived once at creation: whole days between pickup and return,
    /// times the car's daily rate. A sub-24h rental costs zero.
    pub total_cost: Cents,
}

impl Rental {
    /// Create a rental for `car`. Caller must ensure `return_time` is
    /// strictly after `pickup_time`; this is not re-validated here.
    pub fn new(
        car: &Car,
        customer_name: impl Into<String>,
        pickup_time: NaiveDateTime,
        return_time: NaiveDateTime,
    ) -> Self {
        // num_days truncates toward zero, so fractional days don't count.
        let days = (return_time - pickup_time).num_days();
        Self {
            car_id: car.car_id.clone(),
            car_model: car.model.clone(),
            customer_name: customer_name.into(),
            pickup_time,
            return_time,
            total_cost: days * car.daily_rate,
        }
    }

    /// Whether the rental may still be cancelled at `now`: pickup has not
    /// passed, and is at most 24 whole hours away.
    pub fn can_cancel_at(&self, now: NaiveDateTime) -> bool {
        let until_pickup = self.pickup_time - now;
        until_pickup >= chrono::Duration::zero()
            && until_pickup.num_hours() <= CANCEL_WINDOW_HOURS
    }

    /// `can_cancel_at` evaluated against the wall clock.
    pub fn can_cancel(&self) -> bool {
        self.can_cancel_at(Local::now().naive_local())
    }

    /// Whole hours until pickup (negative once pickup has passed).
    pub fn hours_until_pickup(&self, now: NaiveDateTime) -> i64 {
        (self.pickup_time - now).num_hours()
    }

    /// One-line human-readable summary of the rental.
    pub fn summary(&self) -> String {
        format!(
            "{} | {} | Pickup: {} | Return: {} | ${}",
            self.customer_name,
            self.car_model,
            format_datetime(self.pickup_time),
            format_datetime(self.return_time),
            format_cents(self.total_cost)
        )
    }
}
