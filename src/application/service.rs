use std::collections::HashMap;

use chrono::NaiveDateTime;

use crate::domain::{Car, CarId, Rental};

use super::RentalError;

/// Application service holding the fleet and the active rentals.
/// This is the primary interface for any client (CLI, TUI, test harness).
///
/// Availability is kept in lockstep with the rental map: a car is
/// unavailable iff `active` holds exactly one rental under its id.
pub struct RentalLedger {
    fleet: Vec<Car>,
    active: HashMap<CarId, Rental>,
}

impl RentalLedger {
    /// Create a ledger over the given fleet. Car ids are assumed unique.
    pub fn new(fleet: Vec<Car>) -> Self {
        Self {
            fleet,
            active: HashMap::new(),
        }
    }

    /// Create a ledger seeded with the demo fleet.
    pub fn with_demo_fleet() -> Self {
        Self::new(vec![
            Car::new("Toyota Camry", "CAM123", 5000),
            Car::new("Honda Civic", "CIV456", 4500),
            Car::new("Ford F-150", "F150", 7000),
        ])
    }

    fn car_index(&self, car_id: &str) -> Result<usize, RentalError> {
        self.fleet
            .iter()
            .position(|car| car.car_id == car_id)
            .ok_or_else(|| RentalError::CarNotFound(car_id.to_string()))
    }

    // ========================
    // Rental operations
    // ========================

    /// Rent a car to a customer. All checks run before any mutation, so a
    /// failed call leaves the ledger untouched.
    pub fn rent(
        &mut self,
        car_id: &str,
        customer_name: &str,
        pickup_time: NaiveDateTime,
        return_time: NaiveDateTime,
    ) -> Result<Rental, RentalError> {
        let idx = self.car_index(car_id)?;
        if !self.fleet[idx].available {
            return Err(RentalError::CarUnavailable(car_id.to_string()));
        }
        if customer_name.trim().is_empty() {
            return Err(RentalError::InvalidInput(
                "customer name must not be empty".to_string(),
            ));
        }
        if return_time <= pickup_time {
            return Err(RentalError::InvalidInput(
                "return time must be strictly after pickup time".to_string(),
            ));
        }

        let rental = Rental::new(&self.fleet[idx], customer_name, pickup_time, return_time);
        self.fleet[idx].available = false;
        self.active.insert(rental.car_id.clone(), rental.clone());
        Ok(rental)
    }

    /// Return a rented car. Unconditional: no time-window check applies.
    pub fn return_car(&mut self, car_id: &str) -> Result<(), RentalError> {
        let idx = self.car_index(car_id)?;
        if self.fleet[idx].available {
            return Err(RentalError::NotRented(car_id.to_string()));
        }

        self.active.remove(&self.fleet[idx].car_id);
        self.fleet[idx].available = true;
        Ok(())
    }

    /// Cancel an active rental, allowed only within the 24h window before
    /// pickup. `now` is supplied by the caller so the check is deterministic.
    pub fn cancel(&mut self, car_id: &str, now: NaiveDateTime) -> Result<(), RentalError> {
        let idx = self.car_index(car_id)?;
        if self.fleet[idx].available {
            return Err(RentalError::NotRented(car_id.to_string()));
        }

        let rental = self
            .active
            .get(&self.fleet[idx].car_id)
            .ok_or_else(|| RentalError::NotRented(car_id.to_string()))?;

        if !rental.can_cancel_at(now) {
            return Err(RentalError::CancellationWindowExpired {
                car_id: car_id.to_string(),
                hours_until_pickup: rental.hours_until_pickup(now),
            });
        }

        self.active.remove(&self.fleet[idx].car_id);
        self.fleet[idx].available = true;
        Ok(())
    }

    // ========================
    // Queries
    // ========================

    /// The fleet in its seeded order, with current availability.
    pub fn fleet(&self) -> &[Car] {
        &self.fleet
    }

    /// Iterate over all active rentals. Restartable (call again for a fresh
    /// pass); no order is guaranteed.
    pub fn active_rentals(&self) -> impl Iterator<Item = &Rental> {
        self.active.values()
    }

    /// The active rental for a car, if any.
    pub fn rental_for(&self, car_id: &str) -> Option<&Rental> {
        self.active.get(car_id)
    }
}
