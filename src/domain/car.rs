use serde::{Deserialize, Serialize};

use super::{format_cents, Cents};

/// Cars are identified by caller-supplied codes like `CAM123`, unique across
/// the fleet for the lifetime of the process.
pub type CarId = String;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Car {
    pub car_id: CarId,
    pub model: String,
    /// Flat daily rate in cents.
    pub daily_rate: Cents,
    pub available: bool,
}

impl Car {
    pub fn new(model: impl Into<String>, car_id: impl Into<CarId>, daily_rate: Cents) -> Self {
        Self {
            car_id: car_id.into(),
            model: model.into(),
            daily_rate,
            available: true,
        }
    }
}

impl std::fmt::Display for Car {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}) - ${}/day {}",
            self.model,
            self.car_id,
            format_cents(self.daily_rate),
            if self.available {
                "[Available]"
            } else {
                "[Rented]"
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_car_is_available() {
        let car = Car::new("Toyota Camry", "CAM123", 5000);
        assert!(car.available);
        assert_eq!(car.car_id, "CAM123");
        assert_eq!(car.daily_rate, 5000);
    }

    #[test]
    fn test_display_available() {
        let car = Car::new("Toyota Camry", "CAM123", 5000);
        assert_eq!(
            car.to_string(),
            "Toyota Camry (CAM123) - $50.00/day [Available]"
        );
    }

    #[test]
    fn test_display_rented() {
        let mut car = Car::new("Ford F-150", "F150", 7000);
        car.available = false;
        assert_eq!(car.to_string(), "Ford F-150 (F150) - $70.00/day [Rented]");
    }
}
