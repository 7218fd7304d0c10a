//! Vehicle classes and plate handling

use serde::{Deserialize, Serialize};

/// Vehicle class accepted by the facility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum VehicleType {
    Car,
    Bike,
    Truck,
}

impl VehicleType {
    pub const ALL: [VehicleType; 3] = [Self::Car, Self::Bike, Self::Truck];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Car => "Car",
            Self::Bike => "Bike",
            Self::Truck => "Truck",
        }
    }
}

impl std::fmt::Display for VehicleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Canonical form of a plate: surrounding whitespace removed, uppercase.
pub fn normalize_plate(plate: &str) -> String {
    plate.trim().to_uppercase()
}

/// Case-insensitive plate comparison.
pub fn same_plate(a: &str, b: &str) -> bool {
    normalize_plate(a) == normalize_plate(b)
}
