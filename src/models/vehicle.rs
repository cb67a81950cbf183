use serde::{Deserialize, Serialize};
use std::fmt;

/// Vehicle category recognized by the game's paint job system.
///
/// The category is load-bearing: trucks and owned trailers use different
/// texture file naming conventions and different definition subtrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleType {
    Truck,
    TrailerOwned,
}

impl VehicleType {
    /// Path segment used under `vehicle/` and `def/vehicle/`.
    pub fn path_segment(self) -> &'static str {
        match self {
            VehicleType::Truck => "truck",
            VehicleType::TrailerOwned => "trailer_owned",
        }
    }

    /// Suffix appended to the paint ID to form the texture base file name.
    ///
    /// The game engine expects `_0` for truck paint jobs and `_shared` for
    /// owned-trailer paint jobs.
    pub fn texture_suffix(self) -> &'static str {
        match self {
            VehicleType::Truck => "_0",
            VehicleType::TrailerOwned => "_shared",
        }
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VehicleType::Truck => write!(f, "truck"),
            VehicleType::TrailerOwned => write!(f, "owned trailer"),
        }
    }
}

/// A single entry of the vehicle catalog.
///
/// Immutable reference data: the internal name is the game's identifier
/// (unique within its type), the display name is for user-facing output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VehicleDefinition {
    pub internal_name: String,
    pub display_name: String,
    pub vehicle_type: VehicleType,
}

impl VehicleDefinition {
    pub fn new(
        internal_name: impl Into<String>,
        display_name: impl Into<String>,
        vehicle_type: VehicleType,
    ) -> Self {
        Self {
            internal_name: internal_name.into(),
            display_name: display_name.into(),
            vehicle_type,
        }
    }
}

impl fmt::Display for VehicleDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.display_name, self.internal_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_segments() {
        assert_eq!(VehicleType::Truck.path_segment(), "truck");
        assert_eq!(VehicleType::TrailerOwned.path_segment(), "trailer_owned");
    }

    #[test]
    fn test_texture_suffixes() {
        assert_eq!(VehicleType::Truck.texture_suffix(), "_0");
        assert_eq!(VehicleType::TrailerOwned.texture_suffix(), "_shared");
    }

    #[test]
    fn test_definition_display() {
        let def = VehicleDefinition::new("scania.s_2016", "Scania S 2016", VehicleType::Truck);
        assert_eq!(def.to_string(), "Scania S 2016 (scania.s_2016)");
    }
}
