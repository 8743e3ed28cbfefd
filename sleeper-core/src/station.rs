use serde::{Deserialize, Serialize};
use crate::{CoreError, CoreResult};

// ============================================================================
// Fixed Route Stations (Ahmedabad -> Mumbai corridor)
// ============================================================================

/// Stations served by the coach, in travel order.
pub const STATIONS: [&str; 10] = [
    "Ahmedabad (Paldi)",
    "Nadiad",
    "Anand",
    "Vadodara",
    "Bharuch",
    "Surat",
    "Navsari",
    "Valsad",
    "Vapi",
    "Mumbai (Dadar)",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Station {
    /// 1-based position along the route
    pub sequence: u32,
    pub name: String,
}

/// Returns the stations with their 1-based sequence numbers.
pub fn all_stations() -> Vec<Station> {
    STATIONS
        .iter()
        .enumerate()
        .map(|(index, name)| Station {
            sequence: index as u32 + 1,
            name: (*name).to_string(),
        })
        .collect()
}

/// Zero-based position of a station name, or `None` if it is not on the route.
pub fn station_index(name: &str) -> Option<usize> {
    STATIONS.iter().position(|station| *station == name)
}

/// A validated pickup/drop pair. Pickup always precedes drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pickup_index: usize,
    drop_index: usize,
}

impl Route {
    pub fn resolve(pickup: &str, drop: &str) -> CoreResult<Self> {
        let pickup_index = station_index(pickup)
            .ok_or_else(|| CoreError::InvalidRoute(format!("unknown pickup station '{}'", pickup)))?;
        let drop_index = station_index(drop)
            .ok_or_else(|| CoreError::InvalidRoute(format!("unknown drop station '{}'", drop)))?;

        if pickup_index >= drop_index {
            return Err(CoreError::InvalidRoute(format!(
                "pickup '{}' must come before drop '{}'",
                pickup, drop
            )));
        }

        Ok(Self { pickup_index, drop_index })
    }

    pub fn pickup_station(&self) -> &'static str {
        STATIONS[self.pickup_index]
    }

    pub fn drop_station(&self) -> &'static str {
        STATIONS[self.drop_index]
    }
}

impl Default for Route {
    /// Full corridor: first station to last.
    fn default() -> Self {
        Self {
            pickup_index: 0,
            drop_index: STATIONS.len() - 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stations_are_numbered_from_one() {
        let stations = all_stations();
        assert_eq!(stations.len(), 10);
        assert_eq!(stations[0], Station { sequence: 1, name: "Ahmedabad (Paldi)".to_string() });
        assert_eq!(stations[9].sequence, 10);
        assert_eq!(stations[9].name, "Mumbai (Dadar)");
    }

    #[test]
    fn test_default_route_spans_corridor() {
        let route = Route::default();
        assert_eq!(route.pickup_station(), "Ahmedabad (Paldi)");
        assert_eq!(route.drop_station(), "Mumbai (Dadar)");
    }

    #[test]
    fn test_resolve_forward_route() {
        let route = Route::resolve("Nadiad", "Surat").unwrap();
        assert_eq!(route.pickup_station(), "Nadiad");
        assert_eq!(route.drop_station(), "Surat");
    }

    #[test]
    fn test_resolve_rejects_backward_and_same_station() {
        assert!(matches!(Route::resolve("Surat", "Nadiad"), Err(CoreError::InvalidRoute(_))));
        assert!(matches!(Route::resolve("Anand", "Anand"), Err(CoreError::InvalidRoute(_))));
    }

    #[test]
    fn test_resolve_rejects_unknown_station() {
        let err = Route::resolve("Pune", "Surat").unwrap_err();
        assert_eq!(err, CoreError::InvalidRoute("unknown pickup station 'Pune'".to_string()));
        assert!(Route::resolve("Nadiad", "mumbai").is_err());
    }
}
