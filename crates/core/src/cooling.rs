use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A cooling solution with its case-to-ambient thermal resistance and the
/// steady-state power it can remove within its rated envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoolingProfile {
    pub id: String,
    pub name: String,
    /// Case-to-ambient thermal resistance in °C/W.
    pub thermal_resistance: f64,
    /// Cooling budget in W.
    pub cooling_budget: f64,
}

/// Errors that can occur when looking up a cooling profile.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("unknown cooling profile `{id}`")]
    UnknownProfile { id: String },
}

/// A read-only collection of cooling profiles addressed by id.
///
/// The engine only ever reads the single entry named by a run's parameters;
/// it never mutates the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    profiles: Vec<CoolingProfile>,
}

impl Catalog {
    /// Creates a catalog from an explicit list of profiles.
    #[must_use]
    pub fn from_profiles(profiles: Vec<CoolingProfile>) -> Self {
        Self { profiles }
    }

    /// Returns the built-in cooling options.
    #[must_use]
    pub fn builtin() -> Self {
        let profile = |id: &str, name: &str, thermal_resistance: f64, cooling_budget: f64| {
            CoolingProfile {
                id: id.to_string(),
                name: name.to_string(),
                thermal_resistance,
                cooling_budget,
            }
        };

        Self::from_profiles(vec![
            profile("bare", "Bare package (no heatsink)", 50.0, 2.0),
            profile("clip-heatsink", "Clip-on heatsink", 20.0, 6.0),
            profile("extruded-heatsink", "Extruded heatsink", 8.0, 15.0),
            profile("heatsink-fan", "Heatsink with forced air", 2.5, 60.0),
            profile("cold-plate", "Liquid cold plate", 0.3, 500.0),
        ])
    }

    /// Looks up a profile by id.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownProfile`] if no profile has the id.
    pub fn get(&self, id: &str) -> Result<&CoolingProfile, CatalogError> {
        self.profiles
            .iter()
            .find(|profile| profile.id == id)
            .ok_or_else(|| CatalogError::UnknownProfile { id: id.to_string() })
    }

    /// Iterates over all profiles.
    pub fn iter(&self) -> impl Iterator<Item = &CoolingProfile> {
        self.profiles.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn builtin_lookup_by_id() {
        let catalog = Catalog::builtin();
        let profile = catalog.get("heatsink-fan").expect("known profile");

        assert_eq!(profile.name, "Heatsink with forced air");
        assert_relative_eq!(profile.thermal_resistance, 2.5);
        assert_relative_eq!(profile.cooling_budget, 60.0);
    }

    #[test]
    fn unknown_id_errors() {
        let catalog = Catalog::builtin();
        let err = catalog.get("peltier");

        assert_eq!(
            err,
            Err(CatalogError::UnknownProfile {
                id: "peltier".to_string()
            })
        );
    }

    #[test]
    fn iterates_all_profiles() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.iter().count(), 5);
    }
}
