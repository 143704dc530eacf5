//! Static city/country reference catalog.
//!
//! Lookup misses return empty slices rather than errors so callers stay
//! resilient to unselected or unknown inputs.

mod data;

pub use data::{CANADA, UNITED_STATES};

/// A city with its state/province and population
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct City {
    pub name: &'static str,
    pub state: &'static str,
    pub population: u64,
}

/// A state or province
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Province {
    pub code: &'static str,
    pub name: &'static str,
}

/// A country with its states and cities
#[derive(Debug, Clone, Copy)]
pub struct Country {
    pub code: &'static str,
    pub name: &'static str,
    pub states: &'static [Province],
    pub cities: &'static [City],
}

/// All countries in the catalog
pub fn countries() -> &'static [Country] {
    data::COUNTRIES
}

/// Look up a country by code (case-insensitive)
pub fn get(code: &str) -> Option<&'static Country> {
    data::COUNTRIES
        .iter()
        .find(|c| c.code.eq_ignore_ascii_case(code))
}

/// All cities for a country code; empty on unknown code
pub fn cities_for(code: &str) -> &'static [City] {
    get(code).map(|c| c.cities).unwrap_or(&[])
}

/// Cities in a country restricted to an exact state/province name
pub fn cities_in_state(code: &str, state: &str) -> Vec<City> {
    cities_for(code)
        .iter()
        .filter(|city| city.state == state)
        .copied()
        .collect()
}

/// States/provinces for a country code; empty on unknown code
pub fn states_for(code: &str) -> &'static [Province] {
    get(code).map(|c| c.states).unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_countries() {
        assert!(get("US").is_some());
        assert!(get("us").is_some());
        assert!(get("CA").is_some());
        assert!(get("DE").is_none());
    }

    #[test]
    fn test_unknown_code_yields_empty() {
        assert!(cities_for("ZZ").is_empty());
        assert!(states_for("ZZ").is_empty());
        assert!(cities_in_state("ZZ", "Texas").is_empty());
    }

    #[test]
    fn test_state_filter_is_exact() {
        let texas = cities_in_state("US", "Texas");
        assert!(!texas.is_empty());
        assert!(texas.iter().all(|c| c.state == "Texas"));

        // Case matters for state names
        assert!(cities_in_state("US", "texas").is_empty());
    }

    #[test]
    fn test_city_populations_present() {
        let cities = cities_for("US");
        let ny = cities.iter().find(|c| c.name == "New York").unwrap();
        assert_eq!(ny.population, 8_336_817);
        assert_eq!(ny.state, "New York");
    }

    #[test]
    fn test_states_cover_cities() {
        for country in countries() {
            for city in country.cities {
                assert!(
                    country.states.iter().any(|s| s.name == city.state),
                    "city {} references unlisted state {}",
                    city.name,
                    city.state
                );
            }
        }
    }
}
