//! crates/fitflix_core/src/catalog.rs
//!
//! The immutable set of cities, gyms and trainers the site serves, plus the
//! content-selection queries the pages run against it.
//!
//! A `Catalog` is validated once when it is built and never mutated
//! afterwards, so it can be shared across requests behind an `Arc` without
//! any locking.

use std::collections::HashSet;

use crate::domain::{City, Gym, MembershipPlan, ServiceOffering, Trainer};
use crate::ports::{PortError, PortResult};

/// Reasons a set of seed data cannot form a catalog.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
    #[error("The catalog must contain at least one city")]
    NoCities,
    #[error("Duplicate city id '{0}'")]
    DuplicateCity(String),
    #[error("Duplicate gym id {0}")]
    DuplicateGym(u32),
    #[error("Duplicate trainer id {0}")]
    DuplicateTrainer(u32),
    #[error("{entity} {id} references unknown city '{city}'")]
    UnknownCity {
        entity: &'static str,
        id: u32,
        city: String,
    },
    #[error("{entity} {id} has rating {rating}, expected 0 to 5")]
    RatingOutOfRange {
        entity: &'static str,
        id: u32,
        rating: f64,
    },
}

#[derive(Debug, Clone)]
pub struct Catalog {
    cities: Vec<City>,
    gyms: Vec<Gym>,
    trainers: Vec<Trainer>,
    services: Vec<ServiceOffering>,
    memberships: Vec<MembershipPlan>,
}

impl Catalog {
    /// Builds a catalog, checking that ids are unique, every gym and trainer
    /// belongs to a known city and ratings sit on the 0–5 scale.
    pub fn new(
        cities: Vec<City>,
        gyms: Vec<Gym>,
        trainers: Vec<Trainer>,
    ) -> Result<Self, CatalogError> {
        if cities.is_empty() {
            return Err(CatalogError::NoCities);
        }

        let mut city_ids = HashSet::new();
        for city in &cities {
            if !city_ids.insert(city.id.as_str()) {
                return Err(CatalogError::DuplicateCity(city.id.clone()));
            }
        }

        let mut gym_ids = HashSet::new();
        for gym in &gyms {
            if !gym_ids.insert(gym.id) {
                return Err(CatalogError::DuplicateGym(gym.id));
            }
            check_entry("Gym", gym.id, &gym.city, gym.rating, &city_ids)?;
        }

        let mut trainer_ids = HashSet::new();
        for trainer in &trainers {
            if !trainer_ids.insert(trainer.id) {
                return Err(CatalogError::DuplicateTrainer(trainer.id));
            }
            check_entry("Trainer", trainer.id, &trainer.city, trainer.rating, &city_ids)?;
        }

        Ok(Self {
            cities,
            gyms,
            trainers,
            services: Vec::new(),
            memberships: Vec::new(),
        })
    }

    /// Attaches the content of the static services and membership pages.
    pub fn with_pages(
        mut self,
        services: Vec<ServiceOffering>,
        memberships: Vec<MembershipPlan>,
    ) -> Self {
        self.services = services;
        self.memberships = memberships;
        self
    }

    //=====================================================================================
    // Cities
    //=====================================================================================

    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    /// The first city in the catalog, used for sessions that have not chosen one.
    pub fn default_city(&self) -> &City {
        // `new` refuses an empty city list.
        &self.cities[0]
    }

    pub fn find_city(&self, city_id: &str) -> PortResult<&City> {
        self.cities
            .iter()
            .find(|city| city.id == city_id)
            .ok_or_else(|| PortError::NotFound(format!("city '{}'", city_id)))
    }

    //=====================================================================================
    // Gyms and trainers
    //=====================================================================================

    /// Gyms in `city_id`, in catalog order. An unknown city simply yields nothing.
    pub fn list_gyms(&self, city_id: &str) -> Vec<&Gym> {
        self.gyms.iter().filter(|gym| gym.city == city_id).collect()
    }

    /// Trainers in `city_id`, in catalog order.
    pub fn list_trainers(&self, city_id: &str) -> Vec<&Trainer> {
        self.trainers
            .iter()
            .filter(|trainer| trainer.city == city_id)
            .collect()
    }

    pub fn find_trainer_by_id(&self, id: u32) -> PortResult<&Trainer> {
        self.trainers
            .iter()
            .find(|trainer| trainer.id == id)
            .ok_or_else(|| PortError::NotFound(format!("trainer {}", id)))
    }

    /// The first `n` gyms in catalog order. Not sorted by rating.
    pub fn top_gyms(&self, n: usize) -> &[Gym] {
        &self.gyms[..n.min(self.gyms.len())]
    }

    /// The first `n` trainers in catalog order. Not sorted by rating.
    pub fn top_trainers(&self, n: usize) -> &[Trainer] {
        &self.trainers[..n.min(self.trainers.len())]
    }

    pub fn gyms(&self) -> &[Gym] {
        &self.gyms
    }

    pub fn trainers(&self) -> &[Trainer] {
        &self.trainers
    }

    //=====================================================================================
    // Static page content
    //=====================================================================================

    pub fn services(&self) -> &[ServiceOffering] {
        &self.services
    }

    pub fn memberships(&self) -> &[MembershipPlan] {
        &self.memberships
    }
}

fn check_entry(
    entity: &'static str,
    id: u32,
    city: &str,
    rating: f64,
    city_ids: &HashSet<&str>,
) -> Result<(), CatalogError> {
    if !city_ids.contains(city) {
        return Err(CatalogError::UnknownCity {
            entity,
            id,
            city: city.to_string(),
        });
    }
    if !(0.0..=5.0).contains(&rating) {
        return Err(CatalogError::RatingOutOfRange { entity, id, rating });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;
    use proptest::prelude::*;

    fn city(id: &str) -> City {
        City {
            id: id.to_string(),
            name: id.to_uppercase(),
            state: "Somewhere".to_string(),
        }
    }

    fn gym(id: u32, city: &str) -> Gym {
        Gym {
            id,
            name: format!("Gym {}", id),
            location: "Main Street".to_string(),
            city: city.to_string(),
            rating: 4.0,
            image: String::new(),
        }
    }

    fn trainer(id: u32, city: &str) -> Trainer {
        Trainer {
            id,
            name: format!("Trainer {}", id),
            specialization: "Boxing".to_string(),
            experience: "3 years".to_string(),
            city: city.to_string(),
            rating: 4.5,
            image: String::new(),
        }
    }

    #[test]
    fn seeded_catalog_is_valid() {
        let catalog = seed::catalog().unwrap();
        assert_eq!(catalog.cities().len(), 6);
        assert_eq!(catalog.default_city().id, "mumbai");
        assert_eq!(catalog.gyms().len(), 3);
        assert_eq!(catalog.trainers().len(), 3);
        assert!(!catalog.services().is_empty());
        assert!(!catalog.memberships().is_empty());
    }

    #[test]
    fn list_gyms_filters_by_city_in_catalog_order() {
        let catalog = Catalog::new(
            vec![city("a"), city("b")],
            vec![gym(1, "a"), gym(2, "b"), gym(3, "a")],
            vec![],
        )
        .unwrap();

        let ids: Vec<u32> = catalog.list_gyms("a").iter().map(|g| g.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert!(catalog.list_gyms("nowhere").is_empty());
        assert!(catalog.list_gyms("").is_empty());
    }

    #[test]
    fn list_trainers_for_seeded_delhi() {
        let catalog = seed::catalog().unwrap();
        let trainers = catalog.list_trainers("delhi");
        assert_eq!(trainers.len(), 1);
        assert_eq!(trainers[0].name, "Priya Singh");
        assert!(catalog.list_trainers("pune").is_empty());
    }

    #[test]
    fn find_trainer_by_id_hits_and_misses() {
        let catalog = seed::catalog().unwrap();
        for trainer in catalog.trainers() {
            assert_eq!(catalog.find_trainer_by_id(trainer.id).unwrap().id, trainer.id);
        }
        assert!(matches!(
            catalog.find_trainer_by_id(999),
            Err(PortError::NotFound(_))
        ));
    }

    #[test]
    fn top_n_keeps_catalog_order_and_clamps() {
        let catalog = Catalog::new(
            vec![city("a")],
            vec![gym(7, "a"), gym(3, "a")],
            vec![trainer(5, "a")],
        )
        .unwrap();

        let ids: Vec<u32> = catalog.top_gyms(3).iter().map(|g| g.id).collect();
        assert_eq!(ids, vec![7, 3]);
        assert_eq!(catalog.top_gyms(1)[0].id, 7);
        assert!(catalog.top_gyms(0).is_empty());
        assert_eq!(catalog.top_trainers(10).len(), 1);
    }

    #[test]
    fn find_city_reports_missing_ids() {
        let catalog = seed::catalog().unwrap();
        assert_eq!(catalog.find_city("pune").unwrap().name, "Pune");
        assert_eq!(
            catalog.find_city("atlantis"),
            Err(PortError::NotFound("city 'atlantis'".to_string()))
        );
    }

    #[test]
    fn rejects_invalid_seed_data() {
        assert_eq!(
            Catalog::new(vec![], vec![], vec![]).unwrap_err(),
            CatalogError::NoCities
        );
        assert_eq!(
            Catalog::new(vec![city("a"), city("a")], vec![], vec![]).unwrap_err(),
            CatalogError::DuplicateCity("a".to_string())
        );
        assert_eq!(
            Catalog::new(vec![city("a")], vec![gym(1, "a"), gym(1, "a")], vec![]).unwrap_err(),
            CatalogError::DuplicateGym(1)
        );
        assert_eq!(
            Catalog::new(
                vec![city("a")],
                vec![],
                vec![trainer(2, "a"), trainer(2, "a")]
            )
            .unwrap_err(),
            CatalogError::DuplicateTrainer(2)
        );
        assert!(matches!(
            Catalog::new(vec![city("a")], vec![gym(1, "b")], vec![]),
            Err(CatalogError::UnknownCity { entity: "Gym", id: 1, .. })
        ));

        let mut overrated = trainer(4, "a");
        overrated.rating = 5.5;
        assert!(matches!(
            Catalog::new(vec![city("a")], vec![], vec![overrated]),
            Err(CatalogError::RatingOutOfRange { entity: "Trainer", id: 4, .. })
        ));
    }

    proptest! {
        #[test]
        fn gyms_partition_by_city(assignments in prop::collection::vec(0usize..4, 0..40)) {
            let cities: Vec<City> = ["a", "b", "c", "d"].iter().map(|id| city(id)).collect();
            let gyms: Vec<Gym> = assignments
                .iter()
                .enumerate()
                .map(|(i, c)| gym(i as u32, &cities[*c].id))
                .collect();
            let catalog = Catalog::new(cities, gyms, vec![]).unwrap();

            let mut seen = Vec::new();
            for city in catalog.cities() {
                for gym in catalog.list_gyms(&city.id) {
                    prop_assert_eq!(&gym.city, &city.id);
                    seen.push(gym.id);
                }
            }
            seen.sort_unstable();
            let all: Vec<u32> = catalog.gyms().iter().map(|g| g.id).collect();
            prop_assert_eq!(seen, all);
        }
    }
}
