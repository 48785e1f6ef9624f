//! crates/fitflix_core/src/seed.rs
//!
//! The catalog the site ships with.

use crate::catalog::{Catalog, CatalogError};
use crate::domain::{City, Gym, MembershipPlan, ServiceOffering, Trainer};

/// Builds the shipped catalog. Fails only if the data below is edited into an
/// inconsistent state.
pub fn catalog() -> Result<Catalog, CatalogError> {
    Ok(Catalog::new(cities(), gyms(), trainers())?.with_pages(services(), memberships()))
}

fn cities() -> Vec<City> {
    [
        ("mumbai", "Mumbai", "Maharashtra"),
        ("delhi", "Delhi", "Delhi"),
        ("bangalore", "Bangalore", "Karnataka"),
        ("hyderabad", "Hyderabad", "Telangana"),
        ("pune", "Pune", "Maharashtra"),
        ("chennai", "Chennai", "Tamil Nadu"),
    ]
    .into_iter()
    .map(|(id, name, state)| City {
        id: id.to_string(),
        name: name.to_string(),
        state: state.to_string(),
    })
    .collect()
}

fn gyms() -> Vec<Gym> {
    [
        (1, "FitZone Premium", "Bandra West", "mumbai", 4.8, "1552242"),
        (2, "PowerHouse Gym", "Connaught Place", "delhi", 4.6, "1552252"),
        (3, "Elite Fitness", "Koramangala", "bangalore", 4.9, "1552106"),
    ]
    .into_iter()
    .map(|(id, name, location, city, rating, photo)| Gym {
        id,
        name: name.to_string(),
        location: location.to_string(),
        city: city.to_string(),
        rating,
        image: pexels(photo),
    })
    .collect()
}

fn trainers() -> Vec<Trainer> {
    [
        (1, "Rahul Sharma", "Strength Training", "8 years", "mumbai", 4.9, "1431282"),
        (2, "Priya Singh", "Yoga & Pilates", "6 years", "delhi", 4.8, "3757942"),
        (3, "Arjun Patel", "CrossFit", "5 years", "bangalore", 4.7, "1431283"),
    ]
    .into_iter()
    .map(|(id, name, specialization, experience, city, rating, photo)| Trainer {
        id,
        name: name.to_string(),
        specialization: specialization.to_string(),
        experience: experience.to_string(),
        city: city.to_string(),
        rating,
        image: pexels(photo),
    })
    .collect()
}

fn services() -> Vec<ServiceOffering> {
    [
        (
            "gym-access",
            "Gym Access",
            "Day passes and memberships at partner gyms across your city.",
            "bi-building",
        ),
        (
            "personal-training",
            "Personal Training",
            "One-on-one sessions with certified trainers, planned around your goals.",
            "bi-person-arms-up",
        ),
        (
            "group-classes",
            "Group Classes",
            "Yoga, HIIT, Zumba and CrossFit classes led by experienced coaches.",
            "bi-people",
        ),
        (
            "nutrition",
            "Nutrition Coaching",
            "Meal plans and check-ins that keep your training on track.",
            "bi-egg-fried",
        ),
    ]
    .into_iter()
    .map(|(slug, name, description, icon)| ServiceOffering {
        slug: slug.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
    })
    .collect()
}

fn memberships() -> Vec<MembershipPlan> {
    let plan = |id: &str, name: &str, monthly_price, features: &[&str], highlighted| MembershipPlan {
        id: id.to_string(),
        name: name.to_string(),
        monthly_price,
        features: features.iter().map(|f| f.to_string()).collect(),
        highlighted,
    };

    vec![
        plan(
            "basic",
            "Basic",
            999,
            &["Access to one gym", "Locker room access", "Fitness assessment"],
            false,
        ),
        plan(
            "premium",
            "Premium",
            1999,
            &[
                "Access to all gyms in your city",
                "4 group classes per month",
                "Fitness assessment",
                "Diet consultation",
            ],
            true,
        ),
        plan(
            "elite",
            "Elite",
            3499,
            &[
                "Access to all gyms nationwide",
                "Unlimited group classes",
                "4 personal training sessions per month",
                "Monthly nutrition coaching",
            ],
            false,
        ),
    ]
}

fn pexels(photo: &str) -> String {
    format!(
        "https://images.pexels.com/photos/{0}/pexels-photo-{0}.jpeg",
        photo
    )
}
