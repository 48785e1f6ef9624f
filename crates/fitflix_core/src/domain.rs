//! crates/fitflix_core/src/domain.rs
//!
//! Defines the pure, core data structures for the application.
//! They derive `Serialize` so the service layer can hand them straight to its
//! templates, but carry no knowledge of HTTP or storage.

use serde::{Deserialize, Serialize};

/// A city the chain operates in. `id` is the stable key used in URLs and forms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    pub id: String,
    pub name: String,
    /// Region the city belongs to.
    pub state: String,
}

/// A gym location listed under one city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gym {
    pub id: u32,
    pub name: String,
    pub location: String,
    /// Identifier of the owning `City`.
    pub city: String,
    pub rating: f64,
    pub image: String,
}

/// A personal trainer working in one city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trainer {
    pub id: u32,
    pub name: String,
    pub specialization: String,
    pub experience: String,
    /// Identifier of the owning `City`.
    pub city: String,
    pub rating: f64,
    pub image: String,
}

// Content for the static services page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceOffering {
    pub slug: String,
    pub name: String,
    pub description: String,
    pub icon: String,
}

/// A membership tier shown on the plans page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MembershipPlan {
    pub id: String,
    pub name: String,
    pub monthly_price: u32,
    pub features: Vec<String>,
    /// Rendered with the accent border on the plans page.
    pub highlighted: bool,
}

/// The kinds of session that can be booked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceKind {
    GymSession,
    TrainerSession,
    Class,
}

impl ServiceKind {
    pub const ALL: [ServiceKind; 3] = [
        ServiceKind::GymSession,
        ServiceKind::TrainerSession,
        ServiceKind::Class,
    ];

    /// Parses a form value. Both the long names (`gym-session`) and the short
    /// booking-form values (`gym`) are accepted; anything else is `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "gym-session" | "gym" => Some(ServiceKind::GymSession),
            "trainer-session" | "trainer" => Some(ServiceKind::TrainerSession),
            "class" => Some(ServiceKind::Class),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceKind::GymSession => "gym-session",
            ServiceKind::TrainerSession => "trainer-session",
            ServiceKind::Class => "class",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ServiceKind::GymSession => "Gym Session",
            ServiceKind::TrainerSession => "Personal Trainer Session",
            ServiceKind::Class => "Group Class",
        }
    }
}

/// An itemized price breakdown for a hypothetical booking. Derived on demand,
/// never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BookingQuote {
    pub service: Option<ServiceKind>,
    pub duration_minutes: Option<u32>,
    pub base_price: f64,
    pub platform_fee: f64,
    pub total: f64,
}

impl BookingQuote {
    /// A quote only has something worth summarising once a service is priced.
    pub fn is_priced(&self) -> bool {
        self.base_price > 0.0
    }
}
