pub mod catalog;
pub mod domain;
pub mod effects;
pub mod ports;
pub mod pricing;
pub mod seed;
pub mod session;

pub use catalog::{Catalog, CatalogError};
pub use domain::{BookingQuote, City, Gym, MembershipPlan, ServiceKind, ServiceOffering, Trainer};
pub use ports::{PortError, PortResult, SessionStore};
pub use session::SessionContext;
