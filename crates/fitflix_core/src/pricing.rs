//! crates/fitflix_core/src/pricing.rs
//!
//! The booking price rule: a per-hour base price for the chosen service,
//! scaled by the requested duration, plus a flat platform fee.

use crate::domain::{BookingQuote, ServiceKind};

/// Charged on every booking, even when no service has been picked yet.
pub const PLATFORM_FEE: f64 = 50.0;

/// Hourly base price for a service.
pub fn base_price(service: ServiceKind) -> f64 {
    match service {
        ServiceKind::GymSession => 500.0,
        ServiceKind::TrainerSession => 1500.0,
        ServiceKind::Class => 800.0,
    }
}

/// Prices a booking. A missing service prices at zero; a missing duration
/// leaves the base price unscaled.
pub fn quote(service: Option<ServiceKind>, duration_minutes: Option<u32>) -> BookingQuote {
    let mut base = service.map(base_price).unwrap_or(0.0);
    if let Some(minutes) = duration_minutes {
        base *= f64::from(minutes) / 60.0;
    }

    BookingQuote {
        service,
        duration_minutes,
        base_price: base,
        platform_fee: PLATFORM_FEE,
        total: base + PLATFORM_FEE,
    }
}

/// Prices a booking straight from raw form values.
pub fn quote_from_form(service: &str, duration: &str) -> BookingQuote {
    quote(ServiceKind::parse(service), parse_duration(duration))
}

/// Reads a duration in minutes from the leading digits of `raw`, so `"90min"`
/// is 90 and `"1.5"` is 1. Input with no leading digits counts as absent.
pub fn parse_duration(raw: &str) -> Option<u32> {
    let raw = raw.trim_start();
    let raw = raw.strip_prefix('+').unwrap_or(raw);
    let end = raw
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(raw.len());
    raw[..end].parse().ok()
}

/// Formats an amount for display. Whole amounts drop the decimals, anything
/// else is rounded to two places.
pub fn format_amount(amount: f64) -> String {
    let cents = (amount * 100.0).round();
    if cents % 100.0 == 0.0 {
        format!("{:.0}", cents / 100.0)
    } else {
        format!("{:.2}", cents / 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn one_hour_gym_session() {
        let q = quote_from_form("gym-session", "60");
        assert_eq!(q.base_price, 500.0);
        assert_eq!(q.platform_fee, 50.0);
        assert_eq!(q.total, 550.0);
    }

    #[test]
    fn half_hour_trainer_session() {
        let q = quote_from_form("trainer-session", "30");
        assert_eq!(q.base_price, 750.0);
        assert_eq!(q.total, 800.0);
    }

    #[test]
    fn unknown_service_still_pays_the_fee() {
        let q = quote_from_form("unknown", "60");
        assert_eq!(q.service, None);
        assert_eq!(q.base_price, 0.0);
        assert_eq!(q.total, 50.0);
        assert!(!q.is_priced());
    }

    #[test]
    fn short_form_values_are_accepted() {
        assert_eq!(quote_from_form("gym", "").total, 550.0);
        assert_eq!(quote_from_form("trainer", "").base_price, 1500.0);
        assert_eq!(quote_from_form("class", "90").base_price, 1200.0);
    }

    #[test]
    fn missing_or_garbage_duration_is_unscaled() {
        assert_eq!(quote(Some(ServiceKind::Class), None).base_price, 800.0);
        assert_eq!(quote_from_form("class", "soon").duration_minutes, None);
        assert_eq!(quote_from_form("class", " 45 ").duration_minutes, Some(45));
        assert_eq!(quote_from_form("class", "-30").duration_minutes, None);
    }

    #[test]
    fn duration_reads_leading_digits() {
        assert_eq!(parse_duration("90min"), Some(90));
        assert_eq!(parse_duration("1.5"), Some(1));
        assert_eq!(parse_duration("+60"), Some(60));
        assert_eq!(parse_duration("min90"), None);
        assert_eq!(parse_duration(""), None);
        assert_eq!(quote_from_form("gym-session", "90 minutes").base_price, 750.0);
    }

    #[test]
    fn zero_duration_prices_at_fee_only() {
        let q = quote(Some(ServiceKind::TrainerSession), Some(0));
        assert_eq!(q.base_price, 0.0);
        assert_eq!(q.total, PLATFORM_FEE);
    }

    #[test]
    fn fractional_hours_keep_precision() {
        let q = quote(Some(ServiceKind::GymSession), Some(20));
        assert!((q.base_price - 500.0 / 3.0).abs() < 1e-9);
        assert_eq!(format_amount(q.base_price), "166.67");
        assert_eq!(format_amount(q.total), "216.67");
    }

    #[test]
    fn amounts_format_without_trailing_zeros_when_whole() {
        assert_eq!(format_amount(550.0), "550");
        assert_eq!(format_amount(0.0), "0");
        assert_eq!(format_amount(262.5), "262.50");
        assert_eq!(format_amount(99.999), "100");
    }

    proptest! {
        #[test]
        fn total_is_scaled_base_plus_fee(
            kind in prop::sample::select(ServiceKind::ALL.to_vec()),
            minutes in 0u32..600,
        ) {
            let q = quote(Some(kind), Some(minutes));
            let expected = base_price(kind) * f64::from(minutes) / 60.0;
            prop_assert!((q.base_price - expected).abs() < 1e-6);
            prop_assert!((q.total - (q.base_price + PLATFORM_FEE)).abs() < 1e-9);
        }
    }
}
