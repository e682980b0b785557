//! Input validation in front of the allocation engine
//!
//! The engine trusts its inputs. Everything that turns user input into a
//! well-formed request lives here: donor name fallback, amount parsing and
//! bounds, and the donation/expiration date ordering for food.

use chrono::NaiveDate;
use serde::Serialize;

use crate::config::Settings;
use crate::error::{ShelterError, ShelterResult};
use crate::models::{Amount, DonationType};

/// Largest amount accepted for a single donation or distribution.
/// Ledger totals over many such amounts still fit in `i64`.
pub const MAX_AMOUNT: Amount = Amount::from_hundredths(100_000_000_000_000);

/// A donation ready to hand to `AllocationEngine::register`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DonationRequest {
    pub donor_name: String,
    pub donation_type: DonationType,
    pub amount: Amount,
    pub date: NaiveDate,
    pub expiration_date: Option<NaiveDate>,
}

impl DonationRequest {
    /// Validate raw donation input.
    ///
    /// A blank donor becomes the configured anonymous name. Food without an
    /// expiration date is treated as non-perishable; money drops any
    /// expiration date it was given.
    pub fn new(
        settings: &Settings,
        donor_name: &str,
        donation_type: DonationType,
        amount: Amount,
        date: NaiveDate,
        expiration_date: Option<NaiveDate>,
    ) -> ShelterResult<Self> {
        if !amount.is_positive() {
            return Err(ShelterError::Validation(
                "Please enter a positive donation amount.".into(),
            ));
        }
        check_max(amount)?;

        let expiration_date = match donation_type {
            DonationType::Money => None,
            DonationType::Food => expiration_date,
        };

        if let Some(expires) = expiration_date {
            if expires < date {
                return Err(ShelterError::Validation(format!(
                    "Expiration date {} is before donation date {}",
                    expires, date
                )));
            }
        }

        Ok(Self {
            donor_name: normalize_donor_name(donor_name, settings),
            donation_type,
            amount,
            date,
            expiration_date,
        })
    }
}

/// A distribution ready to hand to `AllocationEngine::distribute`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistributionRequest {
    pub distribution_type: DonationType,
    pub amount: Amount,
    pub date: NaiveDate,
}

impl DistributionRequest {
    pub fn new(
        distribution_type: DonationType,
        amount: Amount,
        date: NaiveDate,
    ) -> ShelterResult<Self> {
        if !amount.is_positive() {
            return Err(ShelterError::Validation(
                "Please enter a positive distribution amount.".into(),
            ));
        }
        check_max(amount)?;

        Ok(Self {
            distribution_type,
            amount,
            date,
        })
    }
}

fn check_max(amount: Amount) -> ShelterResult<()> {
    if amount > MAX_AMOUNT {
        return Err(ShelterError::Validation(format!(
            "Amount {} exceeds the maximum of {}",
            amount, MAX_AMOUNT
        )));
    }
    Ok(())
}

/// Trim a donor name, substituting the anonymous placeholder when blank
pub fn normalize_donor_name(name: &str, settings: &Settings) -> String {
    let name = name.trim();
    if name.is_empty() {
        settings.anonymous_donor.clone()
    } else {
        name.to_string()
    }
}

/// Parse an amount, mapping failures to a validation error
pub fn parse_amount(s: &str) -> ShelterResult<Amount> {
    Amount::parse(s).map_err(|e| {
        ShelterError::Validation(format!(
            "Invalid amount: '{}'. Use format like '100.00' or '100'. Error: {}",
            s.trim(),
            e
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn test_blank_donor_becomes_anonymous() {
        let settings = Settings::default();
        assert_eq!(normalize_donor_name("   ", &settings), "Anonymous");
        assert_eq!(normalize_donor_name("  Ana ", &settings), "Ana");

        let request = DonationRequest::new(
            &settings,
            "",
            DonationType::Money,
            Amount::from_units(5),
            day(1),
            None,
        )
        .unwrap();
        assert_eq!(request.donor_name, "Anonymous");
    }

    #[test]
    fn test_non_positive_amounts_rejected() {
        let settings = Settings::default();
        let err = DonationRequest::new(
            &settings,
            "Ana",
            DonationType::Food,
            Amount::zero(),
            day(1),
            Some(day(2)),
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation error: Please enter a positive donation amount."
        );

        let err = DistributionRequest::new(DonationType::Money, Amount::from_hundredths(-1), day(1))
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_amounts_above_maximum_rejected() {
        let too_big = MAX_AMOUNT + Amount::from_hundredths(1);
        let err = DistributionRequest::new(DonationType::Food, too_big, day(1)).unwrap_err();
        assert!(err.is_validation());
        assert!(DonationRequest::new(
            &Settings::default(),
            "Ana",
            DonationType::Money,
            too_big,
            day(1),
            None,
        )
        .is_err());
        assert!(DistributionRequest::new(DonationType::Food, MAX_AMOUNT, day(1)).is_ok());
    }

    #[test]
    fn test_food_expiring_before_donation_rejected() {
        let err = DonationRequest::new(
            &Settings::default(),
            "Ana",
            DonationType::Food,
            Amount::from_units(1),
            day(5),
            Some(day(4)),
        )
        .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_money_ignores_expiration() {
        let request = DonationRequest::new(
            &Settings::default(),
            "Ana",
            DonationType::Money,
            Amount::from_units(1),
            day(5),
            Some(day(4)),
        )
        .unwrap();
        assert_eq!(request.expiration_date, None);
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("$12.5").unwrap(), Amount::from_hundredths(1250));
        assert!(parse_amount("abc").unwrap_err().is_validation());
        assert!(parse_amount("1.-5").unwrap_err().is_validation());
    }
}
