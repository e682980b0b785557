//! Donation model
//!
//! A donation is either money (dollars) or food (pounds). Registered
//! donations are kept as immutable [`DonationRecord`]s for reporting; the
//! allocatable remainder lives separately as a lot in the matching inventory.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use super::amount::Amount;
use super::ids::DonationId;

/// Kind of donation, also used as the kind of a distribution
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DonationType {
    #[serde(alias = "Money", alias = "cash")]
    Money,
    #[serde(alias = "Food")]
    Food,
}

impl DonationType {
    pub const ALL: [DonationType; 2] = [DonationType::Money, DonationType::Food];

    /// Format an amount in this type's unit, e.g. `$10.50` or `10.50 lbs`
    pub fn format_amount(&self, amount: Amount, currency_symbol: &str, weight_unit: &str) -> String {
        match self {
            Self::Money if amount.is_negative() => {
                format!("-{}{}", currency_symbol, Amount::zero() - amount)
            }
            Self::Money => format!("{}{}", currency_symbol, amount),
            Self::Food => format!("{} {}", amount, weight_unit),
        }
    }
}

impl fmt::Display for DonationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Money => write!(f, "Money"),
            Self::Food => write!(f, "Food"),
        }
    }
}

impl FromStr for DonationType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "money" | "cash" => Ok(Self::Money),
            "food" => Ok(Self::Food),
            other => Err(format!("Unknown donation type: '{}' (expected money or food)", other)),
        }
    }
}

/// Immutable ledger entry for a registered donation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DonationRecord {
    pub id: DonationId,

    /// Donor name as given by the caller
    pub donor_name: String,

    pub donation_type: DonationType,

    pub amount: Amount,

    /// Date the donation was received
    pub date: NaiveDate,

    /// Only present for food; `NaiveDate::MAX` marks non-perishable food
    /// and is written as `never`
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_expiration",
        deserialize_with = "deserialize_expiration"
    )]
    pub expiration_date: Option<NaiveDate>,
}

impl DonationRecord {
    /// Create a new record. The expiration date is dropped for money.
    pub fn new(
        donor_name: impl Into<String>,
        donation_type: DonationType,
        amount: Amount,
        date: NaiveDate,
        expiration_date: Option<NaiveDate>,
    ) -> Self {
        let expiration_date = match donation_type {
            DonationType::Money => None,
            DonationType::Food => expiration_date,
        };

        Self {
            id: DonationId::new(),
            donor_name: donor_name.into(),
            donation_type,
            amount,
            date,
            expiration_date,
        }
    }

    /// Whether this is food that never expires
    pub fn is_non_perishable(&self) -> bool {
        self.expiration_date == Some(NaiveDate::MAX)
    }
}

/// Render an expiration date, showing `never` for non-perishable food
pub fn format_expiration(date: Option<NaiveDate>) -> String {
    match date {
        None => String::new(),
        Some(d) if d == NaiveDate::MAX => "never".to_string(),
        Some(d) => d.to_string(),
    }
}

fn serialize_expiration<S: Serializer>(
    date: &Option<NaiveDate>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match date {
        Some(_) => serializer.serialize_str(&format_expiration(*date)),
        None => serializer.serialize_none(),
    }
}

fn deserialize_expiration<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<NaiveDate>, D::Error> {
    let raw: Option<String> = Option::deserialize(deserializer)?;
    raw.map(|s| match s.as_str() {
        "never" => Ok(NaiveDate::MAX),
        other => other.parse().map_err(serde::de::Error::custom),
    })
    .transpose()
}
