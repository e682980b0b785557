//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{DistributionRecord, DonationRecord};

/// What happened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// A donation was registered
    Register,
    /// A distribution was applied
    Distribute,
    /// A distribution was refused for lack of eligible inventory
    Reject,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Register => write!(f, "REGISTER"),
            Operation::Distribute => write!(f, "DISTRIBUTE"),
            Operation::Reject => write!(f, "REJECT"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    /// ID of the ledger record, absent for rejected distributions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_id: Option<String>,

    /// One-line human-readable description
    pub summary: String,

    /// JSON snapshot of the record or request
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl AuditEntry {
    pub fn registered(record: &DonationRecord) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Register,
            record_id: Some(record.id.to_string()),
            summary: format!(
                "{} donation of {} from {} on {}",
                record.donation_type, record.amount, record.donor_name, record.date
            ),
            details: serde_json::to_value(record).ok(),
        }
    }

    pub fn distributed(record: &DistributionRecord) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Distribute,
            record_id: Some(record.id.to_string()),
            summary: format!(
                "{} distribution of {} on {}",
                record.distribution_type, record.amount, record.date
            ),
            details: serde_json::to_value(record).ok(),
        }
    }

    /// A refused distribution; `reason` is the shortfall message
    pub fn rejected(reason: impl Into<String>, request: &impl Serialize) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Reject,
            record_id: None,
            summary: reason.into(),
            details: serde_json::to_value(request).ok(),
        }
    }

    /// Format for display
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation
        );

        if let Some(id) = &self.record_id {
            output.push_str(&format!(" {}", id));
        }

        output.push_str(&format!(": {}", self.summary));
        output
    }
}
