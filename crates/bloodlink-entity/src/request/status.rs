//! Blood request status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of a blood request.
///
/// The only legal transition is `Pending -> Fulfilled`; it is never
/// reversed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    /// Open, awaiting fulfillment.
    Pending,
    /// Closed, blood was provided.
    Fulfilled,
}

impl RequestStatus {
    /// Check whether a transition from `self` to `next` is allowed.
    pub fn can_transition_to(&self, next: RequestStatus) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Fulfilled) | (Self::Pending, Self::Pending)
        )
    }

    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Fulfilled => "fulfilled",
        }
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RequestStatus {
    type Err = bloodlink_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "fulfilled" => Ok(Self::Fulfilled),
            _ => Err(bloodlink_core::AppError::validation(format!(
                "Invalid request status: '{s}'. Expected one of: pending, fulfilled"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transitions() {
        assert!(RequestStatus::Pending.can_transition_to(RequestStatus::Fulfilled));
        assert!(!RequestStatus::Fulfilled.can_transition_to(RequestStatus::Pending));
    }

    #[test]
    fn test_from_str_rejects_arbitrary_strings() {
        assert!("cancelled".parse::<RequestStatus>().is_err());
        assert_eq!(
            "FULFILLED".parse::<RequestStatus>().unwrap(),
            RequestStatus::Fulfilled
        );
    }
}
