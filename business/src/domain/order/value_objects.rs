use serde::{Deserialize, Serialize};

use super::errors::OrderError;

/// Order lifecycle status. The numeric codes form the persisted
/// representation and define the legal transition sequence: forward moves
/// go strictly `InCart -> InProgress -> Completed`, and `Canceled` is a
/// terminal side branch reachable only from `InCart`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    InCart,
    InProgress,
    Completed,
    Canceled,
}

impl OrderStatus {
    pub fn code(self) -> i16 {
        match self {
            OrderStatus::InCart => 1,
            OrderStatus::InProgress => 2,
            OrderStatus::Completed => 3,
            OrderStatus::Canceled => 4,
        }
    }

    pub fn from_code(code: i16) -> Option<Self> {
        match code {
            1 => Some(OrderStatus::InCart),
            2 => Some(OrderStatus::InProgress),
            3 => Some(OrderStatus::Completed),
            4 => Some(OrderStatus::Canceled),
            _ => None,
        }
    }

    /// Checks whether moving from `self` to `next` is legal.
    pub fn validate_transition(self, next: OrderStatus) -> Result<(), OrderError> {
        let legal = match next {
            OrderStatus::Canceled => self == OrderStatus::InCart,
            _ => next.code() - self.code() == 1,
        };

        if legal {
            Ok(())
        } else {
            Err(OrderError::InvalidStatusTransition)
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatus::InCart => write!(f, "in_cart"),
            OrderStatus::InProgress => write!(f, "in_progress"),
            OrderStatus::Completed => write!(f, "completed"),
            OrderStatus::Canceled => write!(f, "canceled"),
        }
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "in_cart" => Ok(OrderStatus::InCart),
            "in_progress" => Ok(OrderStatus::InProgress),
            "completed" => Ok(OrderStatus::Completed),
            "canceled" => Ok(OrderStatus::Canceled),
            _ => Err(format!("Invalid order status: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_allow_strictly_sequential_forward_transitions() {
        assert!(
            OrderStatus::InCart
                .validate_transition(OrderStatus::InProgress)
                .is_ok()
        );
        assert!(
            OrderStatus::InProgress
                .validate_transition(OrderStatus::Completed)
                .is_ok()
        );
    }

    #[test]
    fn should_allow_cancellation_only_from_cart() {
        assert!(
            OrderStatus::InCart
                .validate_transition(OrderStatus::Canceled)
                .is_ok()
        );
        assert!(
            OrderStatus::InProgress
                .validate_transition(OrderStatus::Canceled)
                .is_err()
        );
        assert!(
            OrderStatus::Completed
                .validate_transition(OrderStatus::Canceled)
                .is_err()
        );
    }

    #[test]
    fn should_reject_skipped_and_backward_transitions() {
        assert!(
            OrderStatus::InCart
                .validate_transition(OrderStatus::Completed)
                .is_err()
        );
        assert!(
            OrderStatus::Completed
                .validate_transition(OrderStatus::InProgress)
                .is_err()
        );
        assert!(
            OrderStatus::InProgress
                .validate_transition(OrderStatus::InProgress)
                .is_err()
        );
        assert!(
            OrderStatus::Canceled
                .validate_transition(OrderStatus::InProgress)
                .is_err()
        );
    }

    #[test]
    fn should_round_trip_status_codes() {
        for status in [
            OrderStatus::InCart,
            OrderStatus::InProgress,
            OrderStatus::Completed,
            OrderStatus::Canceled,
        ] {
            assert_eq!(OrderStatus::from_code(status.code()), Some(status));
        }
        assert_eq!(OrderStatus::from_code(0), None);
        assert_eq!(OrderStatus::from_code(5), None);
    }
}
