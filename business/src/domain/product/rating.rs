use uuid::Uuid;

use super::errors::ProductError;
use crate::domain::shared::value_objects::UserId;

pub const MIN_RATING: i64 = 0;
pub const MAX_RATING: i64 = 5;

/// One user's rating of one product. A user has at most one rating per
/// product; rating again replaces the value in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rating {
    pub user_id: UserId,
    pub product_id: Uuid,
    pub value: i64,
}

impl Rating {
    pub fn new(user_id: UserId, product_id: Uuid, value: i64) -> Result<Self, ProductError> {
        if !(MIN_RATING..=MAX_RATING).contains(&value) {
            return Err(ProductError::InvalidRating);
        }

        Ok(Self {
            user_id,
            product_id,
            value,
        })
    }
}

/// The running rating average stored on a product.
///
/// Each write folds the change into the previous average in O(1) instead of
/// rescanning all rating rows. Long sequences of updates can accumulate
/// floating-point drift; exact consumers must recompute from the rating rows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingAggregate {
    pub average: f64,
    pub count: i64,
}

impl RatingAggregate {
    /// Folds a first-time rating into the aggregate.
    pub fn apply_new(self, value: i64) -> Self {
        let count = self.count + 1;
        Self {
            average: (self.average * self.count as f64 + value as f64) / count as f64,
            count,
        }
    }

    /// Replaces a previous rating value in the aggregate; the count does not
    /// change.
    pub fn apply_updated(self, old_value: i64, new_value: i64) -> Self {
        if self.count == 0 {
            return self;
        }

        Self {
            average: (self.average * self.count as f64 + new_value as f64 - old_value as f64)
                / self.count as f64,
            count: self.count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn should_reject_rating_above_five() {
        let result = Rating::new(UserId::new("u"), Uuid::new_v4(), 6);
        assert!(matches!(result.unwrap_err(), ProductError::InvalidRating));
    }

    #[test]
    fn should_reject_negative_rating() {
        let result = Rating::new(UserId::new("u"), Uuid::new_v4(), -1);
        assert!(matches!(result.unwrap_err(), ProductError::InvalidRating));
    }

    #[test]
    fn should_accept_boundary_values() {
        assert!(Rating::new(UserId::new("u"), Uuid::new_v4(), 0).is_ok());
        assert!(Rating::new(UserId::new("u"), Uuid::new_v4(), 5).is_ok());
    }

    #[test]
    fn should_average_first_rating_exactly() {
        let aggregate = RatingAggregate {
            average: 0.0,
            count: 0,
        }
        .apply_new(4);

        assert_eq!(aggregate.average, 4.0);
        assert_eq!(aggregate.count, 1);
    }

    #[test]
    fn should_fold_new_rating_into_average() {
        let aggregate = RatingAggregate {
            average: 4.0,
            count: 2,
        }
        .apply_new(1);

        assert_eq!(aggregate.count, 3);
        assert!((aggregate.average - 3.0).abs() < 1e-9);
    }

    #[test]
    fn should_keep_count_when_updating_existing_rating() {
        let aggregate = RatingAggregate {
            average: 4.0,
            count: 2,
        }
        .apply_updated(4, 2);

        assert_eq!(aggregate.count, 2);
        assert!((aggregate.average - 3.0).abs() < 1e-9);
    }

    #[test]
    fn should_ignore_update_on_empty_aggregate() {
        let aggregate = RatingAggregate {
            average: 0.0,
            count: 0,
        }
        .apply_updated(3, 5);

        assert_eq!(aggregate.count, 0);
        assert_eq!(aggregate.average, 0.0);
    }

    proptest! {
        #[test]
        fn average_stays_within_rating_bounds(values in prop::collection::vec(0i64..=5, 1..50)) {
            let mut aggregate = RatingAggregate { average: 0.0, count: 0 };
            for value in &values {
                aggregate = aggregate.apply_new(*value);
            }

            prop_assert_eq!(aggregate.count, values.len() as i64);
            prop_assert!(aggregate.average >= 0.0 - 1e-9);
            prop_assert!(aggregate.average <= 5.0 + 1e-9);
        }

        #[test]
        fn update_matches_remove_and_add(
            values in prop::collection::vec(0i64..=5, 2..30),
            new_value in 0i64..=5,
        ) {
            let mut aggregate = RatingAggregate { average: 0.0, count: 0 };
            for value in &values {
                aggregate = aggregate.apply_new(*value);
            }

            let updated = aggregate.apply_updated(values[0], new_value);

            let mut expected: f64 = values.iter().skip(1).map(|v| *v as f64).sum();
            expected = (expected + new_value as f64) / values.len() as f64;
            prop_assert!((updated.average - expected).abs() < 1e-6);
        }
    }
}
