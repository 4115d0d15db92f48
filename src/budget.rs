//! Percentage budget rules.
//!
//! For a fixed RA the weights (`porcentaje_ra_actividad`) of its activity links
//! must not exceed 100%. Everything here is pure: callers fetch the running sum
//! from [`crate::ledger`] under a row lock and ask for a [`BudgetDecision`]
//! before writing.
//!
//! An older rule required the weights to add up to exactly 100. It is
//! superseded; the inequality below is the only rule enforced.

use rust_decimal::RoundingStrategy;
use sea_orm::prelude::Decimal;

use crate::errors::ValidationError;

/// Upper bound of any percentage budget.
pub const BUDGET_LIMIT: Decimal = Decimal::ONE_HUNDRED;

/// Tolerance absorbing decimal rounding (1e-6).
pub const BUDGET_EPSILON: Decimal = Decimal::from_parts(1, 0, 0, false, 6);

/// Percentages and grades are stored as NUMERIC(5,2).
pub const STORED_SCALE: u32 = 2;

/// Upper bound of a grade (`nota`).
pub const MAX_GRADE: Decimal = Decimal::from_parts(5, 0, 0, false, 0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetDecision {
    Accept { total: Decimal },
    Reject { ra_id: i64, total: Decimal },
}

impl BudgetDecision {
    pub fn is_accept(&self) -> bool {
        matches!(self, Self::Accept { .. })
    }

    pub fn total(&self) -> Decimal {
        match self {
            Self::Accept { total } | Self::Reject { total, .. } => *total,
        }
    }

    pub fn into_result(self) -> Result<Decimal, ValidationError> {
        match self {
            Self::Accept { total } => Ok(total),
            Self::Reject { ra_id, total } => Err(ValidationError::BudgetExceeded { ra_id, total }),
        }
    }
}

/// `true` while `total` stays inside the budget.
///
/// Exactly 100 is inside; 100 + ε and anything above is outside.
pub fn within_budget(total: Decimal) -> bool {
    total < BUDGET_LIMIT + BUDGET_EPSILON
}

fn decide(ra_id: i64, total: Decimal) -> BudgetDecision {
    if within_budget(total) {
        BudgetDecision::Accept { total }
    } else {
        BudgetDecision::Reject { ra_id, total }
    }
}

/// Adding a new link of `new_weight` to an RA whose links currently sum to
/// `current_sum`.
pub fn validate_insert(ra_id: i64, current_sum: Decimal, new_weight: Decimal) -> BudgetDecision {
    decide(ra_id, current_sum + new_weight)
}

/// Proposed change to an existing link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeChange {
    pub old_weight: Decimal,
    pub new_weight: Decimal,
    pub old_activity_pct: Decimal,
    pub new_activity_pct: Decimal,
}

impl EdgeChange {
    pub fn weight_only(old_weight: Decimal, new_weight: Decimal) -> Self {
        Self {
            old_weight,
            new_weight,
            old_activity_pct: Decimal::ZERO,
            new_activity_pct: Decimal::ZERO,
        }
    }

    /// Only a changed link weight or a changed activity percentage can move
    /// the RA total.
    pub fn needs_revalidation(&self) -> bool {
        self.old_weight != self.new_weight || self.old_activity_pct != self.new_activity_pct
    }
}

/// Updating an existing link. `sum_without_edge` must already exclude the link
/// being replaced so its previous weight is not counted twice.
pub fn validate_update(ra_id: i64, sum_without_edge: Decimal, change: &EdgeChange) -> BudgetDecision {
    if !change.needs_revalidation() {
        return BudgetDecision::Accept {
            total: sum_without_edge + change.old_weight,
        };
    }
    decide(ra_id, sum_without_edge + change.new_weight)
}

/// Range-checks a percentage. Values finer than the stored scale are
/// rejected rather than rounded, so the total checked here is the total stored.
pub fn normalize_percentage(field: &'static str, value: Decimal) -> Result<Decimal, ValidationError> {
    if value < Decimal::ZERO || value > BUDGET_LIMIT {
        return Err(ValidationError::PercentageOutOfRange { field, value });
    }
    let value = value.normalize();
    if value.scale() > STORED_SCALE {
        return Err(ValidationError::TooManyDecimals { field, value });
    }
    Ok(value)
}

/// Range-checks a grade in [0, 5] and rounds it to the stored scale the way
/// PostgreSQL `NUMERIC` does (half away from zero).
pub fn normalize_grade(value: Decimal) -> Result<Decimal, ValidationError> {
    if value < Decimal::ZERO || value > MAX_GRADE {
        return Err(ValidationError::GradeOutOfRange { value });
    }
    Ok(value.round_dp_with_strategy(STORED_SCALE, RoundingStrategy::MidpointAwayFromZero))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pct(value: i64, scale: u32) -> Decimal {
        Decimal::new(value, scale)
    }

    #[test]
    fn insert_that_lands_exactly_on_100_is_accepted() {
        let decision = validate_insert(1, pct(80, 0), pct(20, 0));
        assert_eq!(decision, BudgetDecision::Accept { total: pct(100, 0) });
    }

    #[test]
    fn insert_that_lands_on_100_000001_is_rejected() {
        let decision = validate_insert(1, pct(80, 0), pct(20_000_001, 6));
        assert!(!decision.is_accept());

        let just_below = validate_insert(1, pct(80, 0), pct(200_000_009, 7));
        assert!(just_below.is_accept());
    }

    #[test]
    fn ninety_plus_twenty_is_rejected_with_total() {
        let decision = validate_insert(1, pct(90, 0), pct(20, 0));
        assert_eq!(
            decision,
            BudgetDecision::Reject {
                ra_id: 1,
                total: pct(110, 0)
            }
        );

        let err = decision.into_result().unwrap_err();
        assert!(err.to_string().contains("exceeding 100%"));
    }

    #[test]
    fn empty_ra_accepts_full_weight() {
        assert!(validate_insert(9, Decimal::ZERO, pct(100, 0)).is_accept());
    }

    #[test]
    fn update_excludes_the_edge_own_weight() {
        // RA has links 60 + 40; raising the 40 link to 40 is a no-op and
        // raising it to 45 overflows only because the other link is 60.
        let unchanged = EdgeChange::weight_only(pct(40, 0), pct(40, 0));
        assert_eq!(validate_update(3, pct(60, 0), &unchanged).total(), pct(100, 0));

        let raised = EdgeChange::weight_only(pct(40, 0), pct(45, 0));
        assert_eq!(
            validate_update(3, pct(60, 0), &raised),
            BudgetDecision::Reject {
                ra_id: 3,
                total: pct(105, 0)
            }
        );

        let lowered = EdgeChange::weight_only(pct(40, 0), pct(10, 0));
        assert_eq!(
            validate_update(3, pct(60, 0), &lowered),
            BudgetDecision::Accept { total: pct(70, 0) }
        );
    }

    #[test]
    fn activity_percentage_change_triggers_revalidation() {
        let change = EdgeChange {
            old_weight: pct(50, 0),
            new_weight: pct(50, 0),
            old_activity_pct: pct(20, 0),
            new_activity_pct: pct(30, 0),
        };
        assert!(change.needs_revalidation());
        assert!(!EdgeChange::weight_only(pct(5, 0), pct(5, 0)).needs_revalidation());
    }

    #[test]
    fn accepted_sequence_never_exceeds_limit() {
        let weights = [35, 25, 30, 20, 10, 5, 1];
        let mut sum = Decimal::ZERO;
        for w in weights {
            if let BudgetDecision::Accept { total } = validate_insert(1, sum, pct(w, 0)) {
                sum = total;
            }
            assert!(within_budget(sum));
        }
        assert_eq!(sum, pct(100, 0));
    }

    #[test]
    fn percentages_are_range_checked() {
        assert_eq!(
            normalize_percentage("porcentaje_ra_actividad", pct(3_334, 2)).unwrap(),
            pct(3334, 2)
        );
        assert!(normalize_percentage("porcentaje_ra_actividad", pct(-1, 0)).is_err());
        assert!(normalize_percentage("porcentaje_actividad", pct(10001, 2)).is_err());
    }

    #[test]
    fn percentages_finer_than_two_decimals_are_rejected() {
        assert_eq!(
            normalize_percentage("porcentaje_ra_actividad", pct(20_000_001, 6)),
            Err(ValidationError::TooManyDecimals {
                field: "porcentaje_ra_actividad",
                value: pct(20_000_001, 6)
            })
        );
        // Trailing zeros are not extra precision.
        assert_eq!(
            normalize_percentage("porcentaje_ra_actividad", pct(20_000_000, 6)).unwrap(),
            pct(20, 0)
        );
    }

    #[test]
    fn grades_round_half_away_from_zero() {
        assert_eq!(normalize_grade(pct(4_345, 3)).unwrap(), pct(435, 2));
        assert_eq!(normalize_grade(pct(4_325, 3)).unwrap(), pct(433, 2));
    }

    #[test]
    fn grades_must_be_between_zero_and_five() {
        assert_eq!(normalize_grade(pct(45, 1)).unwrap(), pct(450, 2));
        assert_eq!(normalize_grade(pct(5, 0)).unwrap(), pct(5, 0));
        assert_eq!(
            normalize_grade(pct(51, 1)),
            Err(ValidationError::GradeOutOfRange { value: pct(51, 1) })
        );
    }
}
