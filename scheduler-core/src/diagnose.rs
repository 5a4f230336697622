//! The infeasibility reporter (SPEC_FULL.md §4.8): when the solver cannot
//! return an optimal valuation, name the constraints that would be violated
//! at the trivial all-zero assignment. Not a proof of infeasibility - a
//! human-actionable pointer toward the likely culprits.

use std::fmt;

use crate::constraints::NamedConstraint;

#[derive(Debug, Clone)]
pub struct Diagnosis {
    pub solver_id: String,
    pub violated_constraints: Vec<String>,
}

impl Diagnosis {
    pub fn empty(solver_id: impl Into<String>) -> Self {
        Self {
            solver_id: solver_id.into(),
            violated_constraints: Vec::new(),
        }
    }
}

impl fmt::Display for Diagnosis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "solver: {}", self.solver_id)?;
        if self.violated_constraints.is_empty() {
            write!(f, "no constraint is violated at the zero assignment; the model itself may be numerically degenerate")
        } else {
            writeln!(
                f,
                "constraints violated at the zero assignment ({}):",
                self.violated_constraints.len()
            )?;
            for name in &self.violated_constraints {
                writeln!(f, "  - {name}")?;
            }
            Ok(())
        }
    }
}

/// Walks every named constraint and collects those that fail at the
/// all-zero valuation.
pub fn diagnose(solver_id: impl Into<String>, constraints: &[NamedConstraint]) -> Diagnosis {
    let violated_constraints = constraints
        .iter()
        .filter(|c| c.violated_at_zero())
        .map(|c| c.name.clone())
        .collect();
    Diagnosis {
        solver_id: solver_id.into(),
        violated_constraints,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints::CmpOp;
    use good_lp::Expression;

    fn zero_expr() -> Expression {
        Expression::from(0.0)
    }

    #[test]
    fn flags_impossible_le() {
        let c = NamedConstraint {
            name: "X".into(),
            lhs: zero_expr(),
            op: CmpOp::Le,
            rhs: -1.0,
        };
        assert!(c.violated_at_zero());
    }

    #[test]
    fn does_not_flag_satisfiable_le() {
        let c = NamedConstraint {
            name: "X".into(),
            lhs: zero_expr(),
            op: CmpOp::Le,
            rhs: 1.0,
        };
        assert!(!c.violated_at_zero());
    }

    #[test]
    fn diagnose_collects_names_in_order() {
        let constraints = vec![
            NamedConstraint {
                name: "A".into(),
                lhs: zero_expr(),
                op: CmpOp::Eq,
                rhs: 1.0,
            },
            NamedConstraint {
                name: "B".into(),
                lhs: zero_expr(),
                op: CmpOp::Eq,
                rhs: 0.0,
            },
        ];
        let diagnosis = diagnose("test", &constraints);
        assert_eq!(diagnosis.violated_constraints, vec!["A".to_string()]);
    }
}
