use crate::{
    error::{Result, SolverError},
    representation::{
        binary_scope, constraint::Constraint, value::ValueEquality, variable::Variable,
        Assignment, VariableSet,
    },
};

/// Requires two variables to take different values.
///
/// If both endpoints are the same variable the scope collapses to a single
/// element and the constraint is unsatisfiable; node consistency then empties
/// that variable's domain.
#[derive(Debug, Clone)]
pub struct DifferenceConstraint<V: ValueEquality> {
    first: Variable<V>,
    second: Variable<V>,
    scope: VariableSet<V>,
}

impl<V: ValueEquality> DifferenceConstraint<V> {
    pub fn new(first: Variable<V>, second: Variable<V>) -> Self {
        let scope = binary_scope(&first, &second);
        Self {
            first,
            second,
            scope,
        }
    }

    pub fn first(&self) -> &Variable<V> {
        &self.first
    }

    pub fn second(&self) -> &Variable<V> {
        &self.second
    }
}

impl<V: ValueEquality> Constraint<V> for DifferenceConstraint<V> {
    fn scope(&self) -> &VariableSet<V> {
        &self.scope
    }

    fn is_satisfied_by(&self, assignment: &Assignment<V>) -> Result<bool> {
        for variable in &self.scope {
            if !assignment.contains_key(variable) {
                return Err(SolverError::UnassignedVariable {
                    variable: variable.name().to_owned(),
                    constraint: format!("DifferenceConstraint [{}, {}]", self.first, self.second),
                }
                .into());
            }
        }
        Ok(assignment.get(&self.first) != assignment.get(&self.second))
    }
}

#[cfg(test)]
mod tests {
    use im::hashmap;

    use super::DifferenceConstraint;
    use crate::representation::{constraint::Constraint, value::StandardValue, variable::Variable};

    fn ints(values: &[i64]) -> im::HashSet<StandardValue> {
        values.iter().map(|v| StandardValue::Int(*v)).collect()
    }

    #[test]
    fn holds_iff_values_differ() {
        let x = Variable::new("x", ints(&[1, 2]));
        let y = Variable::new("y", ints(&[1, 2]));
        let constraint = DifferenceConstraint::new(x.clone(), y.clone());

        let differing = hashmap! {
            x.clone() => StandardValue::Int(1),
            y.clone() => StandardValue::Int(2),
        };
        let equal = hashmap! {
            x.clone() => StandardValue::Int(2),
            y.clone() => StandardValue::Int(2),
        };
        assert!(constraint.is_satisfied_by(&differing).unwrap());
        assert!(!constraint.is_satisfied_by(&equal).unwrap());
    }

    #[test]
    fn scope_collapses_for_equal_endpoints() {
        let x = Variable::new("x", ints(&[1, 2]));
        let constraint = DifferenceConstraint::new(x.clone(), x.clone());
        assert_eq!(constraint.scope().len(), 1);

        // A variable can never differ from itself.
        let assignment = hashmap! { x => StandardValue::Int(1) };
        assert!(!constraint.is_satisfied_by(&assignment).unwrap());
    }
}
