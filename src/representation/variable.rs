use std::hash::{Hash, Hasher};
use std::sync::Arc;

use im::HashSet;

use crate::representation::value::ValueEquality;

/// A problem variable: a name plus a finite declared domain.
///
/// The name is the sole basis of identity — two variables with the same name
/// are the same variable, whatever their domains say. This mirrors how
/// problem encoders refer to variables, and it is what lets a `Variable` act
/// as a map key in [`Assignment`](crate::representation::Assignment) and
/// [`Domains`](crate::representation::Domains).
///
/// The declared domain is immutable: the engine only ever filters separate
/// domain snapshots, never the `Variable` itself.
#[derive(Debug, Clone)]
pub struct Variable<V: ValueEquality> {
    name: Arc<str>,
    domain: HashSet<V>,
}

impl<V: ValueEquality> Variable<V> {
    pub fn new(name: impl Into<Arc<str>>, domain: HashSet<V>) -> Self {
        Self {
            name: name.into(),
            domain,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared domain, as given at construction.
    pub fn domain(&self) -> &HashSet<V> {
        &self.domain
    }
}

impl<V: ValueEquality> PartialEq for Variable<V> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl<V: ValueEquality> Eq for Variable<V> {}

impl<V: ValueEquality> Hash for Variable<V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl<V: ValueEquality> std::fmt::Display for Variable<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "?{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use im::hashset;

    use super::Variable;
    use crate::representation::value::StandardValue;

    fn int_domain(values: &[i64]) -> im::HashSet<StandardValue> {
        values.iter().map(|v| StandardValue::Int(*v)).collect()
    }

    #[test]
    fn identity_is_by_name_only() {
        let a1 = Variable::new("a", int_domain(&[1, 2, 3]));
        let a2 = Variable::new("a", int_domain(&[4, 5]));
        let b = Variable::new("b", int_domain(&[1, 2, 3]));

        assert_eq!(a1, a2);
        assert_ne!(a1, b);

        // Same-name variables collapse to a single map entry.
        let set = hashset![a1.clone(), a2, b];
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn declared_domain_is_preserved() {
        let domain = int_domain(&[1, 2]);
        let var = Variable::new("x", domain.clone());
        assert_eq!(var.domain(), &domain);
        assert_eq!(var.name(), "x");
    }
}
