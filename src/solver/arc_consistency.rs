use im::HashSet;
use tracing::{debug, trace};

use crate::{
    error::{Result, SolverError},
    representation::{
        constraint::ConstraintRef, value::ValueEquality, variable::Variable, Assignment, Domains,
        VariableSet,
    },
    solver::{stats::SearchStats, work_list::WorkList},
};

/// The domain-filtering propagator.
///
/// Built once per solver from the problem's constraints, partitioned into
/// unary and binary subsets. Construction rejects any constraint of other
/// arity. All filtering methods take the domain mapping by value and return
/// an owned mapping, so a caller's snapshot is never mutated behind its back:
/// keeping a pre-propagation state means keeping the (cheaply shared) `im`
/// map that was passed in. `Ok(None)` signals a domain wipeout.
#[derive(Debug)]
pub struct ArcConsistency<V: ValueEquality> {
    unary: Vec<ConstraintRef<V>>,
    binary: Vec<ConstraintRef<V>>,
    use_ac3: bool,
}

impl<V: ValueEquality> ArcConsistency<V> {
    /// Partitions `constraints` by scope size.
    ///
    /// # Errors
    ///
    /// [`SolverError::UnsupportedArity`] for any constraint whose scope size
    /// is neither 1 nor 2. Note that a binary relation over twice the same
    /// variable has a collapsed scope of size 1 and lands in the unary
    /// partition.
    pub fn new(constraints: &[ConstraintRef<V>], use_ac3: bool) -> Result<Self> {
        let mut unary = Vec::new();
        let mut binary = Vec::new();
        for constraint in constraints {
            match constraint.scope().len() {
                1 => unary.push(constraint.clone()),
                2 => binary.push(constraint.clone()),
                arity => return Err(SolverError::UnsupportedArity { arity }.into()),
            }
        }
        Ok(Self {
            unary,
            binary,
            use_ac3,
        })
    }

    /// Filters every domain against the unary constraints.
    ///
    /// Idempotent: a second call on the returned mapping changes nothing.
    /// `Ok(None)` iff any domain in the resulting mapping is empty, including
    /// domains no unary constraint touches.
    pub fn enforce_node_consistency(&self, mut domains: Domains<V>) -> Result<Option<Domains<V>>> {
        for constraint in &self.unary {
            // The scope of a unary-partition constraint is a singleton.
            let Some(variable) = constraint.scope().iter().next().cloned() else {
                continue;
            };
            let Some(domain) = domains.get(&variable).cloned() else {
                continue;
            };
            let mut kept = domain.clone();
            for value in &domain {
                let single: Assignment<V> = Assignment::unit(variable.clone(), value.clone());
                if !constraint.is_satisfied_by(&single)? {
                    kept.remove(value);
                }
            }
            domains.insert(variable, kept);
        }

        if domains.values().any(|domain| domain.is_empty()) {
            return Ok(None);
        }
        Ok(Some(domains))
    }

    /// The atomic support check: returns `domain_x` minus every value with no
    /// supporting value in `domain_y` under the binary constraints scoped
    /// over exactly `{x, y}`, plus a flag reporting whether anything was
    /// removed. A pair with no binary constraint between them is trivially
    /// supported.
    pub fn revise(
        &self,
        x: &Variable<V>,
        domain_x: &HashSet<V>,
        y: &Variable<V>,
        domain_y: &HashSet<V>,
        stats: &mut SearchStats,
    ) -> Result<(HashSet<V>, bool)> {
        stats.revise_calls += 1;

        let related: Vec<&ConstraintRef<V>> = self
            .binary
            .iter()
            .filter(|constraint| constraint.scope().contains(x) && constraint.scope().contains(y))
            .collect();
        if related.is_empty() {
            return Ok((domain_x.clone(), false));
        }

        let mut kept = domain_x.clone();
        let mut changed = false;
        for x_value in domain_x {
            let mut supported = false;
            'candidates: for y_value in domain_y {
                let pair: Assignment<V> = Assignment::unit(x.clone(), x_value.clone())
                    .update(y.clone(), y_value.clone());
                for constraint in &related {
                    if !constraint.is_satisfied_by(&pair)? {
                        continue 'candidates;
                    }
                }
                supported = true;
                break;
            }
            if !supported {
                trace!(variable = %x, value = ?x_value, "no support, pruning");
                kept.remove(x_value);
                changed = true;
                stats.values_pruned += 1;
            }
        }
        Ok((kept, changed))
    }

    /// Brute-force fixpoint filtering: node consistency, then repeated full
    /// passes over every ordered pair of distinct variables until a pass
    /// removes nothing. `Ok(None)` iff any domain is empty at the fixpoint.
    pub fn ac1(
        &self,
        domains: Domains<V>,
        variables: &VariableSet<V>,
        stats: &mut SearchStats,
    ) -> Result<Option<Domains<V>>> {
        let Some(mut domains) = self.enforce_node_consistency(domains)? else {
            return Ok(None);
        };

        loop {
            let mut revised = false;
            for variable in variables {
                let mut domain = lookup(&domains, variable)?.clone();
                for other in variables {
                    if other == variable {
                        continue;
                    }
                    let other_domain = lookup(&domains, other)?;
                    let (filtered, changed) =
                        self.revise(variable, &domain, other, other_domain, stats)?;
                    domain = filtered;
                    revised |= changed;
                }
                domains.insert(variable.clone(), domain);
            }
            if !revised {
                break;
            }
        }

        if domains.values().any(|domain| domain.is_empty()) {
            return Ok(None);
        }
        Ok(Some(domains))
    }

    /// Worklist-based filtering: node consistency, then a queue seeded with
    /// both ordered arcs of every binary constraint whose endpoints are in
    /// `variables`. A shrinking revision of `(x, y)` re-enqueues every seed
    /// arc pointing into `x`; an emptied domain short-circuits to `Ok(None)`.
    /// Reaches the same fixpoint as [`ac1`](Self::ac1).
    pub fn ac3(
        &self,
        domains: Domains<V>,
        variables: &VariableSet<V>,
        stats: &mut SearchStats,
    ) -> Result<Option<Domains<V>>> {
        let Some(mut domains) = self.enforce_node_consistency(domains)? else {
            return Ok(None);
        };

        let mut arcs: Vec<(Variable<V>, Variable<V>)> = Vec::new();
        for constraint in &self.binary {
            let mut scope = constraint.scope().iter();
            let (Some(a), Some(b)) = (scope.next(), scope.next()) else {
                continue;
            };
            if variables.contains(a) && variables.contains(b) {
                arcs.push((a.clone(), b.clone()));
                arcs.push((b.clone(), a.clone()));
            }
        }

        let mut worklist = WorkList::new();
        for arc in &arcs {
            worklist.push_back(arc.clone());
        }

        while let Some((x, y)) = worklist.pop_front() {
            let domain_x = lookup(&domains, &x)?;
            let domain_y = lookup(&domains, &y)?;
            let (filtered, changed) = self.revise(&x, domain_x, &y, domain_y, stats)?;
            if !changed {
                continue;
            }
            if filtered.is_empty() {
                debug!(variable = %x, "domain wiped out during propagation");
                return Ok(None);
            }
            domains.insert(x.clone(), filtered);
            // The domain of x shrank: every arc pointing into x must be
            // reconsidered.
            for (from, into) in &arcs {
                if into == &x {
                    worklist.push_back((from.clone(), into.clone()));
                }
            }
        }

        debug!("propagation queue drained");
        Ok(Some(domains))
    }

    /// The entry point solvers call. Degenerates to node consistency when
    /// there are no binary constraints; otherwise dispatches to AC-3 or AC-1
    /// per the construction-time flag.
    pub fn arc_consistency(
        &self,
        domains: Domains<V>,
        variables: &VariableSet<V>,
        stats: &mut SearchStats,
    ) -> Result<Option<Domains<V>>> {
        if self.binary.is_empty() {
            return self.enforce_node_consistency(domains);
        }
        if self.use_ac3 {
            return self.ac3(domains, variables, stats);
        }
        self.ac1(domains, variables, stats)
    }
}

fn lookup<'a, V: ValueEquality>(
    domains: &'a Domains<V>,
    variable: &Variable<V>,
) -> Result<&'a HashSet<V>> {
    domains.get(variable).ok_or_else(|| {
        SolverError::UnknownVariable {
            variable: variable.name().to_owned(),
        }
        .into()
    })
}
