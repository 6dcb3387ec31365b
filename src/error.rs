use std::backtrace::Backtrace;
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// The error taxonomy of the engine.
///
/// Every variant is a programmer-error-class violation detected either at
/// construction time (malformed constraints) or at query time (a constraint
/// evaluated against an assignment that does not cover its scope). Search
/// exhaustion is *not* an error: an unsatisfiable problem is reported through
/// [`SolveOutcome::Unsatisfiable`](crate::solver::outcome::SolveOutcome).
#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    /// A constraint's sub-domain contains values outside the declared domain
    /// of the variable it restricts.
    #[error("sub-domain of constraint on `{variable}` is not contained in the variable's declared domain")]
    SubDomainNotContained { variable: String },

    /// The arc-consistency propagator was built from a constraint whose scope
    /// size is neither 1 nor 2.
    #[error("arc consistency requires unary or binary constraints, got a constraint of arity {arity}")]
    UnsupportedArity { arity: usize },

    /// A constraint was evaluated against an assignment missing one of the
    /// variables in its scope.
    #[error("variable `{variable}` in the scope of `{constraint}` is not assigned")]
    UnassignedVariable {
        variable: String,
        constraint: String,
    },

    /// A domain mapping handed to the propagator has no entry for a variable
    /// it was asked to filter.
    #[error("no domain entry for variable `{variable}`")]
    UnknownVariable { variable: String },
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Inner: {inner}\n{backtrace}")]
    Inner {
        inner: Box<SolverError>,
        backtrace: Box<Backtrace>,
    },
}

impl From<SolverError> for Error {
    fn from(inner: SolverError) -> Self {
        Error::Inner {
            inner: Box::new(inner),
            backtrace: Box::new(std::backtrace::Backtrace::capture()),
        }
    }
}

impl Error {
    /// The underlying [`SolverError`], for matching on the error kind.
    pub fn kind(&self) -> &SolverError {
        match self {
            Error::Inner { inner, .. } => inner,
        }
    }
}
