/// The base trait for any value that can appear in a variable's domain.
///
/// This establishes the minimum requirements for a domain value: it must be
/// cloneable, debuggable, equatable, and hashable. It is a marker trait, so
/// any type that satisfies these bounds implements `ValueEquality`.
pub trait ValueEquality: Clone + std::fmt::Debug + Eq + std::hash::Hash + 'static {}
impl<T> ValueEquality for T where T: Clone + std::fmt::Debug + Eq + std::hash::Hash + 'static {}

/// A concrete enum providing a ready-made value type for problems that do not
/// need a bespoke one.
///
/// Problem-specific value types can wrap or compose `StandardValue` to mix
/// standard values with their own.
///
/// # Example
///
/// ```no_run
/// use crible::representation::value::StandardValue;
///
/// // A custom value type for a hypothetical problem.
/// #[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// pub enum MyProblemValue {
///     DomainSpecificValue(String),
///     Standard(StandardValue),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StandardValue {
    /// A 64-bit integer value.
    Int(i64),
    /// A boolean value.
    Bool(bool),
}
