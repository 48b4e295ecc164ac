//! First-class invariants for tic-tac-toe sessions.
//!
//! Invariants are logical properties that must hold after every accepted
//! move. Sessions check the full set in debug builds; each one can also be
//! tested on its own.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of up to four invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns `Ok(())` if all invariants hold, or every violation found.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);

pub mod alternating_turn;
pub mod history_consistent;
pub mod mark_balance;
pub mod monotonic_board;

pub use alternating_turn::AlternatingTurnInvariant;
pub use history_consistent::HistoryConsistentInvariant;
pub use mark_balance::MarkBalanceInvariant;
pub use monotonic_board::MonotonicBoardInvariant;

/// All session invariants as a composable set.
pub type SessionInvariants = (
    MarkBalanceInvariant,
    AlternatingTurnInvariant,
    HistoryConsistentInvariant,
    MonotonicBoardInvariant,
);
