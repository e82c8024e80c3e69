//! Symbol types for automata transitions.

/// A symbol identifier, the index of the symbol's label in the alphabet.
/// The special value `EPSILON` represents an epsilon (empty) transition.
pub type SymbolId = u32;

/// Special symbol ID representing epsilon (empty) transitions.
/// We use u32::MAX as the epsilon marker, so it never collides with an
/// interned alphabet symbol.
pub const EPSILON: SymbolId = u32::MAX;

/// Label that marks an epsilon transition in tabular input.
pub const DEFAULT_EPSILON_LABEL: &str = "ε";

/// Check if a symbol is an epsilon transition.
#[inline]
pub fn is_epsilon(symbol: SymbolId) -> bool {
    symbol == EPSILON
}
