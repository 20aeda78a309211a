//! Cursor interface the matchers run against

use super::Token;

/// A forward cursor over a token sequence.
///
/// `read` never moves the cursor; `next` moves it by exactly one token.
/// `position` and `restore` exist for the chain layer, which rewinds the
/// cursor when a sequence fails part way through. Matchers themselves only
/// call `read` and `next`.
pub trait Scanner {
    /// Token at the cursor, or `None` at end of input
    fn read(&self) -> Option<&Token>;

    /// Advance the cursor by one token
    fn next(&mut self);

    /// Current cursor position
    fn position(&self) -> usize;

    /// Move the cursor back to a position previously returned by `position`
    fn restore(&mut self, position: usize);

    fn is_at_end(&self) -> bool {
        self.read().is_none()
    }
}
