//! Matcher values and the factory that produces them

use super::{MatchResult, Pattern};
use crate::tokens::Scanner;
use std::fmt;
use std::rc::Rc;

/// Raw matcher implementation: `(scanner, argument, should_consume) -> result`
pub type MatchImpl = dyn Fn(&mut dyn Scanner, Option<&Pattern>, bool) -> MatchResult;

/// Kind tag read by the chain layer and diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatcherKind {
    /// Single-token primitive
    Match,
    /// Sequence built by the chain layer
    Chain,
}

/// A primitive matcher bound to its argument.
///
/// The kind tag and display name are descriptive only; [`Matcher::run`]
/// depends on nothing but the bound argument and the implementation.
#[derive(Clone)]
pub struct Matcher {
    implementation: Rc<MatchImpl>,
    argument: Option<Pattern>,
    display_name: Option<&'static str>,
}

impl Matcher {
    /// Match the token at the cursor, advancing only if `should_consume` and matched
    pub fn run(&self, scanner: &mut dyn Scanner, should_consume: bool) -> MatchResult {
        (self.implementation)(scanner, self.argument.as_ref(), should_consume)
    }

    /// Lookahead: match without consuming
    pub fn peek(&self, scanner: &mut dyn Scanner) -> MatchResult {
        self.run(scanner, false)
    }

    pub fn kind(&self) -> MatcherKind {
        MatcherKind::Match
    }

    pub fn display_name(&self) -> Option<&'static str> {
        self.display_name
    }

    pub fn argument(&self) -> Option<&Pattern> {
        self.argument.as_ref()
    }

    /// What this matcher expects, for diagnostics
    pub fn label(&self) -> String {
        match (&self.argument, self.display_name) {
            (Some(pattern), _) => pattern.to_string(),
            (None, Some(name)) => name.to_string(),
            (None, None) => "token".to_string(),
        }
    }
}

impl fmt::Debug for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matcher")
            .field("kind", &self.kind())
            .field("display_name", &self.display_name)
            .field("argument", &self.argument)
            .finish()
    }
}

/// Produces matchers that share one implementation and display name
#[derive(Clone)]
pub struct MatchFactory {
    implementation: Rc<MatchImpl>,
    display_name: Option<&'static str>,
}

impl MatchFactory {
    /// Bind an argument, producing a new matcher
    pub fn bind(&self, argument: Option<Pattern>) -> Matcher {
        Matcher {
            implementation: Rc::clone(&self.implementation),
            argument,
            display_name: self.display_name,
        }
    }

    pub fn display_name(&self) -> Option<&'static str> {
        self.display_name
    }
}

/// Lift a raw implementation into a matcher factory
pub fn create_match<F>(implementation: F, display_name: Option<&'static str>) -> MatchFactory
where
    F: Fn(&mut dyn Scanner, Option<&Pattern>, bool) -> MatchResult + 'static,
{
    MatchFactory {
        implementation: Rc::new(implementation),
        display_name,
    }
}
