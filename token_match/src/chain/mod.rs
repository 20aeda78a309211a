//! Sequencing layer over the single-token matchers
//!
//! - **[`Chain`]** - ordered elements with a result transform, optionally repeatable
//! - **[`Element`]** - matcher, nested chain, choice, lazy rule or sentinel
//! - **[`Node`]** - the value a successful chain produces
//! - **quantifiers** - `optional`, `plus`, `many`
//!
//! A failing sequence restores the scanner to where it started, so a chain
//! either consumes its whole match or nothing.

pub mod context;
pub mod element;
pub mod node;
pub mod quantifiers;

pub use context::{Failure, MatchContext};
pub use element::Element;
pub use node::Node;
pub use quantifiers::{many, optional, plus};

use crate::config::MatchingPreferences;
use crate::logging::codes;
use crate::matching::MatcherKind;
use crate::syntax::SyntaxResult;
use crate::tokens::{Scanner, Token};
use crate::{log_debug, log_warning};
use std::fmt;
use std::rc::Rc;

/// Result transform applied to the children of a matched sequence
pub type Transform = dyn Fn(Vec<Node>) -> Node;

/// A grammar rule: elements matched in order
#[derive(Clone)]
pub struct Chain {
    elements: Rc<Vec<Element>>,
    transform: Option<Rc<Transform>>,
    repeatable: bool,
    name: Option<&'static str>,
}

/// Build a chain from an ordered list of elements
pub fn chain<I, E>(elements: I) -> Chain
where
    I: IntoIterator<Item = E>,
    E: Into<Element>,
{
    Chain::new(elements.into_iter().map(Into::into).collect())
}

/// Build a chain from heterogeneous elements
///
/// ```
/// use token_match::chain;
/// use token_match::matching::{match_number, match_word};
///
/// let rule = chain!["limit", match_number()];
/// let other = chain![match_word(), rule];
/// assert_eq!(other.elements().len(), 2);
/// ```
#[macro_export]
macro_rules! chain {
    ($($element:expr),* $(,)?) => {
        $crate::chain::Chain::new(vec![$($crate::chain::Element::from($element)),*])
    };
}

impl Chain {
    pub fn new(elements: Vec<Element>) -> Self {
        Self {
            elements: Rc::new(elements),
            transform: None,
            repeatable: false,
            name: None,
        }
    }

    /// Replace the result transform; the default yields `Node::List(children)`
    pub fn map<F>(mut self, transform: F) -> Self
    where
        F: Fn(Vec<Node>) -> Node + 'static,
    {
        self.transform = Some(Rc::new(transform));
        self
    }

    pub fn named(mut self, name: &'static str) -> Self {
        self.name = Some(name);
        self
    }

    /// Mark the chain to match one or more times
    pub fn into_repeatable(mut self) -> Self {
        self.repeatable = true;
        self
    }

    pub fn is_repeatable(&self) -> bool {
        self.repeatable
    }

    pub fn kind(&self) -> MatcherKind {
        MatcherKind::Chain
    }

    pub fn name(&self) -> Option<&'static str> {
        self.name
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn label(&self) -> &'static str {
        self.name.unwrap_or("chain")
    }

    /// Match against the scanner with default preferences
    pub fn matches(&self, scanner: &mut dyn Scanner) -> Option<Node> {
        let mut context = MatchContext::new(MatchingPreferences::default());
        self.evaluate(scanner, &mut context)
    }

    /// Parse a whole token sequence; every significant token must be consumed
    pub fn parse(&self, tokens: Vec<Token>) -> SyntaxResult<Node> {
        crate::syntax::parse_tokens(self, tokens)
    }

    pub fn parse_with(
        &self,
        tokens: Vec<Token>,
        preferences: MatchingPreferences,
    ) -> SyntaxResult<Node> {
        crate::syntax::parse_tokens_with(self, tokens, preferences)
    }

    /// Match within an existing evaluation context
    pub fn evaluate(&self, scanner: &mut dyn Scanner, context: &mut MatchContext) -> Option<Node> {
        if context.depth_exceeded().is_some() {
            return None;
        }
        if !context.enter() {
            let span = scanner.read().map(|token| token.span).unwrap_or_default();
            context.mark_depth_exceeded(span);
            return None;
        }

        let trace = context.preferences().trace_chains;
        if trace {
            log_debug!("Entering chain",
                "chain" => self.label(),
                "position" => scanner.position(),
                "depth" => context.depth()
            );
        }

        let result = if self.repeatable {
            self.repeat(scanner, context)
        } else {
            self.sequence(scanner, context)
        };

        if trace {
            log_debug!("Leaving chain",
                "chain" => self.label(),
                "position" => scanner.position(),
                "matched" => result.is_some()
            );
        }

        context.exit();
        result
    }

    fn sequence(&self, scanner: &mut dyn Scanner, context: &mut MatchContext) -> Option<Node> {
        let start = scanner.position();
        let mut children = Vec::with_capacity(self.elements.len());

        for element in self.elements.iter() {
            match element.evaluate(scanner, context) {
                Some(node) => children.push(node),
                None => {
                    scanner.restore(start);
                    return None;
                }
            }
        }

        Some(match &self.transform {
            Some(transform) => transform(children),
            None => Node::List(children),
        })
    }

    /// Greedy one-or-more loop; the cursor ends right after the last iteration.
    ///
    /// An iteration that consumes nothing ends the loop. It is kept only when
    /// it is the first one.
    fn repeat(&self, scanner: &mut dyn Scanner, context: &mut MatchContext) -> Option<Node> {
        let start = scanner.position();
        let mut iterations = vec![self.sequence(scanner, context)?];

        if scanner.position() == start {
            log_warning!(codes::matching::ZERO_WIDTH_REPETITION,
                "Repetition matched without consuming input",
                "chain" => self.label(),
                "position" => start
            );
            return Some(Node::List(iterations));
        }

        loop {
            let before = scanner.position();
            match self.sequence(scanner, context) {
                Some(_) if scanner.position() == before => break,
                Some(node) => iterations.push(node),
                None => break,
            }
        }

        Some(Node::List(iterations))
    }
}

impl fmt::Debug for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chain")
            .field("name", &self.name)
            .field("repeatable", &self.repeatable)
            .field("elements", &self.elements)
            .finish()
    }
}
