use super::context::MatchContext;
use super::node::Node;
use super::Chain;
use crate::matching::{match_literal, Matcher};
use crate::tokens::Scanner;
use std::fmt;
use std::rc::Rc;

/// One entry of a chain's sequence
#[derive(Clone)]
pub enum Element {
    /// Single-token primitive, run with consumption on
    Matcher(Matcher),
    /// Nested rule
    Chain(Chain),
    /// Alternatives; the first that succeeds wins
    Choice(Vec<Element>),
    /// Rule built on first use, for recursive grammars
    Lazy(Rc<dyn Fn() -> Chain>),
    /// Always succeeds, yields `Node::Empty`
    True,
}

impl Element {
    pub fn choice<I, E>(alternatives: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Element>,
    {
        Element::Choice(alternatives.into_iter().map(Into::into).collect())
    }

    pub fn lazy<F>(rule: F) -> Self
    where
        F: Fn() -> Chain + 'static,
    {
        Element::Lazy(Rc::new(rule))
    }

    /// Run this element against the scanner.
    ///
    /// Failure leaves the scanner where it was.
    pub fn evaluate(&self, scanner: &mut dyn Scanner, context: &mut MatchContext) -> Option<Node> {
        match self {
            Element::Matcher(matcher) => {
                let position = scanner.position();
                let result = matcher.run(scanner, true);
                if result.matched {
                    Some(result.token.map_or(Node::Empty, Node::Token))
                } else {
                    context.record_failure(position, result.token, || matcher.label());
                    None
                }
            }
            Element::Chain(chain) => chain.evaluate(scanner, context),
            Element::Choice(alternatives) => {
                for alternative in alternatives {
                    if let Some(node) = alternative.evaluate(scanner, context) {
                        return Some(node);
                    }
                }
                None
            }
            Element::Lazy(rule) => rule().evaluate(scanner, context),
            Element::True => Some(Node::Empty),
        }
    }
}

impl From<Matcher> for Element {
    fn from(matcher: Matcher) -> Self {
        Element::Matcher(matcher)
    }
}

impl From<Chain> for Element {
    fn from(chain: Chain) -> Self {
        Element::Chain(chain)
    }
}

/// Bare words are literal matchers
impl From<&str> for Element {
    fn from(word: &str) -> Self {
        Element::Matcher(match_literal(word))
    }
}

impl From<Vec<Element>> for Element {
    fn from(alternatives: Vec<Element>) -> Self {
        Element::Choice(alternatives)
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Matcher(matcher) => write!(f, "Matcher({})", matcher.label()),
            Element::Chain(chain) => write!(f, "Chain({})", chain.label()),
            Element::Choice(alternatives) => f.debug_tuple("Choice").field(alternatives).finish(),
            Element::Lazy(_) => f.write_str("Lazy"),
            Element::True => f.write_str("True"),
        }
    }
}
