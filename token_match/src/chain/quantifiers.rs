//! Optionality and repetition over chains

use super::{chain, Chain, Element, Node};

/// Zero or one: always succeeds, yielding the inner result or `Node::Empty`
pub fn optional<I, E>(elements: I) -> Chain
where
    I: IntoIterator<Item = E>,
    E: Into<Element>,
{
    let inner = chain(elements);
    Chain::new(vec![Element::Choice(vec![Element::Chain(inner), Element::True])])
        .map(|children| children.into_iter().next().unwrap_or(Node::Empty))
        .named("optional")
}

/// One or more, greedy
pub fn plus<I, E>(elements: I) -> Chain
where
    I: IntoIterator<Item = E>,
    E: Into<Element>,
{
    chain(elements).into_repeatable().named("plus")
}

/// Zero or more, greedy
pub fn many<I, E>(elements: I) -> Chain
where
    I: IntoIterator<Item = E>,
    E: Into<Element>,
{
    optional([plus(elements)]).named("many")
}
