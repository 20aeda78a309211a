use crate::tokens::Token;
use serde::{Deserialize, Serialize};

/// Value produced by a successful chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Node {
    /// Sentinel or skipped optional
    Empty,
    /// Token consumed by a matcher
    Token(Token),
    /// Results of a sequence, or the iterations of a repetition
    List(Vec<Node>),
}

impl Node {
    pub fn is_empty(&self) -> bool {
        matches!(self, Node::Empty)
    }

    pub fn as_token(&self) -> Option<&Token> {
        match self {
            Node::Token(token) => Some(token),
            _ => None,
        }
    }

    /// Direct children of a list node; empty for leaves
    pub fn children(&self) -> &[Node] {
        match self {
            Node::List(children) => children,
            _ => &[],
        }
    }

    /// Every token in the tree, in input order
    pub fn tokens(&self) -> Vec<&Token> {
        let mut tokens = Vec::new();
        self.collect_tokens(&mut tokens);
        tokens
    }

    /// Values of every token in the tree, in input order
    pub fn token_values(&self) -> Vec<&str> {
        self.tokens()
            .into_iter()
            .map(|token| token.value.as_str())
            .collect()
    }

    fn collect_tokens<'a>(&'a self, tokens: &mut Vec<&'a Token>) {
        match self {
            Node::Empty => {}
            Node::Token(token) => tokens.push(token),
            Node::List(children) => {
                for child in children {
                    child.collect_tokens(tokens);
                }
            }
        }
    }
}

impl From<Token> for Node {
    fn from(token: Token) -> Self {
        Node::Token(token)
    }
}
