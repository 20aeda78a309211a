//! Single-token matching primitives
//!
//! - **[`MatchResult`]** - uniform success/failure outcome of one match attempt
//! - **[`Pattern`]** - literal argument (one word or a word set)
//! - **[`Matcher`]** / **[`MatchFactory`]** - tagged matcher values and their factory
//! - **primitives** - `match_literal`, `match_word`, `match_word_of`, `match_string`,
//!   `match_number`, `match_word_or_string`, `match_true`, `match_false`

pub mod matcher;
pub mod predicate;
pub mod primitives;
pub mod result;

pub use matcher::{create_match, MatchFactory, MatchImpl, Matcher, MatcherKind};
pub use predicate::{match_token, Pattern};
pub use primitives::{
    literal_factory, match_false, match_literal, match_number, match_string, match_true,
    match_word, match_word_of, match_word_or_string, number_factory, string_factory, word_factory,
    word_or_string_factory,
};
pub use result::MatchResult;
