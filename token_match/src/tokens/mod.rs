//! Token system consumed by the matchers
//!
//! - **[`Token`]** / **[`TokenKind`]** - immutable lexical units and their categories
//! - **[`Scanner`]** - the read/advance cursor interface matchers run against
//! - **[`TokenStream`]** - the `Scanner` implementation over a token vector
//! - **[`TokenStreamBuilder`]** - builds token vectors with consistent spans

pub mod scanner;
pub mod token;
pub mod token_stream;

pub use scanner::Scanner;
pub use token::{Token, TokenKind};
pub use token_stream::{TokenStream, TokenStreamBuilder};
