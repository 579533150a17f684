pub mod corpus;
pub mod language;
pub mod token;

pub use corpus::{Corpus, Side};
pub use language::{Language, TextDirection};
pub use token::{Position, Token};
