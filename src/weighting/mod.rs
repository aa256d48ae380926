pub mod model;
pub mod stop_words;
pub mod tokenizer;
pub mod vocabulary;

pub use model::{CorpusModel, PageTermWeights};
pub use stop_words::ENGLISH_STOP_WORDS;
pub use tokenizer::Tokenizer;
pub use vocabulary::Vocabulary;
