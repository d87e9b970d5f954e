pub mod alphabet;
pub mod classifier;
pub mod text_processors;

pub use alphabet::{Alphabet, Edition};
pub use classifier::{classify, LetterClassifier, NO_MATCH};
pub use text_processors::normalize;
