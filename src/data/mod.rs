mod loader;
mod sample;

pub use loader::{LoadError, load_bank, load_grammar, read_json};
pub use sample::{BUILTIN_TRANSLATIONS, SAMPLE_BANK};
