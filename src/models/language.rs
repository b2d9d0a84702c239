use clap::ValueEnum;

/// Display language of the runner. Question banks are always authored in Arabic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Language {
    #[value(name = "ar")]
    Arabic,
    #[value(name = "en")]
    English,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Arabic, Language::English];

    /// Name of the language written in itself.
    pub fn native_name(self) -> &'static str {
        match self {
            Language::Arabic => "عربي",
            Language::English => "English",
        }
    }
}
