pub mod loaders;
pub mod paper;
pub mod question;

pub use loaders::{load_all_toml_files, load_toml_to_paper};
pub use paper::{Paper, PaperItem, PaperSection};
pub use question::{ChoiceOption, MediaItem, MediaKind, Question, QuestionContent, QuestionType};
