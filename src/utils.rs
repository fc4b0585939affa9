pub mod format_score;
pub mod jaccard_similarity_chars;
pub mod normalize_text;

pub use format_score::format_score;
pub use jaccard_similarity_chars::{character_set, jaccard_similarity_chars};
pub use normalize_text::{is_allowed_char, normalize_text};
