pub mod checker_args;
pub use checker_args::CheckerArgs;

pub mod config;
pub use config::PlagiarismCheckerConfig;

pub mod document_reader;
pub use document_reader::DocumentReader;

pub mod error;
pub use error::Error;

pub mod result_writer;
pub use result_writer::ResultWriter;
