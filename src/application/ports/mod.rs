mod embedder;
mod spreadsheet_reader;

pub use embedder::{Embedder, EmbedderError};
pub use spreadsheet_reader::{SpreadsheetError, SpreadsheetReader};
