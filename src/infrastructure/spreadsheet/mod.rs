mod calamine_reader;

pub use calamine_reader::CalamineReader;
