mod columns;
mod tokenizer;

pub use columns::{is_header_row, ColumnMap};
pub use tokenizer::{split_line, tokenize, RawRow, Rows};
