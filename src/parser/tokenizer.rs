use std::mem;

use crate::types::RowNumber;

const QUOTE: char = '"';
const DELIMITER: char = ',';
const LINE_TERMINATORS: [char; 2] = ['\r', '\n'];

/// The trimmed cells of one physical line of the uploaded file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    /// 1-based line number in the original text, blank lines included.
    pub line: RowNumber,
    pub cells: Vec<String>
}

impl RawRow {
    pub fn cell(&self, index: Option<usize>) -> &str {
        index
            .and_then(|index| self.cells.get(index))
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn first_cell(&self) -> &str {
        self.cell(Some(0))
    }

    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_empty())
    }
}

/// Lazy iterator over the non-empty lines of a CSV text.
///
/// Lines end at `\r\n`, `\n` or a lone `\r`. Calling [`tokenize`] again
/// restarts from the first line.
#[derive(Debug, Clone)]
pub struct Rows<'a> {
    remaining: Option<&'a str>,
    line: RowNumber
}

impl<'a> Rows<'a> {
    fn next_line(&mut self) -> Option<(RowNumber, &'a str)> {
        let text = self.remaining?;
        self.line += 1;

        match text.find(LINE_TERMINATORS) {
            Some(end) => {
                let terminator_length = if text[end..].starts_with("\r\n") { 2 } else { 1 };
                self.remaining = Some(&text[end + terminator_length..]);

                Some((self.line, &text[..end]))
            }
            None => {
                self.remaining = None;

                Some((self.line, text))
            }
        }
    }
}

impl Iterator for Rows<'_> {
    type Item = RawRow;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((line, text)) = self.next_line() {
            if text.trim().is_empty() {
                continue;
            }

            return Some(RawRow {
                line,
                cells: split_line(text)
            });
        }

        None
    }
}

pub fn tokenize(text: &str) -> Rows<'_> {
    Rows {
        remaining: Some(text),
        line: 0
    }
}

/// Splits one line on commas that sit outside double quotes.
///
/// A quote only toggles the quoted state and is never copied into the cell,
/// so `""` inside a quoted field closes and reopens it instead of producing
/// a literal quote.
pub fn split_line(line: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for character in line.chars() {
        match character {
            QUOTE => in_quotes = !in_quotes,
            DELIMITER if !in_quotes => cells.push(mem::take(&mut current).trim().to_string()),
            _ => current.push(character)
        }
    }

    cells.push(current.trim().to_string());

    cells
}
