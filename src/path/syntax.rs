use super::Command;
use crate::errors::{Result, TokenizeError};

use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    Command(Command),
    Number(f64),
}

/// Character cursor over raw path data, producing `Token`s on demand.
pub struct SvgPathSyntax {
    data: Vec<char>,
    index: usize,
}

impl SvgPathSyntax {
    pub fn new(data: &str) -> Self {
        Self {
            data: data.chars().collect(),
            index: 0,
        }
    }

    fn current(&self) -> Option<char> {
        self.data.get(self.index).copied()
    }

    fn advance(&mut self) {
        self.index += 1;
    }

    pub fn at_end(&self) -> bool {
        self.index >= self.data.len()
    }

    fn at_separator(&self) -> bool {
        // The SVG definition of whitespace is 0x20, 0x9, 0xA, 0xD; comma is
        // interchangeable with whitespace between tokens.
        matches!(self.current(), Some(' ' | '\t' | '\n' | '\r' | ','))
    }

    fn skip_separators(&mut self) {
        while self.at_separator() {
            self.advance();
        }
    }

    /// Consume a run of decimal digits, returning how many were read.
    fn read_digits(&mut self, text: &mut String) -> usize {
        let mut count = 0;
        while let Some(ch @ '0'..='9') = self.current() {
            text.push(ch);
            self.advance();
            count += 1;
        }
        count
    }

    /// Read a numeric literal starting at the current position.
    ///
    /// Reads as little as needed to allow valid parsing, so numbers can be
    /// squished together providing the result is unambiguous, e.g. "10-5"
    /// is 10 followed by -5, and "0.6.5" is 0.6 followed by .5.
    pub fn read_number(&mut self) -> Result<f64> {
        let start = self.index;
        let mut text = String::new();
        if let Some(sign @ ('+' | '-')) = self.current() {
            text.push(sign);
            self.advance();
        }
        let mut digits = self.read_digits(&mut text);
        if self.current() == Some('.') {
            text.push('.');
            self.advance();
            digits += self.read_digits(&mut text);
        }
        if digits == 0 {
            // bare sign, bare '.', or sign followed by '.'
            return Err(TokenizeError::MalformedNumber { text, index: start }.into());
        }
        if let Some(exp @ ('e' | 'E')) = self.current() {
            text.push(exp);
            self.advance();
            if let Some(sign @ ('+' | '-')) = self.current() {
                text.push(sign);
                self.advance();
            }
            if self.read_digits(&mut text) == 0 {
                return Err(TokenizeError::MalformedNumber { text, index: start }.into());
            }
        }
        match text.parse::<f64>() {
            // overflow such as "1e400" parses as infinity
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(TokenizeError::MalformedNumber { text, index: start }.into()),
        }
    }

    /// Read the next token along with its character index, or `None`
    /// once the input is exhausted.
    pub fn read_token(&mut self) -> Result<Option<(usize, Token)>> {
        self.skip_separators();
        let index = self.index;
        let Some(ch) = self.current() else {
            return Ok(None);
        };
        let token = if let Some(command) = Command::from_letter(ch) {
            self.advance();
            Token::Command(command)
        } else if matches!(ch, '0'..='9' | '+' | '-' | '.') {
            Token::Number(self.read_number()?)
        } else {
            return Err(TokenizeError::UnexpectedChar { ch, index }.into());
        };
        trace!(index, ?token, "path token");
        Ok(Some((index, token)))
    }
}

impl Iterator for SvgPathSyntax {
    type Item = Result<(usize, Token)>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_token().transpose()
    }
}

/// Tokenize path data, keeping the character index of each token.
pub fn tokenize_indexed(data: &str) -> Result<Vec<(usize, Token)>> {
    SvgPathSyntax::new(data).collect()
}

/// Split raw path data into command and number tokens.
pub fn tokenize(data: &str) -> Result<Vec<Token>> {
    Ok(tokenize_indexed(data)?
        .into_iter()
        .map(|(_, token)| token)
        .collect())
}
