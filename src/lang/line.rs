use super::token::Word;
use super::Error;
use std::convert::TryFrom;

/// ## A validated source line
///
/// Holds the 1-based number of the line in the source file and its words.
/// Construction is the only place the vocabulary and the
/// three-in-a-row rule are enforced.

#[derive(Debug, PartialEq, Clone)]
pub struct Line {
    number: usize,
    words: Vec<Word>,
}

impl Line {
    pub fn new(number: usize, s: &str) -> Result<Line, Error> {
        let s = s.trim().to_lowercase();
        if s.is_empty() {
            return Err(error!(SyntaxError, number; "empty line"));
        }
        let mut words: Vec<Word> = vec![];
        for text in s.split_whitespace() {
            match Word::try_from(text) {
                Ok(word) => words.push(word),
                Err(_) => {
                    return Err(error!(SyntaxError, number; format!("non pikachu word: {}", text)))
                }
            }
        }
        if words.windows(3).any(|w| w[0] == w[1] && w[1] == w[2]) {
            return Err(error!(SyntaxError, number; "three of same word in a row"));
        }
        Ok(Line { number, words })
    }

    pub fn number(&self) -> usize {
        self.number
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let s: Vec<&str> = self.words.iter().map(|w| w.as_str()).collect();
        write!(f, "{}", s.join(" "))
    }
}

#[cfg(test)]
#[path = "tests/line_test.rs"]
mod tests;
