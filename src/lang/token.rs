use std::convert::TryFrom;

/// ## The vocabulary
///
/// Every program is written with these three words and nothing else.

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Word {
    Pi,
    Pika,
    Pikachu,
}

impl Word {
    pub fn as_str(&self) -> &'static str {
        match self {
            Word::Pi => "pi",
            Word::Pika => "pika",
            Word::Pikachu => "pikachu",
        }
    }
}

impl TryFrom<&str> for Word {
    type Error = ();
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "pi" => Ok(Word::Pi),
            "pika" => Ok(Word::Pika),
            "pikachu" => Ok(Word::Pikachu),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
