use super::LineNumber;

#[derive(Clone, PartialEq)]
pub struct Error {
    kind: ErrorKind,
    line_number: LineNumber,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorKind::$err)
    };
    ($err:ident, $line:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorKind::$err).in_line_number(Some($line))
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorKind::$err).message($msg)
    };
    ($err:ident, $line:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorKind::$err)
            .in_line_number(Some($line))
            .message($msg)
    };
}

impl Error {
    pub fn new(kind: ErrorKind) -> Error {
        Error {
            kind,
            line_number: None,
            message: String::new(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn line_number(&self) -> LineNumber {
        self.line_number
    }

    pub fn text(&self) -> &str {
        &self.message
    }

    pub fn in_line_number(self, line: LineNumber) -> Error {
        debug_assert!(self.line_number.is_none());
        Error {
            line_number: line,
            ..self
        }
    }

    pub fn message<S: Into<String>>(self, message: S) -> Error {
        debug_assert!(self.message.is_empty());
        Error {
            message: message.into(),
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    SyntaxError,
    AddressError,
    RuntimeError,
    LoadError,
    InternalError,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ErrorKind::*;
        match self {
            SyntaxError => write!(f, "Syntax error"),
            AddressError => write!(f, "Address error"),
            RuntimeError => write!(f, "Runtime error"),
            LoadError => write!(f, "Load error"),
            InternalError => write!(f, "Internal VM error"),
        }
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut suffix = String::new();
        if !self.message.is_empty() {
            suffix.push_str(&format!(": {}", self.message));
        }
        if let Some(line_number) = self.line_number {
            suffix.push_str(&format!(" on line {}", line_number));
        }
        write!(f, "{}{}", self.kind, suffix)
    }
}

impl std::error::Error for Error {}

/// ## Advisory diagnostic
///
/// Produced when a program is legal but probably not what the author meant.
/// Never stops assembly.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    line_number: usize,
    target: usize,
}

impl Warning {
    pub fn jump_to_nop(line_number: usize, target: usize) -> Warning {
        Warning {
            line_number,
            target,
        }
    }

    pub fn line_number(&self) -> usize {
        self.line_number
    }

    pub fn target(&self) -> usize {
        self.target
    }
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "WARNING: jump to address (NOP) line #{} on line {}",
            self.target, self.line_number
        )
    }
}
