use super::{Column, LineNumber};

#[derive(Clone, PartialEq)]
pub struct Error {
    code: ErrorCode,
    line_number: LineNumber,
    column: Column,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, ..$col:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_column($col)
    };
    ($err:ident, $line:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_line_number($line)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, ..$col:expr;  $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_column($col)
            .message($msg)
    };
    ($err:ident, $line:expr, ..$col:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .in_column($col)
    };
    ($err:ident, $line:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .message($msg)
    };
    ($err:ident, $line:expr, ..$col:expr;  $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .in_column($col)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            line_number: None,
            column: 0..0,
            message: String::new(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn line_number(&self) -> LineNumber {
        self.line_number
    }

    pub fn column(&self) -> Column {
        self.column.clone()
    }

    /// Capacity and I/O failures end the run. Everything else is
    /// reported against the statement and compilation carries on.
    pub fn is_fatal(&self) -> bool {
        use ErrorCode::*;
        match self.code {
            Break | OutOfMemory | NameTooLong | InternalError | FileNotFound | DiskIoError => {
                true
            }
            SyntaxError | Overflow | SubscriptOutOfRange | MissingOperand
            | LineBufferOverflow => false,
        }
    }

    /// The first line number wins. Errors raised inside a conditional
    /// block already carry the body line when they reach the header.
    pub fn in_line_number(&self, line: LineNumber) -> Error {
        let mut error = self.clone();
        if error.line_number.is_none() {
            error.line_number = line;
        }
        error
    }

    pub fn in_column(&self, column: &Column) -> Error {
        debug_assert_eq!(self.column, 0..0);
        let mut error = self.clone();
        error.column = column.clone();
        error
    }

    pub fn message(&self, message: &str) -> Error {
        debug_assert_eq!(self.message.len(), 0);
        let mut error = self.clone();
        error.message = message.to_string();
        error
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Break = 0,
    SyntaxError = 2,
    Overflow = 6,
    OutOfMemory = 7,
    SubscriptOutOfRange = 9,
    MissingOperand = 22,
    LineBufferOverflow = 23,
    NameTooLong = 24,
    InternalError = 51,
    FileNotFound = 53,
    DiskIoError = 57,
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ErrorCode::*;
        let code_str = match self.code {
            Break => "BREAK",
            SyntaxError => "SYNTAX ERROR",
            Overflow => "OVERFLOW",
            OutOfMemory => "OUT OF MEMORY",
            SubscriptOutOfRange => "SUBSCRIPT OUT OF RANGE",
            MissingOperand => "MISSING OPERAND",
            LineBufferOverflow => "LINE BUFFER OVERFLOW",
            NameTooLong => "NAME TOO LONG",
            InternalError => "INTERNAL ERROR",
            FileNotFound => "FILE NOT FOUND",
            DiskIoError => "DISK I/O ERROR",
        };
        let mut suffix = String::new();
        if let Some(line_number) = self.line_number {
            suffix.push_str(&format!(" {}", line_number));
        }
        if (0..0) != self.column {
            suffix.push_str(&format!(" ({}..{})", self.column.start, self.column.end));
        }
        if !self.message.is_empty() {
            suffix.push_str(&format!("; {}", self.message));
        }
        if suffix.is_empty() {
            write!(f, "{}", code_str)
        } else if self.line_number.is_none() && self.column == (0..0) {
            write!(f, "{}{}", code_str, suffix)
        } else {
            write!(f, "{} IN{}", code_str, suffix)
        }
    }
}
