//! Application error carrying a process exit code.

/// Invalid command-line input.
pub const EXIT_USAGE: u8 = 2;
/// Logging could not be set up.
pub const EXIT_LOGGING: u8 = 3;
/// Terminal or stdout failure.
pub const EXIT_IO: u8 = 4;

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    /// Shorthand for terminal/IO failures: `"{context}: {err}"`.
    pub fn io(context: &str, err: impl std::fmt::Display) -> Self {
        Self::new(EXIT_IO, format!("{context}: {err}"))
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
