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

    /// Argument errors: usage text on stderr, exit status 1.
    pub fn usage(message: impl Into<String>) -> Self {
        Self::new(1, message)
    }

    /// Rendering/output failures: exit status 2.
    pub fn render(message: impl Into<String>) -> Self {
        Self::new(2, message)
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_carry_the_documented_exit_codes() {
        assert_eq!(AppError::usage("missing arguments").exit_code(), 1);
        assert_eq!(AppError::render("cannot write image").exit_code(), 2);
        assert_eq!(AppError::usage("m").to_string(), "m");
    }
}
