use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} cannot be empty")]
    Required(&'static str),

    #[error("Invalid {0}")]
    Malformed(&'static str),

    #[error("{0} cannot be negative")]
    Negative(&'static str),

    #[error("Valid email is required")]
    InvalidEmail,

    #[error("Invalid choice")]
    OutOfRange,
}

pub type ValidationResult<T> = Result<T, ValidationError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("Email already registered")]
    EmailTaken,

    #[error("ORM error: {0}")]
    OrmError(#[from] sea_orm::DbErr),

    #[error("Console error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid connection settings: {0}")]
    Config(String),

    #[error("Interrupted")]
    Interrupted,

    #[error("Input closed")]
    InputClosed,
}

impl AppError {
    /// Errors that end the interactive session instead of returning to the menu.
    pub fn ends_session(&self) -> bool {
        matches!(self, AppError::Interrupted | AppError::InputClosed)
    }

    /// Rejections of user input, printed as-is without the operation's failure context.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            AppError::Validation(_) | AppError::NotFound(_) | AppError::EmailTaken
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;
