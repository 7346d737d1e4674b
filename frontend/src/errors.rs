use thiserror::Error;

pub const USER_FIELDS_MESSAGE: &str = "Please fill out all user fields.";
pub const MEDICINE_MESSAGE: &str = "Please add at least one medicine.";
pub const SETUP_FAILED_MESSAGE: &str = "Setup failed. Try again.";
pub const CONNECTION_MESSAGE: &str = "Error. Check your connection.";

/// Reasons the form refuses to submit. Display text is shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{}", USER_FIELDS_MESSAGE)]
    MissingUserFields,

    /// Covers both "no medicine" and "some medicine field is blank"
    #[error("{}", MEDICINE_MESSAGE)]
    IncompleteMedicine { index: usize },
}

/// Failure of a submission that passed validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// The server answered with a non-success status
    #[error("{}", .message.as_deref().unwrap_or(SETUP_FAILED_MESSAGE))]
    Rejected { status: u16, message: Option<String> },

    /// No response was obtained; the detail is for logs only
    #[error("{}", CONNECTION_MESSAGE)]
    Transport(String),
}
