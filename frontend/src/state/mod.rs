pub mod controller;
pub mod setup_form;

pub use controller::SetupController;
pub use setup_form::{SetupForm, SubmissionAlert};
