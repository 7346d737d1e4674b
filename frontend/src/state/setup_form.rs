use log::{debug, info, warn};
use shared::{Caregiver, CaregiverField, Medicine, MedicineField, SetupRequest, UserField, UserInfo};

use crate::errors::{SubmitError, ValidationError};

pub const SUCCESS_MESSAGE: &str = "Setup complete! You will now receive SMS reminders.";

/// Feedback shown above the form after a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionAlert {
    Success(String),
    Error(String),
}

impl SubmissionAlert {
    pub fn message(&self) -> &str {
        match self {
            SubmissionAlert::Success(message) | SubmissionAlert::Error(message) => message,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionAlert::Success(_))
    }
}

/// Where the form is in its submit cycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    /// Validation rejected the last attempt
    Invalid,
    /// A request is in flight
    Submitting,
    Succeeded,
    Failed,
}

/// What the caller must do once a submission has settled
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AfterSubmit {
    /// Clear the form once the reset delay has passed
    ScheduleReset,
    Nothing,
}

/// Editable state of the medicine reminder setup form.
///
/// There is always at least one medicine entry. Caregivers are optional and
/// the list may be emptied.
#[derive(Debug, Clone, PartialEq)]
pub struct SetupForm {
    user: UserInfo,
    medicines: Vec<Medicine>,
    caregivers: Vec<Caregiver>,
    alert: Option<SubmissionAlert>,
    phase: SubmissionPhase,
}

impl Default for SetupForm {
    fn default() -> Self {
        Self {
            user: UserInfo::default(),
            medicines: vec![Medicine::default()],
            caregivers: vec![Caregiver::default()],
            alert: None,
            phase: SubmissionPhase::Idle,
        }
    }
}

impl SetupForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user(&self) -> &UserInfo {
        &self.user
    }

    pub fn medicines(&self) -> &[Medicine] {
        &self.medicines
    }

    pub fn caregivers(&self) -> &[Caregiver] {
        &self.caregivers
    }

    pub fn alert(&self) -> Option<&SubmissionAlert> {
        self.alert.as_ref()
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    /// While true the submit control is disabled
    pub fn is_submitting(&self) -> bool {
        self.phase() == SubmissionPhase::Submitting
    }

    /// The last remaining medicine can never be removed
    pub fn can_remove_medicine(&self) -> bool {
        self.medicines.len() > 1
    }

    pub fn update_user_field(&mut self, field: UserField, value: String) {
        self.user.set(field, value);
    }

    pub fn update_medicine_field(&mut self, index: usize, field: MedicineField, value: String) {
        match self.medicines.get_mut(index) {
            Some(medicine) => medicine.set(field, value),
            None => warn!("Ignoring edit of medicine {} ({} entries)", index, self.medicines.len()),
        }
    }

    pub fn update_caregiver_field(&mut self, index: usize, field: CaregiverField, value: String) {
        match self.caregivers.get_mut(index) {
            Some(caregiver) => caregiver.set(field, value),
            None => warn!("Ignoring edit of caregiver {} ({} entries)", index, self.caregivers.len()),
        }
    }

    pub fn add_medicine(&mut self) {
        self.medicines.push(Medicine::default());
    }

    /// Returns whether an entry was removed
    pub fn remove_medicine(&mut self, index: usize) -> bool {
        if !self.can_remove_medicine() || index >= self.medicines.len() {
            debug!("Keeping medicine {} ({} entries)", index, self.medicines.len());
            return false;
        }
        self.medicines.remove(index);
        true
    }

    pub fn add_caregiver(&mut self) {
        self.caregivers.push(Caregiver::default());
    }

    /// Returns whether an entry was removed
    pub fn remove_caregiver(&mut self, index: usize) -> bool {
        if index >= self.caregivers.len() {
            return false;
        }
        self.caregivers.remove(index);
        true
    }

    /// Check required fields and build the payload.
    ///
    /// User fields are checked before medicines, so a form missing both
    /// reports the user error.
    pub fn validate(&self) -> Result<SetupRequest, ValidationError> {
        if !self.user.is_complete() {
            return Err(ValidationError::MissingUserFields);
        }

        if let Some(index) = self.medicines.iter().position(|medicine| !medicine.is_complete()) {
            return Err(ValidationError::IncompleteMedicine { index });
        }

        Ok(SetupRequest::from_form(&self.user, &self.medicines, &self.caregivers))
    }

    /// Start a submit attempt.
    ///
    /// Returns the payload to send, or `None` when a request is already in
    /// flight or validation failed (the error alert is set in that case).
    pub fn begin_submission(&mut self) -> Option<SetupRequest> {
        if self.is_submitting() {
            debug!("Submit ignored, a request is already in flight");
            return None;
        }

        match self.validate() {
            Ok(request) => {
                self.phase = SubmissionPhase::Submitting;
                Some(request)
            }
            Err(e) => {
                info!("Setup form rejected: {:?}", e);
                self.alert = Some(SubmissionAlert::Error(e.to_string()));
                self.phase = SubmissionPhase::Invalid;
                None
            }
        }
    }

    /// Record the result of the request started by `begin_submission`
    pub fn finish_submission(&mut self, outcome: Result<(), SubmitError>) -> AfterSubmit {
        match outcome {
            Ok(()) => {
                info!("Setup submitted");
                self.alert = Some(SubmissionAlert::Success(SUCCESS_MESSAGE.to_string()));
                self.phase = SubmissionPhase::Succeeded;
                AfterSubmit::ScheduleReset
            }
            Err(e) => {
                match &e {
                    SubmitError::Rejected { status, .. } => warn!("Setup rejected with status {}", status),
                    SubmitError::Transport(detail) => warn!("Setup request failed: {}", detail),
                }
                self.alert = Some(SubmissionAlert::Error(e.to_string()));
                self.phase = SubmissionPhase::Failed;
                AfterSubmit::Nothing
            }
        }
    }

    /// Back to one blank medicine, one blank caregiver and no alert.
    ///
    /// A request still in flight keeps the form in `Submitting`.
    pub fn reset(&mut self) {
        let phase = if self.is_submitting() {
            SubmissionPhase::Submitting
        } else {
            SubmissionPhase::Idle
        };
        *self = Self {
            phase,
            ..Self::default()
        };
    }
}
