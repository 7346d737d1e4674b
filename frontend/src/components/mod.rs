pub mod alert_banner;
pub mod caregiver_card;
pub mod medicine_card;
pub mod setup_form;
