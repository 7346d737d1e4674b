use serde::{Deserialize, Serialize};

/// Contact details of the person receiving reminders
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub name: String,
    pub phone: String,
}

/// Which field of a `UserInfo` an edit targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserField {
    Name,
    Phone,
}

/// A single medicine the user wants to be reminded about
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Medicine {
    pub name: String,
    pub dosage: String,
    /// Free-form reminder time, e.g. "8:00 AM"
    pub time: String,
}

/// Which field of a `Medicine` an edit targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MedicineField {
    Name,
    Dosage,
    Time,
}

/// Someone notified when reminders are missed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Caregiver {
    pub name: String,
    pub phone: String,
}

/// Which field of a `Caregiver` an edit targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaregiverField {
    Name,
    Phone,
}

/// Body of `POST /api/user/setup`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetupRequest {
    pub name: String,
    pub phone: String,
    pub medications: Vec<Medicine>,
    pub caregivers: Vec<Caregiver>,
}

/// Body returned by the setup endpoint on a non-success status
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetupErrorResponse {
    #[serde(default)]
    pub error: Option<String>,
}

fn is_filled(value: &str) -> bool {
    !value.trim().is_empty()
}

impl UserInfo {
    pub fn set(&mut self, field: UserField, value: String) {
        match field {
            UserField::Name => self.name = value,
            UserField::Phone => self.phone = value,
        }
    }

    /// Both name and phone contain something other than whitespace
    pub fn is_complete(&self) -> bool {
        is_filled(&self.name) && is_filled(&self.phone)
    }
}

impl Medicine {
    pub fn set(&mut self, field: MedicineField, value: String) {
        match field {
            MedicineField::Name => self.name = value,
            MedicineField::Dosage => self.dosage = value,
            MedicineField::Time => self.time = value,
        }
    }

    pub fn get(&self, field: MedicineField) -> &str {
        match field {
            MedicineField::Name => &self.name,
            MedicineField::Dosage => &self.dosage,
            MedicineField::Time => &self.time,
        }
    }

    /// Whitespace-only fields count as empty, since the payload carries the
    /// trimmed values and would otherwise send blanks
    pub fn is_complete(&self) -> bool {
        is_filled(&self.name) && is_filled(&self.dosage) && is_filled(&self.time)
    }

    /// Copy with surrounding whitespace removed from every field
    pub fn trimmed(&self) -> Medicine {
        Medicine {
            name: self.name.trim().to_string(),
            dosage: self.dosage.trim().to_string(),
            time: self.time.trim().to_string(),
        }
    }
}

impl Caregiver {
    pub fn set(&mut self, field: CaregiverField, value: String) {
        match field {
            CaregiverField::Name => self.name = value,
            CaregiverField::Phone => self.phone = value,
        }
    }

    pub fn get(&self, field: CaregiverField) -> &str {
        match field {
            CaregiverField::Name => &self.name,
            CaregiverField::Phone => &self.phone,
        }
    }

    /// Only complete caregivers are sent to the backend
    pub fn is_complete(&self) -> bool {
        is_filled(&self.name) && is_filled(&self.phone)
    }
}

impl SetupRequest {
    /// Build the payload from already-validated form data.
    ///
    /// User and medicine fields are trimmed. Caregivers are filtered on their
    /// trimmed values but sent exactly as entered.
    pub fn from_form(user: &UserInfo, medicines: &[Medicine], caregivers: &[Caregiver]) -> Self {
        Self {
            name: user.name.trim().to_string(),
            phone: user.phone.trim().to_string(),
            medications: medicines.iter().map(Medicine::trimmed).collect(),
            caregivers: caregivers
                .iter()
                .filter(|caregiver| caregiver.is_complete())
                .cloned()
                .collect(),
        }
    }
}
