use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::resource::Record;

/// Where a company registration stands in the approval queue.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum RegistrationStatus {
    Pending,
    Approved,
    Rejected,
}

/// A company waiting for an administrator to approve its registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingCompany {
    pub id: u32,
    pub name: String,
    pub tax_id: String,
    pub email: String,
    pub address: String,
    pub business_type: String,
    pub registered_on: NaiveDate,
    pub status: RegistrationStatus,
}

impl PendingCompany {
    pub fn is_pending(&self) -> bool {
        self.status == RegistrationStatus::Pending
    }

    /// Copy with the decision recorded.
    pub fn decided(&self, status: RegistrationStatus) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }
}

impl Record for PendingCompany {
    type Id = u32;
    type Category = RegistrationStatus;

    fn id(&self) -> &u32 {
        &self.id
    }

    fn category(&self) -> RegistrationStatus {
        self.status
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str(), self.tax_id.as_str()]
    }
}
