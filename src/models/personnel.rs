use serde::{Deserialize, Serialize};

use crate::resource::Record;

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
pub enum PersonnelStatus {
    Active,
    Inactive,
}

/// A staff member shown on the admin personnel page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Personnel {
    pub id: u32,
    pub name: String,
    pub role: String,
    /// Warehouse or district the person is responsible for.
    pub area: String,
    pub email: String,
    pub phone: String,
    pub status: PersonnelStatus,
}

impl Record for Personnel {
    type Id = u32;
    type Category = PersonnelStatus;

    fn id(&self) -> &u32 {
        &self.id
    }

    fn category(&self) -> PersonnelStatus {
        self.status
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.role.as_str(), self.area.as_str()]
    }
}
