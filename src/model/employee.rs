use serde::{Deserialize, Serialize};

use crate::normalize;

/// Roster entry as served by the employees endpoint. This layer only reads
/// employees; create/update/delete go straight back to the API.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    #[serde(rename = "_id", default, deserialize_with = "normalize::string_or_empty")]
    pub id: String,

    #[serde(default, deserialize_with = "normalize::string_or_empty")]
    pub name: String,

    #[serde(default, deserialize_with = "normalize::string_or_empty")]
    pub email: String,

    #[serde(default, deserialize_with = "normalize::string_or_empty")]
    pub phone: String,

    #[serde(default, deserialize_with = "normalize::string_or_empty")]
    pub role: String,

    #[serde(default, deserialize_with = "normalize::string_or_empty")]
    pub cnic: String,

    #[serde(default, deserialize_with = "normalize::string_or_empty")]
    pub dob: String,

    #[serde(default, deserialize_with = "normalize::string_or_empty")]
    pub address: String,

    #[serde(default, deserialize_with = "normalize::string_or_empty")]
    pub bank_account: String,

    #[serde(default)]
    pub profile_picture: Option<String>,
}

impl Employee {
    /// Case-insensitive name/email match used by the roster search box.
    pub fn matches_search(&self, term: &str) -> bool {
        if term.is_empty() {
            return true;
        }
        let needle = term.to_lowercase();
        self.name.to_lowercase().contains(&needle) || self.email.to_lowercase().contains(&needle)
    }
}

/// Payload for creating a new roster entry.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployee {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub cnic: String,
    pub dob: String,
    pub address: String,
    pub bank_account: String,
    pub role: String,
}
