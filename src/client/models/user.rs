//! Global user models

use serde::{Deserialize, Serialize};

use super::Record;

/// Global user record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalUser {
    /// User ID; MongoDB-style `_id` is accepted
    #[serde(alias = "_id")]
    pub id: String,

    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Email address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// ID of the user in the HRMS system
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hrms_user_id: Option<String>,

    /// ID of the user in Propeak
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub propeak_user_id: Option<String>,

    /// ID of the user in SkillzEngine
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skillzengine_user_id: Option<String>,
}

impl Record for GlobalUser {
    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, key: &str) -> Option<&str> {
        match key {
            "id" => Some(&self.id),
            "name" => self.name.as_deref(),
            "email" => self.email.as_deref(),
            "hrms_user_id" => self.hrms_user_id.as_deref(),
            "propeak_user_id" => self.propeak_user_id.as_deref(),
            "skillzengine_user_id" => self.skillzengine_user_id.as_deref(),
            _ => None,
        }
    }
}

/// Body of a user create/update request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UserPayload {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hrms_user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub propeak_user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skillzengine_user_id: Option<String>,
}
