//! Global organization models

use serde::{Deserialize, Serialize};

use super::Record;

/// Global organization record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalOrg {
    /// Organization ID; MongoDB-style `_id` is accepted
    #[serde(alias = "_id")]
    pub id: String,

    /// Organization name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// ID of the organization in the HRMS system
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hrms_org_id: Option<String>,

    /// ID of the organization in Propeak
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub propeak_org_id: Option<String>,

    /// ID of the organization in SkillzEngine
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skillzengine_org_id: Option<String>,
}

impl Record for GlobalOrg {
    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, key: &str) -> Option<&str> {
        match key {
            "id" => Some(&self.id),
            "name" => self.name.as_deref(),
            "hrms_org_id" => self.hrms_org_id.as_deref(),
            "propeak_org_id" => self.propeak_org_id.as_deref(),
            "skillzengine_org_id" => self.skillzengine_org_id.as_deref(),
            _ => None,
        }
    }
}

/// Body of an organization create/update request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OrgPayload {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hrms_org_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub propeak_org_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skillzengine_org_id: Option<String>,
}
