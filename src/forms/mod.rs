//! Create/edit form schemas
//!
//! Forms hold the raw field values collected from the command line. They are
//! validated with `validator` before anything is sent to the API, and turned
//! into request payloads with blank optional fields dropped.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use validator::{Validate, ValidationErrors};

use crate::client::models::{GlobalOrg, GlobalUser, OrgPayload, UserPayload};
use crate::client::{OrgApi, UserApi};
use crate::error::{Error, Result};

/// Per-field validation messages, ordered by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    /// Add a message for a field.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

}

impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields = FieldErrors::default();
        for (field, errors) in errors.field_errors() {
            for error in errors.iter() {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| error.code.to_string());
                fields.add(field.to_string(), message);
            }
        }
        fields
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(field, messages)| format!("{}: {}", field, messages.join(", ")))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

/// Validate a form, mapping failures to [`Error::Validation`].
pub fn validate<F: Validate>(form: &F) -> Result<()> {
    form.validate()
        .map_err(|errors| Error::Validation(FieldErrors::from(errors)))
}

fn optional(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

// ============================================================================
// User form
// ============================================================================

/// Global user create/edit form
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct UserForm {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    pub hrms_user_id: Option<String>,
    pub propeak_user_id: Option<String>,
    pub skillzengine_user_id: Option<String>,
}

impl UserForm {
    /// Form pre-filled with a record's current values.
    pub fn from_record(user: &GlobalUser) -> Self {
        Self {
            name: user.name.clone().unwrap_or_default(),
            email: user.email.clone().unwrap_or_default(),
            hrms_user_id: user.hrms_user_id.clone(),
            propeak_user_id: user.propeak_user_id.clone(),
            skillzengine_user_id: user.skillzengine_user_id.clone(),
        }
    }

    fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            ..self.clone()
        }
    }

    /// Validate and build the request payload.
    pub fn to_payload(&self) -> Result<UserPayload> {
        let form = self.trimmed();
        validate(&form)?;

        Ok(UserPayload {
            name: form.name,
            email: form.email,
            hrms_user_id: optional(&form.hrms_user_id),
            propeak_user_id: optional(&form.propeak_user_id),
            skillzengine_user_id: optional(&form.skillzengine_user_id),
        })
    }
}

/// Validate the form and create the user.
pub async fn create_user<A: UserApi + ?Sized>(api: &A, form: &UserForm) -> Result<GlobalUser> {
    let payload = form.to_payload()?;
    api.create_user(&payload).await
}

/// Validate the form and update the user.
pub async fn update_user<A: UserApi + ?Sized>(
    api: &A,
    id: &str,
    form: &UserForm,
) -> Result<GlobalUser> {
    let payload = form.to_payload()?;
    api.update_user(id, &payload).await
}

// ============================================================================
// Org form
// ============================================================================

/// Global organization create/edit form
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct OrgForm {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    pub hrms_org_id: Option<String>,
    pub propeak_org_id: Option<String>,
    pub skillzengine_org_id: Option<String>,
}

impl OrgForm {
    /// Form pre-filled with a record's current values.
    pub fn from_record(org: &GlobalOrg) -> Self {
        Self {
            name: org.name.clone().unwrap_or_default(),
            hrms_org_id: org.hrms_org_id.clone(),
            propeak_org_id: org.propeak_org_id.clone(),
            skillzengine_org_id: org.skillzengine_org_id.clone(),
        }
    }

    /// Validate and build the request payload.
    pub fn to_payload(&self) -> Result<OrgPayload> {
        let form = Self {
            name: self.name.trim().to_string(),
            ..self.clone()
        };
        validate(&form)?;

        Ok(OrgPayload {
            name: form.name,
            hrms_org_id: optional(&form.hrms_org_id),
            propeak_org_id: optional(&form.propeak_org_id),
            skillzengine_org_id: optional(&form.skillzengine_org_id),
        })
    }
}

/// Validate the form and create the organization.
pub async fn create_org<A: OrgApi + ?Sized>(api: &A, form: &OrgForm) -> Result<GlobalOrg> {
    let payload = form.to_payload()?;
    api.create_org(&payload).await
}

/// Validate the form and update the organization.
pub async fn update_org<A: OrgApi + ?Sized>(
    api: &A,
    id: &str,
    form: &OrgForm,
) -> Result<GlobalOrg> {
    let payload = form.to_payload()?;
    api.update_org(id, &payload).await
}
