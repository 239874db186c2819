//! Create/update form arguments

use clap::Args;

use crate::forms::{OrgForm, UserForm};

/// Fields of the user form. Omitted fields keep the form's current value.
#[derive(Args, Debug, Default, Clone)]
pub struct UserFormArgs {
    /// Display name
    #[arg(long)]
    pub name: Option<String>,

    /// Email address
    #[arg(long)]
    pub email: Option<String>,

    /// HRMS user ID (empty clears)
    #[arg(long = "hrms-user-id")]
    pub hrms_user_id: Option<String>,

    /// Propeak user ID (empty clears)
    #[arg(long = "propeak-user-id")]
    pub propeak_user_id: Option<String>,

    /// SkillzEngine user ID (empty clears)
    #[arg(long = "skillzengine-user-id")]
    pub skillzengine_user_id: Option<String>,
}

impl UserFormArgs {
    pub fn apply(&self, form: &mut UserForm) {
        if let Some(ref name) = self.name {
            form.name = name.clone();
        }
        if let Some(ref email) = self.email {
            form.email = email.clone();
        }
        if self.hrms_user_id.is_some() {
            form.hrms_user_id = self.hrms_user_id.clone();
        }
        if self.propeak_user_id.is_some() {
            form.propeak_user_id = self.propeak_user_id.clone();
        }
        if self.skillzengine_user_id.is_some() {
            form.skillzengine_user_id = self.skillzengine_user_id.clone();
        }
    }
}

/// Fields of the organization form. Omitted fields keep the form's current value.
#[derive(Args, Debug, Default, Clone)]
pub struct OrgFormArgs {
    /// Organization name
    #[arg(long)]
    pub name: Option<String>,

    /// HRMS organization ID (empty clears)
    #[arg(long = "hrms-org-id")]
    pub hrms_org_id: Option<String>,

    /// Propeak organization ID (empty clears)
    #[arg(long = "propeak-org-id")]
    pub propeak_org_id: Option<String>,

    /// SkillzEngine organization ID (empty clears)
    #[arg(long = "skillzengine-org-id")]
    pub skillzengine_org_id: Option<String>,
}

impl OrgFormArgs {
    pub fn apply(&self, form: &mut OrgForm) {
        if let Some(ref name) = self.name {
            form.name = name.clone();
        }
        if self.hrms_org_id.is_some() {
            form.hrms_org_id = self.hrms_org_id.clone();
        }
        if self.propeak_org_id.is_some() {
            form.propeak_org_id = self.propeak_org_id.clone();
        }
        if self.skillzengine_org_id.is_some() {
            form.skillzengine_org_id = self.skillzengine_org_id.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_args_keep_unspecified_fields() {
        let mut form = UserForm {
            name: "Jane".to_string(),
            email: "jane@example.com".to_string(),
            hrms_user_id: Some("H-1".to_string()),
            ..Default::default()
        };
        let args = UserFormArgs {
            email: Some("jane@corp.example".to_string()),
            ..Default::default()
        };

        args.apply(&mut form);

        assert_eq!(form.name, "Jane");
        assert_eq!(form.email, "jane@corp.example");
        assert_eq!(form.hrms_user_id.as_deref(), Some("H-1"));
    }

    #[test]
    fn test_org_args_empty_value_clears_on_submit() {
        let mut form = OrgForm {
            name: "Acme".to_string(),
            hrms_org_id: Some("H-1".to_string()),
            ..Default::default()
        };
        let args = OrgFormArgs {
            hrms_org_id: Some(String::new()),
            ..Default::default()
        };

        args.apply(&mut form);

        assert_eq!(form.to_payload().unwrap().hrms_org_id, None);
    }
}
