//! OneAuth API data models

mod org;
mod user;

pub use org::{GlobalOrg, OrgPayload};
pub use user::{GlobalUser, UserPayload};

/// Common accessors for records shown in list views
pub trait Record {
    /// Record identifier
    fn id(&self) -> &str;

    /// Attribute value by its wire field name
    fn field(&self, key: &str) -> Option<&str>;
}
