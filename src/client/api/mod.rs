//! API trait definitions split by resource
//!
//! - [`UserApi`] - Global user CRUD
//! - [`OrgApi`] - Global organization CRUD
//!
//! The [`OneAuthApi`](super::OneAuthApi) super-trait combines both.

mod orgs;
mod users;

pub use orgs::OrgApi;
pub use users::UserApi;
