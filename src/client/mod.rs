//! OneAuth API client

pub mod api;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod oneauth;
pub mod pagination;
pub mod request;

pub use api::{OrgApi, UserApi};
#[cfg(test)]
pub use mock::MockOneAuthClient;
pub use oneauth::OneAuthClient;
pub use pagination::{ListParams, ListResponse};

/// Full OneAuth API surface
pub trait OneAuthApi: UserApi + OrgApi {}

impl<T: UserApi + OrgApi> OneAuthApi for T {}
