//! Client-side logic for the employee console: session derivation, access
//! control, token storage, the REST client and the list/form controllers.
//!
//! Nothing in this crate renders UI, so every piece can be driven from plain
//! unit tests or against a mock API.

pub mod api;
pub mod auth;
pub mod config;
pub mod form;
pub mod list_view;

pub use api::{ApiClient, ApiEvent, EmployeeApi};
pub use auth::gate::{authorize, Access};
pub use auth::store::TokenStore;
