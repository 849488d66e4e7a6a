// backend_api/src/lib.rs
//! Client for the hosted backend: identity endpoints under `/auth/v1`,
//! durable rows under `/rest/v1`. Every trait here fronts the remote
//! service, so the stores can be tested against in-memory fakes.

pub mod admins;
pub mod appointments;
pub mod auth;
pub mod client;
pub mod config;

pub use admins::AdminDirectory;
pub use appointments::AppointmentApi;
pub use auth::{
    AuthChange, IdentityProvider, MetadataPatch, ProviderIdentity, ProviderUser, SignupResponse,
    UserMetadata,
};
pub use client::BackendClient;
pub use config::BackendConfig;
