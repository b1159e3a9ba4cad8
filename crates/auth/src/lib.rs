//! `stockroom-auth`: session gate in front of the screens.
//!
//! Credential checking is a collaborator behind the [`Authenticator`] trait; this
//! crate ships a static-credential implementation for development.

pub mod authenticator;
pub mod roles;
pub mod session;

pub use authenticator::{AuthError, Authenticator, Credentials, StaticAuthenticator};
pub use roles::Role;
pub use session::SessionUser;
