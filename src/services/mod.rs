//! Services
//!
//! Business logic services for the application.
//! Services handle the core functionality and are called by the HTTP handlers.

pub mod generation;
pub mod oauth;
pub mod results;
pub mod templates;

pub use generation::GenerationService;
pub use oauth::{AuthenticatedUser, LinkedInConfig, LinkedInEndpoints, OAuthService};
pub use results::{ResultStore, EXPORT_FILENAME};
pub use templates::{TemplateStore, TemplateView};
