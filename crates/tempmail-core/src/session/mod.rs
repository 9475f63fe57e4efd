//! Authenticated session: identity model, persistence, and service.

mod model;
mod repository;
mod service;

pub use model::Identity;
pub use repository::SessionRepository;
pub use service::SessionService;
