//! Repository implementations for database operations.

pub mod contact;
pub mod dashboard;
pub mod event;
pub mod event_category;
pub mod event_registration;
pub mod newsletter;

pub use contact::ContactRepository;
pub use dashboard::{DashboardRepository, DEFAULT_RECENT_EVENTS};
pub use event::{EventPage, EventRepository};
pub use event_category::EventCategoryRepository;
pub use event_registration::EventRegistrationRepository;
pub use newsletter::NewsletterRepository;
