//! Database entity definitions.
//!
//! Entities are direct mappings to database rows.

pub mod contact_submission;
pub mod event;
pub mod event_category;
pub mod event_image;
pub mod event_registration;
pub mod newsletter_subscriber;

pub use contact_submission::ContactSubmissionEntity;
pub use event::{EventWithCategoryEntity, RecentEventEntity};
pub use event_category::EventCategoryEntity;
pub use event_image::EventImageEntity;
pub use event_registration::EventRegistrationEntity;
pub use newsletter_subscriber::NewsletterSubscriberEntity;
