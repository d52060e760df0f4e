//! Domain models.

pub mod contact;
pub mod dashboard;
pub mod event;
pub mod event_category;
pub mod event_image;
pub mod event_registration;
pub mod newsletter;

pub use contact::{
    ContactStatus, ContactSubmission, CreateContactRequest, UpdateContactStatusRequest,
};
pub use dashboard::{DashboardStats, RecentEvent};
pub use event::{
    Event, EventFilter, EventInput, EventResponse, EventStatus, ListEventsQuery,
    ListEventsResponse, SeoMetadata,
};
pub use event_category::EventCategory;
pub use event_image::EventImage;
pub use event_registration::{EventRegistration, RegisterForEventRequest};
pub use newsletter::{
    NewsletterSubscriber, SubscribeRequest, SubscriberStatus, UnsubscribeRequest,
    UpdateSubscriberRequest,
};
