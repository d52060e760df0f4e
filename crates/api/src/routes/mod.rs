pub mod admin_contacts;
pub mod admin_events;
pub mod categories;
pub mod contacts;
pub mod dashboard;
pub mod events;
pub mod health;
pub mod newsletter;
pub mod subscribers;
