//! src/routes/contact/mod.rs

mod get;
mod post;

pub use get::list_contact_submissions;
pub use post::submit_contact_form;
