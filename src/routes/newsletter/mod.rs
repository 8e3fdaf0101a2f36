//! src/routes/newsletter/mod.rs

mod post;

pub use post::subscribe_to_newsletter;
