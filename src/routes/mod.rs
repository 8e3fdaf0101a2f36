//! src/routes/mod.rs

mod contact;
mod health_check;
mod newsletter;

pub use contact::*;
pub use health_check::*;
pub use newsletter::*;

use uuid::Uuid;

/// Response body of an accepted form submission
#[derive(serde::Serialize, serde::Deserialize, Debug)]
pub struct SubmissionAccepted {
    pub success: bool,
    pub id: Uuid,
}

impl SubmissionAccepted {
    pub fn new(id: Uuid) -> Self {
        Self { success: true, id }
    }
}
