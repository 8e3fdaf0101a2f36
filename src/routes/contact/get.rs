//! src/routes/contact/get.rs

use actix_web::{web, HttpResponse};
use anyhow::Context;

use crate::error::IntakeResult;
use crate::store::SubmissionStore;

// TODO: gate behind an admin check once the site has an authentication model.
pub async fn list_contact_submissions(
    store: web::Data<SubmissionStore>,
) -> IntakeResult<HttpResponse> {
    let submissions = store
        .list_contact_submissions()
        .context("Failed to read contact submissions from the store.")?;
    Ok(HttpResponse::Ok().json(submissions))
}
