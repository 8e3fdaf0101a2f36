//! src/routes/contact/post.rs

use actix_web::{web, HttpResponse};
use anyhow::Context;
use tracing::field::display;
use tracing::Span;

use crate::domain::{FormFields, NewContactSubmission, ValidationError};
use crate::error::{ContactFormError, IntakeResult};
use crate::routes::SubmissionAccepted;
use crate::store::SubmissionStore;

#[tracing::instrument(
    name = "Receiving a contact form submission.",
    skip(form, store),
    fields(submission_id = tracing::field::Empty)
)]
pub async fn submit_contact_form(
    form: web::Json<FormFields>,
    store: web::Data<SubmissionStore>,
) -> IntakeResult<HttpResponse> {
    let new_submission: NewContactSubmission =
        form.into_inner().try_into().map_err(|e: ValidationError| {
            tracing::warn!(error.message = %e, "Rejected invalid contact form");
            ContactFormError::from(e)
        })?;
    let submission = store
        .create_contact_submission(new_submission)
        .context("Failed to store a new contact submission.")?;
    Span::current().record("submission_id", display(&submission.id));
    Ok(HttpResponse::Ok().json(SubmissionAccepted::new(submission.id)))
}
