//! src/routes/newsletter/post.rs

use actix_web::{web, HttpResponse};
use tracing::field::display;
use tracing::Span;

use crate::domain::{FormFields, NewNewsletterSubscription, ValidationError};
use crate::error::{IntakeResult, SubscriptionError};
use crate::routes::SubmissionAccepted;
use crate::store::{StoreError, SubmissionStore};

#[tracing::instrument(
    name = "Adding a new newsletter subscriber.",
    skip(form, store),
    fields(subscription_id = tracing::field::Empty)
)]
pub async fn subscribe_to_newsletter(
    form: web::Json<FormFields>,
    store: web::Data<SubmissionStore>,
) -> IntakeResult<HttpResponse> {
    let new_subscription: NewNewsletterSubscription =
        form.into_inner().try_into().map_err(|e: ValidationError| {
            tracing::warn!(error.message = %e, "Rejected invalid newsletter signup");
            SubscriptionError::from(e)
        })?;
    let subscription = match store.create_newsletter_subscription(new_subscription) {
        Ok(subscription) => subscription,
        Err(StoreError::DuplicateSubscription) => {
            tracing::warn!("Rejected newsletter signup of an already subscribed email");
            return Err(SubscriptionError::AlreadySubscribed.into());
        }
        Err(e) => {
            return Err(anyhow::Error::new(e)
                .context("Failed to store a new newsletter subscription.")
                .into())
        }
    };
    Span::current().record("subscription_id", display(&subscription.id));
    Ok(HttpResponse::Ok().json(SubmissionAccepted::new(subscription.id)))
}
