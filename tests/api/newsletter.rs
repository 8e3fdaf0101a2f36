//! tests/api/newsletter.rs

use crate::helpers::spawn_app;
use serde_json::json;
use site_intake::error::ErrorBody;
use site_intake::routes::SubmissionAccepted;

#[tokio::test]
async fn newsletter_returns_a_200_and_the_id_for_a_valid_email() {
    // Arrange
    let test_app = spawn_app().await;

    // Act
    let response = test_app
        .post_newsletter(&json!({ "email": "ursula_le_guin@gmail.com" }))
        .await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let body: SubmissionAccepted = response.json().await.unwrap();
    assert!(body.success);
    let stored = test_app.store.newsletter_subscription(body.id).unwrap().unwrap();
    assert_eq!(stored.email.as_ref(), "ursula_le_guin@gmail.com");
}

#[tokio::test]
async fn subscribing_twice_with_the_same_email_is_rejected() {
    // Arrange
    let test_app = spawn_app().await;
    let form = json!({ "email": "dup@x.com" });

    // Act
    let first = test_app.post_newsletter(&form).await;
    let second = test_app.post_newsletter(&form).await;

    // Assert
    assert_eq!(200, first.status().as_u16());
    assert_eq!(400, second.status().as_u16());
    let body: ErrorBody = second.json().await.unwrap();
    assert_eq!(body.error, "Invalid email or already subscribed");
    assert_eq!(body.details.as_deref(), Some("Email already subscribed"));

    let subscriptions = test_app.store.list_newsletter_subscriptions().unwrap();
    assert_eq!(subscriptions.len(), 1);
    assert_eq!(subscriptions[0].email.as_ref(), "dup@x.com");
}

#[tokio::test]
async fn concurrent_signups_with_the_same_email_store_one_subscription() {
    // Arrange
    let test_app = spawn_app().await;
    let form = json!({ "email": "race@x.com" });

    // Act
    let responses = send_concurrent_signups(&test_app, &form, 8).await;

    // Assert
    assert_eq!(responses.iter().filter(|status| **status == 200).count(), 1);
    assert_eq!(responses.iter().filter(|status| **status == 400).count(), 7);
    assert_eq!(test_app.store.list_newsletter_subscriptions().unwrap().len(), 1);
}

/// fire `n` identical signups at once and collect their status codes
async fn send_concurrent_signups(
    test_app: &crate::helpers::TestApp,
    form: &serde_json::Value,
    n: usize,
) -> Vec<u16> {
    let handles: Vec<_> = (0..n)
        .map(|_| {
            let client = test_app.api_client.clone();
            let url = format!("{}/api/newsletter", test_app.address);
            let form = form.clone();
            tokio::spawn(async move {
                client
                    .post(url)
                    .json(&form)
                    .send()
                    .await
                    .expect("Failed to execute request.")
                    .status()
                    .as_u16()
            })
        })
        .collect();
    let mut statuses = Vec::with_capacity(n);
    for handle in handles {
        statuses.push(handle.await.unwrap());
    }
    statuses
}

#[tokio::test]
async fn newsletter_returns_a_400_for_missing_or_invalid_email() {
    // Arrange
    let test_app = spawn_app().await;
    let test_cases = vec![
        (json!({}), "missing the email"),
        (json!({ "email": "" }), "empty email"),
        (json!({ "email": "definitely-not-an-email" }), "invalid email"),
        (json!({ "email": 42 }), "email is not a string"),
    ];

    for (form, description) in test_cases {
        // Act
        let response = test_app.post_newsletter(&form).await;

        // Assert
        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with 400 Bad Request when payload was {}.",
            description
        );
        let body: ErrorBody = response.json().await.unwrap();
        assert_eq!(body.error, "Invalid email or already subscribed");
        assert!(body.details.unwrap().starts_with("email: "));
    }
    assert!(test_app.store.list_newsletter_subscriptions().unwrap().is_empty());
}

#[tokio::test]
async fn newsletter_returns_a_400_for_a_malformed_body() {
    // Arrange
    let test_app = spawn_app().await;
    let test_cases = vec![
        ("application/json", "{\"email\": ", "truncated json"),
        ("application/json", "\"dup@x.com\"", "bare json string"),
        ("application/x-www-form-urlencoded", "email=dup%40x.com", "urlencoded form"),
        ("text/plain", "dup@x.com", "wrong content type"),
    ];

    for (content_type, body, description) in test_cases {
        // Act
        let response = test_app
            .post_raw("/api/newsletter", content_type, body.to_string())
            .await;

        // Assert
        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with 400 Bad Request when payload was {}.",
            description
        );
        let body: ErrorBody = response.json().await.unwrap();
        assert_eq!(body.error, "Invalid email or already subscribed");
        assert!(
            body.details.is_some_and(|details| !details.is_empty()),
            "The parser message is missing when payload was {}.",
            description
        );
    }
    assert!(test_app.store.list_newsletter_subscriptions().unwrap().is_empty());
}
