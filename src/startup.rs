//! src/startup.rs

use std::net::TcpListener;
use std::sync::Arc;

use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};
use tracing_actix_web::TracingLogger;

use crate::configuration::Settings;
use crate::error::{ContactFormError, Error, SubscriptionError};
use crate::routes::{
    health_check, list_contact_submissions, submit_contact_form, subscribe_to_newsletter,
};
use crate::store::SubmissionStore;

/// Holds the newly built server and its port
pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    /// Bind the configured address and wire the given store into the routes.
    ///
    /// Port `0` binds a random free port, see `Application::port`.
    pub fn build(
        configuration: Settings,
        store: Arc<SubmissionStore>,
    ) -> Result<Self, std::io::Error> {
        let address = configuration.application.address();
        let listener = TcpListener::bind(address)?;
        let port = listener.local_addr()?.port();
        let server = run(listener, store)?;
        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// A more expressive name that makes it clear that
    /// this function only returns when the application is stopped.
    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub fn run(listener: TcpListener, store: Arc<SubmissionStore>) -> Result<Server, std::io::Error> {
    // Share one store between all workers
    let store = web::Data::from(store);
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .route("/health_check", web::get().to(health_check))
            .service(
                web::scope("/api")
                    .service(
                        web::resource("/contact")
                            .app_data(contact_json_config())
                            .route(web::post().to(submit_contact_form))
                            .route(web::get().to(list_contact_submissions)),
                    )
                    .service(
                        web::resource("/newsletter")
                            .app_data(newsletter_json_config())
                            .route(web::post().to(subscribe_to_newsletter)),
                    ),
            )
            .app_data(store.clone())
    })
    .listen(listener)?
    .run();
    Ok(server)
}

/// An unreadable contact body is rejected like any other invalid contact form.
fn contact_json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| Error::from(ContactFormError::from(err)).into())
}

/// An unreadable newsletter body is rejected like any other invalid signup.
fn newsletter_json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| Error::from(SubscriptionError::from(err)).into())
}
