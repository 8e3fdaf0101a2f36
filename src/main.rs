//! main.rs

use std::fmt::{Debug, Display};
use std::sync::Arc;

use site_intake::configuration::get_configuration;
use site_intake::startup::Application;
use site_intake::store::SubmissionStore;
use site_intake::telemetry::{get_subscriber, init_subscriber};
use tokio::task::JoinError;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("site_intake".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    // Panic if we can't read configuration
    let configuration = get_configuration().expect("Failed to read configuration.");
    // Submissions live as long as the process
    let store = Arc::new(SubmissionStore::new());
    let application = Application::build(configuration, store)?;
    tracing::info!(port = application.port(), "Accepting form submissions");

    let application_task = tokio::spawn(application.run_until_stopped());
    report_exit("API", application_task.await);

    Ok(())
}

fn report_exit(task_name: &str, outcome: Result<Result<(), impl Debug + Display>, JoinError>) {
    match outcome {
        Ok(Ok(())) => {
            tracing::info!("{} has exited", task_name)
        }
        Ok(Err(e)) => {
            tracing::error!(
                error.cause_chain = ?e,
                error.message = %e,
                "{} failed",
                task_name
            )
        }
        Err(e) => {
            tracing::error!(
                error.cause_chain = ?e,
                error.message = %e,
                "{} task failed to complete",
                task_name
            )
        }
    }
}
