use anyhow::Context;
use contact_api_rest::RestServer;
use contact_config::Config;
use contact_transport_contracts::SubmissionTransport;
use tracing::info;

use crate::{environment, transport};

pub async fn serve(config: Config) -> anyhow::Result<()> {
    info!("Setting up submission transport");
    let transport = transport::connect(&config.transport)?;
    transport
        .ping()
        .await
        .context("Submission transport is not reachable")?;

    let contact_form = environment::contact_form_with_transport(transport, &config);

    info!(
        "Starting http server on {}:{}",
        config.http.host, config.http.port
    );
    RestServer::new(contact_form)
        .serve(config.http.host, config.http.port)
        .await
}
