use std::net::IpAddr;

use axum::Router;
use contact_core_form_contracts::ContactFormService;
use tokio::net::TcpListener;
use tracing::info;

mod middlewares;
mod routes;

#[derive(Debug, Clone)]
pub struct RestServer<ContactForm> {
    contact_form: ContactForm,
}

impl<ContactForm> RestServer<ContactForm>
where
    ContactForm: ContactFormService,
{
    pub fn new(contact_form: ContactForm) -> Self {
        Self { contact_form }
    }

    pub async fn serve(self, host: IpAddr, port: u16) -> anyhow::Result<()> {
        let router = self.router();
        let listener = TcpListener::bind((host, port)).await?;
        info!("Listening on {}", listener.local_addr()?);
        axum::serve(listener, router).await.map_err(Into::into)
    }

    fn router(self) -> Router<()> {
        let router = Router::new()
            .merge(routes::contact::router(self.contact_form.into()))
            .fallback(routes::not_found);

        middlewares::trace::add(middlewares::panic_handler::add(router))
    }
}
