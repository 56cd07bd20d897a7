mod telemetry;

use company_registry_api::Application;
use company_registry_infra::setup_context;
use telemetry::{get_subscriber, init_subscriber};
use tracing::{error, info};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let subscriber = get_subscriber("company_registry".into(), "info".into());
    init_subscriber(subscriber);

    let context = setup_context().await.map_err(|e| {
        error!("Unable to set up the service: {:?}", e);
        std::io::Error::new(std::io::ErrorKind::Other, e.to_string())
    })?;

    let app = Application::new(context.clone()).await?;
    let res = app.start().await;

    info!("Stopping service");
    context.repos.close().await;
    res
}
