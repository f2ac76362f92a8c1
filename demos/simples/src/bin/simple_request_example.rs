use std::env;
use tracking3_client::prelude::*;
use tracking3_client::utils::setup_logger;
use tracing::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();
    info!("Starting simple request example");

    let configuration = Configuration::from_env()?;
    let base_url = env::var("T3_BASE_URL").unwrap_or_else(|_| "https://api.tracking3.de".to_string());
    let mut executor = RequestExecutor::new(HttpTransport::new());

    let envelope = executor.do_request(
        Method::GET,
        &format!("{}/{}/user/self", base_url, configuration.api_version),
        &configuration,
        None,
        None,
        None,
    )?;

    info!("Status: {}", envelope.status);
    info!("Body: {:#?}", envelope.json()?);

    Ok(())
}
