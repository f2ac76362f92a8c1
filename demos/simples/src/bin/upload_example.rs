use serde_json::json;
use std::env;
use tracking3_client::prelude::*;
use tracking3_client::utils::setup_logger;
use tracing::{error, info};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    // Credentials come from T3_* variables or a .env file
    let configuration = Configuration::from_env()?.with_generated_transaction_id();
    let base_url = env::var("T3_BASE_URL").unwrap_or_else(|_| "https://api.tracking3.de".to_string());
    let path = env::args().nth(1).ok_or("usage: upload_example <file>")?;

    let file = FileAttachment::read(&path)?;
    let mut executor = RequestExecutor::new(HttpTransport::new());

    info!("Uploading {} to {}", path, base_url);
    let result = executor.do_request(
        Method::POST,
        &format!("{}/{}/document", base_url, configuration.api_version),
        &configuration,
        Some(&json!({"document": {"title": file.file_name(), "public": false}})),
        Some(&file),
        None,
    );

    match result {
        Ok(envelope) if envelope.is_success() => info!("Uploaded: {}", envelope.body),
        Ok(envelope) => error!("Server answered {}: {}", envelope.status, envelope.body),
        Err(RequestError::Timeout { timeout_secs }) => {
            error!("No answer within {} seconds", timeout_secs)
        }
        Err(e) => error!("Connection failed ({}): {}", e.code(), e),
    }

    Ok(())
}
