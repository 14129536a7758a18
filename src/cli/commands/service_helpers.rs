use tracing::debug;

use crate::adapters::store::json_file_store::JsonFileStore;
use crate::adapters::system::random_id::RandomIdGenerator;
use crate::adapters::system::system_clock::SystemClock;
use crate::cli::context;
use crate::config::app_config::AppConfig;
use crate::core::errors::Result;
use crate::core::services::request_service::RequestService;

pub type CliRequestService = RequestService<JsonFileStore, SystemClock, RandomIdGenerator>;

/// Build the request service for the configured data directory.
pub fn request_service() -> Result<CliRequestService> {
    let data_dir = context::data_dir();
    let config = AppConfig::load(data_dir)?;
    let store = JsonFileStore::from_config(data_dir, config.store.as_ref());

    debug!(path = %store.path().display(), "using request file");
    Ok(RequestService::new(store, SystemClock, RandomIdGenerator))
}
