use std::env;
use std::time::Duration;
use log::{info, warn};
use crate::carousel::Carousel;
use crate::config::Config;
use crate::errors::InitError;
use crate::manager_owm::Owm;
use crate::session::Session;
use crate::store::{JsonFileStore, KeyValueStore, MemoryStore};

/// Environment variable consulted when no API key is configured
const API_KEY_VAR: &str = "OWM_API_KEY";

/// Managers and state needed by the commands
pub struct Mgr {
    pub store: Box<dyn KeyValueStore>,
    pub session: Session,
    pub carousel: Carousel,
    pub owm: Option<Owm>,
}

/// Opens the store, loads the session and sets up the weather client
///
/// # Arguments
///
/// * 'config' - the loaded configuration
/// * 'dry_run' - work on an in-memory copy of the store so nothing is written
pub fn init(config: &Config, dry_run: bool) -> Result<Mgr, InitError> {
    info!("lockboard version: {}", env!("CARGO_PKG_VERSION"));

    let file_store = JsonFileStore::open(&config.files.store_file)?;
    let mut store: Box<dyn KeyValueStore> = if dry_run {
        info!("dry run, changes will not be saved");
        Box::new(MemoryStore::copy_of(&file_store))
    } else {
        Box::new(file_store)
    };
    let session = Session::load(store.as_mut())?;
    let carousel = Carousel::new(config.carousel.loop_factor, &config.carousel.fallback_uri);
    info!("{} wallpaper(s), loop factor {}", session.wallpapers().len(), carousel.loop_factor());

    let api_key = config.weather.api_key.clone().or_else(|| env::var(API_KEY_VAR).ok());
    let owm = match api_key {
        Some(key) => Some(Owm::new(
            &config.weather.base_url,
            key,
            Duration::from_secs(config.weather.timeout_secs),
        )),
        None => {
            warn!("no weather API key configured and {} not set", API_KEY_VAR);
            None
        }
    };

    Ok(Mgr { store, session, carousel, owm })
}
