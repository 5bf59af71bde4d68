use folio_config::{Config, StoreConfig};
use folio_core_contact_impl::{
    commands::append::{ContactAppendCommandConfig, ContactAppendCommandServiceImpl},
    ContactFeatureConfig, ContactFeatureServiceImpl,
};
use folio_models::i18n::Language;
use folio_shared_impl::time::TimeServiceImpl;
use folio_store_firebase::{
    http::USER_AGENT, FirebaseStoreServiceConfig, FirebaseStoreServiceImpl,
};
use folio_surface_console::ConsoleSurface;

pub mod types;

use types::{Contact, Store};

/// Store handle that has not probed the database; `is_ready` stays false.
pub fn store(config: &StoreConfig) -> Store {
    FirebaseStoreServiceImpl::new(store_config(config))
}

/// Store handle probed once at startup.
pub async fn connect_store(config: &StoreConfig) -> Store {
    FirebaseStoreServiceImpl::connect(store_config(config)).await
}

fn store_config(config: &StoreConfig) -> FirebaseStoreServiceConfig {
    FirebaseStoreServiceConfig::new(config.url.clone(), config.auth.clone())
}

/// Builds the full submission flow around a fresh console surface.
pub async fn contact(config: &Config, language: Language) -> (Contact, ConsoleSurface) {
    let store = connect_store(&config.store).await;
    let surface = ConsoleSurface::new(language);

    let contact_append = ContactAppendCommandServiceImpl::new(
        TimeServiceImpl,
        store.clone(),
        ContactAppendCommandConfig {
            client_context: USER_AGENT.as_str().into(),
        },
    );

    let contact = ContactFeatureServiceImpl::new(
        store,
        surface.clone(),
        contact_append,
        ContactFeatureConfig {
            auto_reset_delay: *config.contact.auto_reset_delay,
        },
    );

    (contact, surface)
}
