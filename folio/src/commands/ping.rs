use folio_config::Config;
use folio_store_contracts::StoreService;

use crate::environment;

/// Probes message store connectivity.
pub async fn ping(config: Config) -> anyhow::Result<()> {
    let store = environment::store(&config.store);
    store.ping().await?;

    println!("Message store is reachable");

    Ok(())
}
