use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use anyhow::anyhow;
use chrono::SecondsFormat;
use folio_models::{
    contact::{ContactMessage, MessageKey},
    i18n::Language,
};
use folio_store_contracts::StoreService;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use url::Url;

use crate::http::HttpClient;

pub mod http;

/// Firebase Realtime Database accessed over its REST API. Appending to a
/// collection `POST`s to `<base>/<collection>.json` and the database responds
/// with the generated push key.
#[derive(Debug, Clone)]
pub struct FirebaseStoreServiceImpl {
    config: FirebaseStoreServiceConfig,
    client: HttpClient,
    ready: Arc<AtomicBool>,
}

#[derive(Debug, Clone)]
pub struct FirebaseStoreServiceConfig {
    url: Arc<Url>,
    auth: Option<Arc<str>>,
}

impl FirebaseStoreServiceConfig {
    pub fn new(url: Url, auth: Option<String>) -> Self {
        Self {
            url: url.into(),
            auth: auth.map(Into::into),
        }
    }
}

impl FirebaseStoreServiceImpl {
    /// A handle that has not probed the database yet; `is_ready` stays false.
    pub fn new(config: FirebaseStoreServiceConfig) -> Self {
        Self {
            config,
            client: HttpClient::default(),
            ready: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Probes the database once and marks the store ready on success. There
    /// is no retry; a store that failed its probe keeps rejecting
    /// submissions until the process is restarted.
    pub async fn connect(config: FirebaseStoreServiceConfig) -> Self {
        let store = Self::new(config);
        match store.ping().await {
            Ok(()) => {
                store.ready.store(true, Ordering::Release);
                info!("Message store is ready");
            }
            Err(err) => warn!("Message store is not ready: {err:#}"),
        }
        store
    }

    fn endpoint(&self, document: &str) -> anyhow::Result<Url> {
        let mut url = (*self.config.url).clone();
        url.path_segments_mut()
            .map_err(|()| anyhow!("Store URL cannot be a base"))?
            .pop_if_empty()
            .push(document);
        if let Some(auth) = &self.config.auth {
            url.query_pairs_mut().append_pair("auth", auth);
        }
        Ok(url)
    }
}

impl StoreService for FirebaseStoreServiceImpl {
    fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    #[tracing::instrument(skip(self, message))]
    async fn append(
        &self,
        collection: &str,
        message: &ContactMessage,
    ) -> anyhow::Result<MessageKey> {
        let url = self.endpoint(&format!("{collection}.json"))?;

        let PushResponse { name } = self
            .client
            .post(url)
            .json(&StoredMessage::from(message))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(name.into())
    }

    async fn ping(&self) -> anyhow::Result<()> {
        let mut url = self.endpoint(".json")?;
        url.query_pairs_mut().append_pair("shallow", "true");

        self.client.get(url).send().await?.error_for_status()?;

        Ok(())
    }
}

/// Wire shape of a stored message, field for field what the website has
/// always written under `messages/<key>`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StoredMessage<'a> {
    name: &'a str,
    email: &'a str,
    subject: &'a str,
    message: &'a str,
    language: Language,
    /// RFC 3339 UTC with millisecond precision.
    created: String,
    user_agent: &'a str,
    /// Same instant as `created`, in Unix milliseconds.
    timestamp: i64,
}

impl<'a> From<&'a ContactMessage> for StoredMessage<'a> {
    fn from(message: &'a ContactMessage) -> Self {
        Self {
            name: message.author.name.as_str(),
            email: message.author.email.as_str(),
            subject: message.subject.as_str(),
            message: message.content.as_str(),
            language: message.language,
            created: message
                .submitted_at
                .to_rfc3339_opts(SecondsFormat::Millis, true),
            user_agent: message.client_context.as_str(),
            timestamp: message.submitted_at.timestamp_millis(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct PushResponse {
    name: String,
}
