//! Illustration loading with graceful degradation.
//!
//! Each decorative animation is fetched once at startup from a fixed URL.
//! Any failure along the way (network error, non-200 status, unparseable
//! body) degrades to the slot's fallback text; nothing is ever surfaced to
//! the user as an error.

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use log::{debug, info};
use reqwest::Client;
use serde::Deserialize;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// The subset of a Lottie JSON document the UI cares about. `fr`, `ip` and
/// `op` are mandatory in the format, so arbitrary JSON fails to parse here.
#[derive(Debug, Clone, Deserialize)]
pub struct AnimationDescriptor {
    #[serde(rename = "nm", default)]
    pub name: Option<String>,
    #[serde(rename = "fr")]
    pub frame_rate: f64,
    #[serde(rename = "ip")]
    pub in_point: f64,
    #[serde(rename = "op")]
    pub out_point: f64,
    #[serde(default)]
    pub layers: Vec<serde_json::Value>,
}

impl AnimationDescriptor {
    pub fn frame_count(&self) -> u64 {
        (self.out_point - self.in_point).max(0.0) as u64
    }
}

/// What a slot renders: either a parsed animation or its fallback text.
#[derive(Debug, Clone)]
pub enum Illustration {
    Animation(AnimationDescriptor),
    Fallback(String),
}

/// A minimal HTTP response, decoupled from any client type so tests can
/// fabricate statuses and bodies.
#[derive(Debug, Clone)]
pub struct FetchResponse {
    pub status: u16,
    pub body: String,
}

/// Seam for the illustration fetch. Production uses [`HttpFetcher`]; tests
/// inject fakes.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<FetchResponse>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchResponse> {
        let response = self.client.get(url).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(FetchResponse { status, body })
    }
}

/// Fetches `url` and parses it as an animation; every failure class yields
/// the fallback text instead.
pub async fn fetch_or_default(
    fetcher: &dyn Fetcher,
    url: &str,
    fallback: &str,
) -> Illustration {
    match fetcher.fetch(url).await {
        Ok(response) if response.status == 200 => {
            match serde_json::from_str::<AnimationDescriptor>(&response.body) {
                Ok(descriptor) => Illustration::Animation(descriptor),
                Err(err) => {
                    debug!("Animation at {} did not parse: {}", url, err);
                    Illustration::Fallback(fallback.to_string())
                }
            }
        }
        Ok(response) => {
            debug!("Animation fetch for {} returned HTTP {}", url, response.status);
            Illustration::Fallback(fallback.to_string())
        }
        Err(err) => {
            debug!("Animation fetch for {} failed: {}", url, err);
            Illustration::Fallback(fallback.to_string())
        }
    }
}

/// The decorative slots on the Home page, each with its remote asset and
/// fallback text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IllustrationSlot {
    Hero,
    UploadStep,
    LanguagesStep,
    DownloadStep,
}

impl IllustrationSlot {
    pub const ALL: [IllustrationSlot; 4] = [
        IllustrationSlot::Hero,
        IllustrationSlot::UploadStep,
        IllustrationSlot::LanguagesStep,
        IllustrationSlot::DownloadStep,
    ];

    pub fn url(&self) -> &'static str {
        match self {
            IllustrationSlot::Hero => {
                "https://assets5.lottiefiles.com/packages/lf20_V9t630.json"
            }
            IllustrationSlot::UploadStep => {
                "https://assets9.lottiefiles.com/packages/lf20_4kx2q32n.json"
            }
            IllustrationSlot::LanguagesStep => {
                "https://assets2.lottiefiles.com/packages/lf20_qwl4gi2d.json"
            }
            IllustrationSlot::DownloadStep => {
                "https://assets5.lottiefiles.com/packages/lf20_V9t630.json"
            }
        }
    }

    pub fn fallback(&self) -> &'static str {
        match self {
            IllustrationSlot::Hero => "🌍 Anuvaad: Bridging Language Barriers",
            IllustrationSlot::UploadStep => "📤 Upload Video",
            IllustrationSlot::LanguagesStep => "🗣️ Select Languages",
            IllustrationSlot::DownloadStep => "⬇️ Download Translated Video",
        }
    }
}

/// Owns the fetched illustrations and the channel that background fetch
/// tasks report through.
pub struct IllustrationStore {
    loaded: HashMap<IllustrationSlot, Illustration>,
    events_tx: UnboundedSender<(IllustrationSlot, Illustration)>,
    events_rx: UnboundedReceiver<(IllustrationSlot, Illustration)>,
}

impl IllustrationStore {
    pub fn new() -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            loaded: HashMap::new(),
            events_tx,
            events_rx,
        }
    }

    /// Spawns one fetch task per slot. Results arrive through the internal
    /// channel and are picked up by [`IllustrationStore::poll`] on tick.
    pub fn spawn_fetches(&self, fetcher: Arc<dyn Fetcher>) {
        for slot in IllustrationSlot::ALL {
            let tx = self.events_tx.clone();
            let fetcher = fetcher.clone();
            tokio::spawn(async move {
                let illustration =
                    fetch_or_default(fetcher.as_ref(), slot.url(), slot.fallback()).await;
                let _ = tx.send((slot, illustration));
            });
        }
    }

    /// Drains completed fetches into the store. Called from the tick handler.
    pub fn poll(&mut self) {
        while let Ok((slot, illustration)) = self.events_rx.try_recv() {
            if let Illustration::Animation(descriptor) = &illustration {
                info!(
                    "Loaded animation for {:?}: {} frames",
                    slot,
                    descriptor.frame_count()
                );
            }
            self.loaded.insert(slot, illustration);
        }
    }

    /// The illustration to render for `slot`. Until the fetch completes the
    /// fallback text is shown, so a slot never renders empty.
    pub fn get(&self, slot: IllustrationSlot) -> Illustration {
        self.loaded
            .get(&slot)
            .cloned()
            .unwrap_or_else(|| Illustration::Fallback(slot.fallback().to_string()))
    }
}

impl Default for IllustrationStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    struct FakeFetcher {
        response: Result<FetchResponse, String>,
    }

    #[async_trait]
    impl Fetcher for FakeFetcher {
        async fn fetch(&self, _url: &str) -> Result<FetchResponse> {
            match &self.response {
                Ok(response) => Ok(response.clone()),
                Err(message) => Err(anyhow!(message.clone())),
            }
        }
    }

    const VALID_LOTTIE: &str =
        r#"{"nm":"globe","fr":30.0,"ip":0.0,"op":90.0,"layers":[{},{}]}"#;

    #[tokio::test]
    async fn ok_response_with_valid_json_yields_animation() {
        let fetcher = FakeFetcher {
            response: Ok(FetchResponse {
                status: 200,
                body: VALID_LOTTIE.to_string(),
            }),
        };
        match fetch_or_default(&fetcher, "http://x/a.json", "fallback").await {
            Illustration::Animation(descriptor) => {
                assert_eq!(descriptor.name.as_deref(), Some("globe"));
                assert_eq!(descriptor.frame_count(), 90);
                assert_eq!(descriptor.layers.len(), 2);
            }
            Illustration::Fallback(_) => panic!("expected animation"),
        }
    }

    #[tokio::test]
    async fn non_200_status_falls_back() {
        let fetcher = FakeFetcher {
            response: Ok(FetchResponse {
                status: 404,
                body: VALID_LOTTIE.to_string(),
            }),
        };
        match fetch_or_default(&fetcher, "http://x/a.json", "🌍 fallback").await {
            Illustration::Fallback(text) => assert_eq!(text, "🌍 fallback"),
            Illustration::Animation(_) => panic!("expected fallback"),
        }
    }

    #[tokio::test]
    async fn network_error_falls_back() {
        let fetcher = FakeFetcher {
            response: Err("connection refused".to_string()),
        };
        match fetch_or_default(&fetcher, "http://x/a.json", "offline").await {
            Illustration::Fallback(text) => assert_eq!(text, "offline"),
            Illustration::Animation(_) => panic!("expected fallback"),
        }
    }

    #[tokio::test]
    async fn invalid_json_falls_back() {
        let fetcher = FakeFetcher {
            response: Ok(FetchResponse {
                status: 200,
                body: "<html>not json</html>".to_string(),
            }),
        };
        match fetch_or_default(&fetcher, "http://x/a.json", "plain text").await {
            Illustration::Fallback(text) => assert_eq!(text, "plain text"),
            Illustration::Animation(_) => panic!("expected fallback"),
        }
    }

    #[tokio::test]
    async fn store_serves_fallback_until_fetch_lands() {
        let mut store = IllustrationStore::new();
        match store.get(IllustrationSlot::UploadStep) {
            Illustration::Fallback(text) => assert_eq!(text, "📤 Upload Video"),
            Illustration::Animation(_) => panic!("nothing fetched yet"),
        }

        let fetcher: Arc<dyn Fetcher> = Arc::new(FakeFetcher {
            response: Ok(FetchResponse {
                status: 200,
                body: VALID_LOTTIE.to_string(),
            }),
        });
        store.spawn_fetches(fetcher);
        tokio::task::yield_now().await;
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
        store.poll();
        match store.get(IllustrationSlot::Hero) {
            Illustration::Animation(descriptor) => assert_eq!(descriptor.frame_rate, 30.0),
            Illustration::Fallback(_) => panic!("fetch should have landed"),
        }
    }
}
