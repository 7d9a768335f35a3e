use crate::store::AudioStore;
use std::sync::Arc;
use tagalog_speech::TTSProvider;

#[derive(Clone)]
pub(crate) struct AppState {
    pub provider: Arc<dyn TTSProvider>,
    pub store: AudioStore,
}

impl AppState {
    pub fn new(provider: Arc<dyn TTSProvider>, store: AudioStore) -> Self {
        Self { provider, store }
    }
}
