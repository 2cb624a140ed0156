//! TTS Adapter - 语音合成引擎实现

mod espeak_engine;
mod fake_engine;
mod http_tts_client;

pub use espeak_engine::{parse_voice_list, EspeakEngine, EspeakEngineConfig};
pub use fake_engine::{FakeSpeechEngine, FakeSpeechEngineConfig};
pub use http_tts_client::{HttpTtsClient, HttpTtsClientConfig};
