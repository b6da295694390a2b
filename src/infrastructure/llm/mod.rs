mod blocking;
mod embedder_factory;
mod local_candle_embedder;
mod openai_embedder;

pub use blocking::run_blocking;
pub use embedder_factory::{EmbedderFactory, EmbedderFactoryError};
pub use local_candle_embedder::LocalCandleEmbedder;
pub use openai_embedder::OpenAiEmbedder;
