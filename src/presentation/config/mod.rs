mod environment;
mod settings;

pub use environment::{ENVIRONMENT_VAR, Environment};
pub use settings::{
    DEFAULT_EMBEDDING_MODEL, EmbeddingProvider, EmbeddingsSettings, LoggingSettings,
    PoolingStrategy, ServerSettings, Settings,
};
