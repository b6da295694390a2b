use course_redundancy::presentation::config::{
    DEFAULT_EMBEDDING_MODEL, EmbeddingProvider, Environment, PoolingStrategy, Settings,
};

#[test]
fn given_no_overrides_when_loading_defaults_then_uses_local_bge_model() {
    let settings = Settings::load_defaults(Environment::Test).unwrap();

    assert_eq!(settings.embeddings.provider, EmbeddingProvider::Local);
    assert_eq!(settings.embeddings.model, DEFAULT_EMBEDDING_MODEL);
    assert_eq!(settings.embeddings.pooling, PoolingStrategy::Cls);
    assert!(settings.embeddings.api_key.is_none());
}

#[test]
fn given_no_overrides_when_loading_defaults_then_server_binds_all_interfaces() {
    let settings = Settings::load_defaults(Environment::Test).unwrap();

    assert_eq!(settings.server.host, "0.0.0.0");
    assert_eq!(settings.server.port, 5000);
    assert_eq!(settings.max_upload_bytes(), 16 * 1024 * 1024);
    assert!(!settings.logging.json);
}

#[test]
fn given_environment_names_when_parsing_then_accepts_aliases() {
    assert_eq!("production".parse::<Environment>(), Ok(Environment::Prod));
    assert_eq!("LOCAL".parse::<Environment>(), Ok(Environment::Local));
    assert_eq!("test".parse::<Environment>(), Ok(Environment::Test));
    assert!("staging".parse::<Environment>().is_err());
}

#[test]
fn given_environment_when_displayed_then_uses_lowercase_name() {
    assert_eq!(Environment::Prod.to_string(), "prod");
    assert_eq!(Environment::default(), Environment::Local);
}
