use super::*;
use serial_test::serial;
use std::env;
use std::path::PathBuf;

fn with_env_vars<F, R>(vars: &[(&str, &str)], f: F) -> R
where
    F: FnOnce() -> R,
{
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    for (key, value) in vars {
        unsafe { env::set_var(key, value) };
    }

    let result = f();

    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    for (key, _) in vars {
        unsafe { env::remove_var(key) };
    }

    result
}

fn clear_marketpick_env() {
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    unsafe {
        env::remove_var("MARKETPICK_MODEL_DIR");
        env::remove_var("MARKETPICK_TOP_K");
        env::remove_var("MARKETPICK_MAX_CANDIDATES");
        env::remove_var("MARKETPICK_EMBEDDING_CACHE_CAPACITY");
        env::remove_var("MARKETPICK_SEARCH_BASE_URL");
        env::remove_var("MARKETPICK_FORCE_CPU");
    }
}

#[test]
fn test_default_config() {
    let config = Config::default();

    assert!(config.model_dir.is_none());
    assert_eq!(config.top_k, 3);
    assert_eq!(config.max_candidates, 20);
    assert_eq!(config.embedding_cache_capacity, 10_000);
    assert_eq!(config.search_base_url, "https://jp.mercari.com/search");
    assert!(!config.force_cpu);
}

#[test]
#[serial]
fn test_from_env_with_defaults() {
    clear_marketpick_env();

    let config = Config::from_env().expect("should parse with defaults");

    assert_eq!(config, Config::default());
}

#[test]
#[serial]
fn test_full_config_parse() {
    clear_marketpick_env();

    with_env_vars(
        &[
            ("MARKETPICK_MODEL_DIR", "/models/all-MiniLM-L6-v2"),
            ("MARKETPICK_TOP_K", "5"),
            ("MARKETPICK_MAX_CANDIDATES", " 40 "),
            ("MARKETPICK_EMBEDDING_CACHE_CAPACITY", "0"),
            ("MARKETPICK_SEARCH_BASE_URL", "http://localhost:9000/search"),
            ("MARKETPICK_FORCE_CPU", "true"),
        ],
        || {
            let config = Config::from_env().expect("should parse full config");

            assert_eq!(
                config.model_dir,
                Some(PathBuf::from("/models/all-MiniLM-L6-v2"))
            );
            assert_eq!(config.top_k, 5);
            assert_eq!(config.max_candidates, 40);
            assert_eq!(config.embedding_cache_capacity, 0);
            assert_eq!(config.search_base_url, "http://localhost:9000/search");
            assert!(config.force_cpu);
        },
    );
}

#[test]
#[serial]
fn test_blank_model_dir_is_ignored() {
    clear_marketpick_env();

    with_env_vars(&[("MARKETPICK_MODEL_DIR", "   ")], || {
        let config = Config::from_env().expect("should parse");
        assert!(config.model_dir.is_none());
    });
}

#[test]
#[serial]
fn test_zero_top_k_rejected() {
    clear_marketpick_env();

    with_env_vars(&[("MARKETPICK_TOP_K", "0")], || {
        let err = Config::from_env().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::ZeroValue {
                name: "MARKETPICK_TOP_K"
            }
        ));
        assert!(err.to_string().contains("at least 1"));
    });
}

#[test]
#[serial]
fn test_non_numeric_max_candidates_rejected() {
    clear_marketpick_env();

    with_env_vars(&[("MARKETPICK_MAX_CANDIDATES", "lots")], || {
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
        assert!(err.to_string().contains("MARKETPICK_MAX_CANDIDATES"));
    });
}

#[test]
#[serial]
fn test_invalid_cache_capacity_uses_default() {
    clear_marketpick_env();

    with_env_vars(&[("MARKETPICK_EMBEDDING_CACHE_CAPACITY", "not_a_number")], || {
        let config = Config::from_env().expect("should parse with fallback");
        assert_eq!(config.embedding_cache_capacity, 10_000);
    });
}

#[test]
fn test_validate_success_with_defaults() {
    assert!(Config::default().validate().is_ok());
}

#[test]
fn test_validate_zero_counts() {
    let config = Config {
        max_candidates: 0,
        ..Default::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ZeroValue { .. })
    ));
}

#[test]
fn test_validate_invalid_search_url() {
    let config = Config {
        search_base_url: "jp.mercari.com/search".to_string(),
        ..Default::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidUrl { .. })
    ));
}

#[test]
fn test_validate_nonexistent_model_dir() {
    let config = Config {
        model_dir: Some(PathBuf::from("/nonexistent/path/to/minilm")),
        ..Default::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::PathNotFound { .. })
    ));
}

#[test]
fn test_validate_model_dir_is_file() {
    let config = Config {
        model_dir: Some(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("Cargo.toml")),
        ..Default::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::NotADirectory { .. })
    ));
}

#[test]
fn test_embedder_config_follows_model_dir() {
    let stub = Config::default().embedder_config();
    assert!(stub.testing_stub);

    let config = Config {
        model_dir: Some(PathBuf::from("/models/minilm")),
        force_cpu: true,
        ..Default::default()
    };
    let embedder = config.embedder_config();
    assert!(!embedder.testing_stub);
    assert!(embedder.force_cpu);
    assert_eq!(embedder.model_dir, PathBuf::from("/models/minilm"));
}

#[test]
fn test_error_messages_are_descriptive() {
    let err = ConfigError::PathNotFound {
        path: PathBuf::from("/some/path"),
    };
    assert!(err.to_string().contains("/some/path"));

    let err = ConfigError::ZeroValue {
        name: "MARKETPICK_TOP_K",
    };
    assert!(err.to_string().contains("MARKETPICK_TOP_K"));
}
