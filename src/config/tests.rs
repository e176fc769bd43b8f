use super::*;
use serial_test::serial;
use std::env;
use std::net::IpAddr;
use std::path::PathBuf;
use tempfile::TempDir;

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

fn clear_devmatch_env() {
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    unsafe {
        env::remove_var("DEVMATCH_PORT");
        env::remove_var("DEVMATCH_BIND_ADDR");
        env::remove_var("DEVMATCH_MODEL_PATH");
    }
}

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.port, 8000);
    assert_eq!(
        config.bind_addr,
        IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1))
    );
    assert!(config.model_path.is_none());
}

#[test]
fn test_socket_addr() {
    let config = Config::default();
    assert_eq!(config.socket_addr(), "127.0.0.1:8000");

    let config = Config {
        port: 3000,
        bind_addr: IpAddr::V4(std::net::Ipv4Addr::new(0, 0, 0, 0)),
        ..Default::default()
    };
    assert_eq!(config.socket_addr(), "0.0.0.0:3000");
}

#[test]
#[serial]
fn test_from_env_with_defaults() {
    clear_devmatch_env();

    let config = Config::from_env().expect("should parse with defaults");

    assert_eq!(config.port, 8000);
    assert!(config.model_path.is_none());
}

#[test]
#[serial]
fn test_from_env_overrides() {
    clear_devmatch_env();

    let config = with_env_vars(
        &[
            ("DEVMATCH_PORT", "9100"),
            ("DEVMATCH_BIND_ADDR", "0.0.0.0"),
            ("DEVMATCH_MODEL_PATH", " /srv/models/match.json "),
        ],
        Config::from_env,
    )
    .expect("should parse overrides");

    assert_eq!(config.port, 9100);
    assert_eq!(config.bind_addr.to_string(), "0.0.0.0");
    assert_eq!(
        config.model_path,
        Some(PathBuf::from("/srv/models/match.json"))
    );
}

#[test]
#[serial]
fn test_blank_model_path_is_ignored() {
    clear_devmatch_env();

    let config = with_env_vars(&[("DEVMATCH_MODEL_PATH", "   ")], Config::from_env).unwrap();
    assert!(config.model_path.is_none());
}

#[test]
#[serial]
fn test_port_zero_rejected() {
    clear_devmatch_env();

    let result = with_env_vars(&[("DEVMATCH_PORT", "0")], Config::from_env);
    assert!(matches!(result, Err(ConfigError::InvalidPort { .. })));
}

#[test]
#[serial]
fn test_port_not_a_number() {
    clear_devmatch_env();

    let result = with_env_vars(&[("DEVMATCH_PORT", "eighty")], Config::from_env);
    assert!(matches!(result, Err(ConfigError::PortParseError { .. })));
}

#[test]
#[serial]
fn test_invalid_bind_addr() {
    clear_devmatch_env();

    let result = with_env_vars(&[("DEVMATCH_BIND_ADDR", "localhost:80")], Config::from_env);
    assert!(matches!(result, Err(ConfigError::InvalidBindAddr { .. })));
}

#[test]
fn test_validate_model_path() {
    let dir = TempDir::new().unwrap();

    let config = Config {
        model_path: Some(dir.path().join("missing.json")),
        ..Default::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::PathNotFound { .. })
    ));

    let config = Config {
        model_path: Some(dir.path().to_path_buf()),
        ..Default::default()
    };
    assert!(matches!(config.validate(), Err(ConfigError::NotAFile { .. })));

    let file = dir.path().join("model.json");
    std::fs::write(&file, "{}").unwrap();
    let config = Config {
        model_path: Some(file),
        ..Default::default()
    };
    assert!(config.validate().is_ok());
    assert!(Config::default().validate().is_ok());
}

#[test]
#[serial]
fn test_model_path_env_resolves_the_same_both_ways() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("model.json");
    std::fs::write(&file, "{}").unwrap();
    let padded = format!("  {}  ", file.display());

    clear_devmatch_env();
    let (config, from_env) = with_env_vars(&[("DEVMATCH_MODEL_PATH", &padded)], || {
        (Config::from_env().unwrap(), resolve_model_path(None))
    });

    assert_eq!(config.model_path.as_deref(), Some(file.as_path()));
    assert_eq!(resolve_model_path(config.model_path.as_deref()), from_env);
    assert!(config.validate().is_ok());
}

#[test]
#[serial]
fn test_validate_expands_home() {
    let config = Config {
        model_path: Some(PathBuf::from("~/devmatch-missing-model.json")),
        ..Default::default()
    };

    match config.validate() {
        Err(ConfigError::PathNotFound { path }) => {
            if dirs::home_dir().is_some() {
                assert!(!path.starts_with("~"));
            }
        }
        other => panic!("expected PathNotFound, got {other:?}"),
    }
}
