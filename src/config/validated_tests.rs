//! Tests for validated configuration.

use std::io::Write;
use std::time::Duration;

use tempfile::{NamedTempFile, tempdir};

use crate::discord::Direction;

use super::cli::Cli;
use super::toml::TomlConfig;
use super::validated::{ValidatedConfig, write_default_config};
use super::{ConfigError, defaults};

const URL: &str = "https://discord.com/api/webhooks/1/token";

/// Helper to create CLI args from a slice
fn cli(args: &[&str]) -> Cli {
    let mut full_args = vec!["bitwatch-notify"];
    full_args.extend(args);
    Cli::parse_from_iter(full_args)
}

/// Helper to parse TOML config
fn toml(content: &str) -> TomlConfig {
    TomlConfig::parse(content).unwrap()
}

mod url {
    use super::*;

    #[test]
    fn missing_everywhere_is_error() {
        let result = ValidatedConfig::from_raw(&cli(&[]), None, None);

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequired { field: "url", .. })
        ));
    }

    #[test]
    fn blank_values_count_as_missing() {
        let toml = toml(
            r#"
            [webhook]
            url = "  "
        "#,
        );
        let result = ValidatedConfig::from_raw(&cli(&["--url", ""]), Some(""), Some(&toml));

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequired { field: "url", .. })
        ));
    }

    #[test]
    fn env_is_used_when_cli_absent() {
        let config = ValidatedConfig::from_raw(&cli(&[]), Some(URL), None).unwrap();
        assert_eq!(config.url.as_str(), URL);
    }

    #[test]
    fn cli_beats_env_and_toml() {
        let toml = toml(
            r#"
            [webhook]
            url = "https://toml.example/hook"
        "#,
        );
        let config = ValidatedConfig::from_raw(
            &cli(&["--url", "https://cli.example/hook"]),
            Some("https://env.example/hook"),
            Some(&toml),
        )
        .unwrap();

        assert_eq!(config.url.as_str(), "https://cli.example/hook");
    }

    #[test]
    fn env_beats_toml() {
        let toml = toml(
            r#"
            [webhook]
            url = "https://toml.example/hook"
        "#,
        );
        let config =
            ValidatedConfig::from_raw(&cli(&[]), Some("https://env.example/hook"), Some(&toml))
                .unwrap();

        assert_eq!(config.url.as_str(), "https://env.example/hook");
    }

    #[test]
    fn toml_is_last_resort() {
        let toml = toml(&format!("[webhook]\nurl = \"{URL}\"\n"));
        let config = ValidatedConfig::from_raw(&cli(&[]), None, Some(&toml)).unwrap();

        assert_eq!(config.url.as_str(), URL);
    }

    #[test]
    fn malformed_url_is_rejected() {
        let result = ValidatedConfig::from_raw(&cli(&["--url", "discord webhook"]), None, None);
        assert!(matches!(result, Err(ConfigError::InvalidUrl { .. })));
    }

    #[test]
    fn non_http_scheme_is_rejected() {
        let result = ValidatedConfig::from_raw(&cli(&["--url", "file:///etc/passwd"]), None, None);

        match result {
            Err(ConfigError::InvalidUrl { reason, .. }) => assert!(reason.contains("file")),
            other => panic!("Expected InvalidUrl, got {other:?}"),
        }
    }
}

mod timeout {
    use super::*;

    #[test]
    fn defaults_to_ten_seconds() {
        let config = ValidatedConfig::from_raw(&cli(&["--url", URL]), None, None).unwrap();
        assert_eq!(config.timeout, defaults::timeout());
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn cli_beats_toml() {
        let toml = toml("[webhook]\ntimeout = 20\n");
        let config =
            ValidatedConfig::from_raw(&cli(&["--url", URL, "--timeout", "3"]), None, Some(&toml))
                .unwrap();

        assert_eq!(config.timeout, Duration::from_secs(3));
    }

    #[test]
    fn toml_beats_default() {
        let toml = toml("[webhook]\ntimeout = 20\n");
        let config = ValidatedConfig::from_raw(&cli(&["--url", URL]), None, Some(&toml)).unwrap();

        assert_eq!(config.timeout, Duration::from_secs(20));
    }

    #[test]
    fn zero_is_rejected() {
        let result = ValidatedConfig::from_raw(&cli(&["--url", URL, "--timeout", "0"]), None, None);

        assert!(matches!(
            result,
            Err(ConfigError::InvalidDuration {
                field: "timeout",
                ..
            })
        ));
    }
}

mod avatar {
    use super::*;

    #[test]
    fn absent_by_default() {
        let config = ValidatedConfig::from_raw(&cli(&["--url", URL]), None, None).unwrap();
        assert!(config.avatar_url.is_none());
    }

    #[test]
    fn taken_from_toml() {
        let toml = toml("[webhook]\navatar_url = \"https://x/a.png\"\n");
        let config = ValidatedConfig::from_raw(&cli(&["--url", URL]), None, Some(&toml)).unwrap();

        assert_eq!(config.avatar_url.as_deref(), Some("https://x/a.png"));
    }

    #[test]
    fn invalid_avatar_url_is_rejected() {
        let result =
            ValidatedConfig::from_raw(&cli(&["--url", URL, "--avatar-url", "nope"]), None, None);

        assert!(matches!(result, Err(ConfigError::InvalidUrl { .. })));
    }
}

mod transaction {
    use super::*;

    #[test]
    fn sample_transaction_by_default() {
        let config = ValidatedConfig::from_raw(&cli(&["--url", URL]), None, None).unwrap();
        let tx = &config.transaction;

        assert_eq!(tx.txid, defaults::SAMPLE_TXID);
        assert_eq!(tx.address.as_deref(), Some(defaults::SAMPLE_ADDRESS));
        assert_eq!(tx.value_sats, Some(123_456));
        assert_eq!(tx.direction, Some(Direction::In));
        assert_eq!(
            tx.link.as_deref(),
            Some(format!("https://mempool.space/tx/{}", defaults::SAMPLE_TXID).as_str())
        );
        assert_eq!(tx.extra.as_deref(), Some("Detected in mempool"));
    }

    #[test]
    fn link_follows_overridden_txid() {
        let config =
            ValidatedConfig::from_raw(&cli(&["--url", URL, "--txid", "ab12"]), None, None).unwrap();

        assert_eq!(
            config.transaction.link.as_deref(),
            Some("https://mempool.space/tx/ab12")
        );
    }

    #[test]
    fn cli_fields_beat_toml_fields() {
        let toml = toml(
            r#"
            [transaction]
            txid = "from-toml"
            value_sats = 1
            direction = "unknown"
            extra = "toml extra"
        "#,
        );
        let config = ValidatedConfig::from_raw(
            &cli(&["--url", URL, "--txid", "from-cli", "--direction", "out"]),
            None,
            Some(&toml),
        )
        .unwrap();
        let tx = &config.transaction;

        assert_eq!(tx.txid, "from-cli");
        assert_eq!(tx.value_sats, Some(1));
        assert_eq!(tx.direction, Some(Direction::Out));
        assert_eq!(tx.extra.as_deref(), Some("toml extra"));
    }

    #[test]
    fn toml_direction_is_parsed() {
        let toml = toml("[transaction]\ndirection = \"OUT\"\n");
        let config = ValidatedConfig::from_raw(&cli(&["--url", URL]), None, Some(&toml)).unwrap();

        assert_eq!(config.transaction.direction, Some(Direction::Out));
    }

    #[test]
    fn invalid_toml_direction_is_rejected() {
        let toml = toml("[transaction]\ndirection = \"sideways\"\n");
        let result = ValidatedConfig::from_raw(&cli(&["--url", URL]), None, Some(&toml));

        assert!(matches!(
            result,
            Err(ConfigError::InvalidDirection { ref value }) if value == "sideways"
        ));
    }

    #[test]
    fn blank_cli_fields_fall_back_to_toml() {
        let toml = toml(
            r#"
            [transaction]
            txid = "from-toml"
            address = "bc1qtoml"
            link = "https://x/from-toml"
            extra = "toml extra"
        "#,
        );
        let config = ValidatedConfig::from_raw(
            &cli(&[
                "--url", URL, "--txid", "  ", "--address", "", "--link", " ", "--extra", "",
            ]),
            None,
            Some(&toml),
        )
        .unwrap();
        let tx = &config.transaction;

        assert_eq!(tx.txid, "from-toml");
        assert_eq!(tx.address.as_deref(), Some("bc1qtoml"));
        assert_eq!(tx.link.as_deref(), Some("https://x/from-toml"));
        assert_eq!(tx.extra.as_deref(), Some("toml extra"));
    }

    #[test]
    fn blank_toml_fields_fall_back_to_samples() {
        let toml = toml(
            r#"
            [transaction]
            txid = ""
            address = " "
            link = ""
            extra = ""
            direction = ""
        "#,
        );
        let config = ValidatedConfig::from_raw(&cli(&["--url", URL]), None, Some(&toml)).unwrap();
        let tx = &config.transaction;

        assert_eq!(tx.txid, defaults::SAMPLE_TXID);
        assert_eq!(tx.address.as_deref(), Some(defaults::SAMPLE_ADDRESS));
        assert_eq!(
            tx.link.as_deref(),
            Some(defaults::mempool_link(defaults::SAMPLE_TXID).as_str())
        );
        assert_eq!(tx.extra.as_deref(), Some(defaults::SAMPLE_EXTRA));
        assert_eq!(tx.direction, Some(Direction::In));
    }
}

mod display {
    use super::*;

    #[test]
    fn hides_webhook_token() {
        let config = ValidatedConfig::from_raw(&cli(&["--url", URL]), None, None).unwrap();
        let shown = config.to_string();

        assert!(shown.contains("discord.com"));
        assert!(!shown.contains("token"));
    }
}

mod files {
    use super::*;

    #[test]
    fn load_reads_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
            [webhook]
            url = "https://file.example/hook"
            timeout = 7
        "#
        )
        .unwrap();

        let path = file.path().to_str().unwrap();
        let config =
            ValidatedConfig::load(&cli(&["--url", "https://cli.example/hook", "-c", path]))
                .unwrap();

        assert_eq!(config.url.as_str(), "https://cli.example/hook");
        assert_eq!(config.timeout, Duration::from_secs(7));
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.toml");

        let result = ValidatedConfig::load(&cli(&[
            "--url",
            URL,
            "-c",
            path.to_str().unwrap(),
        ]));

        assert!(matches!(result, Err(ConfigError::FileRead { .. })));
    }

    #[test]
    fn write_default_config_creates_parseable_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bitwatch-notify.toml");

        write_default_config(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(TomlConfig::parse(&content).is_ok());
    }

    #[test]
    fn write_default_config_reports_bad_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("config.toml");

        assert!(matches!(
            write_default_config(&path),
            Err(ConfigError::FileWrite { .. })
        ));
    }
}
