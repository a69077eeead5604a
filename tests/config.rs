use std::fs;
use std::path::PathBuf;
use std::sync::Mutex as StdMutex;

use focusdesk::config::{AppConfig, Settings, API_KEY_VAR, CONFIG_FILE_VAR};

static ENV_LOCK: StdMutex<()> = StdMutex::new(());

fn write_config(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("focusdesk_{name}.env"));
    fs::write(&path, contents).unwrap();
    path
}

fn path_str(path: &PathBuf) -> &str {
    path.to_str().unwrap()
}

#[test]
fn parses_comments_export_prefix_and_quotes() {
    let path = write_config(
        "parse",
        "# deployment credentials\n\
         export API_TOKEN=\"abc123\"\n\
         GREETING='hello there'\n\
         PLAIN=value\n\
         \n\
           SPACED =  padded  \n",
    );

    let config = AppConfig::from_file(path_str(&path)).unwrap();
    assert_eq!(config.get("API_TOKEN").as_deref(), Some("abc123"));
    assert_eq!(config.get("GREETING").as_deref(), Some("hello there"));
    assert_eq!(config.get("PLAIN").as_deref(), Some("value"));
    assert_eq!(config.get("SPACED").as_deref(), Some("padded"));
    assert_eq!(config.get("deployment"), None);
}

#[test]
fn invalid_line_is_rejected_with_its_number() {
    let path = write_config("invalid", "GOOD=1\nthis line has no equals\n");

    let err = AppConfig::from_file(path_str(&path)).unwrap_err();
    assert!(err.contains("line 2"), "unexpected error: {err}");
}

#[test]
fn missing_file_is_an_error() {
    assert!(AppConfig::from_file("/nonexistent/focusdesk.env").is_err());
}

#[test]
fn file_value_wins_over_process_env() {
    let _guard = ENV_LOCK.lock().unwrap();
    let path = write_config("precedence", "FOCUSDESK_TEST_PROP=from-file\n");
    unsafe {
        std::env::set_var("FOCUSDESK_TEST_PROP", "from-env");
        std::env::set_var("FOCUSDESK_TEST_ENV_ONLY", "env-value");
    }

    let config = AppConfig::from_file(path_str(&path)).unwrap();
    assert_eq!(config.prop("FOCUSDESK_TEST_PROP").as_deref(), Some("from-file"));
    assert_eq!(
        config.prop("FOCUSDESK_TEST_ENV_ONLY").as_deref(),
        Some("env-value")
    );
    assert_eq!(config.prop("FOCUSDESK_TEST_UNSET"), None);

    unsafe {
        std::env::remove_var("FOCUSDESK_TEST_PROP");
        std::env::remove_var("FOCUSDESK_TEST_ENV_ONLY");
    }
}

#[test]
fn settings_pick_up_the_credential_from_the_config_file() {
    let _guard = ENV_LOCK.lock().unwrap();
    let path = write_config("credential", &format!("{API_KEY_VAR}=secret-key\n"));
    unsafe {
        std::env::remove_var(API_KEY_VAR);
        std::env::set_var(CONFIG_FILE_VAR, path_str(&path));
    }

    let settings = Settings::load();
    assert_eq!(settings.gemini_api_key.as_deref(), Some("secret-key"));

    unsafe {
        std::env::remove_var(CONFIG_FILE_VAR);
    }
}

#[test]
fn blank_credential_counts_as_absent() {
    let _guard = ENV_LOCK.lock().unwrap();
    let path = write_config("blank", &format!("{API_KEY_VAR}=\"   \"\n"));
    unsafe {
        std::env::remove_var(API_KEY_VAR);
        std::env::set_var(CONFIG_FILE_VAR, path_str(&path));
    }

    let settings = Settings::load();
    assert!(settings.gemini_api_key.is_none());

    unsafe {
        std::env::remove_var(CONFIG_FILE_VAR);
    }
}

#[test]
fn absent_credential_everywhere_leaves_chat_offline() {
    let _guard = ENV_LOCK.lock().unwrap();
    unsafe {
        std::env::remove_var(CONFIG_FILE_VAR);
        std::env::remove_var(API_KEY_VAR);
    }

    let settings = Settings::load();
    assert!(settings.gemini_api_key.is_none());
}
