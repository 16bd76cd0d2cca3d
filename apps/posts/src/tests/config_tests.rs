use super::*;

use std::{
    collections::HashMap,
    env,
    time::{SystemTime, UNIX_EPOCH},
};

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_point_at_local_api() {
    let settings = Settings::default();
    assert_eq!(settings.api_base_url, "http://localhost:3000");
    assert_eq!(settings.user_id, None);
    assert_eq!(settings.request_timeout_seconds, 10);
}

#[test]
fn partial_file_keeps_remaining_defaults() {
    let settings = parse_settings("user_id = 3\n").expect("parse");
    assert_eq!(settings.user_id, Some(UserId(3)));
    assert_eq!(settings.api_base_url, "http://localhost:3000");
}

#[test]
fn malformed_file_is_an_error() {
    assert!(parse_settings("user_id = \"three\"").is_err());
}

#[test]
fn env_overrides_file_values() {
    let file = parse_settings("api_base_url = \"http://file:1\"\nuser_id = 1\n").expect("parse");
    let settings = apply_env(
        file,
        env_from(&[
            ("POSTS_API_URL", "http://env:2"),
            ("APP__USER_ID", "7"),
            ("APP__REQUEST_TIMEOUT_SECONDS", "3"),
        ]),
    );
    assert_eq!(settings.api_base_url, "http://env:2");
    assert_eq!(settings.user_id, Some(UserId(7)));
    assert_eq!(settings.request_timeout_seconds, 3);
}

#[test]
fn app_prefixed_url_wins_over_short_name() {
    let settings = apply_env(
        Settings::default(),
        env_from(&[
            ("POSTS_API_URL", "http://short:1"),
            ("APP__API_BASE_URL", "http://prefixed:2"),
        ]),
    );
    assert_eq!(settings.api_base_url, "http://prefixed:2");
}

#[test]
fn non_numeric_env_user_id_is_ignored() {
    let settings = apply_env(
        Settings {
            user_id: Some(UserId(4)),
            ..Settings::default()
        },
        env_from(&[("POSTS_USER_ID", "abc")]),
    );
    assert_eq!(settings.user_id, Some(UserId(4)));
}

#[test]
fn missing_file_yields_defaults() {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let path = env::temp_dir().join(format!("posts_missing_{suffix}.toml"));
    assert_eq!(
        read_settings_file(&path).expect("defaults"),
        Settings::default()
    );
}

#[test]
fn reads_settings_file_from_disk() {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let path = env::temp_dir().join(format!("posts_settings_{suffix}.toml"));
    fs::write(&path, "api_base_url = \"http://127.0.0.1:4000\"\n").expect("write");

    let settings = read_settings_file(&path).expect("read");
    assert_eq!(settings.api_base_url, "http://127.0.0.1:4000");

    fs::remove_file(path).expect("cleanup");
}
