// shellenv: Shell Command Environment Builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for the environment module.

use crate::core::env::container::Env;
use crate::core::env::names::{ANDROID_SYSTEM_VARIABLES, is_valid_name};
use crate::core::system::SystemSnapshot;
use std::collections::BTreeMap;

#[test]
fn test_env_basic_operations() {
    let mut env = Env::new();
    env.set("FOO", "bar");

    assert_eq!(env.get("FOO"), Some("bar"));
    assert_eq!(env.get("foo"), None, "keys are case-sensitive");
    assert_eq!(env.get("NOTEXIST"), None);

    env.set("FOO", "baz");
    assert_eq!(env.get("FOO"), Some("baz"));

    env.remove("FOO");
    assert!(env.is_empty());
}

#[test]
fn test_put_if_set() {
    let mut env = Env::new();

    assert!(env.put_if_set("SET", Some("1")));
    assert!(!env.put_if_set::<String>("UNSET", None));

    assert_eq!(env.get("SET"), Some("1"));
    assert!(!env.contains("UNSET"));
    assert_eq!(env.len(), 1);
}

#[test]
fn test_put_if_in_system() {
    let system = SystemSnapshot::from_vars(
        [("ANDROID_ROOT".to_string(), "/system".to_string())]
            .into_iter()
            .collect(),
    );
    let mut env = Env::new();
    assert!(env.put_if_in_system("ANDROID_ROOT", &system));
    assert!(!env.put_if_in_system("ANDROID_DATA", &system));
    assert_eq!(env.get("ANDROID_ROOT"), Some("/system"));
    assert!(!env.contains("ANDROID_DATA"));
}

#[test]
fn test_put_if_set_keeps_empty_value() {
    let mut env = Env::new();
    assert!(env.put_if_set("EMPTY", Some("")));
    assert_eq!(env.get("EMPTY"), Some(""));
}

#[test]
fn test_merge_overwrite_prefers_other() {
    let mut base = Env::new();
    base.set("HOME", "/").set("TERM", "xterm-256color");

    let mut overlay = Env::new();
    overlay.set("HOME", "/custom").set("EXTRA", "1");

    base.merge_overwrite(overlay);

    assert_eq!(base.get("HOME"), Some("/custom"));
    assert_eq!(base.get("TERM"), Some("xterm-256color"));
    assert_eq!(base.get("EXTRA"), Some("1"));
}

#[test]
fn test_env_from_map_and_to_map() {
    let mut map = BTreeMap::new();
    map.insert("KEY1".to_string(), "value1".to_string());
    map.insert("KEY2".to_string(), "value2".to_string());

    let env = Env::from_map(map.clone());

    assert_eq!(env.len(), 2);
    assert_eq!(env.to_map(), map);
    assert_eq!(env.into_map(), map);
}

#[test]
fn test_to_environ_sorted_and_filtered() {
    let env: Env = [
        ("TERM", "xterm-256color"),
        ("HOME", "/"),
        ("1INVALID", "x"),
        ("WITH_NUL", "a\0b"),
        ("_UNDERSCORE", "ok"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();

    insta::assert_snapshot!(env.to_environ().join("\n"), @r"
    HOME=/
    TERM=xterm-256color
    _UNDERSCORE=ok
    ");
}

#[test]
fn test_to_dotenv_escapes_shell_metacharacters() {
    let mut env = Env::new();
    env.set("PLAIN", "/system/bin")
        .set("QUOTED", r#"say "hi" $USER `id` \n"#)
        .set("BAD-NAME", "skipped");

    insta::assert_snapshot!(env.to_dotenv(), @r#"
    export PLAIN="/system/bin"
    export QUOTED="say \"hi\" \$USER \`id\` \\n"
    "#);
}

#[test]
fn test_serialize_as_flat_map() {
    let mut env = Env::new();
    env.set("B", "2").set("A", "1");

    let json = serde_json::to_string(&env).unwrap();
    assert_eq!(json, r#"{"A":"1","B":"2"}"#);
}

#[test]
fn test_is_valid_name() {
    for name in ["HOME", "_", "a1", "SHELL_CMD__SHELL_ID"] {
        assert!(is_valid_name(name), "{name} should be valid");
    }
    for name in ["", "1A", "A-B", "A B", "A=B", "É"] {
        assert!(!is_valid_name(name), "{name:?} should be invalid");
    }
}

#[test]
fn test_android_system_variables_are_valid_names() {
    assert!(ANDROID_SYSTEM_VARIABLES.iter().all(|n| is_valid_name(n)));
}
