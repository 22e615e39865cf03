// shellenv: Shell Command Environment Builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{SystemSnapshot, parse_sdk_version, read_sdk_version};
use crate::error::{FsError, ShellEnvError};
use std::collections::BTreeMap;

#[test]
fn test_from_vars_lookup() {
    let mut vars = BTreeMap::new();
    vars.insert("PATH".to_string(), "/system/bin".to_string());
    let snapshot = SystemSnapshot::from_vars(vars);

    assert_eq!(snapshot.var("PATH"), Some("/system/bin"));
    assert_eq!(snapshot.var("path"), None);
    assert_eq!(snapshot.var("ANDROID_DATA"), None);
    assert_eq!(snapshot.sdk_version(), None);
}

#[cfg(unix)]
#[test]
fn test_from_os_vars_drops_non_utf8() {
    use std::ffi::{OsStr, OsString};
    use std::os::unix::ffi::OsStrExt;

    let raw = |bytes: &[u8]| OsStr::from_bytes(bytes).to_os_string();
    let snapshot = SystemSnapshot::from_os_vars([
        (OsString::from("PATH"), OsString::from("/system/bin")),
        (OsString::from("BROKEN_VALUE"), raw(b"/data/\xff")),
        (raw(b"BROKEN_\xfeNAME"), OsString::from("ok")),
    ]);

    assert_eq!(snapshot.var("PATH"), Some("/system/bin"));
    assert_eq!(snapshot.var("BROKEN_VALUE"), None);
    assert_eq!(snapshot.var("BROKEN_\u{fffd}NAME"), None);
    let expected = BTreeMap::from([("PATH".to_string(), "/system/bin".to_string())]);
    assert_eq!(snapshot, SystemSnapshot::from_vars(expected));
}

#[test]
fn test_with_sdk_version() {
    let snapshot = SystemSnapshot::default().with_sdk_version(Some(33));
    assert_eq!(snapshot.sdk_version(), Some(33));
    assert_eq!(snapshot.with_sdk_version(None).sdk_version(), None);
}

#[test]
fn test_parse_sdk_version() {
    let content = "\
# begin build properties
ro.build.id=TQ3A.230901.001
ro.build.version.sdk=34
ro.build.version.release=14
";
    assert_eq!(parse_sdk_version(content), Some(34));
    assert_eq!(parse_sdk_version("ro.build.version.sdk = 21\r\n"), Some(21));
    assert_eq!(parse_sdk_version("ro.build.version.sdk_full=34\n"), None);
    assert_eq!(parse_sdk_version("ro.build.version.sdk=\n"), None);
    assert_eq!(parse_sdk_version("ro.build.version.sdk=99999999999\n"), None);
    assert_eq!(parse_sdk_version(""), None);
}

#[test]
fn test_read_sdk_version_from_file() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("build.prop");
    std::fs::write(&path, "ro.build.version.sdk=30\n").unwrap();

    assert_eq!(read_sdk_version(&path).unwrap(), Some(30));

    let missing = read_sdk_version(&temp.path().join("missing.prop")).unwrap_err();
    assert!(matches!(missing, ShellEnvError::Fs(ref e) if matches!(**e, FsError::NotFound(_))));
}

#[test]
fn test_capture_reads_process_env_and_build_prop() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("build.prop");
    std::fs::write(&path, "ro.build.version.sdk=29\n").unwrap();

    let snapshot = SystemSnapshot::capture(&path);

    assert_eq!(snapshot.sdk_version(), Some(29));
    assert_eq!(
        snapshot.var("PATH").map(str::to_string),
        std::env::var("PATH").ok()
    );
}

#[test]
fn test_capture_without_build_prop() {
    let temp = tempfile::tempdir().unwrap();
    let snapshot = SystemSnapshot::capture(&temp.path().join("absent.prop"));
    assert_eq!(snapshot.sdk_version(), None);
}
