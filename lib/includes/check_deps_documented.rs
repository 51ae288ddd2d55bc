// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::collections::BTreeSet;
use std::fs;
use toml::{Table, Value};

const DEPENDENCY_TABLES: [&str; 3] = ["dependencies", "build-dependencies", "dev-dependencies"];

/// Names of every dependency declared in a `Cargo.toml` document.
fn manifest_deps(manifest: &str) -> BTreeSet<String> {
    let mut manifest = manifest
        .parse::<Table>()
        .expect("Cargo.toml should not be malformed");

    DEPENDENCY_TABLES
        .iter()
        .filter_map(|&key| match manifest.remove(key) {
            Some(Value::Table(deps)) => Some(deps),
            _ => None,
        })
        .flat_map(|deps| deps.into_iter().map(|(name, _)| name))
        .collect()
}

/// Names of the second-level headings of a `DEPS.md` document.
fn documented_deps(markdown: &str) -> BTreeSet<String> {
    markdown
        .lines()
        .filter_map(|line| line.strip_prefix("## "))
        .map(|name| name.trim().to_string())
        .collect()
}

#[test]
fn manifest_deps_reads_every_table() {
    let deps = manifest_deps(
        r#"
        [package]
        name = "demo"

        [dependencies]
        log = "0.4"

        [dev-dependencies]
        toml = { version = "0.9", default-features = false }
        "#,
    );
    assert_eq!(deps.into_iter().collect::<Vec<_>>(), ["log", "toml"]);
}

#[test]
fn check_deps_documented() {
    let listed = manifest_deps(&fs::read_to_string("Cargo.toml").expect("Cargo.toml must exist"));
    let documented = documented_deps(&fs::read_to_string("DEPS.md").expect("DEPS.md must exist"));

    let undocumented = listed.difference(&documented).collect::<Vec<_>>();
    let stale = documented.difference(&listed).collect::<Vec<_>>();

    assert!(
        undocumented.is_empty(),
        "some Cargo.toml dependencies are not in DEPS.md: {:?}",
        undocumented
    );
    assert!(
        stale.is_empty(),
        "DEPS.md lists dependencies no longer present in Cargo.toml: {:?}",
        stale
    );
}
