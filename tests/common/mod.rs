// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

#![allow(dead_code)]

pub mod synthetic_image;

use pkimage::cli::{args::Config, pipeline};
use std::path::Path;

/// Run the pipeline on `tokens`, returning its outcome and printed text.
pub fn run(tokens: &[String]) -> (pipeline::Outcome, String) {
    let _ = env_logger::builder().is_test(true).try_init();
    let config = Config::from_args(tokens);
    let mut out = Vec::new();
    let outcome = pipeline::run(&config, &mut out).expect("writing to a Vec cannot fail");
    (outcome, String::from_utf8(out).expect("messages are utf8"))
}

/// `key=path` token.
pub fn arg(key: &str, path: &Path) -> String {
    format!("{}={}", key, path.display())
}

/// Number of entries in a directory.
pub fn count_files(dir: &Path) -> usize {
    std::fs::read_dir(dir).map(|entries| entries.count()).unwrap_or(0)
}
