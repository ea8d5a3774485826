// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use log::error;
use std::{env, io};

use pkimage::cli::{args::Config, pipeline};
use pkimage::misc::logger;

// The exit status is 0 whatever happens, failures are only printed.
fn main() {
    logger::init();
    let config = Config::from_os_args(env::args_os().skip(1));
    let stdout = io::stdout();
    if let Err(err) = pipeline::run(&config, &mut stdout.lock()) {
        error!("{}", err);
    }
}
