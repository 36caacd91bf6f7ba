//! Watchtower plugin: maximum total value being unvaulted at once.
//!
//! Reads one request on stdin, writes one response on stdout. Config comes
//! from the file named by `WTPOLICY_CONFIG` (section `in_flight`).

use std::process::ExitCode;

use wtpolicy_plugin::{config, obs, runner, store::FileStore};

fn main() -> ExitCode {
    obs::init_logging();

    let res = config::load_from_env().and_then(|cfg| {
        let section = &cfg.in_flight;
        let store = FileStore::new(&section.datadir);
        runner::run_stdio(&section.engine(), &store)
    });
    runner::exit_code(res)
}
