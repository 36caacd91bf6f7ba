//! Watchtower plugin: maximum value unvaulted per rolling block window.
//!
//! Reads one request on stdin, writes one response on stdout. Config comes
//! from the file named by `WTPOLICY_CONFIG` (section `per_window`).

use std::process::ExitCode;

use wtpolicy_plugin::{config, obs, runner, store::FileStore};

fn main() -> ExitCode {
    obs::init_logging();

    let res = config::load_from_env().and_then(|cfg| {
        let section = &cfg.per_window;
        let store = FileStore::new(&section.datadir);
        runner::run_stdio(&section.engine(), &store)
    });
    runner::exit_code(res)
}
