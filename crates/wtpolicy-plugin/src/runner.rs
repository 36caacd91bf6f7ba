//! Process shell around an engine.
//!
//! decode -> load -> step -> save -> encode, strictly in that order. Any fault
//! stops the pipeline before the response is written, so the host never
//! mistakes a failed invocation for "nothing to revault".

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use wtpolicy_core::engine::PolicyEngine;
use wtpolicy_core::error::Result;
use wtpolicy_core::protocol::{self, Response};

use crate::store::StateStore;

/// Serve one request from `input`, writing the decision to `output`.
pub fn run<E, S, R, W>(engine: &E, store: &S, input: R, output: W) -> Result<Response>
where
    E: PolicyEngine,
    S: StateStore,
    R: BufRead,
    W: Write,
{
    let req = protocol::decode(input)?;
    let state = store.load(|| engine.initial_state(&req))?;
    let (state, resp) = engine.step(state, &req);
    store.save(&state)?;

    tracing::debug!(
        policy = engine.name(),
        block_height = req.block_height,
        revault = resp.revault.len(),
        "decision computed"
    );
    protocol::encode(output, &resp)?;
    Ok(resp)
}

/// `run` over the process's stdin/stdout.
pub fn run_stdio<E: PolicyEngine, S: StateStore>(engine: &E, store: &S) -> Result<Response> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run(engine, store, stdin.lock(), stdout.lock())
}

/// Map an invocation result to the process exit status, logging faults.
pub fn exit_code(res: Result<Response>) -> ExitCode {
    match res {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(kind = e.kind().as_str(), error = %e, "invocation failed");
            ExitCode::from(e.kind().exit_code())
        }
    }
}
