//! Line codec for the plugin channel.
//!
//! Decoding rules:
//! - Read until the first `\n`; EOF before it is a fault.
//! - The line is bounded by `MAX_REQUEST_BYTES`.
//! - Bytes after the delimiter are never consumed.

use std::io::{BufRead, Write};

use crate::error::{PolicyError, Result};

use super::types::{Request, Response};

/// Upper bound on a single request line, delimiter excluded.
pub const MAX_REQUEST_BYTES: usize = 8 * 1024 * 1024;

/// Decode one request from `input`.
pub fn decode<R: BufRead>(input: R) -> Result<Request> {
    let mut buf = Vec::new();
    // One extra byte so an over-long line is detectable.
    let mut limited = input.take(MAX_REQUEST_BYTES as u64 + 1);
    limited
        .read_until(b'\n', &mut buf)
        .map_err(|e| PolicyError::Protocol(format!("read request failed: {e}")))?;

    if buf.last() != Some(&b'\n') {
        if buf.len() > MAX_REQUEST_BYTES {
            return Err(PolicyError::Protocol(format!(
                "request exceeds {MAX_REQUEST_BYTES} bytes"
            )));
        }
        return Err(PolicyError::Protocol(
            "end of input before request delimiter".into(),
        ));
    }

    let req: Request = serde_json::from_slice(&buf)
        .map_err(|e| PolicyError::Protocol(format!("invalid request json: {e}")))?;
    tracing::debug!(
        block_height = req.block_height,
        new = req.block_info.new_attempts.len(),
        successful = req.block_info.successful_attempts.len(),
        revaulted = req.block_info.revaulted_attempts.len(),
        "request decoded"
    );
    Ok(req)
}

/// Encode `resp` as a single JSON object on `output` and flush.
pub fn encode<W: Write>(mut output: W, resp: &Response) -> Result<()> {
    // Serialize fully before touching the channel so a failure writes nothing.
    let body = serde_json::to_vec(resp)
        .map_err(|e| PolicyError::Protocol(format!("encode response failed: {e}")))?;
    output
        .write_all(&body)
        .and_then(|()| output.flush())
        .map_err(|e| PolicyError::Io(format!("write response failed: {e}")))
}
