//! One streamed GET of the sheet.

use super::sink::ArtifactWriter;
use crate::retry::FetchError;
use std::cell::{Cell, RefCell};
use std::io;
use std::path::Path;
use std::str;
use std::time::Duration;

fn is_success(code: u32) -> bool {
    (200..300).contains(&code)
}

/// Status code from an HTTP status line (`HTTP/1.1 200 OK`, `HTTP/2 302`).
fn status_from_line(line: &str) -> Option<u32> {
    let rest = line.strip_prefix("HTTP/")?;
    rest.split_whitespace().nth(1)?.parse().ok()
}

/// Performs one GET of `url`, streaming a 2xx body into `dest` (truncated first).
/// Returns the number of body bytes written.
pub(super) fn get_once(
    url: &str,
    dest: &Path,
    chunk_size: usize,
    connect_timeout: Duration,
) -> Result<u64, FetchError> {
    // Status of the most recent response; redirects produce several header blocks.
    let status = Cell::new(0u32);
    let sink: RefCell<Option<ArtifactWriter>> = RefCell::new(None);
    let storage_err: RefCell<Option<io::Error>> = RefCell::new(None);

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.get(true)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.buffer_size(chunk_size)?;
    easy.connect_timeout(connect_timeout)?;
    easy.low_speed_limit(1)?;
    easy.low_speed_time(Duration::from_secs(60))?;

    let performed = {
        let mut transfer = easy.transfer();
        transfer.header_function(|data| {
            if let Some(code) = str::from_utf8(data).ok().and_then(status_from_line) {
                status.set(code);
            }
            true
        })?;
        transfer.write_function(|data| {
            if !is_success(status.get()) {
                // Error page body: drain it, keep the artifact untouched.
                return Ok(data.len());
            }
            let mut slot = sink.borrow_mut();
            if slot.is_none() {
                match ArtifactWriter::create(dest, chunk_size) {
                    Ok(w) => *slot = Some(w),
                    Err(e) => {
                        *storage_err.borrow_mut() = Some(e);
                        return Ok(0); // abort transfer
                    }
                }
            }
            let written = slot.as_mut().map(|w| w.write_chunk(data));
            match written {
                Some(Err(e)) => {
                    tracing::warn!("artifact write failed: {}", e);
                    *storage_err.borrow_mut() = Some(e);
                    Ok(0)
                }
                _ => Ok(data.len()),
            }
        })?;
        transfer.perform()
    };

    if let Some(e) = storage_err.into_inner() {
        return Err(FetchError::Storage(e));
    }
    performed?;

    let code = easy.response_code()?;
    if !is_success(code) {
        return Err(FetchError::Http(code));
    }

    let writer = match sink.into_inner() {
        Some(w) => w,
        // Empty 2xx body still overwrites the artifact.
        None => ArtifactWriter::create(dest, chunk_size).map_err(FetchError::Storage)?,
    };
    writer.finish().map_err(FetchError::Storage)
}
