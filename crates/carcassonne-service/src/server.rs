//! Line-oriented request loop.

use crate::protocol::{Request, Response};
use crate::service::GameService;
use carcassonne_core::GameRepository;
use std::io::{BufRead, Write};
use tracing::{info, warn};

/// Read one JSON request per line from `input` and write one JSON response
/// per line to `output`, until `input` is exhausted.
///
/// Blank lines are skipped; lines that do not parse get an error response.
pub fn run_server<R, I, O>(service: &GameService<R>, input: I, mut output: O) -> anyhow::Result<()>
where
    R: GameRepository,
    I: BufRead,
    O: Write,
{
    info!("Carcassonne service ready");

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<Request>(&line) {
            Ok(request) => service.handle(request),
            Err(e) => {
                warn!("Invalid message: {}", e);
                Response::Error {
                    message: format!("Invalid request: {e}"),
                }
            }
        };

        serde_json::to_writer(&mut output, &response)?;
        writeln!(output)?;
        output.flush()?;
    }

    info!("Input closed, shutting down");
    Ok(())
}
