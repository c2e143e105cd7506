use std::io::{BufRead, Write};

use anyhow::Result;

use crate::session::{Response, Session};
use crate::ui;

/// Read commands line by line until `bye` or end of input.
///
/// Command failures are written to `output` and the loop carries on; only a
/// failure to read input or write output ends it early.
pub fn run<R: BufRead, W: Write>(session: &mut Session, input: R, mut output: W) -> Result<()> {
    output.write_all(ui::welcome().as_bytes())?;

    for line in input.lines() {
        let line = line?;
        match session.execute(&line) {
            Ok(response) => {
                output.write_all(ui::render(&response).as_bytes())?;
                if response == Response::Bye {
                    break;
                }
            }
            Err(e) => {
                tracing::debug!("Command {:?} failed: {}", line, e);
                output.write_all(ui::error(&e).as_bytes())?;
            }
        }
        output.flush()?;
    }

    output.flush()?;
    Ok(())
}
