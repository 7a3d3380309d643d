//! Live elapsed-time display for `talogo log`, stopped with Ctrl+C.

use crate::errors::{AppError, AppResult};
use crate::utils::formatting::{bold, hhmmss};
use chrono::{DateTime, Local};
use std::io::{self, Write};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

/// Redraw and Ctrl+C polling interval.
const POLL: Duration = Duration::from_millis(200);

/// Show the titles and a ticking `HH:MM:SS` counter until Ctrl+C.
/// Returns the instant the timer started; the caller records the session.
pub fn run_until_interrupt(titles: &[String]) -> AppResult<DateTime<Local>> {
    let stop = Arc::new(AtomicBool::new(false));
    {
        let stop = Arc::clone(&stop);
        ctrlc::set_handler(move || stop.store(true, Ordering::SeqCst))
            .map_err(|e| AppError::Other(format!("cannot install Ctrl+C handler: {e}")))?;
    }

    let started = Local::now();

    for (i, title) in titles.iter().enumerate() {
        println!("Title {}: {}", i + 1, bold(title));
    }

    let mut stdout = io::stdout();
    while !stop.load(Ordering::SeqCst) {
        let elapsed = Local::now() - started;
        write!(stdout, "\rTimer: {}", hhmmss(elapsed))?;
        stdout.flush()?;
        thread::sleep(POLL);
    }
    writeln!(stdout)?;

    Ok(started)
}
