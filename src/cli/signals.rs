//! Shutdown signal handling

use std::io;

use colored::Colorize;
use tokio::signal::windows::{ctrl_break, ctrl_close};

/// Wait until the console asks us to stop (Ctrl+C, Ctrl+Break or window close)
pub async fn wait_for_shutdown() -> io::Result<()> {
    let mut on_break = ctrl_break()?;
    let mut on_close = ctrl_close()?;

    let source = tokio::select! {
        res = tokio::signal::ctrl_c() => {
            res?;
            "Ctrl+C"
        }
        _ = on_break.recv() => "Ctrl+Break",
        _ = on_close.recv() => "console close",
    };

    eprintln!("{} Received {} (shutdown)", "↓".cyan(), source);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn shutdown_waits_for_a_signal() {
        let waited = tokio::time::timeout(Duration::from_millis(50), wait_for_shutdown()).await;
        assert!(waited.is_err());
    }
}
