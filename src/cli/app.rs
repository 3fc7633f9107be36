//! Watch mode runner

use std::env;
use std::process::ExitCode;

use tokio::sync::oneshot;

use crate::application::ports::{
    ClipboardReader, ConfigStore, EventSink, ForegroundInspector, ViewerChain,
};
use crate::application::{ClipboardMonitor, MonitorError};
use crate::domain::config::AppConfig;
use crate::domain::error::InvalidOutputFormatError;
use crate::infrastructure::XdgConfigStore;

use super::args::WatchOptions;
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Environment override for the `output` setting
pub const OUTPUT_ENV: &str = "CLIPWATCH_OUTPUT";

/// Load and merge configuration from file, env, and CLI
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = store.load().await.unwrap_or_else(|e| {
        log::warn!("Ignoring config file {}: {}", store.path().display(), e);
        AppConfig::empty()
    });

    let env_config = AppConfig {
        output: env::var(OUTPUT_ENV).ok().filter(|s| !s.is_empty()),
        ..Default::default()
    };

    // Merge: defaults < file < env < cli
    AppConfig::defaults()
        .merge(file_config)
        .merge(env_config)
        .merge(cli_config)
}

/// Turn a merged config into watch options
pub fn watch_options(config: &AppConfig) -> Result<WatchOptions, InvalidOutputFormatError> {
    Ok(WatchOptions {
        formats: config.observable_formats(),
        output: config.output_or_default()?,
        start_paused: config.start_paused_or_default(),
    })
}

/// Start the monitor, then hand `token` to whoever waits on `ready`.
///
/// `ready` is dropped unsent when the chain cannot be joined.
pub fn start_and_signal<R, F, C, S, T>(
    monitor: &mut ClipboardMonitor<R, F, C, S>,
    start_paused: bool,
    ready: oneshot::Sender<T>,
    token: T,
) -> Result<(), MonitorError>
where
    R: ClipboardReader,
    F: ForegroundInspector,
    C: ViewerChain,
    S: EventSink,
{
    monitor.start_monitoring()?;
    if start_paused {
        monitor.pause_monitoring()?;
    }
    if ready.send(token).is_err() {
        log::debug!("Watch runner went away before monitoring started");
    }
    Ok(())
}

/// Run the monitor until a shutdown signal arrives
#[cfg(windows)]
pub async fn run_watch(options: WatchOptions) -> ExitCode {
    let presenter = Presenter::new();

    if !options.formats.any() {
        presenter.warn("Every content type is disabled; no changes will be reported");
    }

    let (ready_tx, ready_rx) = oneshot::channel();
    let mut surface_task =
        tokio::task::spawn_blocking(move || watch::run_surface(options, ready_tx));

    // No closer arrives when the surface cannot be created or the chain cannot be joined
    let closer = match ready_rx.await {
        Ok(closer) => Some(closer),
        Err(_) => None,
    };

    if closer.is_some() {
        presenter.monitor_status(if options.start_paused { "paused" } else { "monitoring" });
        presenter.info("Press Ctrl+C to stop");
    }

    let finished = match closer {
        None => None,
        Some(closer) => tokio::select! {
            res = super::signals::wait_for_shutdown() => {
                if let Err(e) = res {
                    presenter.warn(&format!("Signal handler failed: {}", e));
                }
                if !closer.close() {
                    log::debug!("Surface already closed");
                }
                None
            }
            joined = &mut surface_task => Some(joined),
        },
    };

    let joined = match finished {
        Some(joined) => joined,
        None => surface_task.await,
    };

    match joined {
        Ok(Ok(())) => {
            presenter.monitor_status("stopped");
            ExitCode::from(EXIT_SUCCESS)
        }
        Ok(Err(e)) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
        Err(e) => {
            presenter.error(&format!("Surface thread failed: {}", e));
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Clipboard monitoring needs the Windows viewer chain
#[cfg(not(windows))]
pub async fn run_watch(_options: WatchOptions) -> ExitCode {
    Presenter::new().error(
        "Clipboard monitoring is only available on Windows; 'clipwatch config' works everywhere",
    );
    ExitCode::from(EXIT_ERROR)
}

#[cfg(windows)]
mod watch {
    use thiserror::Error;
    use tokio::sync::oneshot;

    use crate::application::{ClipboardMonitor, MonitorError};
    use crate::cli::app::start_and_signal;
    use crate::cli::args::WatchOptions;
    use crate::cli::presenter::EventPrinter;
    use crate::infrastructure::{
        SurfaceCloser, SurfaceError, SurfaceWindow, Win32ClipboardReader, Win32ForegroundInspector,
        Win32ViewerChain,
    };

    #[derive(Debug, Error)]
    pub enum WatchError {
        #[error(transparent)]
        Surface(#[from] SurfaceError),

        #[error(transparent)]
        Monitor(#[from] MonitorError),
    }

    /// Create the surface, join the chain and pump messages until closed.
    ///
    /// The closer is sent once the monitor is in the chain.
    ///
    /// Runs on its own thread; the surface never leaves it.
    pub fn run_surface(
        options: WatchOptions,
        ready: oneshot::Sender<SurfaceCloser>,
    ) -> Result<(), WatchError> {
        let surface = SurfaceWindow::create()?;
        let monitor = ClipboardMonitor::new(
            surface.handle(),
            Win32ClipboardReader::new(),
            Win32ForegroundInspector::new(),
            Win32ViewerChain::new(),
            EventPrinter::new(options.output),
            options.formats,
        );

        let closer = surface.closer();
        surface.run(monitor, move |monitor| {
            start_and_signal(monitor, options.start_paused, ready, closer)?;
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{ChainError, ClipboardChangedEvent, ClipboardError, LookupError};
    use crate::domain::clipboard::{
        ClipboardFormat, ClipboardImage, ObservableFormats, WindowHandle,
    };
    use crate::domain::config::OutputFormat;
    use crate::domain::monitor::MonitorState;
    use tokio::sync::oneshot::error::TryRecvError;

    struct EmptyClipboard;

    impl ClipboardReader for EmptyClipboard {
        fn has_format(&self, _format: ClipboardFormat) -> bool {
            false
        }

        fn read_files(&self) -> Result<Vec<String>, ClipboardError> {
            Err(ClipboardError::FormatMissing(ClipboardFormat::FileDrop))
        }

        fn read_text(&self) -> Result<String, ClipboardError> {
            Err(ClipboardError::FormatMissing(ClipboardFormat::Text))
        }

        fn read_image(&self) -> Result<ClipboardImage, ClipboardError> {
            Err(ClipboardError::FormatMissing(ClipboardFormat::Bitmap))
        }
    }

    struct NoForeground;

    impl ForegroundInspector for NoForeground {
        fn foreground_window(&self) -> Result<WindowHandle, LookupError> {
            Err(LookupError::NoForegroundWindow)
        }

        fn window_process_id(&self, window: WindowHandle) -> Result<u32, LookupError> {
            Err(LookupError::NoProcess(window))
        }

        fn process_image_path(&self, pid: u32) -> Result<String, LookupError> {
            Err(LookupError::ImagePath { pid, code: 5 })
        }

        fn window_title(
            &self,
            window: WindowHandle,
            _capacity: usize,
        ) -> Result<String, LookupError> {
            Err(LookupError::NoTitle(window))
        }
    }

    struct Chain {
        accept: bool,
    }

    impl ViewerChain for Chain {
        fn join(&self, _surface: WindowHandle) -> Result<Option<WindowHandle>, ChainError> {
            if self.accept {
                Ok(None)
            } else {
                Err(ChainError::JoinFailed(5))
            }
        }

        fn leave(
            &self,
            _surface: WindowHandle,
            _next: Option<WindowHandle>,
        ) -> Result<(), ChainError> {
            Ok(())
        }

        fn relay_chain_changed(&self, _: WindowHandle, _: WindowHandle, _: Option<WindowHandle>) {}

        fn relay_clipboard_changed(&self, _target: WindowHandle) {}
    }

    type Discard = fn(&ClipboardChangedEvent);
    type TestMonitor = ClipboardMonitor<EmptyClipboard, NoForeground, Chain, Discard>;

    fn discard(_: &ClipboardChangedEvent) {}

    fn test_monitor(accept: bool) -> TestMonitor {
        ClipboardMonitor::new(
            WindowHandle::new(1),
            EmptyClipboard,
            NoForeground,
            Chain { accept },
            discard as Discard,
            ObservableFormats::all(),
        )
    }

    #[test]
    fn closer_sent_after_chain_joined() {
        let mut monitor = test_monitor(true);
        let (tx, mut rx) = oneshot::channel();

        start_and_signal(&mut monitor, true, tx, 7u8).unwrap();

        assert_eq!(monitor.state(), MonitorState::Paused);
        assert_eq!(rx.try_recv(), Ok(7));
    }

    #[test]
    fn closer_withheld_when_join_fails() {
        let mut monitor = test_monitor(false);
        let (tx, mut rx) = oneshot::channel::<u8>();

        let err = start_and_signal(&mut monitor, false, tx, 7).unwrap_err();

        assert!(matches!(err, MonitorError::Chain(ChainError::JoinFailed(5))));
        assert_eq!(monitor.state(), MonitorState::Stopped);
        assert_eq!(rx.try_recv(), Err(TryRecvError::Closed));
    }

    #[test]
    fn watch_options_from_defaults() {
        let options = watch_options(&AppConfig::defaults()).unwrap();
        assert!(options.formats.files && options.formats.text && options.formats.images);
        assert_eq!(options.output, OutputFormat::Text);
        assert!(!options.start_paused);
    }

    #[test]
    fn watch_options_apply_overrides() {
        let config = AppConfig::defaults().merge(AppConfig {
            observe_files: Some(false),
            output: Some("json".to_string()),
            start_paused: Some(true),
            ..Default::default()
        });
        let options = watch_options(&config).unwrap();
        assert!(!options.formats.files);
        assert!(options.formats.text);
        assert_eq!(options.output, OutputFormat::Json);
        assert!(options.start_paused);
    }

    #[test]
    fn watch_options_reject_bad_output() {
        let config = AppConfig {
            output: Some("yaml".to_string()),
            ..AppConfig::defaults()
        };
        let err = watch_options(&config).unwrap_err();
        assert!(err.to_string().contains("yaml"));
    }
}
