//! Foreground-window resolution use case

use crate::domain::clipboard::{file_name_of, file_stem_of, SourceApplication};

use super::ports::{ForegroundInspector, LookupError};

/// Title buffer size in UTF-16 code units, terminator included
pub const TITLE_BUFFER_CAPACITY: usize = 256;

/// Result of resolving the foreground application.
///
/// `source` is always usable; `failures` lists the lookups that fell
/// back to defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceResolution {
    pub source: SourceApplication,
    pub failures: Vec<LookupError>,
}

impl SourceResolution {
    /// True when every lookup succeeded
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn into_source(self) -> SourceApplication {
        self.source
    }
}

/// Resolves the application behind the current foreground window
pub struct ForegroundResolver<F>
where
    F: ForegroundInspector,
{
    inspector: F,
}

impl<F> ForegroundResolver<F>
where
    F: ForegroundInspector,
{
    pub fn new(inspector: F) -> Self {
        Self { inspector }
    }

    pub fn inspector(&self) -> &F {
        &self.inspector
    }

    /// Snapshot the foreground window's owner. Never fails.
    pub fn resolve(&self) -> SourceResolution {
        let mut resolution = SourceResolution::default();

        let window = match self.inspector.foreground_window() {
            Ok(window) => window,
            Err(e) => {
                resolution.failures.push(e);
                return resolution;
            }
        };
        resolution.source.handle = window;
        resolution.source.legacy_handle = window.legacy_id();

        match self.inspector.window_process_id(window) {
            Ok(pid) => {
                resolution.source.process_id = pid;
                match self.inspector.process_image_path(pid) {
                    Ok(path) => {
                        resolution.source.process_name = file_stem_of(&path).to_string();
                        resolution.source.executable_name = file_name_of(&path).to_string();
                        resolution.source.executable_path = path;
                    }
                    Err(e) => resolution.failures.push(e),
                }
            }
            Err(e) => resolution.failures.push(e),
        }

        match self.inspector.window_title(window, TITLE_BUFFER_CAPACITY) {
            Ok(title) => {
                resolution.source.window_title = truncate_utf16(&title, TITLE_BUFFER_CAPACITY - 1)
            }
            Err(e) => resolution.failures.push(e),
        }

        if !resolution.is_complete() {
            log::debug!(
                "Foreground resolution incomplete: {}",
                resolution
                    .failures
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("; ")
            );
        }

        resolution
    }
}

/// Cut `text` to at most `max_units` UTF-16 code units without splitting a character
fn truncate_utf16(text: &str, max_units: usize) -> String {
    let mut units = 0;
    let mut end = 0;
    for (idx, ch) in text.char_indices() {
        units += ch.len_utf16();
        if units > max_units {
            return text[..idx].to_string();
        }
        end = idx + ch.len_utf8();
    }
    text[..end].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::clipboard::WindowHandle;

    #[derive(Default)]
    struct MockInspector {
        window: Option<isize>,
        pid: Option<u32>,
        path: Option<String>,
        title: Option<String>,
    }

    impl ForegroundInspector for MockInspector {
        fn foreground_window(&self) -> Result<WindowHandle, LookupError> {
            self.window
                .map(WindowHandle::new)
                .ok_or(LookupError::NoForegroundWindow)
        }

        fn window_process_id(&self, window: WindowHandle) -> Result<u32, LookupError> {
            self.pid.ok_or(LookupError::NoProcess(window))
        }

        fn process_image_path(&self, pid: u32) -> Result<String, LookupError> {
            self.path
                .clone()
                .ok_or(LookupError::ProcessAccess { pid, code: 5 })
        }

        fn window_title(
            &self,
            window: WindowHandle,
            _capacity: usize,
        ) -> Result<String, LookupError> {
            self.title.clone().ok_or(LookupError::NoTitle(window))
        }
    }

    fn notepad() -> MockInspector {
        MockInspector {
            window: Some(0x1234),
            pid: Some(4242),
            path: Some(r"C:\Windows\System32\notepad.exe".to_string()),
            title: Some("notes.txt - Notepad".to_string()),
        }
    }

    #[test]
    fn resolves_all_fields() {
        let resolution = ForegroundResolver::new(notepad()).resolve();
        assert!(resolution.is_complete());

        let source = resolution.source;
        assert_eq!(source.handle, WindowHandle::new(0x1234));
        assert_eq!(source.legacy_handle, 0x1234);
        assert_eq!(source.process_id, 4242);
        assert_eq!(source.process_name, "notepad");
        assert_eq!(source.executable_name, "notepad.exe");
        assert_eq!(source.executable_path, r"C:\Windows\System32\notepad.exe");
        assert_eq!(source.window_title, "notes.txt - Notepad");
    }

    #[test]
    fn no_foreground_window_yields_defaults() {
        let resolution = ForegroundResolver::new(MockInspector::default()).resolve();
        assert_eq!(resolution.source, SourceApplication::default());
        assert_eq!(resolution.failures, vec![LookupError::NoForegroundWindow]);
    }

    #[test]
    fn process_access_failure_keeps_handle_and_title() {
        let inspector = MockInspector {
            path: None,
            ..notepad()
        };
        let resolution = ForegroundResolver::new(inspector).resolve();

        assert!(!resolution.is_complete());
        assert_eq!(resolution.source.process_id, 4242);
        assert!(resolution.source.executable_name.is_empty());
        assert!(resolution.source.executable_path.is_empty());
        assert_eq!(resolution.source.window_title, "notes.txt - Notepad");
        assert_eq!(
            resolution.failures,
            vec![LookupError::ProcessAccess { pid: 4242, code: 5 }]
        );
    }

    #[test]
    fn missing_process_and_title_collects_both_failures() {
        let inspector = MockInspector {
            window: Some(9),
            ..Default::default()
        };
        let resolution = ForegroundResolver::new(inspector).resolve();
        assert_eq!(resolution.failures.len(), 2);
        assert_eq!(resolution.source.handle, WindowHandle::new(9));
        assert_eq!(resolution.source.process_id, 0);
        assert!(resolution.source.window_title.is_empty());
    }

    #[test]
    fn long_titles_are_truncated() {
        let inspector = MockInspector {
            title: Some("x".repeat(400)),
            ..notepad()
        };
        let source = ForegroundResolver::new(inspector).resolve().into_source();
        assert_eq!(source.window_title.len(), TITLE_BUFFER_CAPACITY - 1);
    }

    #[test]
    fn truncate_never_splits_surrogate_pairs() {
        // Each emoji is two UTF-16 units
        let title = "😀".repeat(3);
        assert_eq!(truncate_utf16(&title, 5), "😀😀");
        assert_eq!(truncate_utf16(&title, 6), title);
        assert_eq!(truncate_utf16("", 10), "");
    }
}
