//! Change classification and dispatch

use crate::domain::clipboard::{
    CapturedPayload, ClipboardContentType, ClipboardFormat, ClipboardImage, FileList,
    ObservableFormats, SourceApplication,
};

use super::ports::{
    ClipboardChangedEvent, ClipboardError, ClipboardReader, EventSink, ForegroundInspector,
};
use super::resolver::ForegroundResolver;

/// Result of handling one clipboard change
#[derive(Debug, Clone)]
pub enum DispatchOutcome {
    /// Monitoring is not active; the change was ignored
    Inactive,
    /// No observed content type was present
    NoMatch,
    /// An event was raised
    Emitted(ClipboardContentType),
    /// The clipboard advertised a type but its data could not be read
    ExtractionFailed {
        content_type: ClipboardContentType,
        error: ClipboardError,
    },
}

impl DispatchOutcome {
    pub fn is_emitted(&self) -> bool {
        matches!(self, Self::Emitted(_))
    }
}

/// Most recent capture, per content type
#[derive(Debug, Clone, Default)]
pub struct LastCapture {
    pub content_type: ClipboardContentType,
    pub files: Vec<String>,
    pub primary_file: Option<String>,
    pub text: Option<String>,
    pub image: Option<ClipboardImage>,
    pub source: Option<SourceApplication>,
}

impl LastCapture {
    fn record(&mut self, event: &ClipboardChangedEvent) {
        match &event.payload {
            CapturedPayload::Files(files) => {
                self.files = files.paths().to_vec();
                self.primary_file = Some(files.primary().to_string());
            }
            CapturedPayload::Text(text) => self.text = Some(text.clone()),
            CapturedPayload::Image(image) => self.image = Some(image.clone()),
        }
        self.content_type = event.content_type;
        self.source = Some(event.source.clone());
    }
}

/// Pick the first observed content type present on the clipboard and extract it.
///
/// Checks files, then text, then images. `Ok(None)` when nothing matches.
pub fn classify<R>(
    reader: &R,
    formats: ObservableFormats,
) -> Result<Option<CapturedPayload>, (ClipboardContentType, ClipboardError)>
where
    R: ClipboardReader,
{
    for content_type in formats.enabled() {
        let Some(format) = content_type.format() else {
            continue;
        };
        if !reader.has_format(format) {
            continue;
        }
        return extract(reader, content_type)
            .map(Some)
            .map_err(|e| (content_type, e));
    }
    Ok(None)
}

fn extract<R>(
    reader: &R,
    content_type: ClipboardContentType,
) -> Result<CapturedPayload, ClipboardError>
where
    R: ClipboardReader,
{
    match content_type {
        ClipboardContentType::Files => {
            let paths = reader.read_files()?;
            FileList::new(paths)
                .map(CapturedPayload::Files)
                .ok_or_else(|| ClipboardError::ExtractionFailed {
                    format: ClipboardFormat::FileDrop,
                    message: "file drop list is empty".to_string(),
                })
        }
        ClipboardContentType::Text => reader.read_text().map(CapturedPayload::Text),
        ClipboardContentType::Image => reader.read_image().map(CapturedPayload::Image),
        ClipboardContentType::None => Err(ClipboardError::ClipboardUnavailable(
            "no representation for content type none".to_string(),
        )),
    }
}

/// Turns clipboard changes into events
pub struct ChangeDispatcher<R, F>
where
    R: ClipboardReader,
    F: ForegroundInspector,
{
    reader: R,
    resolver: ForegroundResolver<F>,
    last: LastCapture,
}

impl<R, F> ChangeDispatcher<R, F>
where
    R: ClipboardReader,
    F: ForegroundInspector,
{
    pub fn new(reader: R, inspector: F) -> Self {
        Self {
            reader,
            resolver: ForegroundResolver::new(inspector),
            last: LastCapture::default(),
        }
    }

    pub fn last_capture(&self) -> &LastCapture {
        &self.last
    }

    pub fn reader(&self) -> &R {
        &self.reader
    }

    pub fn resolver(&self) -> &ForegroundResolver<F> {
        &self.resolver
    }

    /// Classify the current clipboard and publish at most one event
    pub fn dispatch<S>(&mut self, formats: ObservableFormats, sink: &mut S) -> DispatchOutcome
    where
        S: EventSink + ?Sized,
    {
        let payload = match classify(&self.reader, formats) {
            Ok(Some(payload)) => payload,
            Ok(None) => return DispatchOutcome::NoMatch,
            Err((content_type, error)) => {
                log::warn!("Skipping clipboard change: {}", error);
                return DispatchOutcome::ExtractionFailed { content_type, error };
            }
        };

        let source = self.resolver.resolve().into_source();
        let event = ClipboardChangedEvent::new(payload, source);
        self.last.record(&event);

        log::info!(
            "Captured {} from {} ({})",
            event.content_type,
            event.source.label(),
            event.payload.summary()
        );
        sink.publish(&event);

        DispatchOutcome::Emitted(event.content_type)
    }
}
