use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::thread;

use parking_lot::Mutex;

use screen_record_core::{
    CaptureController, CaptureSource, ChunkSink, CodecDescriptor, FileSink, LiveStream,
    MediaStreamProvider, RecordError, SaveOutcome, SourceEnumerator, SourceKind, StreamConstraints,
};

struct DesktopFixture;

impl SourceEnumerator for DesktopFixture {
    fn list(&self, kinds: &[SourceKind]) -> Result<Vec<CaptureSource>, RecordError> {
        let all = vec![
            CaptureSource::new("window:17", "Browser", SourceKind::Window),
            CaptureSource::new("screen:0", "Entire screen", SourceKind::Screen),
        ];
        Ok(all.into_iter().filter(|s| kinds.contains(&s.kind)).collect())
    }
}

/// Provider whose streams replay scripted chunks from an encoder thread.
struct ScriptedProvider {
    chunks: Vec<Vec<u8>>,
}

impl MediaStreamProvider for ScriptedProvider {
    fn acquire(&self, constraints: &StreamConstraints) -> Result<Box<dyn LiveStream>, RecordError> {
        assert!(!constraints.audio);
        Ok(Box::new(ScriptedStream {
            id: format!("stream-{}", constraints.video.source_id),
            chunks: self.chunks.clone(),
            encoder: None,
        }))
    }
}

struct ScriptedStream {
    id: String,
    chunks: Vec<Vec<u8>>,
    encoder: Option<thread::JoinHandle<()>>,
}

impl LiveStream for ScriptedStream {
    fn id(&self) -> &str {
        &self.id
    }

    fn start(&mut self, _codec: &CodecDescriptor, sink: ChunkSink) -> Result<(), RecordError> {
        let chunks = self.chunks.clone();
        let handle = thread::Builder::new()
            .name("scripted-encoder".into())
            .spawn(move || {
                for chunk in &chunks {
                    sink.deliver(chunk);
                }
            })
            .map_err(|e| RecordError::StreamAcquisition(format!("failed to spawn encoder: {}", e)))?;
        self.encoder = Some(handle);
        Ok(())
    }

    fn stop(&mut self) -> Result<(), RecordError> {
        if let Some(handle) = self.encoder.take() {
            let _ = handle.join();
        }
        Ok(())
    }
}

fn temp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("screen_record_e2e_{}_{}", name, uuid::Uuid::new_v4()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn scripted_chunks() -> Vec<Vec<u8>> {
    vec![vec![0x1A; 10], vec![0x45; 20], vec![0xDF; 15]]
}

#[test]
fn record_screen_and_save() {
    let dir = temp_dir("save");
    let out = dir.join("out.webm");
    let chosen = out.clone();
    let prompted = Arc::new(Mutex::new(None));
    let prompted_in_dialog = Arc::clone(&prompted);

    let mut controller = CaptureController::new(
        DesktopFixture,
        ScriptedProvider {
            chunks: scripted_chunks(),
        },
        FileSink::with_dialog(move |options| {
            *prompted_in_dialog.lock() = Some(options.default_path.clone());
            Some(chosen.clone())
        }),
    );

    let sources = controller.enumerate_sources().unwrap();
    let screen = sources
        .iter()
        .find(|s| s.id == "screen:0")
        .cloned()
        .unwrap();
    assert_eq!(screen.name, "Entire screen");
    assert_eq!(screen.kind, SourceKind::Screen);

    controller.select_source(&screen).unwrap();
    controller.start().unwrap();
    let outcome = controller.stop().unwrap();

    let expected: Vec<u8> = scripted_chunks().concat();
    let written = fs::read(&out).unwrap();
    assert_eq!(written.len(), 45);
    assert_eq!(written, expected);

    match outcome {
        SaveOutcome::Saved(result) => {
            assert_eq!(result.file_path, out);
            assert_eq!(result.byte_len, 45);
            assert_eq!(result.chunk_count, 3);
        }
        SaveOutcome::Cancelled => panic!("expected a saved recording"),
    }

    let suggested = prompted.lock().clone().unwrap();
    assert!(suggested.starts_with("vid-") && suggested.ends_with(".webm"));

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn cancelled_save_writes_nothing() {
    let dir = temp_dir("cancel");

    let mut controller = CaptureController::new(
        DesktopFixture,
        ScriptedProvider {
            chunks: scripted_chunks(),
        },
        FileSink::with_dialog(|_| None),
    );

    let screen = controller
        .enumerate_sources()
        .unwrap()
        .into_iter()
        .find(|s| s.is_screen())
        .unwrap();
    controller.select_source(&screen).unwrap();
    controller.start().unwrap();

    let outcome = controller.stop().unwrap();
    assert!(outcome.is_cancelled());
    assert!(controller.state().is_empty());
    assert_eq!(fs::read_dir(&dir).unwrap().count(), 0);

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn directory_sink_uses_suggested_name() {
    let dir = temp_dir("directory");

    let mut controller = CaptureController::new(
        DesktopFixture,
        ScriptedProvider {
            chunks: vec![vec![1, 2, 3]],
        },
        FileSink::in_directory(&dir),
    );

    let window = CaptureSource::new("window:17", "Browser", SourceKind::Window);
    controller.select_source(&window).unwrap();
    controller.start().unwrap();
    let outcome = controller.stop().unwrap();

    let result = outcome.result().unwrap();
    assert_eq!(result.file_path.parent(), Some(dir.as_path()));
    let name = result.file_path.file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.starts_with("vid-") && name.ends_with(".webm"));
    assert_eq!(fs::read(&result.file_path).unwrap(), vec![1, 2, 3]);

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn second_take_needs_a_new_selection() {
    let dir = temp_dir("retake");

    let mut controller = CaptureController::new(
        DesktopFixture,
        ScriptedProvider {
            chunks: vec![vec![5; 4]],
        },
        FileSink::in_directory(&dir),
    );

    let screen = CaptureSource::new("screen:0", "Entire screen", SourceKind::Screen);
    controller.select_source(&screen).unwrap();
    controller.start().unwrap();
    controller.stop().unwrap();

    assert!(controller.start().unwrap_err().is_invalid_transition());

    controller.select_source(&screen).unwrap();
    controller.start().unwrap();
    let second = controller.stop().unwrap();
    // Takes never accumulate into one file.
    assert_eq!(second.result().unwrap().byte_len, 4);

    fs::remove_dir_all(&dir).ok();
}
