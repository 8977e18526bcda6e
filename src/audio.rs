//! Fire-and-forget pronunciation playback.
//!
//! Each request fetches its clip on a spawned thread and plays it through a
//! detached sink, so audio can never block physics or collision progress.
//! Every failure — missing device, fetch error, undecodable payload — is
//! logged and swallowed; audio problems are never game errors.

use crate::constants::WORD_AUDIO_DELAY_MS;
use crate::core::types::TickEvent;
use crate::source::{AudioSource, SourceError};
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};
use std::io::Cursor;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Plays pronunciation clips fetched from an [`AudioSource`].
pub struct Pronouncer {
    /// Keeps the output device open for the session's lifetime.
    _stream: Option<OutputStream>,
    handle: Option<OutputStreamHandle>,
    source: Arc<dyn AudioSource + Send + Sync>,
}

impl Pronouncer {
    /// Open the default output device. A machine without one degrades to
    /// silence and the game plays on.
    pub fn new(source: Arc<dyn AudioSource + Send + Sync>) -> Self {
        match OutputStream::try_default() {
            Ok((stream, handle)) => Self {
                _stream: Some(stream),
                handle: Some(handle),
                source,
            },
            Err(err) => {
                log::warn!("audio output unavailable, playback disabled: {}", err);
                Self {
                    _stream: None,
                    handle: None,
                    source,
                }
            }
        }
    }

    /// A pronouncer that never plays anything (headless runs, tests).
    pub fn disabled(source: Arc<dyn AudioSource + Send + Sync>) -> Self {
        Self {
            _stream: None,
            handle: None,
            source,
        }
    }

    /// Pronounce one collected letter. Returns immediately.
    pub fn letter(&self, ch: char) {
        let label = format!("letter '{}' clip", ch);
        self.spawn(move |source| source.letter_clip(ch), label, 0);
    }

    /// Pronounce the completed word, delayed so it never overlaps the final
    /// letter clip.
    pub fn word(&self, script: String) {
        let label = format!("word '{}' clip", script);
        self.spawn(
            move |source| source.word_clip(&script),
            label,
            WORD_AUDIO_DELAY_MS,
        );
    }

    fn spawn<F>(&self, fetch: F, label: String, delay_ms: u64)
    where
        F: FnOnce(&dyn AudioSource) -> Result<Vec<u8>, SourceError> + Send + 'static,
    {
        let handle = match &self.handle {
            Some(handle) => handle.clone(),
            None => return,
        };
        let source = Arc::clone(&self.source);
        thread::spawn(move || {
            if delay_ms > 0 {
                thread::sleep(Duration::from_millis(delay_ms));
            }
            match fetch(source.as_ref()) {
                Ok(bytes) => play(&handle, bytes, &label),
                Err(SourceError::NotFound) => {
                    log::warn!("{} not found, skipping playback", label);
                }
                Err(err) => log::warn!("{} fetch failed: {}", label, err),
            }
        });
    }
}

fn play(handle: &OutputStreamHandle, bytes: Vec<u8>, label: &str) {
    let sink = match Sink::try_new(handle) {
        Ok(sink) => sink,
        Err(err) => {
            log::warn!("{} sink failed: {}", label, err);
            return;
        }
    };
    match Decoder::new(Cursor::new(bytes)) {
        Ok(decoded) => {
            sink.append(decoded);
            sink.detach();
        }
        Err(err) => log::warn!("{} decode failed: {}", label, err),
    }
}

/// Map a tick's events to their pronunciation side effects.
pub fn apply_tick_events(pronouncer: &Pronouncer, events: &[TickEvent]) {
    for event in events {
        match event {
            TickEvent::LetterCollected { ch } => pronouncer.letter(*ch),
            TickEvent::WordCompleted { script } => pronouncer.word(script.clone()),
        }
    }
}
