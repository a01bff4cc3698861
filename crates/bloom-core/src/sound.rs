//! Sound bank: decoded clips keyed by asset name, and random one-shot playback.
//!
//! The bank is generic over the buffer type so the web front-end can store
//! `AudioBuffer`s while host tests store plain values.

use fnv::FnvHashMap;
use rand::Rng;
use std::future::Future;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SoundLoadError {
    #[error("fetch failed: {0}")]
    Fetch(String),
    #[error("unexpected HTTP status {0}")]
    Status(u16),
    #[error("reading body failed: {0}")]
    Body(String),
    #[error("decode failed: {0}")]
    Decode(String),
    #[error("clip is listed more than once")]
    Duplicate,
}

/// Where one-shot clips are played.
pub trait AudioOutput {
    type Buffer;

    /// Wake the output if the platform parked it (autoplay policies).
    fn resume_if_suspended(&mut self);

    /// Start one playback of `buffer` right away.
    fn start(&mut self, buffer: &Self::Buffer);
}

pub struct SoundBank<B> {
    files: &'static [&'static str],
    buffers: FnvHashMap<&'static str, B>,
}

impl<B> SoundBank<B> {
    pub fn new(files: &'static [&'static str]) -> Self {
        Self {
            files,
            buffers: FnvHashMap::default(),
        }
    }

    /// Store a decoded clip. Entries are write-once; returns false if `name` was already present.
    pub fn insert(&mut self, name: &'static str, buffer: B) -> bool {
        if self.buffers.contains_key(name) {
            return false;
        }
        self.buffers.insert(name, buffer);
        true
    }

    pub fn get(&self, name: &str) -> Option<&B> {
        self.buffers.get(name)
    }

    pub fn files(&self) -> &'static [&'static str] {
        self.files
    }

    pub fn loaded_count(&self) -> usize {
        self.buffers.len()
    }

    /// Choose one asset name uniformly from the full list, loaded or not.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&'static str> {
        if self.files.is_empty() {
            return None;
        }
        Some(self.files[rng.gen_range(0..self.files.len())])
    }

    /// Resume `out`, pick a clip and start it. A clip that never loaded is skipped silently.
    ///
    /// Returns the name that was started, if any.
    pub fn play_random<R, O>(&self, rng: &mut R, out: &mut O) -> Option<&'static str>
    where
        R: Rng + ?Sized,
        O: AudioOutput<Buffer = B>,
    {
        out.resume_if_suspended();
        let name = self.pick(rng)?;
        let buffer = self.get(name)?;
        out.start(buffer);
        Some(name)
    }
}

impl<B> std::fmt::Debug for SoundBank<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SoundBank")
            .field("files", &self.files.len())
            .field("loaded", &self.buffers.len())
            .finish()
    }
}

/// Per-asset outcome of a bulk load, in list order.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub outcomes: Vec<(&'static str, Result<(), SoundLoadError>)>,
}

impl LoadReport {
    pub fn loaded(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.outcomes
            .iter()
            .filter(|(_, r)| r.is_ok())
            .map(|(name, _)| *name)
    }

    pub fn failures(&self) -> impl Iterator<Item = (&'static str, &SoundLoadError)> + '_ {
        self.outcomes
            .iter()
            .filter_map(|(name, r)| r.as_ref().err().map(|e| (*name, e)))
    }

    pub fn is_complete(&self) -> bool {
        self.outcomes.iter().all(|(_, r)| r.is_ok())
    }
}

/// Fetch and decode every asset in order, tolerating individual failures.
///
/// Each failure is logged and recorded; the remaining assets are still loaded.
pub async fn load_all<B, F, Fut>(
    files: &'static [&'static str],
    mut fetch: F,
) -> (SoundBank<B>, LoadReport)
where
    F: FnMut(&'static str) -> Fut,
    Fut: Future<Output = Result<B, SoundLoadError>>,
{
    let mut bank = SoundBank::new(files);
    let mut report = LoadReport::default();
    for &file in files {
        match fetch(file).await {
            Ok(buffer) => {
                if bank.insert(file, buffer) {
                    report.outcomes.push((file, Ok(())));
                } else {
                    log::warn!("[sound] {} already loaded, keeping the first copy", file);
                    report.outcomes.push((file, Err(SoundLoadError::Duplicate)));
                }
            }
            Err(e) => {
                log::error!("[sound] failed to load {}: {}", file, e);
                report.outcomes.push((file, Err(e)));
            }
        }
    }
    log::info!(
        "[sound] loaded {}/{} clips",
        bank.loaded_count(),
        files.len()
    );
    (bank, report)
}
