use crate::constants::{asset_url, SOUND_BASE_PATH};
use bloom_core::constants::SOUND_FILES;
use bloom_core::{load_all, AudioOutput, SoundBank, SoundLoadError};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// One-shot clip playback straight into the context's destination.
pub struct WebAudioOutput {
    ctx: web::AudioContext,
}

impl WebAudioOutput {
    pub fn new(ctx: web::AudioContext) -> Self {
        Self { ctx }
    }
}

impl AudioOutput for WebAudioOutput {
    type Buffer = web::AudioBuffer;

    fn resume_if_suspended(&mut self) {
        if self.ctx.state() == web::AudioContextState::Suspended {
            _ = self.ctx.resume();
        }
    }

    fn start(&mut self, buffer: &web::AudioBuffer) {
        let src = match self.ctx.create_buffer_source() {
            Ok(s) => s,
            Err(e) => {
                log::error!("[sound] AudioBufferSourceNode error: {:?}", e);
                return;
            }
        };
        src.set_buffer(Some(buffer));
        if let Err(e) = src.connect_with_audio_node(&self.ctx.destination()) {
            log::error!("[sound] connect error: {:?}", e);
            return;
        }
        if let Err(e) = src.start() {
            log::error!("[sound] start error: {:?}", e);
        }
    }
}

// Fetch one clip and decode it with the shared context
async fn fetch_clip(
    ctx: &web::AudioContext,
    file: &'static str,
) -> Result<web::AudioBuffer, SoundLoadError> {
    let window = web::window().ok_or_else(|| SoundLoadError::Fetch("no window".into()))?;
    let url = asset_url(SOUND_BASE_PATH, file);
    let resp: web::Response = JsFuture::from(window.fetch_with_str(&url))
        .await
        .map_err(|e| SoundLoadError::Fetch(format!("{:?}", e)))?
        .dyn_into()
        .map_err(|e| SoundLoadError::Fetch(format!("{:?}", e)))?;
    if !resp.ok() {
        return Err(SoundLoadError::Status(resp.status()));
    }

    let body = resp
        .array_buffer()
        .map_err(|e| SoundLoadError::Body(format!("{:?}", e)))?;
    let bytes: js_sys::ArrayBuffer = JsFuture::from(body)
        .await
        .map_err(|e| SoundLoadError::Body(format!("{:?}", e)))?
        .dyn_into()
        .map_err(|e| SoundLoadError::Body(format!("{:?}", e)))?;

    let decoding = ctx
        .decode_audio_data(&bytes)
        .map_err(|e| SoundLoadError::Decode(format!("{:?}", e)))?;
    JsFuture::from(decoding)
        .await
        .map_err(|e| SoundLoadError::Decode(format!("{:?}", e)))?
        .dyn_into::<web::AudioBuffer>()
        .map_err(|e| SoundLoadError::Decode(format!("{:?}", e)))
}

/// Load every clip before the animation starts. Missing clips are logged and left out.
pub async fn load_sounds(ctx: &web::AudioContext) -> SoundBank<web::AudioBuffer> {
    let (bank, report) = load_all(&SOUND_FILES, |file| fetch_clip(ctx, file)).await;
    let loaded: Vec<&str> = report.loaded().collect();
    log::debug!("[sound] ready: {}", loaded.join(", "));
    if !report.is_complete() {
        let missing: Vec<&str> = report.failures().map(|(name, _)| name).collect();
        log::warn!("[sound] playing without {}", missing.join(", "));
    }
    bank
}
