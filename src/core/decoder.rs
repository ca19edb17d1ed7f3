// src/core/decoder.rs
//
// Audio decoding via Symphonia. Accepts a file path or an in-memory byte
// stream and produces interleaved f32 samples in [-1.0, 1.0].

use log::debug;
use std::fs::File;
use std::io::Cursor;
use std::path::Path;
use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::{DecoderOptions, CODEC_TYPE_NULL};
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::{MediaSource, MediaSourceStream};
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use crate::error::{Error, Result};

/// Container for decoded audio data
#[derive(Debug, Clone)]
pub struct AudioData {
    /// Interleaved samples normalized to [-1.0, 1.0]
    pub samples: Vec<f32>,
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Number of audio channels
    pub channels: usize,
    /// Duration in seconds
    pub duration_secs: f64,
    /// Codec name as reported by the decoder
    pub codec_name: String,
}

impl AudioData {
    /// Channel-averaged samples
    pub fn to_mono(&self) -> Vec<f32> {
        extract_mono(self)
    }
}

/// Decode an audio file
pub fn decode_audio(path: &Path) -> Result<AudioData> {
    let file = File::open(path).map_err(|e| {
        Error::AudioDecode(format!("failed to open {}: {}", path.display(), e))
    })?;

    let mut hint = Hint::new();
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        hint.with_extension(ext);
    }

    decode_source(Box::new(file), hint)
}

/// Decode an in-memory byte stream; `extension` helps format probing
pub fn decode_bytes(bytes: Vec<u8>, extension: Option<&str>) -> Result<AudioData> {
    let mut hint = Hint::new();
    if let Some(ext) = extension {
        hint.with_extension(ext.trim_start_matches('.'));
    }

    decode_source(Box::new(Cursor::new(bytes)), hint)
}

fn decode_error(what: &str, err: SymphoniaError) -> Error {
    Error::AudioDecode(format!("{}: {}", what, err))
}

fn decode_source(source: Box<dyn MediaSource>, hint: Hint) -> Result<AudioData> {
    let mss = MediaSourceStream::new(source, Default::default());

    let meta_opts = MetadataOptions::default();
    let fmt_opts = FormatOptions::default();

    let mut probed = symphonia::default::get_probe()
        .format(&hint, mss, &fmt_opts, &meta_opts)
        .map_err(|e| decode_error("unsupported or corrupt audio", e))?;

    let track = probed
        .format
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
        .ok_or_else(|| Error::AudioDecode("no supported audio track found".to_string()))?;

    let track_id = track.id;
    let sample_rate = track
        .codec_params
        .sample_rate
        .ok_or_else(|| Error::AudioDecode("stream does not specify a sample rate".to_string()))?;

    let channels = track.codec_params.channels.map(|c| c.count()).unwrap_or(1);
    if channels == 0 {
        return Err(Error::AudioDecode("stream reports 0 audio channels".to_string()));
    }

    let codec_name = format!("{:?}", track.codec_params.codec);

    let dec_opts = DecoderOptions::default();
    let mut decoder = symphonia::default::get_codecs()
        .make(&track.codec_params, &dec_opts)
        .map_err(|e| decode_error("failed to create decoder", e))?;

    let mut samples: Vec<f32> = Vec::new();
    let mut sample_buf: Option<SampleBuffer<f32>> = None;

    loop {
        let packet = match probed.format.next_packet() {
            Ok(packet) => packet,
            Err(SymphoniaError::IoError(ref e))
                if e.kind() == std::io::ErrorKind::UnexpectedEof => break,
            Err(SymphoniaError::ResetRequired) => {
                decoder.reset();
                continue;
            }
            Err(e) => return Err(decode_error("failed to read packet", e)),
        };

        if packet.track_id() != track_id {
            continue;
        }

        let decoded = match decoder.decode(&packet) {
            Ok(buf) => buf,
            Err(SymphoniaError::DecodeError(_)) => continue,
            Err(e) => return Err(decode_error("failed to decode packet", e)),
        };

        if sample_buf.is_none() {
            let spec = *decoded.spec();
            let duration = decoded.capacity() as u64;
            sample_buf = Some(SampleBuffer::new(duration, spec));
        }

        if let Some(ref mut buf) = sample_buf {
            buf.copy_interleaved_ref(decoded);
            samples.extend_from_slice(buf.samples());
        }
    }

    if samples.is_empty() {
        return Err(Error::AudioDecode("no audio samples decoded".to_string()));
    }

    let duration_secs = samples.len() as f64 / (sample_rate as f64 * channels as f64);
    debug!(
        "Decoded {} samples, {} Hz, {} channel(s), {:.2}s, codec {}",
        samples.len(),
        sample_rate,
        channels,
        duration_secs,
        codec_name
    );

    Ok(AudioData {
        samples,
        sample_rate,
        channels,
        duration_secs,
        codec_name,
    })
}

/// Extract mono samples from potentially multi-channel audio
pub fn extract_mono(audio: &AudioData) -> Vec<f32> {
    if audio.channels <= 1 {
        return audio.samples.clone();
    }

    audio
        .samples
        .chunks_exact(audio.channels)
        .map(|frame| frame.iter().sum::<f32>() / audio.channels as f32)
        .collect()
}
