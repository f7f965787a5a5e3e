//! Audio descriptor extraction for the voice analyzer
//!
//! Computes frame-averaged descriptors over overlapping frames:
//! 1. RMS energy
//! 2. Zero-crossing rate
//! 3. Spectral centroid, bandwidth and rolloff (Hann-windowed magnitude
//!    spectra)
//!
//! Signals shorter than one frame are processed as a single frame.

use rustfft::num_complex::Complex;
use rustfft::FftPlanner;

use crate::error::AnalysisError;

/// Numerical stability epsilon
const EPSILON: f32 = 1e-10;

/// Fraction of spectral energy below the rolloff frequency
const ROLLOFF_FRACTION: f32 = 0.85;

/// Frame-averaged audio descriptors
#[derive(Debug, Clone)]
pub struct VoiceDescriptors {
    /// Mean RMS energy
    pub rms: f32,

    /// Mean zero-crossing rate (crossings per sample, 0.0-1.0)
    pub zero_crossing_rate: f32,

    /// Mean spectral centroid in Hz
    pub spectral_centroid: f32,

    /// Mean spectral bandwidth in Hz
    pub spectral_bandwidth: f32,

    /// Mean spectral rolloff in Hz
    pub spectral_rolloff: f32,
}

/// Extract frame-averaged descriptors from mono samples
///
/// # Arguments
///
/// * `samples` - Mono audio samples, normalized to [-1.0, 1.0]
/// * `sample_rate` - Sample rate in Hz
/// * `frame_size` - Analysis frame size (typically 2048)
/// * `hop_size` - Hop between frames (typically 512)
///
/// # Errors
///
/// Returns `AnalysisError::InvalidInput` if samples are empty, the
/// sample rate is zero, or frame/hop sizes are zero.
pub fn extract_descriptors(
    samples: &[f32],
    sample_rate: u32,
    frame_size: usize,
    hop_size: usize,
) -> Result<VoiceDescriptors, AnalysisError> {
    if samples.is_empty() {
        return Err(AnalysisError::InvalidInput(
            "Empty audio samples".to_string(),
        ));
    }
    if sample_rate == 0 {
        return Err(AnalysisError::InvalidInput(
            "Sample rate must be > 0".to_string(),
        ));
    }
    if frame_size == 0 || hop_size == 0 {
        return Err(AnalysisError::InvalidInput(
            "Frame and hop size must be > 0".to_string(),
        ));
    }

    log::debug!(
        "Extracting voice descriptors: {} samples at {} Hz, frame={}, hop={}",
        samples.len(),
        sample_rate,
        frame_size,
        hop_size
    );

    let frames = frame_bounds(samples.len(), frame_size, hop_size);

    // Time-domain descriptors
    let mut rms_sum = 0.0f32;
    let mut zcr_sum = 0.0f32;
    for &(start, end) in &frames {
        let frame = &samples[start..end];
        rms_sum += frame_rms(frame);
        zcr_sum += frame_zcr(frame);
    }
    let n_frames = frames.len() as f32;

    // Spectral descriptors share one FFT plan across frames
    let fft_size = frame_size.next_power_of_two();
    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(fft_size);

    let mut centroid_sum = 0.0f32;
    let mut bandwidth_sum = 0.0f32;
    let mut rolloff_sum = 0.0f32;
    let mut spectral_frames = 0usize;

    let mut buffer: Vec<Complex<f32>> = vec![Complex::new(0.0, 0.0); fft_size];
    for &(start, end) in &frames {
        let frame = &samples[start..end];
        let n = frame.len();

        for (i, slot) in buffer.iter_mut().enumerate() {
            let value = if i < n {
                // Hann window
                let w = if n > 1 {
                    let t = 2.0 * std::f32::consts::PI * i as f32 / (n - 1) as f32;
                    0.5 * (1.0 - t.cos())
                } else {
                    1.0
                };
                frame[i] * w
            } else {
                0.0
            };
            *slot = Complex::new(value, 0.0);
        }
        fft.process(&mut buffer);

        let magnitudes: Vec<f32> = buffer
            .iter()
            .take(fft_size / 2 + 1)
            .map(|c| (c.re * c.re + c.im * c.im).sqrt())
            .collect();

        let total: f32 = magnitudes.iter().sum();
        if total <= EPSILON {
            // Silent frame carries no spectral shape
            continue;
        }

        let bin_hz = sample_rate as f32 / fft_size as f32;

        let centroid: f32 = magnitudes
            .iter()
            .enumerate()
            .map(|(k, &m)| k as f32 * bin_hz * m)
            .sum::<f32>()
            / total;

        let bandwidth: f32 = (magnitudes
            .iter()
            .enumerate()
            .map(|(k, &m)| {
                let d = k as f32 * bin_hz - centroid;
                d * d * m
            })
            .sum::<f32>()
            / total)
            .sqrt();

        let target = ROLLOFF_FRACTION * total;
        let mut cumulative = 0.0f32;
        let mut rolloff = (magnitudes.len() - 1) as f32 * bin_hz;
        for (k, &m) in magnitudes.iter().enumerate() {
            cumulative += m;
            if cumulative >= target {
                rolloff = k as f32 * bin_hz;
                break;
            }
        }

        centroid_sum += centroid;
        bandwidth_sum += bandwidth;
        rolloff_sum += rolloff;
        spectral_frames += 1;
    }

    let spectral_n = spectral_frames.max(1) as f32;

    Ok(VoiceDescriptors {
        rms: rms_sum / n_frames,
        zero_crossing_rate: zcr_sum / n_frames,
        spectral_centroid: centroid_sum / spectral_n,
        spectral_bandwidth: bandwidth_sum / spectral_n,
        spectral_rolloff: rolloff_sum / spectral_n,
    })
}

/// Overlapping frame boundaries; a short signal yields one whole-signal frame
fn frame_bounds(len: usize, frame_size: usize, hop_size: usize) -> Vec<(usize, usize)> {
    if len < frame_size {
        return vec![(0, len)];
    }
    let num_frames = (len - frame_size) / hop_size + 1;
    (0..num_frames)
        .map(|i| {
            let start = i * hop_size;
            (start, start + frame_size)
        })
        .collect()
}

/// RMS energy of one frame
fn frame_rms(frame: &[f32]) -> f32 {
    let sum_sq: f32 = frame.iter().map(|&x| x * x).sum();
    (sum_sq / frame.len() as f32).sqrt()
}

/// Zero-crossing rate of one frame (sign changes per sample)
fn frame_zcr(frame: &[f32]) -> f32 {
    if frame.len() < 2 {
        return 0.0;
    }
    let crossings = frame
        .windows(2)
        .filter(|pair| (pair[0] >= 0.0) != (pair[1] >= 0.0))
        .count();
    crossings as f32 / frame.len() as f32
}
