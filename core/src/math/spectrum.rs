use num_complex::Complex64;
use rustfft::{num_traits::Zero, Fft, FftPlanner};

/// Planned FFT sized for one table, reused across passes.
pub struct SpectrumAnalyzer {
    fft: std::sync::Arc<dyn Fft<f64>>,
    size: usize,
}

impl SpectrumAnalyzer {
    pub fn new(size: usize) -> Self {
        let mut planner = FftPlanner::new();
        let fft = planner.plan_fft_forward(size);
        Self { fft, size }
    }

    /// Magnitude spectrum of `input`, zero-padded or truncated to the
    /// planned size.
    pub fn magnitudes(&self, input: &[f64]) -> Vec<f64> {
        let mut buffer: Vec<Complex64> = input
            .iter()
            .take(self.size)
            .map(|&value| Complex64::new(value, 0.0))
            .collect();
        buffer.resize(self.size, Complex64::zero());

        self.fft.process(&mut buffer);
        buffer.iter().map(|bin| bin.norm()).collect()
    }

    /// Strongest bin in the non-negative frequency half, earliest bin
    /// winning ties. The negative half mirrors it for real input and is
    /// not scanned.
    pub fn dominant_bin(magnitudes: &[f64]) -> Option<(usize, f64)> {
        let half = magnitudes.len() / 2;
        let mut dominant: Option<(usize, f64)> = None;
        for (bin, &magnitude) in magnitudes.iter().enumerate().take(half + 1) {
            match dominant {
                Some((_, best)) if magnitude <= best => {}
                _ => dominant = Some((bin, magnitude)),
            }
        }
        dominant
    }
}
