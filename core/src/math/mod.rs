pub mod spectrum;
pub mod stats;

pub use spectrum::SpectrumAnalyzer;
pub use stats::Stats;
