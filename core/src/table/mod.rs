pub mod pool;
pub mod quantize;
pub mod scale;
pub mod sine;
pub mod spectrum;

pub use pool::BufferPool;
pub use quantize::QuantizeStage;
pub use scale::ScaleStage;
pub use sine::half_period_samples;
pub use spectrum::SpectrumStage;
