use crate::prelude::StageError;

/// Scoped buffer pool that bounds how many sample buffers a stage can hold
/// live at once.
pub struct BufferPool {
    free: Vec<Vec<f64>>,
    outstanding: usize,
    max_live: usize,
}

impl BufferPool {
    pub fn with_capacity(max_live: usize) -> Self {
        Self {
            free: Vec::new(),
            outstanding: 0,
            max_live,
        }
    }

    /// Hands out a zeroed buffer of `length`, reusing a released one when
    /// available. Fails once `max_live` buffers are checked out.
    pub fn checkout(&mut self, length: usize) -> Result<Vec<f64>, StageError> {
        if self.outstanding >= self.max_live {
            return Err(StageError::BufferExhaustion(format!(
                "{} buffers outstanding",
                self.outstanding
            )));
        }
        self.outstanding += 1;

        let mut buffer = self.free.pop().unwrap_or_default();
        buffer.clear();
        buffer.resize(length, 0.0);
        Ok(buffer)
    }

    /// Returns a buffer to the pool for reuse.
    pub fn release(&mut self, mut buffer: Vec<f64>) {
        buffer.clear();
        self.outstanding = self.outstanding.saturating_sub(1);
        if self.free.len() < self.max_live {
            self.free.push(buffer);
        }
    }

    pub fn reset(&mut self) {
        self.free.clear();
        self.outstanding = 0;
    }
}
