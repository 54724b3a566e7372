mod sample;

pub use sample::{sample_batch, sample_catalogue};
