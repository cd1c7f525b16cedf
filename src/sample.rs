//! Records, samples, and the CSV reader that produces them.

mod record;
mod reader;
mod sample_struct;

pub use record::Record;
pub use reader::SampleReader;
pub use sample_struct::Sample;
