pub mod dataset;
pub mod disease;
pub mod sample;

// re-export for cleaner imports
pub use self::dataset::{Dataset, SampleGroup};
pub use self::disease::Disease;
pub use self::sample::Sample;
