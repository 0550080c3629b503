pub mod interval;
pub mod read_collection;
pub mod signal;
pub mod strand;

// re-export for cleaner imports
pub use self::interval::GenomicInterval;
pub use self::read_collection::ReadCollection;
pub use self::signal::{CoverageSignal, RatioSignal};
pub use self::strand::Strand;
