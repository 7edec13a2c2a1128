pub mod batch_runner;
pub mod classifier;
pub mod droid;
pub mod error;
pub mod exporter;
pub mod extractor;
pub mod page_fetcher;

pub use batch_runner::*;
pub use classifier::*;
pub use droid::*;
pub use error::*;
pub use exporter::*;
pub use extractor::*;
pub use page_fetcher::*;
