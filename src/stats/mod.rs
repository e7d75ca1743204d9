pub mod histogram;
pub mod scatter;
pub mod summary;

pub use histogram::{make_rating_histogram, HistogramBucket};
pub use scatter::{make_winrate_scatter, ScatterPoint};
pub use summary::{compute_summary, SummaryStats};
