//! Read-only operations over normalized tables.
//!
//! Everything here borrows its input and returns a new view; base tables are never modified,
//! so these are safe to call from any number of views at once.
//!
//! Currently implemented:
//!
//! - [`filter()`]: rows matching a predicate
//! - [`top_n()`]: the N largest rows by a numeric key (stable on ties)
//! - [`value_counts()`]: group-and-count by a categorical key
//! - [`sum_by()`]: integer column totals
//! - [`histogram()`]: equal-width binning
//!
//! ## Example: filter → top-N → total
//!
//! ```rust
//! use t20_insights::processing::{filter, sum_by, top_n};
//!
//! let runs = [("Gurbaz", 281_u32), ("Rohit", 257), ("Head", 255), ("Pooran", 228), ("Extra", 4)];
//!
//! let regulars = filter(&runs, |r| r.1 >= 50);
//! assert_eq!(regulars.len(), 4);
//!
//! let top = top_n(&runs, 2, |r| f64::from(r.1));
//! assert_eq!(top[0].0, "Gurbaz");
//! assert_eq!(top[1].0, "Rohit");
//!
//! assert_eq!(sum_by(&runs, |r| r.1), 1025);
//! ```

pub mod filter;
pub mod group;
pub mod histogram;
pub mod reduce;
pub mod top_n;

pub use filter::filter;
pub use group::value_counts;
pub use histogram::{HistogramBin, histogram};
pub use reduce::sum_by;
pub use top_n::top_n;
