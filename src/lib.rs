//! # chaniter
//!
//! Lazy, chainable iterators where every stage runs on its own thread.
//!
//! An [`Iter`] is the receiving end of a channel fed by a producer thread.
//! Combinators such as [`Iter::map`] or [`Iter::zip`] consume the handle,
//! start one more thread that reads it, and hand back the new thread's
//! output. Channels are rendezvous channels by default, so a stage only
//! computes its next value once the stage after it asks for one.
//!
//! ```
//! use chaniter::Iter;
//!
//! let squares = Iter::new([1, 2, 3, 4, 5, 6])
//!     .filter(|i| i % 2 == 0)
//!     .map(|i| i * i)
//!     .collect();
//!
//! assert_eq!(squares, vec![4, 16, 36]);
//! ```
//!
//! ## Operations
//!
//! - **Sources**: [`Iter::new`], [`Iter::from_vec`], [`Iter::from_slice`],
//!   [`Iter::from_chan`], [`Iter::from_map`], [`Iter::from_map_keys`],
//!   [`Iter::from_map_values`]
//! - **Transformers**: `map`, `filter`, `take`, `step_by`, `chain`,
//!   `intersperse`, `skip_while`, `take_while`, `inspect`, `dedup`, `unique`
//! - **Two inputs**: `zip`, `interleave`, `interleave_shortest`,
//!   `cartesian_product`
//! - **Terminal**: `collect`, `count`, `last`, `for_each`, `partition`,
//!   `fold`, `reduce`, `all`, `any`, `find`, `position`, `nth`, `join`,
//!   `group_by`, `chunks`, `windows`
//!
//! [`Iter::skip`] is the odd one out: it reads and discards on the calling
//! thread and returns the same sequence.
//!
//! ## Stopping early
//!
//! Dropping an `Iter` hangs up on its producer. The producer's next send
//! fails, it exits and drops its own input, and so on up the pipeline, so
//! `take`, `find` and friends do not leave parked threads behind. Channels
//! passed to [`Iter::from_chan`] belong to the caller and are never closed
//! by this crate.
//!
//! ## Configuration
//!
//! Thread names, stack size and channel capacity come from a
//! [`StageConfig`], which can be loaded from TOML and attached with
//! [`Iter::configured`] or [`Iter::with_config`].

mod adapters;
mod config;
mod consume;
mod error;
mod grouping;
mod iter;
mod merge;
mod pair;
mod stage;

pub use config::StageConfig;
pub use error::{IterError, Result};
pub use iter::Iter;
pub use pair::Pair;
