//! # keyalg
//!
//! Order-preserving collection algebra over slices, driven by a caller-supplied
//! key extraction function.
//!
//! ## Overview
//!
//! Every operation is a pure function: it borrows its inputs, never mutates
//! them, and returns a freshly allocated result. The set-style operations
//! identify elements by the key a closure derives from them, so the same
//! `diff` works for plain integers and for records compared by id.
//!
//! - **Key-indexed views**: [`to_map`], [`index_by`], [`to_set`], [`group_by`]
//! - **Transforms**: [`map`], [`reduce`], [`filter`]
//! - **Set algebra**: [`unique`], [`diff`], [`intersect`], [`partition`],
//!   [`merge`], [`contains`]
//! - **Utilities**: [`paginate`], [`join`], [`keys`], [`values`]
//! - **Method syntax**: [`SequenceAlgebra`] exposes all of the above on slices
//!
//! Output order always follows the first (primary) sequence. The only
//! exception is [`merge`], which appends the unmatched tail of the second
//! sequence after everything derived from the first.
//!
//! ## Feature Flags
//!
//! - `fxhash`: key indexes hash with `rustc_hash::FxBuildHasher`
//! - `ahash`: key indexes hash with `ahash::RandomState`
//! - `serde`: `Serialize`/`Deserialize` for [`PageRequest`]
//! - `full`: `serde` and `fxhash`
//!
//! ## Example
//!
//! ```rust
//! use keyalg::prelude::*;
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct User {
//!     id: u32,
//!     name: &'static str,
//! }
//!
//! let stored = vec![User { id: 1, name: "tom" }, User { id: 2, name: "jerry" }];
//! let incoming = vec![User { id: 2, name: "jerry (edited)" }, User { id: 3, name: "lili" }];
//!
//! let merged = merge(&stored, &incoming, |user| user.id);
//! let names = map(&merged, |user| user.name);
//! assert_eq!(names, vec!["tom", "jerry (edited)", "lili"]);
//!
//! let removed = diff(&stored, &incoming, |user| user.id);
//! assert_eq!(removed, vec![User { id: 1, name: "tom" }]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports every operation, the view types and the error type.
///
/// # Usage
///
/// ```rust
/// use keyalg::prelude::*;
///
/// assert_eq!(unique(&[1, 2, 1], |value| *value), vec![1, 2]);
/// ```
pub mod prelude {
    pub use crate::algebra::*;
    pub use crate::error::AlgebraError;
    pub use crate::index::*;
    pub use crate::keys::*;
    pub use crate::paginate::*;
    pub use crate::sequence::*;
    pub use crate::text::*;
    pub use crate::transform::*;
}

pub mod algebra;
pub mod error;
pub mod index;
pub mod keys;
pub mod paginate;
pub mod sequence;
pub mod text;
pub mod transform;

pub use algebra::{contains, diff, intersect, merge, partition, unique};
pub use error::{AlgebraError, Result};
pub use index::{IndexHasher, KeyIndex, KeySet, group_by, index_by, to_map, to_set};
pub use keys::{keys, values};
pub use paginate::{DEFAULT_PAGE_SIZE, PageRequest, paginate};
pub use sequence::SequenceAlgebra;
pub use text::join;
pub use transform::{filter, map, reduce};
