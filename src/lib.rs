//! A generic mathematical set.
//!
//! [`Set`] holds unique values of any element type which can be hashed and
//! compared for equality, and provides the standard set-algebraic operations:
//! union, intersection, difference and equality, along with conversions to
//! and from sequences of elements.
//!
//! ###### Ordering
//!
//! Sets are unordered. The order in which [`Set::iter`] and [`Set::to_vec`]
//! yield elements is whatever the underlying hash table produces, and may
//! differ between two equal sets or between two calls on the same set.
//!
//! ###### Ownership
//!
//! Only `insert` and `remove` mutate a set. Every other operation leaves its
//! operands untouched and returns a freshly allocated set, so a derived set
//! never aliases the storage of the sets it was built from.
//!
//! ###### Concurrency
//!
//! `Set` performs no internal synchronization. It is `Send` and `Sync` when
//! its element type is, but mutation requires exclusive access; sharing a
//! mutable set between threads requires an external lock such as
//! `std::sync::Mutex`.
//!
//! ###### Example
//!
//! ```
//! use set::Set;
//!
//! let mut s = Set::from_slice(&[1, 2, 3]);
//! s.remove(&2);
//!
//! assert!(!s.contains(&2));
//! assert!(s.contains(&3));
//! assert_eq!(2, s.len());
//! ```

pub mod set;

pub use set::Set;
