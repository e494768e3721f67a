//! # koseq
//!
//! **Lazy, Kotlin-style sequence combinators** for Rust. A [`Seq<T>`] wraps
//! any finite or infinite iterator in a chainable pipeline of deferred
//! transformation stages; terminal operators force evaluation with a single
//! forward pull loop.
//!
//! ## Key properties
//!
//! - **Lazy** - composing an operator allocates one small adaptor and pulls
//!   nothing from the source; only a terminal operator drives the chain
//! - **Single-pass** - operators consume the sequence by value, so a chain
//!   can only be driven once and the compiler rules out interleaved pulls
//!   from two chains over one source
//! - **Order-preserving** - elements flow in upstream order through every
//!   operator except `sorted*` and `shuffled*`
//! - **Short-circuiting** - `take`, `take_while`, `first`, `single`, `any`,
//!   `all` and `none` stop pulling as soon as the answer is determined, so
//!   they terminate on infinite sources
//! - **Typed failures** - terminal preconditions surface as [`SeqError`];
//!   every failing operator has an `*_or_none` counterpart returning
//!   `Option` instead
//!
//! ## Quick start
//!
//! ```
//! use koseq::Seq;
//!
//! let out = Seq::new(vec![Some(0), Some(1), None, Some(2), Some(3), None, Some(4)])
//!     .filter_not_none()
//!     .filter(|&n| n % 2 == 0)
//!     .map(|n| n * 2)
//!     .to_list();
//! assert_eq!(out, vec![0, 4, 8]);
//! ```
//!
//! Infinite sources work as long as consumption is bounded:
//!
//! ```
//! use koseq::Seq;
//!
//! let evens = Seq::new(0u32..).filter(|&n| n % 2 == 0).take(4).to_list();
//! assert_eq!(evens, vec![0, 2, 4, 6]);
//! ```
//!
//! ## Two calling conventions
//!
//! Every operator exists both as a method on [`Seq`] and as a curried
//! builder in [`funcs`], threaded with [`Pipe::pipe`]. The two forms are
//! equivalent link for link:
//!
//! ```
//! use koseq::{Pipe, Seq, funcs};
//!
//! let methods = Seq::new(1..=6).filter(|&n| n % 2 == 0).map(|n| n * n).to_list();
//! let piped = Seq::new(1..=6)
//!     .pipe(funcs::filter(|&n: &i32| n % 2 == 0))
//!     .pipe(funcs::map(|n: i32| n * n))
//!     .pipe(funcs::to_list());
//! assert_eq!(methods, piped);
//! ```
//!
//! ## Errors
//!
//! Terminal operators that require at least (or at most) one element report
//! [`SeqError::EmptySequence`] / [`SeqError::TooManyElements`];
//! [`Seq::chunked`] rejects a zero window with
//! [`SeqError::InvalidArgument`]. Comparability and addability are
//! compile-time bounds (`Ord`, `Add`); the one runtime-typed boundary is
//! the `Seq<Box<dyn Any>>` support in [`Seq::filter_is_instance`] and
//! [`Seq::cast`], where a failed downcast is [`SeqError::TypeMismatch`].
//!
//! ## Module overview
//!
//! - [`seq`] - the `Seq` type and every non-terminal operator
//! - [`error`] - the failure taxonomy
//! - [`pipe`] / [`funcs`] - the free-function calling convention
//! - [`testing`] - assertion helpers for tests over sequences

pub mod error;
pub mod funcs;
pub mod pipe;
pub mod seq;
pub mod testing;

mod dynamic;
mod terminal;

pub use error::{Result, SeqError};
pub use pipe::Pipe;
pub use seq::Seq;
