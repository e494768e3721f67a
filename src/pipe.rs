//! Left-to-right value threading.
//!
//! `value.pipe(f).pipe(g)` applies `f` then `g`, reading in application
//! order like `g(f(value))`. Combined with the curried builders in
//! [`funcs`](crate::funcs) this gives a free-function calling convention
//! equivalent to the method chains on [`Seq`](crate::Seq):
//!
//! ```
//! use koseq::{Pipe, Seq, funcs};
//!
//! let out = Seq::new([1, 2, 3, 4])
//!     .pipe(funcs::filter(|&n: &i32| n % 2 == 0))
//!     .pipe(funcs::map(|n: i32| n * 10))
//!     .pipe(funcs::to_list());
//! assert_eq!(out, vec![20, 40]);
//! ```

/// Threads `self` through a unary function.
///
/// Blanket-implemented for every sized type, so plain values pipe too:
///
/// ```
/// use koseq::Pipe;
///
/// let n = 1.pipe(|n: i32| n + 1).pipe(|n| n * 10);
/// assert_eq!(n, 20);
/// ```
pub trait Pipe: Sized {
    /// Applies `f` to `self` and returns the result.
    fn pipe<R, F>(self, f: F) -> R
    where
        F: FnOnce(Self) -> R,
    {
        f(self)
    }
}

impl<T: Sized> Pipe for T {}
