//! Operators over runtime-typed elements.
//!
//! Elements of a `Seq<Box<dyn Any>>` carry their concrete type at runtime.
//! [`filter_is_instance`](Seq::filter_is_instance) keeps only the elements
//! of one type, narrowing the sequence to it; [`cast`](Seq::cast) is the
//! strict counterpart that fails on the first foreign element instead of
//! skipping it.

use std::any::{Any, type_name};

use crate::error::{Result, SeqError};
use crate::seq::Seq;

impl Seq<Box<dyn Any>> {
    /// Keeps the elements that are an `R`, narrowing the element type.
    ///
    /// ```
    /// use std::any::Any;
    /// use koseq::Seq;
    ///
    /// let mixed: Vec<Box<dyn Any>> = vec![Box::new(1i64), Box::new("two"), Box::new(3i64)];
    /// let ints = Seq::new(mixed).filter_is_instance::<i64>().to_list();
    /// assert_eq!(ints, vec![1, 3]);
    /// ```
    pub fn filter_is_instance<R: Any>(self) -> Seq<R> {
        Seq {
            iter: Box::new(
                self.iter
                    .filter_map(|element| element.downcast::<R>().ok().map(|boxed| *boxed)),
            ),
        }
    }

    /// Downcasts every element to `R`, failing with
    /// [`SeqError::TypeMismatch`] on the first element of another type.
    /// Materializes the upstream to validate it.
    pub fn cast<R: Any>(self) -> Result<Seq<R>> {
        let elements = self
            .iter
            .map(|element| {
                element
                    .downcast::<R>()
                    .map(|boxed| *boxed)
                    .map_err(|_| SeqError::TypeMismatch { expected: type_name::<R>() })
            })
            .collect::<Result<Vec<R>>>()?;
        Ok(Seq::new(elements))
    }
}
