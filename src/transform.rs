//
// Copyright 2025 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! Element transforms for [`Mapped`](crate::Mapped) views.

use std::fmt;
use std::marker::PhantomData;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A pure function from one element type to another, applied lazily by a mapped view.
///
/// A transform must be referentially stable: applying it to equal inputs yields equal outputs,
/// otherwise equality and hashing of the view stop being coherent. Implement this trait on a named
/// type that carries whatever state the function needs; deriving `Serialize` and `Deserialize` on
/// that type is what lets a mapped view round-trip through serde.
///
/// # Examples
///
/// ```rust
/// use seqviews::Transform;
///
/// struct Scale {
///     factor: i64,
/// }
///
/// impl Transform<i64> for Scale {
///     type Output = i64;
///
///     fn apply(&self, input: i64) -> i64 {
///         input * self.factor
///     }
/// }
///
/// assert_eq!(Scale { factor: 3 }.apply(2), 6);
/// ```
pub trait Transform<I> {
    /// The type of the produced elements.
    type Output;

    /// Maps one input element.
    fn apply(&self, input: I) -> Self::Output;
}

impl<I, T: Transform<I> + ?Sized> Transform<I> for &T {
    type Output = T::Output;

    fn apply(&self, input: I) -> Self::Output {
        (**self).apply(input)
    }
}

/// Adapts a closure into a [`Transform`].
///
/// Closures cannot be serialized, so views built on this adapter are for in-process use only.
#[derive(Clone, Copy)]
pub struct FnTransform<G> {
    function: G,
}

impl<G> FnTransform<G> {
    /// Wraps `function`.
    pub fn new(function: G) -> Self {
        Self { function }
    }
}

impl<G> fmt::Debug for FnTransform<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FnTransform {{ .. }}")
    }
}

impl<I, O, G: Fn(I) -> O> Transform<I> for FnTransform<G> {
    type Output = O;

    fn apply(&self, input: I) -> O {
        (self.function)(input)
    }
}

/// Renders every element with its [`Display`](fmt::Display) implementation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayString;

impl<I: fmt::Display> Transform<I> for DisplayString {
    type Output = String;

    fn apply(&self, input: I) -> String {
        input.to_string()
    }
}

/// Converts every element with its [`Into`] implementation.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Convert<O> {
    #[cfg_attr(feature = "serde", serde(skip))]
    target: PhantomData<fn() -> O>,
}

impl<O> Convert<O> {
    /// Creates a conversion into `O`.
    pub fn new() -> Self {
        Self {
            target: PhantomData,
        }
    }
}

impl<O> Default for Convert<O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O> Clone for Convert<O> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<O> Copy for Convert<O> {}

impl<O> fmt::Debug for Convert<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Convert<{}>", std::any::type_name::<O>())
    }
}

impl<I: Into<O>, O> Transform<I> for Convert<O> {
    type Output = O;

    fn apply(&self, input: I) -> O {
        input.into()
    }
}
