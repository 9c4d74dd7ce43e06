//! Argument bundles and their human-readable signatures.
//!
//! Arguments travel through wrappers untouched; the only thing a wrapper may do
//! with them is render a [`Signature`] for diagnostics. Tuples of `Debug` values
//! render as their elements joined by `", "`. Named inputs are expressed either
//! as [`Named`] tuple elements or through the dynamic [`Arguments`] bundle.

mod arguments;
mod error;

pub use arguments::Arguments;
pub use error::ArgumentError;

use std::fmt;
use std::fmt::Write;
use std::ops::Deref;

/// Renders an argument bundle as a call signature, e.g. `2, 3, name="Ana"`.
pub trait Signature {
    fn write_signature(&self, out: &mut String) -> fmt::Result;

    fn signature(&self) -> String {
        let mut out = String::new();
        // writing into a String never fails
        let _ = self.write_signature(&mut out);
        out
    }
}

macro_rules! impl_signature_for_tuple ({ $first:ident $($param:ident)* } => {
    impl<$first: fmt::Debug, $($param: fmt::Debug,)*> Signature for ($first, $($param,)*) {
        #[allow(non_snake_case, reason = "tuple fields are bound to their type parameter names")]
        fn write_signature(&self, out: &mut String) -> fmt::Result {
            let ($first, $($param,)*) = self;
            write!(out, "{:?}", $first)?;
            $(write!(out, ", {:?}", $param)?;)*
            Ok(())
        }
    }
});

impl Signature for () {
    fn write_signature(&self, _out: &mut String) -> fmt::Result {
        Ok(())
    }
}

impl_signature_for_tuple! { A }
impl_signature_for_tuple! { A B }
impl_signature_for_tuple! { A B C }
impl_signature_for_tuple! { A B C D }
impl_signature_for_tuple! { A B C D E }
impl_signature_for_tuple! { A B C D E F }
impl_signature_for_tuple! { A B C D E F G }
impl_signature_for_tuple! { A B C D E F G H }
impl_signature_for_tuple! { A B C D E F G H I }
impl_signature_for_tuple! { A B C D E F G H I J }
impl_signature_for_tuple! { A B C D E F G H I J K }
impl_signature_for_tuple! { A B C D E F G H I J K L }

/// A value passed under a parameter name.
///
/// Its `Debug` form is `name=<value debug>`, so a traced call
/// `make_greeting(Named::new("name", "Ana"))` prints as `make_greeting(name="Ana")`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Named<T> {
    name: &'static str,
    value: T,
}

impl<T> Named<T> {
    pub fn new(name: &'static str, value: T) -> Self {
        Self { name, value }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T> Deref for Named<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

impl<T: fmt::Debug> fmt::Debug for Named<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={:?}", self.name, self.value)
    }
}
