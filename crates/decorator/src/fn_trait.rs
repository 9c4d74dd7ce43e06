/// Represents a function taking its parameters as one tuple
pub trait FnTrait<Args> {
    type Output;
    fn call(&self, args: Args) -> Self::Output;
}

/// impl `Fn` for `FnTrait`, From 0 parameters to 12 parameters
///
/// for example, it will impl Fn(A, B) like this:
///```text
/// impl<Func, Ret, A, B> FnTrait<(A, B)> for Func
///    where
///        Func: Fn(A, B) -> Ret,
/// {
///    type Output = Ret;
///
///    #[inline]
///    #[allow(non_snake_case)]
///    fn call(&self, (A, B): (A, B)) -> Self::Output {
///        (self)(A, B)
///    }
/// }
///```
macro_rules! impl_fn_trait_for_fn ({ $($param:ident)* } => {
    impl<Func, Ret, $($param,)*> FnTrait<($($param,)*)> for Func
    where
        Func: Fn($($param),*) -> Ret,
    {
        type Output = Ret;

        #[inline]
        #[allow(non_snake_case, reason = "tuple fields are bound to their type parameter names")]
        fn call(&self, ($($param,)*): ($($param,)*)) -> Self::Output {
            (self)($($param,)*)
        }
    }
});

impl_fn_trait_for_fn! {}
impl_fn_trait_for_fn! { A }
impl_fn_trait_for_fn! { A B }
impl_fn_trait_for_fn! { A B C }
impl_fn_trait_for_fn! { A B C D }
impl_fn_trait_for_fn! { A B C D E }
impl_fn_trait_for_fn! { A B C D E F }
impl_fn_trait_for_fn! { A B C D E F G }
impl_fn_trait_for_fn! { A B C D E F G H }
impl_fn_trait_for_fn! { A B C D E F G H I }
impl_fn_trait_for_fn! { A B C D E F G H I J }
impl_fn_trait_for_fn! { A B C D E F G H I J K }
impl_fn_trait_for_fn! { A B C D E F G H I J K L }

#[cfg(test)]
mod tests {
    use crate::fn_trait::FnTrait;

    fn assert_is_fn_trait<Args, F: FnTrait<Args>>(_f: F) {
        //noop
    }

    fn foo0() {}
    fn foo1(_a: ()) {}
    fn foo2(_a1: &str, _a2: u8) {}
    fn foo3(_a1: &str, _a2: u8, _a3: ()) -> bool {
        true
    }
    fn foo6(_a1: (), _a2: u8, _a3: (), _a4: (), _a5: (), _a6: ()) {}
    #[allow(clippy::too_many_arguments, reason = "exercises the widest arity")]
    fn foo12(
        _a1: &str,
        _a2: u8,
        _a3: (),
        _a4: (),
        _a5: (),
        _a6: (),
        _a7: (),
        _a8: (),
        _a9: (),
        _a10: (),
        _a11: (),
        _a12: (),
    ) {
    }

    #[test]
    fn test_fn_is_fn_trait() {
        assert_is_fn_trait(foo0);
        assert_is_fn_trait(foo1);
        assert_is_fn_trait(foo2);
        assert_is_fn_trait(foo3);
        assert_is_fn_trait(foo6);
        assert_is_fn_trait(foo12);
        assert_is_fn_trait(|a: i32, b: i32| a + b);
    }

    #[test]
    fn test_call_spreads_tuple() {
        let add = |a: i32, b: i32| a + b;
        assert_eq!(FnTrait::call(&add, (2, 3)), 5);

        let unit = || "whee";
        assert_eq!(FnTrait::call(&unit, ()), "whee");
    }
}
