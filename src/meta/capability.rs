use crate::meta::condition::Bool;
use crate::meta::condition::True;
use crate::optional::Destruction;

/// Declares how a payload is torn down, which in turn picks the container type for it.
///
/// Use `trivially_destructible!` or `needs_destructor!` rather than writing the impl by hand,
/// they check the claim against `core::mem::needs_drop` at compile time.
/// References have no impl, a container never holds a borrowed payload.
pub trait Destruct: Sized {
    type Policy: Destruction<Self>;
}

/// A move that leaves the source in a valid "moved-from" state instead of consuming it,
/// so whoever owns the source is still responsible for destroying it.
pub trait MoveConstruct: Sized {
    /// `True` when `move_construct` and `move_assign` cannot panic.
    type NoPanicMove: Bool;
    /// `True` when `swap_values` cannot panic.
    type NoPanicSwap: Bool;

    fn move_construct(source: &mut Self) -> Self;

    /// Replace `self` with the moved-out contents of `source`.
    #[inline]
    fn move_assign(&mut self, source: &mut Self) {
        *self = Self::move_construct(source);
    }

    /// Exchange two live values.  Defaults to the three-move exchange through a temporary.
    #[inline]
    fn swap_values(a: &mut Self, b: &mut Self) {
        let mut temp = Self::move_construct(a);
        a.move_assign(b);
        b.move_assign(&mut temp);
    }
}

/// `Self` can be built from an `A`.
///
/// Anything `A: Into<Self>` is constructible implicitly.  Conversions that should only happen when
/// spelled out are declared with `Implicit = False`.
pub trait ConstructFrom<A>: Sized {
    type Implicit: Bool;

    fn construct_from(arg: A) -> Self;
}

impl<T, A> ConstructFrom<A> for T
where
    A: Into<T>,
{
    type Implicit = True;

    #[inline(always)]
    fn construct_from(arg: A) -> T {
        return arg.into();
    }
}

/// Declare types with no drop glue.  Their containers are trivially destructible too.
#[macro_export]
macro_rules! trivially_destructible {
    ($($t:ty),+ $(,)?) => {
        $(
            $crate::__private::static_assertions::const_assert!(!::core::mem::needs_drop::<$t>());
            impl $crate::Destruct for $t {
                type Policy = $crate::Trivial;
            }
        )+
    };
}

/// Declare types whose destructor has an effect.  Their containers get a destructor as well.
#[macro_export]
macro_rules! needs_destructor {
    ($($t:ty),+ $(,)?) => {
        $(
            $crate::__private::static_assertions::const_assert!(::core::mem::needs_drop::<$t>());
            impl $crate::Destruct for $t {
                type Policy = $crate::NonTrivial;
            }
        )+
    };
}

trivially_destructible!(
    (),
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
);

macro_rules! move_by_copy {
    ($($t:ty),+ $(,)?) => {
        $(
            impl MoveConstruct for $t {
                type NoPanicMove = True;
                type NoPanicSwap = True;

                #[inline(always)]
                fn move_construct(source: &mut $t) -> $t {
                    return *source;
                }

                #[inline(always)]
                fn move_assign(&mut self, source: &mut $t) {
                    *self = *source;
                }
            }
        )+
    };
}

move_by_copy!(
    (),
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
);

impl<T> MoveConstruct for Option<T> {
    type NoPanicMove = True;
    type NoPanicSwap = True;

    #[inline]
    fn move_construct(source: &mut Option<T>) -> Option<T> {
        return source.take();
    }

    #[inline]
    fn swap_values(a: &mut Option<T>, b: &mut Option<T>) {
        core::mem::swap(a, b);
    }
}

#[cfg(any(test, feature = "std"))]
mod std_impls {
    use super::Destruct;
    use super::MoveConstruct;
    use crate::meta::condition::True;
    use crate::optional::NonTrivial;

    impl Destruct for String {
        type Policy = NonTrivial;
    }

    impl<T> Destruct for Vec<T> {
        type Policy = NonTrivial;
    }

    impl<T: ?Sized> Destruct for Box<T> {
        type Policy = NonTrivial;
    }

    // Moved-from strings and vectors are left empty.
    impl MoveConstruct for String {
        type NoPanicMove = True;
        type NoPanicSwap = True;

        #[inline]
        fn move_construct(source: &mut String) -> String {
            return core::mem::take(source);
        }

        #[inline]
        fn swap_values(a: &mut String, b: &mut String) {
            core::mem::swap(a, b);
        }
    }

    impl<T> MoveConstruct for Vec<T> {
        type NoPanicMove = True;
        type NoPanicSwap = True;

        #[inline]
        fn move_construct(source: &mut Vec<T>) -> Vec<T> {
            return core::mem::take(source);
        }

        #[inline]
        fn swap_values(a: &mut Vec<T>, b: &mut Vec<T>) {
            core::mem::swap(a, b);
        }
    }
}
