use core::fmt;
use core::ops::Deref;
use core::ops::DerefMut;

use crate::meta::capability::ConstructFrom;
use crate::meta::capability::Destruct;
use crate::meta::capability::MoveConstruct;
use crate::meta::condition::Bool;
use crate::meta::condition::When;
use crate::optional::base::OptionalBase;
use crate::optional::error::BadOptionalAccess;
use crate::optional::storage::Destruction;
use crate::optional::storage::NonTrivial;
use crate::optional::storage::Trivial;

/// Stateless "no value" marker.  Converts into an empty container of any payload.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct NullOpt;

pub const NULL_OPT: NullOpt = NullOpt;

/// The container for `T`.  It is trivially destructible exactly when `T` is,
/// as declared by `T`'s `Destruct` impl.
pub type Optional<T> = <<T as Destruct>::Policy as Destruction<T>>::Optional;

/// The operations every container offers, so code generic over `T: Destruct` can build and
/// consume an `Optional<T>`.  The observers are reached through `Deref` to `OptionalBase`.
pub trait Nullable: Sized {
    /// The payload type.
    type Value;
    /// Whether the container itself has no destructor.  Follows the payload.
    const TRIVIALLY_DESTRUCTIBLE: bool;

    fn null() -> Self;
    fn new(value: Self::Value) -> Self;
    fn into_value(self) -> Result<Self::Value, BadOptionalAccess>;
}

/// Container for payloads with no drop glue.  Has no destructor, and is `Copy` when `T` is.
pub struct TrivialOptional<T>(OptionalBase<T, Trivial>);

/// Container for payloads whose destructor matters.  Dropping it destroys the value, if any.
pub struct DropOptional<T>(OptionalBase<T, NonTrivial>);

impl<T> Drop for DropOptional<T> {
    #[inline]
    fn drop(&mut self) {
        self.0.reset();
    }
}

impl<T: Destruct<Policy = Trivial> + Clone> Clone for TrivialOptional<T> {
    #[inline]
    fn clone(&self) -> TrivialOptional<T> {
        return TrivialOptional(OptionalBase::copy_from(&self.0));
    }
}

impl<T: Destruct<Policy = Trivial> + Copy> Copy for TrivialOptional<T> {}

impl<T: Clone> Clone for DropOptional<T> {
    #[inline]
    fn clone(&self) -> DropOptional<T> {
        return DropOptional(OptionalBase::copy_from(&self.0));
    }
}

/// Implicit conversions into `$shell` from a container of `U`, present only when the payload
/// conversion is implicit.  The explicit forms are `convert_from` and `convert_move_from`.
macro_rules! implicit_conversions {
    ($shell:ident, [$($bound:tt)+], $source:ident) => {
        impl<'a, T: $($bound)+, U> From<&'a $source<U>> for $shell<T>
        where
            T: ConstructFrom<&'a U>,
            <T as ConstructFrom<&'a U>>::Implicit: When,
        {
            #[inline]
            fn from(other: &'a $source<U>) -> $shell<T> {
                return $shell(OptionalBase::convert_from(&other.0));
            }
        }

        impl<'a, T: $($bound)+, U> From<&'a mut $source<U>> for $shell<T>
        where
            U: MoveConstruct,
            T: ConstructFrom<U>,
            <T as ConstructFrom<U>>::Implicit: When,
        {
            #[inline]
            fn from(other: &'a mut $source<U>) -> $shell<T> {
                return $shell(OptionalBase::convert_move_from(&mut other.0));
            }
        }
    };
}

macro_rules! shell {
    ($shell:ident, $policy:ident, [$($bound:tt)+]) => {
        impl<T: $($bound)+> $shell<T> {
            #[inline(always)]
            pub const fn null() -> $shell<T> {
                return $shell(OptionalBase::null());
            }

            #[inline(always)]
            pub const fn new(value: T) -> $shell<T> {
                return $shell(OptionalBase::new(value));
            }

            /// The same as `Deref`, but usable in constant expressions.
            #[inline(always)]
            pub const fn as_base(&self) -> &OptionalBase<T, $policy> {
                return &self.0;
            }

            /// Build the value from `arg`.  Always spelled out, the only implicit value
            /// forwarding is `From<T>`.
            #[inline]
            pub fn from_value<A>(arg: A) -> $shell<T>
            where
                T: ConstructFrom<A>,
            {
                return $shell(OptionalBase::from_value(arg));
            }

            /// Move construction.  `other` stays engaged if it was, holding a moved-from value.
            #[inline]
            pub fn move_from(other: &mut $shell<T>) -> $shell<T>
            where
                T: MoveConstruct,
            {
                return $shell(OptionalBase::move_from(&mut other.0));
            }

            /// Converting copy from a container of `U`.
            #[inline]
            pub fn convert_from<'a, U: 'a, Q>(other: &'a OptionalBase<U, Q>) -> $shell<T>
            where
                T: ConstructFrom<&'a U>,
            {
                return $shell(OptionalBase::convert_from(other));
            }

            /// Converting move from a container of `U`.  `other` keeps a moved-from `U`.
            #[inline]
            pub fn convert_move_from<U, Q>(other: &mut OptionalBase<U, Q>) -> $shell<T>
            where
                U: MoveConstruct,
                T: ConstructFrom<U>,
            {
                return $shell(OptionalBase::convert_move_from(other));
            }

            /// True when there is no `From<&Optional<U>>`, only `convert_from`.
            #[inline(always)]
            pub fn is_explicit_convert_from<'a, U: 'a>() -> bool
            where
                T: ConstructFrom<&'a U>,
            {
                return OptionalBase::<T, $policy>::is_explicit_convert_from::<U>();
            }

            /// True when there is no `From<&mut Optional<U>>`, only `convert_move_from`.
            #[inline(always)]
            pub fn is_explicit_convert_move_from<U>() -> bool
            where
                T: ConstructFrom<U>,
            {
                return OptionalBase::<T, $policy>::is_explicit_convert_move_from::<U>();
            }

            #[inline(always)]
            pub fn swap_never_panics() -> bool
            where
                T: MoveConstruct,
            {
                return OptionalBase::<T, $policy>::swap_never_panics();
            }

            /// Checked access by value.
            #[inline]
            pub fn into_value(mut self) -> Result<T, BadOptionalAccess> {
                return self.0.take_value();
            }
        }

        impl<T: $($bound)+> Nullable for $shell<T> {
            type Value = T;
            const TRIVIALLY_DESTRUCTIBLE: bool =
                <<$policy as Destruction<T>>::IsTrivial as Bool>::VALUE;

            #[inline(always)]
            fn null() -> $shell<T> {
                return $shell::null();
            }

            #[inline(always)]
            fn new(value: T) -> $shell<T> {
                return $shell::new(value);
            }

            #[inline]
            fn into_value(self) -> Result<T, BadOptionalAccess> {
                return $shell::into_value(self);
            }
        }

        impl<T> Deref for $shell<T> {
            type Target = OptionalBase<T, $policy>;

            #[inline(always)]
            fn deref(&self) -> &OptionalBase<T, $policy> {
                return &self.0;
            }
        }

        impl<T> DerefMut for $shell<T> {
            #[inline(always)]
            fn deref_mut(&mut self) -> &mut OptionalBase<T, $policy> {
                return &mut self.0;
            }
        }

        impl<T: $($bound)+> Default for $shell<T> {
            #[inline(always)]
            fn default() -> $shell<T> {
                return $shell::null();
            }
        }

        impl<T: $($bound)+> From<NullOpt> for $shell<T> {
            #[inline(always)]
            fn from(_: NullOpt) -> $shell<T> {
                return $shell::null();
            }
        }

        // NullOpt has no `Destruct` impl, which keeps this apart from `From<NullOpt>`.
        impl<T: $($bound)+> From<T> for $shell<T>
        where
            T: Destruct,
        {
            #[inline(always)]
            fn from(value: T) -> $shell<T> {
                return $shell::new(value);
            }
        }

        impl<T: fmt::Debug> fmt::Debug for $shell<T>
        where
            $policy: Destruction<T>,
        {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                return fmt::Debug::fmt(&self.0, f);
            }
        }

        implicit_conversions!($shell, [$($bound)+], TrivialOptional);
        implicit_conversions!($shell, [$($bound)+], DropOptional);
    };
}

shell!(TrivialOptional, Trivial, [Destruct<Policy = Trivial>]);
shell!(DropOptional, NonTrivial, [Sized]);
