use core::fmt;
use core::marker::PhantomData;

use crate::meta::capability::ConstructFrom;
use crate::meta::capability::MoveConstruct;
use crate::meta::condition::AllOf;
use crate::meta::condition::Bool;
use crate::meta::condition::Not;
use crate::optional::error::BadOptionalAccess;
use crate::optional::storage::Destruction;
use crate::optional::storage::RawStorage;

/// Zero or one `T`.  The value in `storage` is live if and only if `engaged` is set.
///
/// `P` decides how the value is destroyed.  This type has no destructor of its own; the shells in
/// `dispatch` add one when `P` needs it, and are the only way to build an `OptionalBase`.
pub struct OptionalBase<T, P> {
    engaged: bool,
    storage: RawStorage<T>,
    policy: PhantomData<P>,
}

impl<T, P: Destruction<T>> OptionalBase<T, P> {
    #[inline(always)]
    pub(crate) const fn null() -> OptionalBase<T, P> {
        return OptionalBase {
            engaged: false,
            storage: RawStorage::empty(),
            policy: PhantomData,
        };
    }

    #[inline(always)]
    pub(crate) const fn new(value: T) -> OptionalBase<T, P> {
        return OptionalBase {
            engaged: true,
            storage: RawStorage::new(value),
            policy: PhantomData,
        };
    }

    #[inline]
    pub(crate) fn from_value<A>(arg: A) -> OptionalBase<T, P>
    where
        T: ConstructFrom<A>,
    {
        return OptionalBase::new(T::construct_from(arg));
    }

    pub(crate) fn copy_from(other: &OptionalBase<T, P>) -> OptionalBase<T, P>
    where
        T: Clone,
    {
        if !other.engaged {
            return OptionalBase::null();
        }
        return OptionalBase {
            engaged: true,
            storage: RawStorage::cloned(unsafe { other.storage.value() }),
            policy: PhantomData,
        };
    }

    /// The source keeps its value, in whatever state `T::move_construct` leaves it.
    pub(crate) fn move_from(other: &mut OptionalBase<T, P>) -> OptionalBase<T, P>
    where
        T: MoveConstruct,
    {
        if !other.engaged {
            return OptionalBase::null();
        }
        return OptionalBase::new(T::move_construct(unsafe { other.storage.value_mut() }));
    }

    pub(crate) fn convert_from<'a, U: 'a, Q>(other: &'a OptionalBase<U, Q>) -> OptionalBase<T, P>
    where
        T: ConstructFrom<&'a U>,
    {
        if !other.engaged {
            return OptionalBase::null();
        }
        return OptionalBase::new(T::construct_from(unsafe { other.storage.value() }));
    }

    /// Like `move_from`, the source stays engaged with a moved-from `U`.
    pub(crate) fn convert_move_from<U, Q>(other: &mut OptionalBase<U, Q>) -> OptionalBase<T, P>
    where
        U: MoveConstruct,
        T: ConstructFrom<U>,
    {
        if !other.engaged {
            return OptionalBase::null();
        }
        let moved = U::move_construct(unsafe { other.storage.value_mut() });
        return OptionalBase::new(T::construct_from(moved));
    }

    /// Whether the converting copy from a container of `U` has to be spelled out.
    /// Decided by the payload conversion alone.
    #[inline(always)]
    pub(crate) fn is_explicit_convert_from<'a, U: 'a>() -> bool
    where
        T: ConstructFrom<&'a U>,
    {
        return <Not<<T as ConstructFrom<&'a U>>::Implicit> as Bool>::VALUE;
    }

    #[inline(always)]
    pub(crate) fn is_explicit_convert_move_from<U>() -> bool
    where
        T: ConstructFrom<U>,
    {
        return <Not<<T as ConstructFrom<U>>::Implicit> as Bool>::VALUE;
    }

    /// `swap` cannot panic when neither moving nor swapping `T` can.
    #[inline(always)]
    pub(crate) fn swap_never_panics() -> bool
    where
        T: MoveConstruct,
    {
        return <AllOf<(T::NoPanicMove, T::NoPanicSwap)> as Bool>::VALUE;
    }

    #[inline(always)]
    pub const fn has_value(&self) -> bool {
        return self.engaged;
    }

    /// Reference to the value without checking for one.
    ///
    /// # Safety
    /// The container must be engaged.
    #[inline(always)]
    pub const unsafe fn get_unchecked(&self) -> &T {
        debug_assert!(self.engaged);
        return self.storage.value();
    }

    /// # Safety
    /// The container must be engaged.
    #[inline(always)]
    pub unsafe fn get_unchecked_mut(&mut self) -> &mut T {
        debug_assert!(self.engaged);
        return self.storage.value_mut();
    }

    #[inline]
    pub const fn value(&self) -> Result<&T, BadOptionalAccess> {
        if !self.engaged {
            return Err(BadOptionalAccess);
        }
        return Ok(unsafe { self.storage.value() });
    }

    #[inline]
    pub fn value_mut(&mut self) -> Result<&mut T, BadOptionalAccess> {
        if !self.engaged {
            return Err(BadOptionalAccess);
        }
        return Ok(unsafe { self.storage.value_mut() });
    }

    /// Moves the value out, leaving the container disengaged.  Nothing is destroyed.
    #[inline]
    pub fn take_value(&mut self) -> Result<T, BadOptionalAccess> {
        if !self.engaged {
            return Err(BadOptionalAccess);
        }
        self.engaged = false;
        return Ok(unsafe { self.storage.read() });
    }

    /// Destroys the value, if there is one.
    pub fn reset(&mut self) {
        if !self.engaged {
            return;
        }
        tracing::trace!("optional reset: destroying contained value");
        // Flag drops first, a destructor that panics must never be run a second time.
        self.engaged = false;
        unsafe {
            P::destroy(&mut self.storage);
        }
    }

    /// Exchange contents with `other`.
    ///
    /// When only one side is engaged its value is move-constructed into the other side first,
    /// and only then destroyed.  If `T::move_construct` panics both sides keep their flags and
    /// the source value is left in whatever state the panic produced; nothing is rolled back.
    pub fn swap(&mut self, other: &mut OptionalBase<T, P>)
    where
        T: MoveConstruct,
    {
        match (self.engaged, other.engaged) {
            (false, false) => {
                tracing::trace!("optional swap: both empty");
            }
            (true, true) => {
                tracing::trace!("optional swap: exchanging values");
                unsafe {
                    T::swap_values(self.storage.value_mut(), other.storage.value_mut());
                }
            }
            (false, true) => {
                tracing::trace!("optional swap: taking value from other");
                unsafe {
                    let moved = T::move_construct(other.storage.value_mut());
                    self.storage.write(moved);
                    self.engaged = true;
                    other.engaged = false;
                    P::destroy(&mut other.storage);
                }
            }
            (true, false) => {
                tracing::trace!("optional swap: giving value to other");
                unsafe {
                    let moved = T::move_construct(self.storage.value_mut());
                    other.storage.write(moved);
                    other.engaged = true;
                    self.engaged = false;
                    P::destroy(&mut self.storage);
                }
            }
        }
    }
}

impl<T: Copy, P: Copy> Clone for OptionalBase<T, P> {
    #[inline(always)]
    fn clone(&self) -> OptionalBase<T, P> {
        return *self;
    }
}

impl<T: Copy, P: Copy> Copy for OptionalBase<T, P> {}

impl<T: fmt::Debug, P: Destruction<T>> fmt::Debug for OptionalBase<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value() {
            Ok(value) => return f.debug_tuple("Optional").field(value).finish(),
            Err(_) => return f.write_str("NullOpt"),
        }
    }
}
