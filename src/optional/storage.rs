use core::mem::ManuallyDrop;
use core::ptr;

use core::ops::Deref;
use core::ops::DerefMut;

use crate::meta::capability::Destruct;
use crate::meta::condition::Bool;
use crate::meta::condition::False;
use crate::meta::condition::True;
use crate::optional::base::OptionalBase;
use crate::optional::dispatch::DropOptional;
use crate::optional::dispatch::Nullable;
use crate::optional::dispatch::NullOpt;
use crate::optional::dispatch::TrivialOptional;

/// Room for exactly one `T`, which may or may not be live.
/// The storage never runs `T`'s destructor by itself and does not know whether it holds a value;
/// that bookkeeping belongs to the owner.
pub union RawStorage<T> {
    value: ManuallyDrop<T>,
    empty: (),
}

impl<T> RawStorage<T> {
    #[inline(always)]
    pub const fn empty() -> RawStorage<T> {
        return RawStorage { empty: () };
    }

    #[inline(always)]
    pub const fn new(value: T) -> RawStorage<T> {
        return RawStorage {
            value: ManuallyDrop::new(value),
        };
    }

    #[inline(always)]
    pub fn cloned(value: &T) -> RawStorage<T>
    where
        T: Clone,
    {
        return RawStorage::new(value.clone());
    }

    /// The storage must hold a live value.
    #[inline(always)]
    pub const unsafe fn value(&self) -> &T {
        // `ManuallyDrop<T>` has the layout of `T`, and `Deref` is not usable in a `const fn`.
        return &*(&self.value as *const ManuallyDrop<T> as *const T);
    }

    /// The storage must hold a live value.
    #[inline(always)]
    pub unsafe fn value_mut(&mut self) -> &mut T {
        return &mut *self.value;
    }

    /// Bitwise copy of the live value.  Afterwards the caller owns it and the storage must be
    /// treated as empty.
    #[inline(always)]
    pub unsafe fn read(&self) -> T {
        return ptr::read(&*self.value);
    }

    /// The storage must be empty, a live value would be leaked.
    #[inline(always)]
    pub unsafe fn write(&mut self, value: T) {
        self.value = ManuallyDrop::new(value);
    }
}

impl<T: Copy> Clone for RawStorage<T> {
    #[inline(always)]
    fn clone(&self) -> RawStorage<T> {
        return *self;
    }
}

impl<T: Copy> Copy for RawStorage<T> {}

mod private {
    pub trait Sealed {}
}

/// How the value in a `RawStorage<T>` is torn down.  One of `Trivial` or `NonTrivial`.
pub trait Destruction<T>: private::Sealed + Sized {
    /// `True` when destroying a `T` has no effect, and so the container needs no destructor.
    type IsTrivial: Bool;
    /// The container type used for payloads with this policy.  Usable from code that only knows
    /// `T: Destruct`.
    type Optional: Nullable<Value = T>
        + Deref<Target = OptionalBase<T, Self>>
        + DerefMut
        + Default
        + From<NullOpt>;

    /// End the lifetime of the live value.  The storage must hold one, and is empty afterwards.
    unsafe fn destroy(storage: &mut RawStorage<T>);
}

/// Destruction with no observable effect.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Trivial;

/// Destruction that runs `T`'s destructor.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct NonTrivial;

impl private::Sealed for Trivial {}
impl private::Sealed for NonTrivial {}

// Only payloads declared trivial, the container for them never runs a destructor.
impl<T: Destruct<Policy = Trivial>> Destruction<T> for Trivial {
    type IsTrivial = True;
    type Optional = TrivialOptional<T>;

    #[inline(always)]
    unsafe fn destroy(_storage: &mut RawStorage<T>) {}
}

impl<T> Destruction<T> for NonTrivial {
    type IsTrivial = False;
    type Optional = DropOptional<T>;

    #[inline(always)]
    unsafe fn destroy(storage: &mut RawStorage<T>) {
        ManuallyDrop::drop(&mut storage.value);
    }
}

#[cfg(test)]
mod test;
