#![cfg_attr(not(any(test, feature = "std")), no_std)]

//! A nullable value container built on manually managed storage.
//!
//! `Optional<T>` holds zero or one `T`.  Which constructors exist for a payload, and whether the
//! container needs a destructor at all, is decided at compile time from the payload's
//! capabilities (`Destruct`, `MoveConstruct`, `ConstructFrom`, `Clone`).

pub mod meta;
pub mod optional;

#[cfg(test)]
mod testing;

pub use meta::capability::ConstructFrom;
pub use meta::capability::Destruct;
pub use meta::capability::MoveConstruct;

pub use optional::BadOptionalAccess;
pub use optional::Destruction;
pub use optional::DropOptional;
pub use optional::NonTrivial;
pub use optional::NullOpt;
pub use optional::Nullable;
pub use optional::Optional;
pub use optional::OptionalBase;
pub use optional::RawStorage;
pub use optional::Trivial;
pub use optional::TrivialOptional;
pub use optional::NULL_OPT;

#[doc(hidden)]
pub mod __private {
    pub use static_assertions;
}
