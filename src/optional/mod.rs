mod base;
mod dispatch;
mod error;
mod storage;

pub use base::OptionalBase;

pub use dispatch::DropOptional;
pub use dispatch::NullOpt;
pub use dispatch::Nullable;
pub use dispatch::Optional;
pub use dispatch::TrivialOptional;
pub use dispatch::NULL_OPT;

pub use error::BadOptionalAccess;

pub use storage::Destruction;
pub use storage::NonTrivial;
pub use storage::RawStorage;
pub use storage::Trivial;
