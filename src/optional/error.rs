use thiserror::Error;

/// Checked access to a container that holds no value.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Error)]
#[error("Value not set")]
pub struct BadOptionalAccess;
