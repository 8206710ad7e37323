use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("could not locate classfile {0}")]
    ClassNotFound(String),

    #[error("classfile '{name}' was incorrectly formatted (reason: {reason})")]
    ClassFormat { name: String, reason: String },

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

#[macro_export]
macro_rules! internal {
    ($msg:literal $(,)?) => {
        $crate::error::LoadError::Internal(anyhow::anyhow!($msg))
    };
    ($err:expr $(,)?) => {
        $crate::error::LoadError::Internal(anyhow::anyhow!($err))
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::LoadError::Internal(anyhow::anyhow!($fmt, $($arg)*))
    };
}

#[macro_export]
macro_rules! internalise {
    () => {
        |f| $crate::internal!(f)
    };
}
