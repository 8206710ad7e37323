#![allow(clippy::new_without_default)]

pub mod classpath;
pub mod error;
pub mod object;
pub mod security;
