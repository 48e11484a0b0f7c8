//! Java runtimes available as UBI packages and pre-built run images

pub mod jvm;

pub use jvm::{lookup, UbiJavaRuntime};
