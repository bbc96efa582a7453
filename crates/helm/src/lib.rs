//! Umbrella crate that re-exports the `helm-*` building blocks.
//!
//! This crate is intended as a convenient entrypoint for hosts that want the
//! whole steering stack under one import.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

#[cfg(feature = "core")]
#[cfg_attr(docsrs, doc(cfg(feature = "core")))]
pub use helm_core as core;

#[cfg(feature = "nav")]
#[cfg_attr(docsrs, doc(cfg(feature = "nav")))]
pub use helm_nav as nav;
