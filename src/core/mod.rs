//! Core decode pipeline.
//!
//! This module contains the reusable logic for turning a serialized secret
//! into the same document with its `data` map decoded into `stringData`.

pub mod document;
pub mod format;
pub mod input;
pub mod kubectl;
pub mod secret;
pub mod transform;
