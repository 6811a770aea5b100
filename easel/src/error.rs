// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Error returned when an [`Easel`](crate::Easel) cannot be constructed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InitError {
    /// The drawing surface could not be acquired.
    SurfaceUnavailable,
    /// The [`EaselSlot`](crate::EaselSlot) already holds a controller.
    AlreadyInitialized,
    /// An option is out of range; the payload names it.
    InvalidOptions(&'static str),
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SurfaceUnavailable => f.write_str("drawing surface is unavailable"),
            Self::AlreadyInitialized => f.write_str("easel has already been initialized"),
            Self::InvalidOptions(what) => write!(f, "invalid easel options: {what}"),
        }
    }
}

impl core::error::Error for InitError {}
