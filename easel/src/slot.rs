// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use tracing::warn;

use crate::{Easel, InitError, Options, Surface};

/// Holder enforcing that an application builds its easel once.
///
/// ```
/// use easel::{EaselSlot, InitError, Options, RecordingSurface};
///
/// let mut slot = EaselSlot::new();
/// slot.init(RecordingSurface::new(), Options::default()).unwrap();
/// assert_eq!(
///     slot.init(RecordingSurface::new(), Options::default()).unwrap_err(),
///     InitError::AlreadyInitialized,
/// );
/// ```
#[derive(Debug)]
pub struct EaselSlot<S> {
    easel: Option<Easel<S>>,
}

impl<S> Default for EaselSlot<S> {
    fn default() -> Self {
        Self { easel: None }
    }
}

impl<S> EaselSlot<S> {
    /// An empty slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` once [`EaselSlot::init`] has succeeded.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.easel.is_some()
    }

    /// The easel, if built.
    #[must_use]
    pub fn get(&self) -> Option<&Easel<S>> {
        self.easel.as_ref()
    }

    /// The easel, mutably, if built.
    pub fn get_mut(&mut self) -> Option<&mut Easel<S>> {
        self.easel.as_mut()
    }

    /// Empties the slot, handing back the easel.
    pub fn take(&mut self) -> Option<Easel<S>> {
        self.easel.take()
    }
}

impl<S: Surface> EaselSlot<S> {
    /// Builds the easel and stores it.
    ///
    /// Fails with [`InitError::AlreadyInitialized`] if the slot is occupied,
    /// or with whatever [`Easel::new`] reports.
    pub fn init(&mut self, surface: S, options: Options) -> Result<&mut Easel<S>, InitError> {
        if self.easel.is_some() {
            warn!("easel is already initialized");
            return Err(InitError::AlreadyInitialized);
        }
        let easel = Easel::new(surface, options)?;
        Ok(self.easel.insert(easel))
    }
}
