// SPDX-License-Identifier: Apache-2.0

use alloc::vec::Vec;

use crate::parse_error::ParseError;

/// A recorded stack height. Everything pushed after the mark can be
/// committed or rolled back as one unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mark(usize);

/// Transient growable stack used while parsing one document.
///
/// Strings stage their decoded bytes here and arrays/objects stage their
/// children here until the closing delimiter is seen. Nothing is allocated
/// until the first push. Capacity grows by at least half of the current
/// capacity whenever a push would not fit, and growth failure is reported as
/// [`ParseError::OutOfMemory`] instead of aborting.
#[derive(Debug)]
pub struct ScratchStack<T> {
    items: Vec<T>,
    initial_capacity: usize,
}

impl<T> ScratchStack<T> {
    pub fn new(initial_capacity: usize) -> Self {
        Self {
            items: Vec::new(),
            initial_capacity: initial_capacity.max(1),
        }
    }

    pub fn height(&self) -> usize {
        self.items.len()
    }

    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    pub fn mark(&self) -> Mark {
        Mark(self.items.len())
    }

    /// Items pushed since `mark`.
    pub fn above(&self, mark: Mark) -> &[T] {
        self.items.get(mark.0..).unwrap_or(&[])
    }

    fn reserve_for(&mut self, additional: usize) -> Result<(), ParseError> {
        let needed = self
            .items
            .len()
            .checked_add(additional)
            .ok_or(ParseError::OutOfMemory)?;
        let capacity = self.capacity();
        if needed <= capacity {
            return Ok(());
        }
        let target = needed
            .max(capacity.saturating_add(capacity.div_ceil(2)))
            .max(self.initial_capacity);
        log::trace!("scratch stack grows from {capacity} to {target}");
        self.items.try_reserve_exact(target - self.items.len())?;
        Ok(())
    }

    /// Frees the backing storage. The next push allocates afresh.
    pub fn release(&mut self) {
        debug_assert!(self.items.is_empty(), "release with staged items");
        self.items = Vec::new();
    }

    pub fn push(&mut self, item: T) -> Result<(), ParseError> {
        self.reserve_for(1)?;
        self.items.push(item);
        Ok(())
    }

    /// Drops everything pushed since `mark`.
    pub fn rollback(&mut self, mark: Mark) {
        debug_assert!(mark.0 <= self.items.len(), "rollback past stack height");
        self.items.truncate(mark.0);
    }

    /// Moves everything pushed since `mark` into a new, exactly sized vector
    /// and restores the height to `mark`.
    ///
    /// On allocation failure the items are dropped and the height is still
    /// restored.
    pub fn commit(&mut self, mark: Mark) -> Result<Vec<T>, ParseError> {
        debug_assert!(mark.0 <= self.items.len(), "commit past stack height");
        let start = mark.0.min(self.items.len());
        let mut committed = Vec::new();
        if let Err(err) = committed.try_reserve_exact(self.items.len() - start) {
            self.rollback(mark);
            return Err(err.into());
        }
        committed.extend(self.items.drain(start..));
        Ok(committed)
    }
}

impl<T: Copy> ScratchStack<T> {
    pub fn extend_from_slice(&mut self, items: &[T]) -> Result<(), ParseError> {
        self.reserve_for(items.len())?;
        self.items.extend_from_slice(items);
        Ok(())
    }
}
