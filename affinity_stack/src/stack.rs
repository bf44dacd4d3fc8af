// Copyright 2025 the Affinity Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use affinity_matrix::Matrix;
use smallvec::SmallVec;

use crate::{StackError, Transform};

/// Most stacks hold a handful of transforms, so keep that many inline.
const INLINE_CAPACITY: usize = 8;

/// Stable identifier of a stack entry.
///
/// Ids are handed out by the [`TransformStack`] that created the entry and are
/// never reused by that stack. They are meaningless across stacks.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TransformId(u64);

impl TransformId {
    /// Returns the raw counter value.
    #[must_use]
    #[inline]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for TransformId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TransformId").field(&self.0).finish()
    }
}

impl fmt::Display for TransformId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One entry of a [`TransformStack`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StackEntry {
    id: TransformId,
    transform: Transform,
}

impl StackEntry {
    /// The entry's id.
    #[must_use]
    pub fn id(&self) -> TransformId {
        self.id
    }

    /// The entry's transform.
    #[must_use]
    pub fn transform(&self) -> Transform {
        self.transform
    }

    /// Shorthand for `self.transform().to_matrix()`.
    #[must_use]
    pub fn matrix(&self) -> Matrix {
        self.transform.to_matrix()
    }
}

/// An ordered, never-empty list of transforms.
///
/// Entries compose left to right in list order: the composed matrix is
/// `compose_all(entries)`, so the **last** entry is applied to a point first,
/// as in a CSS transform list.
///
/// Raw [`Transform::Matrix`] values are [rounded](Transform::rounded) on the
/// way in. Every successful edit bumps [`TransformStack::revision`], which
/// callers can compare to skip recomposing an unchanged stack.
#[derive(Clone, Debug)]
pub struct TransformStack {
    entries: SmallVec<[StackEntry; INLINE_CAPACITY]>,
    next_id: u64,
    revision: u64,
}

impl TransformStack {
    /// Creates a stack holding a single identity entry.
    #[must_use]
    pub fn new() -> Self {
        let mut stack = Self {
            entries: SmallVec::new(),
            next_id: 0,
            revision: 0,
        };
        let entry = stack.make_entry(Transform::IDENTITY);
        stack.entries.push(entry);
        stack
    }

    /// Number of entries; never zero.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`: a stack keeps at least one entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Counter bumped by every successful edit.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// The entry at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&StackEntry> {
        self.entries.get(index)
    }

    /// Current index of the entry with `id`.
    #[must_use]
    pub fn position(&self, id: TransformId) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    /// Entries in composition order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &StackEntry> + '_ {
        self.entries.iter()
    }

    /// Appends `transform` and returns its new id.
    pub fn push(&mut self, transform: Transform) -> TransformId {
        let entry = self.make_entry(transform);
        self.entries.push(entry);
        self.touch();
        entry.id
    }

    /// Inserts `transform` immediately before the entry with id `before`.
    pub fn insert_before(
        &mut self,
        before: TransformId,
        transform: Transform,
    ) -> Result<TransformId, StackError> {
        let index = self.position(before).ok_or(StackError::UnknownId(before))?;
        let entry = self.make_entry(transform);
        self.entries.insert(index, entry);
        self.touch();
        Ok(entry.id)
    }

    /// Replaces the transform at `index`, keeping its id.
    pub fn update(&mut self, index: usize, transform: Transform) -> Result<(), StackError> {
        let len = self.len();
        let entry = self
            .entries
            .get_mut(index)
            .ok_or(StackError::IndexOutOfRange { index, len })?;
        entry.transform = transform.rounded();
        self.touch();
        Ok(())
    }

    /// Removes and returns the entry at `index`.
    ///
    /// Removing the only entry leaves a fresh identity entry with a new id.
    pub fn remove(&mut self, index: usize) -> Result<StackEntry, StackError> {
        self.check_index(index)?;
        let removed = self.entries.remove(index);
        if self.entries.is_empty() {
            let entry = self.make_entry(Transform::IDENTITY);
            self.entries.push(entry);
        }
        self.touch();
        Ok(removed)
    }

    /// Swaps the entries at `from` and `to`.
    ///
    /// Returns `Ok(false)` without changing anything when `from == to` or
    /// `to` is out of range, which lets callers move the first entry "up" or
    /// the last entry "down" without checking. `from` must be in range.
    pub fn move_entry(&mut self, from: usize, to: usize) -> Result<bool, StackError> {
        self.check_index(from)?;
        if from == to || to >= self.len() {
            return Ok(false);
        }
        self.entries.swap(from, to);
        self.touch();
        Ok(true)
    }

    /// Resets to a single identity entry.
    pub fn clear(&mut self) {
        self.entries.clear();
        let entry = self.make_entry(Transform::IDENTITY);
        self.entries.push(entry);
        self.touch();
    }

    /// All entries composed in order.
    #[must_use]
    pub fn composed(&self) -> Matrix {
        Matrix::compose_all(self.entries.iter().map(StackEntry::matrix))
    }

    /// Running compositions: item `i` composes entries `0..=i`.
    ///
    /// The last item equals [`TransformStack::composed`].
    pub fn intermediates(&self) -> impl Iterator<Item = Matrix> + '_ {
        self.entries.iter().scan(Matrix::IDENTITY, |acc, entry| {
            *acc = Matrix::compose(*acc, entry.matrix());
            Some(*acc)
        })
    }

    fn make_entry(&mut self, transform: Transform) -> StackEntry {
        let id = TransformId(self.next_id);
        self.next_id += 1;
        StackEntry {
            id,
            transform: transform.rounded(),
        }
    }

    fn check_index(&self, index: usize) -> Result<(), StackError> {
        if index < self.len() {
            Ok(())
        } else {
            Err(StackError::IndexOutOfRange {
                index,
                len: self.len(),
            })
        }
    }

    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl Default for TransformStack {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a TransformStack {
    type Item = &'a StackEntry;
    type IntoIter = core::slice::Iter<'a, StackEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
