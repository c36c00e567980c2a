//! Diff descriptors returned by timeline mutations.
//!
//! Every mutating operation reports how the element list changed so that a
//! view can animate rows instead of reloading. A [`Diff::Update`] carries three
//! index lists which are only meaningful when applied in a fixed order:
//!
//! 1. `deleted`: indices into the *previous* element list, removed
//! 2. `inserted`: indices into the *new* element list, inserted in ascending order
//! 3. `updated`: indices into the *new* element list, refreshed in place
//!
//! Applying them in any other order produces wrong row positions.

use serde::{Deserialize, Serialize};

use crate::timeline::element::Element;
use crate::timeline::types::TimelineEvent;

/// The result of a timeline mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Diff {
    /// Discard everything and redraw from the current elements
    Reload,
    /// Apply the given changes incrementally
    Update(Changes),
}

/// Positional changes, applied delete → insert → update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Changes {
    /// Indices removed from the previous state
    pub deleted: Vec<usize>,
    /// Indices inserted into the new state
    pub inserted: Vec<usize>,
    /// Indices refreshed in the new state
    pub updated: Vec<usize>,
}

impl Changes {
    /// Creates a change set from its three index lists
    pub fn new(deleted: Vec<usize>, inserted: Vec<usize>, updated: Vec<usize>) -> Self {
        Changes {
            deleted,
            inserted,
            updated,
        }
    }

    /// Creates a change set that only inserts rows
    pub fn insertions(inserted: impl IntoIterator<Item = usize>) -> Self {
        Changes {
            inserted: inserted.into_iter().collect(),
            ..Changes::default()
        }
    }

    /// Returns true if no index is touched.
    pub fn is_empty(&self) -> bool {
        self.deleted.is_empty() && self.inserted.is_empty() && self.updated.is_empty()
    }

    /// Net change in row count once applied.
    pub fn row_delta(&self) -> isize {
        self.inserted.len() as isize - self.deleted.len() as isize
    }

    /// Replays these changes on a view mirroring the previous element list.
    ///
    /// `current` is the element list after the mutation; `render` builds a row
    /// for an inserted or updated element.
    ///
    /// # Panics
    ///
    /// Panics if an index is out of range for `view` or `current`, which means
    /// the view was not in sync with the timeline before the mutation.
    pub fn apply<E, T, F>(&self, view: &mut Vec<T>, current: &[Element<E>], mut render: F)
    where
        E: TimelineEvent,
        F: FnMut(&Element<E>) -> T,
    {
        let mut deleted = self.deleted.clone();
        deleted.sort_unstable();
        deleted.dedup();
        // Highest first so earlier removals do not shift later ones
        for &index in deleted.iter().rev() {
            view.remove(index);
        }

        let mut inserted = self.inserted.clone();
        inserted.sort_unstable();
        inserted.dedup();
        for &index in &inserted {
            view.insert(index, render(&current[index]));
        }

        for &index in &self.updated {
            view[index] = render(&current[index]);
        }
    }
}

impl Diff {
    /// Returns true if this is a full reload.
    pub fn is_reload(&self) -> bool {
        matches!(self, Diff::Reload)
    }

    /// Returns the incremental changes, if any.
    pub fn changes(&self) -> Option<&Changes> {
        match self {
            Diff::Reload => None,
            Diff::Update(changes) => Some(changes),
        }
    }

    /// Brings a view in sync with `current` according to this diff.
    ///
    /// See [`Changes::apply`] for the incremental case; a reload rebuilds the
    /// whole view.
    pub fn apply<E, T, F>(&self, view: &mut Vec<T>, current: &[Element<E>], mut render: F)
    where
        E: TimelineEvent,
        F: FnMut(&Element<E>) -> T,
    {
        match self {
            Diff::Reload => {
                view.clear();
                view.extend(current.iter().map(&mut render));
            }
            Diff::Update(changes) => changes.apply(view, current, render),
        }
    }
}
