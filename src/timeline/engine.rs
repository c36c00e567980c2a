//! Core timeline merge engine.
//!
//! This module contains the Timeline struct and its merge operations. The
//! timeline keeps events in strictly descending id order (index 0 is the most
//! recent) with gap markers between runs of events that are not contiguous.

use tracing::debug;

use crate::timeline::diff::{Changes, Diff};
use crate::timeline::element::Element;
use crate::timeline::types::{TimelineError, TimelineEvent};

/// An ordered, gap-aware sequence of events.
///
/// The Timeline is the model behind an infinite-scroll view. New batches are
/// merged at the head ([`prepend`](Timeline::prepend)), at the tail
/// ([`append`](Timeline::append)) or into a gap ([`expand`](Timeline::expand)),
/// and each merge reports a [`Diff`] describing exactly which rows changed.
///
/// # Design
///
/// - A plain `Vec` of elements, since every diff is expressed in positions
/// - Events are deduplicated by id only, the existing copy wins
/// - The first and last element are always events
/// - Operations that change nothing return `None`
/// - A gap found where an event is required is a broken invariant and panics
///
/// The timeline is single-writer: callers must serialize every mutation and
/// apply each returned diff before issuing the next one.
#[derive(Debug, Clone)]
pub struct Timeline<E: TimelineEvent> {
    /// The rows in display order, most recent first
    elements: Vec<Element<E>>,
}

impl<E: TimelineEvent> Default for Timeline<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: TimelineEvent> Timeline<E> {
    /// Creates a new, empty timeline.
    pub fn new() -> Self {
        Timeline {
            elements: Vec::new(),
        }
    }

    /// Returns the elements in display order.
    pub fn elements(&self) -> &[Element<E>] {
        &self.elements
    }

    /// Gets the number of elements, gaps included.
    pub fn number_of_elements(&self) -> usize {
        self.elements.len()
    }

    /// Returns true if the timeline holds no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Gets the number of events, gaps excluded.
    pub fn event_count(&self) -> usize {
        self.elements.iter().filter(|el| el.is_event()).count()
    }

    /// Iterates over the gaps as `(index, boundary)` pairs.
    pub fn gaps(&self) -> impl Iterator<Item = (usize, E::Id)> + '_ {
        self.elements
            .iter()
            .enumerate()
            .filter_map(|(index, el)| el.gap_boundary().map(|boundary| (index, boundary)))
    }

    /// Iterates over the events in display order.
    pub fn events(&self) -> impl Iterator<Item = &E> + '_ {
        self.elements.iter().filter_map(Element::as_event)
    }

    /// Returns the id of the most recent event.
    ///
    /// # Panics
    ///
    /// Panics if the timeline is empty or starts with a gap.
    pub fn max_id(&self) -> E::Id {
        match self.try_max_id() {
            Ok(id) => id,
            Err(err) => panic!("max_id on malformed timeline: {err}"),
        }
    }

    /// Returns the id of the oldest event.
    ///
    /// # Panics
    ///
    /// Panics if the timeline is empty or ends with a gap.
    pub fn min_id(&self) -> E::Id {
        match self.try_min_id() {
            Ok(id) => id,
            Err(err) => panic!("min_id on malformed timeline: {err}"),
        }
    }

    /// Returns the id of the most recent event, or why there is none.
    pub fn try_max_id(&self) -> Result<E::Id, TimelineError> {
        let first = self.elements.first().ok_or(TimelineError::Empty)?;
        first.event_id().ok_or(TimelineError::GapAtBoundary(0))
    }

    /// Returns the id of the oldest event, or why there is none.
    pub fn try_min_id(&self) -> Result<E::Id, TimelineError> {
        let last = self.elements.last().ok_or(TimelineError::Empty)?;
        last.event_id().ok_or(TimelineError::GapAtBoundary(self.elements.len() - 1))
    }

    /// Replaces the whole content with `events`.
    ///
    /// Pass `sort = true` unless the events are already ordered newest first.
    /// Never introduces a gap and always reports a full reload.
    pub fn reset<I>(&mut self, events: I, sort: bool) -> Diff
    where
        I: IntoIterator<Item = E>,
    {
        let mut events: Vec<E> = events.into_iter().collect();
        if sort {
            sort_newest_first(&mut events);
        }

        debug!(count = events.len(), sorted = sort, "reset timeline");
        self.elements = events.into_iter().map(Element::Event).collect();
        Diff::Reload
    }

    /// Adds events newer than the current head.
    ///
    /// If the whole batch is newer than the head, a gap is inserted between the
    /// batch and the existing events since nothing is known about the ids in
    /// between. If the batch overlaps the head, only the strictly newer events
    /// are kept and no gap is created. A batch whose newest event is not newer
    /// than the head is dropped. An empty timeline is reset to the batch,
    /// whatever its size.
    ///
    /// # Panics
    ///
    /// Panics if the timeline starts with a gap.
    pub fn prepend<I>(&mut self, events: I, sort: bool) -> Option<Diff>
    where
        I: IntoIterator<Item = E>,
    {
        let mut events: Vec<E> = events.into_iter().collect();
        if self.elements.is_empty() {
            return Some(self.reset(events, sort));
        }

        let first_existing = self.boundary_event(0).id();
        if sort {
            sort_newest_first(&mut events);
        }
        if events.is_empty() {
            debug!("prepend skipped: empty batch");
            return None;
        }

        let first_new = events[0].id();
        let last_new = events[events.len() - 1].id();
        if first_new <= first_existing {
            debug!(
                first_new = ?first_new,
                head = ?first_existing,
                "prepend skipped: batch not newer than head"
            );
            return None;
        }

        let (front, inserted) = if last_new > first_existing {
            let count = events.len();
            let mut front: Vec<Element<E>> = events.into_iter().map(Element::Event).collect();
            front.push(Element::Gap(last_new));
            debug!(count, gap = ?last_new, "prepend opened gap");
            (front, Changes::insertions(0..=count))
        } else {
            let front: Vec<Element<E>> = events
                .into_iter()
                .filter(|event| event.id() > first_existing)
                .map(Element::Event)
                .collect();
            let count = front.len();
            debug!(count, "prepend merged overlapping batch");
            (front, Changes::insertions(0..count))
        };

        self.elements.splice(0..0, front);
        Some(Diff::Update(inserted))
    }

    /// Adds events older than the current tail.
    ///
    /// The batch is taken as a whole or not at all: if its newest event is not
    /// strictly older than the tail, nothing is appended. Appending never
    /// creates a gap. An empty timeline is reset to the batch, whatever its size.
    ///
    /// # Panics
    ///
    /// Panics if the timeline ends with a gap.
    pub fn append<I>(&mut self, events: I, sort: bool) -> Option<Diff>
    where
        I: IntoIterator<Item = E>,
    {
        let mut events: Vec<E> = events.into_iter().collect();
        if self.elements.is_empty() {
            return Some(self.reset(events, sort));
        }

        let last_existing = self.boundary_event(self.elements.len() - 1).id();
        if sort {
            sort_newest_first(&mut events);
        }
        if events.is_empty() {
            debug!("append skipped: empty batch");
            return None;
        }

        let first_new = events[0].id();
        if first_new >= last_existing {
            debug!(
                first_new = ?first_new,
                tail = ?last_existing,
                "append skipped: batch not older than tail"
            );
            return None;
        }

        let old_len = self.elements.len();
        let count = events.len();
        self.elements.extend(events.into_iter().map(Element::Event));

        debug!(count, "append merged batch");
        Some(Diff::Update(Changes::insertions(old_len..old_len + count)))
    }

    /// Fills or shrinks the gap whose boundary is `max_id`.
    ///
    /// If the batch reaches down to the event after the gap, the gap is removed
    /// and only events newer than that event are inserted. Otherwise every event
    /// is inserted and a smaller gap, bounded by the oldest new event, takes the
    /// old one's place. Returns `None` for an empty batch or when no such gap is
    /// followed by an event.
    pub fn expand<I>(&mut self, events: I, max_id: E::Id, sort: bool) -> Option<Diff>
    where
        I: IntoIterator<Item = E>,
    {
        let mut events: Vec<E> = events.into_iter().collect();
        if sort {
            sort_newest_first(&mut events);
        }
        if events.is_empty() {
            debug!("expand skipped: empty batch");
            return None;
        }

        let Some(gap_index) = self
            .elements
            .iter()
            .position(|el| el.gap_boundary() == Some(max_id))
        else {
            debug!(max_id = ?max_id, "expand skipped: no such gap");
            return None;
        };
        let Some(after_gap) = self.elements.get(gap_index + 1).and_then(Element::as_event) else {
            debug!(max_id = ?max_id, "expand skipped: gap not followed by an event");
            return None;
        };

        let first_existing_after_gap = after_gap.id();
        let last_new = events[events.len() - 1].id();

        let replacement: Vec<Element<E>> = if last_new <= first_existing_after_gap {
            let filled: Vec<Element<E>> = events
                .into_iter()
                .filter(|event| event.id() > first_existing_after_gap)
                .map(Element::Event)
                .collect();
            debug!(count = filled.len(), gap = ?max_id, "expand filled gap");
            filled
        } else {
            let mut shrunk: Vec<Element<E>> = events.into_iter().map(Element::Event).collect();
            shrunk.push(Element::Gap(last_new));
            debug!(
                count = shrunk.len() - 1,
                gap = ?max_id,
                new_gap = ?last_new,
                "expand shrank gap"
            );
            shrunk
        };

        let inserted = gap_index..gap_index + replacement.len();
        self.elements.splice(gap_index..=gap_index, replacement);

        Some(Diff::Update(Changes::new(
            vec![gap_index],
            inserted.collect(),
            Vec::new(),
        )))
    }

    /// Verifies the ordering, boundary and gap invariants.
    pub fn check_invariants(&self) -> Result<(), TimelineError> {
        if self.elements.is_empty() {
            return Ok(());
        }
        self.try_max_id()?;
        self.try_min_id()?;

        let mut previous_id: Option<E::Id> = None;
        for (index, element) in self.elements.iter().enumerate() {
            match element {
                Element::Event(event) => {
                    let id = event.id();
                    if let Some(newer) = previous_id
                        && newer <= id
                    {
                        return Err(TimelineError::OutOfOrder {
                            index,
                            newer: format!("{newer:?}"),
                            older: format!("{id:?}"),
                        });
                    }
                    previous_id = Some(id);
                }
                Element::Gap(boundary) => {
                    if self.elements[index - 1].is_gap() {
                        return Err(TimelineError::AdjacentGaps(index));
                    }
                    let fits_above = previous_id.is_some_and(|newer| newer >= *boundary);
                    let fits_below = self.elements[index + 1]
                        .event_id()
                        .is_none_or(|older| older <= *boundary);
                    if !fits_above || !fits_below {
                        return Err(TimelineError::GapOutOfBounds {
                            index,
                            boundary: format!("{boundary:?}"),
                        });
                    }
                }
            }
        }
        Ok(())
    }

    /// Returns the event at a boundary position, which must not be a gap.
    fn boundary_event(&self, index: usize) -> &E {
        match &self.elements[index] {
            Element::Event(event) => event,
            Element::Gap(_) => {
                panic!("timeline invariant violated: gap at boundary index {index}")
            }
        }
    }
}

/// Sorts a batch by descending id, keeping the given order for equal ids.
fn sort_newest_first<E: TimelineEvent>(events: &mut [E]) {
    events.sort_by(|a, b| b.id().cmp(&a.id()));
}
