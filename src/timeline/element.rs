//! Element definition for the timeline.
//!
//! This module contains the Element enum which represents a single row of the
//! timeline: either a known event or a gap marking a range of events that has
//! not been fetched yet.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::timeline::types::TimelineEvent;

/// Represents a single row of a timeline.
///
/// # Gaps
///
/// A `Gap(boundary)` always sits strictly between two events. The event right
/// before it (newer) carries the id `boundary`, and there may be zero or more
/// unknown events older than `boundary` but newer than the event right after
/// the gap. The boundary is also the key used to address the gap when it is
/// expanded.
///
/// Serialized as `{"kind": "event", "event": ..}` or `{"kind": "gap", "boundary": ..}`.
#[derive(Debug, Clone)]
pub enum Element<E: TimelineEvent> {
    /// A known event
    Event(E),
    /// A known-missing range bounded above by the given id
    Gap(E::Id),
}

impl<E: TimelineEvent> Element<E> {
    /// Returns true if this element is a gap.
    pub fn is_gap(&self) -> bool {
        matches!(self, Element::Gap(_))
    }

    /// Returns true if this element is an event.
    pub fn is_event(&self) -> bool {
        matches!(self, Element::Event(_))
    }

    /// Returns the wrapped event, if any.
    pub fn as_event(&self) -> Option<&E> {
        match self {
            Element::Event(event) => Some(event),
            Element::Gap(_) => None,
        }
    }

    /// Consumes the element and returns the wrapped event, if any.
    pub fn into_event(self) -> Option<E> {
        match self {
            Element::Event(event) => Some(event),
            Element::Gap(_) => None,
        }
    }

    /// Returns the id of the wrapped event, if any.
    pub fn event_id(&self) -> Option<E::Id> {
        self.as_event().map(TimelineEvent::id)
    }

    /// Returns the boundary id of a gap, if this is one.
    pub fn gap_boundary(&self) -> Option<E::Id> {
        match self {
            Element::Gap(boundary) => Some(*boundary),
            Element::Event(_) => None,
        }
    }
}

// Events compare by identity only, never by payload.
impl<E: TimelineEvent> PartialEq for Element<E> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Element::Event(a), Element::Event(b)) => a.same_event(b),
            (Element::Gap(a), Element::Gap(b)) => a == b,
            _ => false,
        }
    }
}

impl<E: TimelineEvent> Eq for Element<E> {}

/// Wire shape borrowed for serialization.
#[derive(Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum ElementRef<'a, E, Id> {
    Event { event: &'a E },
    Gap { boundary: Id },
}

/// Wire shape read back on deserialization.
#[derive(Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum ElementRepr<E, Id> {
    Event { event: E },
    Gap { boundary: Id },
}

impl<E> Serialize for Element<E>
where
    E: TimelineEvent + Serialize,
    E::Id: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Element::Event(event) => {
                let repr: ElementRef<'_, E, E::Id> = ElementRef::Event { event };
                repr.serialize(serializer)
            }
            Element::Gap(boundary) => {
                let repr: ElementRef<'_, E, E::Id> = ElementRef::Gap {
                    boundary: *boundary,
                };
                repr.serialize(serializer)
            }
        }
    }
}

impl<'de, E> Deserialize<'de> for Element<E>
where
    E: TimelineEvent + Deserialize<'de>,
    E::Id: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match ElementRepr::<E, E::Id>::deserialize(deserializer)? {
            ElementRepr::Event { event } => Element::Event(event),
            ElementRepr::Gap { boundary } => Element::Gap(boundary),
        })
    }
}

impl<E: TimelineEvent> From<E> for Element<E> {
    fn from(event: E) -> Self {
        Element::Event(event)
    }
}
