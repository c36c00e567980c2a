//! The event contract consumed by the timeline.
//!
//! This module contains the TimelineEvent trait which integrators implement for
//! whatever value they want to keep in a timeline. The engine only ever looks at
//! an event's identifier; payloads are carried along untouched.

use std::fmt::Debug;
use std::hash::Hash;

/// A value that can live in a [`Timeline`](crate::Timeline).
///
/// Every event exposes a unique, totally ordered identifier. A larger id means
/// a more recent event, so the timeline keeps elements in descending id order.
///
/// # Identity
///
/// Two events with the same id are the same element, even if their payloads
/// differ. Merge operations rely on [`TimelineEvent::same_event`] for this and
/// never on structural equality of the event value.
pub trait TimelineEvent {
    /// The identifier type. Behaves like an unsigned integer: larger is newer.
    type Id: Copy + Ord + Hash + Debug;

    /// Returns the unique identifier of this event
    fn id(&self) -> Self::Id;

    /// Returns true if both values denote the same event.
    fn same_event(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

macro_rules! impl_self_identified {
    ($($ty:ty),*) => {
        $(
            impl TimelineEvent for $ty {
                type Id = $ty;

                fn id(&self) -> Self::Id {
                    *self
                }
            }
        )*
    };
}

// Plain identifiers are their own events.
impl_self_identified!(u32, u64, usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    struct Tagged {
        id: u64,
        tag: &'static str,
    }

    impl TimelineEvent for Tagged {
        type Id = u64;

        fn id(&self) -> u64 {
            self.id
        }
    }

    #[test]
    fn test_same_event_ignores_payload() {
        let a = Tagged { id: 7, tag: "draft" };
        let b = Tagged { id: 7, tag: "edited" };
        let c = Tagged { id: 8, tag: "draft" };

        assert!(a.same_event(&b));
        assert!(!a.same_event(&c));
        assert_ne!(a.tag, b.tag);
    }

    #[test]
    fn test_primitive_ids() {
        assert_eq!(42u64.id(), 42);
        assert_eq!(3u32.id(), 3);
        assert_eq!(9usize.id(), 9);
        assert!(5u64.same_event(&5));
        assert!(!5u64.same_event(&6));
    }
}
