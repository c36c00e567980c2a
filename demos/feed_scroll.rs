//! Feed scrolling example with a mirrored view.
//!
//! This example keeps a list of rendered rows in sync with a timeline of
//! feed posts purely by applying the diffs each merge returns, the way a
//! table view would animate them.
//!
//! Run with: cargo run --example feed_scroll

use chrono::{Duration, Utc};
use timeline_gap::{Diff, Element, FeedPost, Timeline};

fn page(ids: &[u64]) -> Vec<FeedPost> {
    let now = Utc::now();
    ids.iter()
        .map(|&id| {
            FeedPost::new(id, format!("user{}", id % 3), format!("post number {id}"))
                .with_created_at(now - Duration::minutes(100 - id as i64))
        })
        .collect()
}

fn render(element: &Element<FeedPost>) -> String {
    match element {
        Element::Event(post) => format!(
            "{:>3} {:<6} {} ({})",
            post.id,
            post.author,
            post.body,
            post.created_at.format("%H:%M")
        ),
        Element::Gap(boundary) => format!("--- load more below {boundary} ---"),
    }
}

fn sync(view: &mut Vec<String>, timeline: &Timeline<FeedPost>, diff: Option<Diff>, label: &str) {
    println!("\n>> {label}");
    match diff {
        Some(diff) => {
            println!("   {:?}", diff);
            diff.apply(view, timeline.elements(), render);
        }
        None => println!("   nothing to animate"),
    }
    for line in view.iter() {
        println!("   | {line}");
    }
    assert_eq!(view.len(), timeline.number_of_elements());
}

fn main() {
    println!("=== Feed Scroll Example ===");

    let mut timeline = Timeline::new();
    let mut view = Vec::new();

    let diff = timeline.reset(page(&[40, 39, 38]), false);
    sync(&mut view, &timeline, Some(diff), "first load");

    let diff = timeline.prepend(page(&[70, 69, 68]), false);
    sync(&mut view, &timeline, diff, "pull to refresh after a long time away");

    let diff = timeline.prepend(page(&[71, 70]), false);
    sync(&mut view, &timeline, diff, "pull to refresh again, overlapping");

    let diff = timeline.expand(page(&[67, 66, 65]), 68, false);
    sync(&mut view, &timeline, diff, "tap the gap");

    let diff = timeline.append(page(&[37, 36]), false);
    sync(&mut view, &timeline, diff, "scroll to the bottom");

    let diff = timeline.append(page(&[36, 35]), false);
    sync(&mut view, &timeline, diff, "stale page at the bottom");
}
