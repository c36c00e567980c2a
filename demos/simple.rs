//! Simple standalone example of timeline usage.
//!
//! This example loads a first page, then merges a newer page that does not
//! touch it, leaving a gap that is filled afterwards.
//!
//! Run with: cargo run --example simple

use timeline_gap::{Element, Timeline};

fn show(timeline: &Timeline<u64>) -> String {
    timeline
        .elements()
        .iter()
        .map(|el| match el {
            Element::Event(id) => id.to_string(),
            Element::Gap(boundary) => format!("[gap <{boundary}]"),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn main() {
    println!("=== Simple Timeline Example ===\n");

    let mut timeline = Timeline::new();

    println!("Initial page 10..7:");
    let diff = timeline.reset([10u64, 9, 8, 7], false);
    println!("  diff:     {:?}", diff);
    println!("  timeline: {}", show(&timeline));

    println!("\nA refresh returns 20..17, nothing known in between:");
    let diff = timeline.prepend([20u64, 19, 18, 17], false);
    println!("  diff:     {:?}", diff);
    println!("  timeline: {}", show(&timeline));

    println!("\nThe user taps the gap, server returns 16..13:");
    let diff = timeline.expand([16u64, 15, 14, 13], 17, false);
    println!("  diff:     {:?}", diff);
    println!("  timeline: {}", show(&timeline));

    println!("\nTapping again returns 12..9, which reaches the older page:");
    let diff = timeline.expand([12u64, 11, 10, 9], 13, false);
    println!("  diff:     {:?}", diff);
    println!("  timeline: {}", show(&timeline));

    println!("\nScrolling to the bottom loads 6..4:");
    let diff = timeline.append([6u64, 5, 4], false);
    println!("  diff:     {:?}", diff);
    println!("  timeline: {}", show(&timeline));

    println!(
        "\nmax_id = {}, min_id = {}, gaps = {}",
        timeline.max_id(),
        timeline.min_id(),
        timeline.gaps().count()
    );
}
