#![no_main]

use arbitrary::Arbitrary;
use gridkit_layout::{GridConfig, GridLayout, ItemId, LayoutItem, MoveOutcome, ResizePhase, collides};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct RawItem {
    x: u8,
    y: u8,
    w: u8,
    h: u8,
    is_static: bool,
}

#[derive(Debug, Arbitrary)]
enum Op {
    Move {
        item: u8,
        x: Option<u8>,
        y: Option<u8>,
        user: bool,
    },
    Resize {
        item: u8,
        w: u8,
        h: u8,
        end: bool,
        user: bool,
    },
    Compact,
    CorrectBounds,
    Delete(u8),
}

#[derive(Debug, Arbitrary)]
struct Input {
    cols: u8,
    min_w: u8,
    vertical_compact: bool,
    prevent_collision: bool,
    items: Vec<RawItem>,
    ops: Vec<Op>,
}

fuzz_target!(|input: Input| {
    let cols = i32::from(input.cols % 24) + 1; // 1..=24
    let min_w = (i32::from(input.min_w % 3) + 1).min(cols);
    let config = GridConfig::new()
        .col_num(cols)
        .min_size(min_w, 1)
        .vertical_compact(input.vertical_compact)
        .prevent_collision(input.prevent_collision);

    // Cap the layout so each run stays fast.
    let items: Vec<LayoutItem> = input
        .items
        .iter()
        .take(32)
        .enumerate()
        .map(|(n, raw)| {
            let w = i32::from(raw.w % 6) + 1;
            let mut item = LayoutItem::new(
                ItemId::from(n as u64),
                i32::from(raw.x % 32),
                i32::from(raw.y % 32),
                w,
                i32::from(raw.h % 5) + 1,
            );
            item.is_static = raw.is_static;
            item
        })
        .collect();
    if items.is_empty() {
        return;
    }
    let count = items.len();

    let Ok(mut grid) = GridLayout::new(items, config) else {
        return;
    };
    // Clamp once so every item starts inside the grid.
    grid.correct_bounds();
    grid.compact();
    let mut statics: Vec<LayoutItem> = grid.statics().cloned().collect();

    for op in input.ops.iter().take(64) {
        let pick = |n: u8| ItemId::from(u64::from(n) % count as u64);
        match *op {
            Op::Move { item, x, y, user } => {
                let before = grid.items().to_vec();
                let outcome = grid
                    .move_item(&pick(item), x.map(|v| i32::from(v % 32)), y.map(|v| i32::from(v % 48)), user)
                    .ok();
                if let Some(MoveOutcome::Resolved { steps }) = outcome {
                    assert!(steps <= 16 * count.pow(3), "{steps} steps for {count} items");
                }
                if matches!(outcome, Some(MoveOutcome::Rejected | MoveOutcome::Ignored)) {
                    assert_eq!(grid.items(), &before[..], "rejected move mutated the layout");
                }
            }
            Op::Resize { item, w, h, end, user } => {
                let phase = if end { ResizePhase::End } else { ResizePhase::Resizing };
                let _ = grid.resize_item(&pick(item), i32::from(w % 12), i32::from(h % 8), phase, user);
            }
            Op::Compact => {
                grid.compact();
                assert_no_movable_overlap(grid.items());
            }
            Op::CorrectBounds => {
                grid.correct_bounds();
                for item in grid.items() {
                    assert!(item.x >= 0 && item.x + item.w <= cols, "{item:?} escapes {cols} columns");
                }
                // Bounds correction is the one pass allowed to shift statics.
                statics = grid.statics().cloned().collect();
            }
            Op::Delete(item) => {
                let _ = grid.mark_deleted(&pick(item));
            }
        }

        // Static geometry is untouched by everything else.
        for fixed in &statics {
            if let Some(now) = grid.get(&fixed.id)
                && !now.is_deleted
            {
                assert_eq!(now.rect(), fixed.rect(), "static item {} moved", fixed.id);
            }
        }
    }
});

fn assert_no_movable_overlap(items: &[LayoutItem]) {
    for (i, a) in items.iter().enumerate() {
        for b in &items[i + 1..] {
            if !(a.is_static && b.is_static) {
                assert!(!collides(a, b), "{a:?} overlaps {b:?}");
            }
        }
    }
}
