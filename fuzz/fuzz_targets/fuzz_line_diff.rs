#![no_main]

use gridkit_diff::{DiffLineKind, compute_diff, filter_diff_only, split_lines};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // First byte picks the context width, the rest splits into two texts
    // at the first 0xFF byte.
    let Some((&context, rest)) = data.split_first() else {
        return;
    };
    // Bound the quadratic table.
    if rest.len() > 4096 {
        return;
    }
    let split = rest.iter().position(|&b| b == 0xFF).unwrap_or(rest.len());
    let left = String::from_utf8_lossy(&rest[..split]);
    let right = String::from_utf8_lossy(rest.get(split + 1..).unwrap_or_default());

    let diff = compute_diff(&left, &right);
    assert_eq!(diff.left_lines.len(), diff.right_lines.len());
    assert_eq!(
        diff.stats.identical + diff.stats.changed + diff.stats.unique,
        diff.len()
    );
    assert!(diff.diff_indices.windows(2).all(|w| w[0] < w[1]));

    let left_count = diff.left_lines.iter().filter(|l| l.kind.is_source()).count();
    let right_count = diff.right_lines.iter().filter(|l| l.kind.is_source()).count();
    assert_eq!(left_count, split_lines(&left).len());
    assert_eq!(right_count, split_lines(&right).len());

    let view = filter_diff_only(&diff, usize::from(context % 8));
    assert_eq!(view.stats, diff.stats);
    assert_eq!(view.diff_indices.len(), diff.diff_indices.len());
    for &row in &view.diff_indices {
        assert_ne!(view.left_lines[row].kind, DiffLineKind::Same);
        assert_ne!(view.left_lines[row].kind, DiffLineKind::Separator);
    }
});
