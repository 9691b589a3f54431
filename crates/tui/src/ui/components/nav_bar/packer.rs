//! Width packing for the overflow navigation bar.
//!
//! Widths are unit-agnostic: the terminal passes cell counts, tests are free
//! to use pixel-like numbers.

/// Returns how many leading entries fit inline.
///
/// `reserved_width` is subtracted from `container_width` up front to leave
/// room for the overflow trigger. `spacing` is the gap inserted between two
/// consecutive inline entries. A width of `0` marks an entry that has not been
/// measured yet; the walk stops there so unmeasured content never shows.
///
/// The result is always within `0..=widths.len()`.
pub fn visible_count(widths: &[u32], container_width: u32, reserved_width: u32, spacing: u32) -> usize {
    let budget = container_width.saturating_sub(reserved_width);
    let mut consumed: u32 = 0;
    for (index, &width) in widths.iter().enumerate() {
        if width == 0 {
            return index;
        }
        let gap = if index == 0 { 0 } else { spacing };
        match consumed.checked_add(gap).and_then(|total| total.checked_add(width)) {
            Some(next) if next <= budget => consumed = next,
            _ => return index,
        }
    }
    widths.len()
}
