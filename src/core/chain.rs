use crate::models::Row;

/// Re-chain start times after `start`: every later row begins where the
/// previous one ends. Rows up to and including `start` are left alone.
pub fn recalc_from(rows: &mut [Row], start: usize) {
    for i in start.saturating_add(1)..rows.len() {
        rows[i].time = rows[i - 1].end();
    }
}

/// True when every row after the first starts exactly where its
/// predecessor ends.
pub fn is_chained(rows: &[Row]) -> bool {
    rows.windows(2).all(|w| w[1].time == w[0].end())
}
