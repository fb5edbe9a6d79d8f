//! Indicator lights: a linear system over GF(2)

/// Machines with more free buttons than this are not searched
const MAX_FREE_BUTTONS: usize = 24;

/// The fewest button presses that take every light from off to `target`,
/// or `None` if no combination of buttons reaches it.
///
/// Pressing a button twice cancels out, so each button is pressed zero or one times.
/// The system is reduced with Gauss-Jordan elimination and every assignment of the
/// free buttons is tried.
pub(super) fn fewest_presses(target: &[bool], buttons: &[Vec<usize>]) -> Option<u32> {
    let width = buttons.len();
    // one row per light: the buttons that toggle it, then the target state
    let mut rows: Vec<Vec<bool>> = target
        .iter()
        .enumerate()
        .map(|(light, &on)| {
            let mut row: Vec<bool> = buttons.iter().map(|b| b.contains(&light)).collect();
            row.push(on);
            row
        })
        .collect();
    let pivots = reduce(&mut rows, width);
    if rows[pivots.len()..].iter().any(|row| row[width]) {
        return None;
    }
    let free: Vec<usize> = (0..width).filter(|col| !pivots.contains(col)).collect();
    debug!(
        "{} lights, {} buttons, {} free buttons",
        target.len(),
        width,
        free.len()
    );
    if free.len() > MAX_FREE_BUTTONS {
        warn!(
            "{} free buttons is more than the {} that can be searched",
            free.len(),
            MAX_FREE_BUTTONS
        );
        return None;
    }
    (0..1u64 << free.len())
        .map(|mask| {
            let pressed = |i: usize| (mask >> i) & 1 == 1;
            let pivot_presses = rows
                .iter()
                .take(pivots.len())
                .filter(|row| {
                    free.iter()
                        .enumerate()
                        .filter(|&(i, &col)| pressed(i) && row[col])
                        .fold(row[width], |on, _| !on)
                })
                .count();
            mask.count_ones() + pivot_presses as u32
        })
        .min()
}

/// Reduces the augmented matrix to reduced row echelon form and returns the pivot column
/// of each leading row
fn reduce(rows: &mut [Vec<bool>], width: usize) -> Vec<usize> {
    let mut pivots = Vec::new();
    for col in 0..width {
        let rank = pivots.len();
        let pivot = match (rank..rows.len()).find(|&r| rows[r][col]) {
            Some(pivot) => pivot,
            None => continue,
        };
        rows.swap(rank, pivot);
        let pivot_row = rows[rank].clone();
        for (r, row) in rows.iter_mut().enumerate() {
            if r != rank && row[col] {
                for (cell, &p) in row.iter_mut().zip(pivot_row.iter()) {
                    *cell ^= p;
                }
            }
        }
        pivots.push(col);
    }
    pivots
}
