//! Joltage counters: a linear system over the non-negative integers

/// The fewest total button presses that raise every counter from zero to its target,
/// or `None` if no combination of presses lands exactly on the targets.
pub(super) fn fewest_presses(targets: &[u64], buttons: &[Vec<usize>]) -> Option<u64> {
    let width = buttons.len();
    // one row per counter: the buttons that increment it, then the target
    let mut rows: Vec<Vec<i64>> = targets
        .iter()
        .enumerate()
        .map(|(counter, &target)| {
            let mut row: Vec<i64> = buttons
                .iter()
                .map(|b| i64::from(b.contains(&counter)))
                .collect();
            row.push(target as i64);
            row
        })
        .collect();
    let pivots = reduce(&mut rows, width);
    if rows[pivots.len()..].iter().any(|row| row[width] != 0) {
        return None;
    }
    rows.truncate(pivots.len());
    let free: Vec<usize> = (0..width).filter(|col| !pivots.contains(col)).collect();
    // a button can't be pressed more often than the smallest target among its counters
    let bounds = free
        .iter()
        .map(|&col| {
            buttons[col]
                .iter()
                .filter_map(|&counter| targets.get(counter).copied())
                .min()
                .unwrap_or(0)
        })
        .collect();
    debug!(
        "{} counters, {} buttons, {} free buttons",
        targets.len(),
        width,
        free.len()
    );
    let mut search = FreeButtonSearch {
        rows: &rows,
        pivots: &pivots,
        values: vec![0; free.len()],
        free,
        bounds,
        best: None,
    };
    search.assign(0, 0);
    search.best
}

/// Brings the augmented matrix to reduced row echelon form without leaving the integers.
/// Every pivot is positive. Returns the pivot column of each leading row.
fn reduce(rows: &mut [Vec<i64>], width: usize) -> Vec<usize> {
    let mut pivots = Vec::new();
    for col in 0..width {
        let rank = pivots.len();
        let pivot = match (rank..rows.len()).find(|&r| rows[r][col] != 0) {
            Some(pivot) => pivot,
            None => continue,
        };
        rows.swap(rank, pivot);
        if rows[rank][col] < 0 {
            rows[rank].iter_mut().for_each(|cell| *cell = -*cell);
        }
        let pivot_row = rows[rank].clone();
        for (r, row) in rows.iter_mut().enumerate() {
            let factor = row[col];
            if r == rank || factor == 0 {
                continue;
            }
            for (cell, &p) in row.iter_mut().zip(pivot_row.iter()) {
                *cell = *cell * pivot_row[col] - p * factor;
            }
            divide_by_gcd(row);
        }
        pivots.push(col);
    }
    pivots
}

fn divide_by_gcd(row: &mut [i64]) {
    let divisor = row.iter().fold(0, |g, &n| gcd(g, n.abs()));
    if divisor > 1 {
        row.iter_mut().for_each(|n| *n /= divisor);
    }
}

fn gcd(a: i64, b: i64) -> i64 {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

/// Depth-first search over the presses of each free button. The pivot buttons then follow
/// from the reduced rows.
struct FreeButtonSearch<'a> {
    rows: &'a [Vec<i64>],
    pivots: &'a [usize],
    free: Vec<usize>,
    bounds: Vec<u64>,
    values: Vec<u64>,
    best: Option<u64>,
}

impl FreeButtonSearch<'_> {
    fn assign(&mut self, index: usize, presses: u64) {
        if self.best.map_or(false, |best| presses >= best) {
            return;
        }
        if index == self.free.len() {
            if let Some(total) = self.complete(presses) {
                self.best = Some(self.best.map_or(total, |best| best.min(total)));
            }
            return;
        }
        for value in 0..=self.bounds[index] {
            if self.best.map_or(false, |best| presses + value >= best) {
                break;
            }
            self.values[index] = value;
            self.assign(index + 1, presses + value);
        }
    }

    /// Solves for the pivot buttons given every free button's presses
    fn complete(&self, free_presses: u64) -> Option<u64> {
        let width = self.free.len() + self.pivots.len();
        let mut total = free_presses;
        for (row, &col) in self.rows.iter().zip(self.pivots) {
            let rhs = self
                .free
                .iter()
                .zip(&self.values)
                .fold(row[width], |rhs, (&f, &v)| rhs - row[f] * v as i64);
            let pivot = row[col];
            if rhs < 0 || rhs % pivot != 0 {
                return None;
            }
            total += (rhs / pivot) as u64;
        }
        Some(total)
    }
}

#[cfg(test)]
mod tests {
    use super::fewest_presses;

    #[test]
    fn example_machines() {
        let buttons = vec![
            vec![3],
            vec![1, 3],
            vec![2],
            vec![2, 3],
            vec![0, 2],
            vec![0, 1],
        ];
        assert_eq!(Some(10), fewest_presses(&[3, 5, 4, 7], &buttons));
        let buttons = vec![
            vec![0, 2, 3, 4],
            vec![2, 3],
            vec![0, 4],
            vec![0, 1, 2],
            vec![1, 2, 3, 4],
        ];
        assert_eq!(Some(12), fewest_presses(&[7, 5, 12, 7, 2], &buttons));
        let buttons = vec![vec![0, 1, 2, 3, 4], vec![0, 3, 4], vec![0, 1, 2, 4, 5], vec![1, 2]];
        assert_eq!(Some(11), fewest_presses(&[10, 11, 11, 5, 10, 5], &buttons));
    }

    #[test]
    fn inconsistent_targets() {
        // the only button raises both counters together
        assert_eq!(None, fewest_presses(&[2, 1], &[vec![0, 1]]));
    }

    #[test]
    fn prefers_shared_button() {
        assert_eq!(Some(3), fewest_presses(&[3, 3], &[vec![0], vec![1], vec![0, 1]]));
    }

    #[test]
    fn no_counters() {
        assert_eq!(Some(0), fewest_presses(&[], &[vec![]]));
        assert_eq!(Some(0), fewest_presses(&[], &[vec![0], vec![0, 1]]));
    }

    #[test]
    fn negative_pivot_solution_rejected() {
        // any press of (0,1) would need a negative number of presses of (1)
        assert_eq!(Some(3), fewest_presses(&[3, 0], &[vec![0, 1], vec![1], vec![0]]));
    }
}
