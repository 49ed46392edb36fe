//! Mask penalty scoring
//!
//! Four rules are summed over the finished (masked, format-stamped) matrix:
//! runs of five or more equal modules, uniform 2x2 blocks, finder-like
//! 1:1:3:1:1 sequences with a light border, and dark/light imbalance.

use crate::models::BitMatrix;

const PENALTY_N1: u32 = 3;
const PENALTY_N2: u32 = 3;
const PENALTY_N3: u32 = 40;
const PENALTY_N4: u32 = 10;

/// Total penalty of a matrix; lower is better
pub fn penalty_score(modules: &BitMatrix) -> u32 {
    let size = modules.width();
    let rows = (0..size).map(|y| line_penalty((0..size).map(move |x| modules.get(x, y)), size));
    let cols = (0..size).map(|x| line_penalty((0..size).map(move |y| modules.get(x, y)), size));
    rows.chain(cols).sum::<u32>() + block_penalty(modules) + balance_penalty(modules)
}

/// Run-length and finder-like penalties of one row or column
fn line_penalty(line: impl Iterator<Item = bool>, size: usize) -> u32 {
    let mut result = 0;
    let mut history = RunHistory::new(size);
    let mut run_color = false;
    let mut run_len = 0usize;

    for dark in line {
        if dark == run_color {
            run_len += 1;
            if run_len == 5 {
                result += PENALTY_N1;
            } else if run_len > 5 {
                result += 1;
            }
        } else {
            history.push(run_len);
            if !run_color {
                result += history.count_patterns() * PENALTY_N3;
            }
            run_color = dark;
            run_len = 1;
        }
    }
    result + history.terminate_and_count(run_color, run_len) * PENALTY_N3
}

fn block_penalty(modules: &BitMatrix) -> u32 {
    let size = modules.width();
    let mut result = 0;
    for y in 0..size.saturating_sub(1) {
        for x in 0..size - 1 {
            let color = modules.get(x, y);
            if color == modules.get(x + 1, y)
                && color == modules.get(x, y + 1)
                && color == modules.get(x + 1, y + 1)
            {
                result += PENALTY_N2;
            }
        }
    }
    result
}

/// 10 points for every full 5% the dark share deviates from 50%
fn balance_penalty(modules: &BitMatrix) -> u32 {
    let total = (modules.width() * modules.height()) as u64;
    if total == 0 {
        return 0;
    }
    let dark = modules.count_dark() as u64;
    let deviation = (dark * 20).abs_diff(total * 10);
    let k = deviation.div_ceil(total);
    k.saturating_sub(1) as u32 * PENALTY_N4
}

/// Lengths of the last seven runs in a line, newest first.
///
/// The light border outside the symbol counts as part of the first and last
/// light runs, so a finder-like pattern touching the edge is still seen.
struct RunHistory {
    size: usize,
    runs: [usize; 7],
}

impl RunHistory {
    fn new(size: usize) -> Self {
        Self { size, runs: [0; 7] }
    }

    fn push(&mut self, mut run_len: usize) {
        if self.runs[0] == 0 {
            // First run of the line, extend by the quiet zone
            run_len += self.size;
        }
        self.runs.copy_within(0..6, 1);
        self.runs[0] = run_len;
    }

    /// Finder-like patterns (dark 1:1:3:1:1) ending at the most recent light run
    fn count_patterns(&self) -> u32 {
        let r = &self.runs;
        let n = r[1];
        let core = n > 0 && r[2] == n && r[3] == n * 3 && r[4] == n && r[5] == n;
        u32::from(core && r[0] >= n * 4 && r[6] >= n)
            + u32::from(core && r[6] >= n * 4 && r[0] >= n)
    }

    /// Close the line: flush the open run and add the trailing quiet zone
    fn terminate_and_count(&mut self, run_color: bool, mut run_len: usize) -> u32 {
        if run_color {
            self.push(run_len);
            run_len = 0;
        }
        run_len += self.size;
        self.push(run_len);
        self.count_patterns()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(bits: &str) -> Vec<bool> {
        bits.chars().map(|c| c == '1').collect()
    }

    #[test]
    fn test_run_penalty() {
        // Light run of 21 (the whole line): 3 + 16
        assert_eq!(line_penalty(vec![false; 21].into_iter(), 21), 19);
        // Five dark then alternating
        let l = line("111110101010101010101");
        assert_eq!(line_penalty(l.into_iter(), 21), 3);
        // Runs of four never score
        let l = line("111100001111000011110");
        assert_eq!(line_penalty(l.into_iter(), 21), 0);
    }

    #[test]
    fn test_finder_like_pattern() {
        // 1:1:3:1:1 with light border on both sides scores once per side
        let l = line("1011101000010101010101");
        assert_eq!(line_penalty(l.into_iter(), 22), 2 * PENALTY_N3);
        // Only the left edge supplies four light modules
        let l = line("10111010101010101010101");
        assert_eq!(line_penalty(l.into_iter(), 23), PENALTY_N3);
        // One light module on the left, four on the right
        let l = line("1101011101000010101");
        assert_eq!(line_penalty(l.into_iter(), 19), PENALTY_N3);
    }

    #[test]
    fn test_block_penalty() {
        let mut m = BitMatrix::square(3);
        assert_eq!(block_penalty(&m), 4 * PENALTY_N2);
        m.set(1, 1, true);
        assert_eq!(block_penalty(&m), 0);
    }

    #[test]
    fn test_balance_penalty() {
        // 441 light modules: deviation 50% → k = 10 - 1
        let mut m = BitMatrix::square(21);
        assert_eq!(balance_penalty(&m), 90);
        // 220 dark of 441: within 5%
        for i in 0..220 {
            m.set(i % 21, i / 21, true);
        }
        assert_eq!(balance_penalty(&m), 0);
    }
}
