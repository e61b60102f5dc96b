use clap::ValueEnum;
use derive_new::new;
use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit<T> {
    Delete { value: T },
    Insert { value: T },
    Equal { value: T },
}

impl<T> Edit<T> {
    pub fn is_change(&self) -> bool {
        !matches!(self, Edit::Equal { .. })
    }
}

impl<T> Edit<T>
where
    T: Clone + Into<String>,
{
    pub fn as_string(&self) -> String {
        match self {
            Edit::Delete { value } => format!("- {}", value.clone().into()),
            Edit::Insert { value } => format!("+ {}", value.clone().into()),
            Edit::Equal { value } => format!("  {}", value.clone().into()),
        }
    }
}

impl<T> Display for Edit<T>
where
    T: Clone + Into<String>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_string())
    }
}

pub trait DiffAlgorithm<T> {
    /// Edit script turning `a` into `b`, in order
    fn diff(&self) -> Vec<Edit<T>>;

    /// Only the deletions and insertions, one per line
    fn format_changes(&self) -> String
    where
        T: Clone + Into<String>,
    {
        self.diff()
            .iter()
            .filter(|edit| edit.is_change())
            .map(|edit| edit.as_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Which line diff to run for changed files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum DiffAlgorithmKind {
    /// Minimal edit script (Myers' O(ND) algorithm)
    #[default]
    Myers,
    /// Greedy two-pointer scan, pairs every mismatch as a removal plus an addition
    Lockstep,
}

impl DiffAlgorithmKind {
    pub fn try_parse(value: &str) -> anyhow::Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "myers" => Ok(DiffAlgorithmKind::Myers),
            "lockstep" => Ok(DiffAlgorithmKind::Lockstep),
            other => anyhow::bail!("unknown diff algorithm: {}", other),
        }
    }

    pub fn diff_lines(&self, a: &[String], b: &[String]) -> Vec<Edit<String>> {
        match self {
            DiffAlgorithmKind::Myers => MyersDiff::new(a, b).diff(),
            DiffAlgorithmKind::Lockstep => LockstepDiff::new(a, b).diff(),
        }
    }
}

/// Synchronized two-pointer comparison.
///
/// A single inserted or deleted line shifts the sequences out of phase, after
/// which every remaining line is reported as a removal followed by an addition.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct LockstepDiff<'d, T> {
    a: &'d [T],
    b: &'d [T],
}

impl<T: Eq + Clone> DiffAlgorithm<T> for LockstepDiff<'_, T> {
    fn diff(&self) -> Vec<Edit<T>> {
        let (mut i, mut j) = (0, 0);
        let mut edits = Vec::with_capacity(self.a.len().max(self.b.len()));

        loop {
            match (self.a.get(i), self.b.get(j)) {
                (Some(left), Some(right)) if left == right => {
                    edits.push(Edit::Equal {
                        value: left.clone(),
                    });
                    i += 1;
                    j += 1;
                }
                (Some(left), Some(right)) => {
                    edits.push(Edit::Delete {
                        value: left.clone(),
                    });
                    edits.push(Edit::Insert {
                        value: right.clone(),
                    });
                    i += 1;
                    j += 1;
                }
                (Some(left), None) => {
                    edits.push(Edit::Delete {
                        value: left.clone(),
                    });
                    i += 1;
                }
                (None, Some(right)) => {
                    edits.push(Edit::Insert {
                        value: right.clone(),
                    });
                    j += 1;
                }
                (None, None) => break,
            }
        }

        edits
    }
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct MyersDiff<'d, T> {
    a: &'d [T],
    b: &'d [T],
}

impl<T: Eq + Clone> MyersDiff<'_, T> {
    fn compute_shortest_edit(&self) -> Vec<Vec<isize>> {
        let (n, m) = (self.a.len() as isize, self.b.len() as isize);
        let offset = (n + m) as usize;

        // one spare slot on the right so k = -d can always read v[k + 1]
        let mut v = vec![0; 2 * offset + 2];
        let mut trace = Vec::new();

        for d in 0..=(n + m) {
            trace.push(v.clone());

            for k in (-d..=d).step_by(2) {
                let idx = (offset as isize + k) as usize;

                let mut x = if k == -d {
                    // we could have only come from k+1, thus an insertion
                    v[idx + 1]
                } else if k == d {
                    // we could have only come from k-1, thus a deletion
                    v[idx - 1] + 1
                } else {
                    let x_del = v[idx - 1] + 1;
                    let x_ins = v[idx + 1];
                    if x_del > x_ins { x_del } else { x_ins }
                };

                let mut y = x - k;
                while x < n && y < m && self.a[x as usize] == self.b[y as usize] {
                    // snake
                    x += 1;
                    y += 1;
                }

                v[idx] = x;

                if x >= n && y >= m {
                    return trace;
                }
            }
        }

        trace
    }

    fn backtrack(&self) -> Vec<(isize, isize, isize, isize)> {
        let (mut x, mut y) = (self.a.len() as isize, self.b.len() as isize);
        let offset = (x + y) as usize;
        let mut edit_path = Vec::new();

        let trace = self.compute_shortest_edit();

        for (d, v) in trace.iter().enumerate().rev() {
            let d = d as isize;
            let k = x - y;

            let prev_k = if k == -d {
                k + 1
            } else if k == d {
                k - 1
            } else {
                let k_del = k - 1;
                let k_ins = k + 1;
                if v[(offset as isize + k_del) as usize] + 1 > v[(offset as isize + k_ins) as usize]
                {
                    k_del
                } else {
                    k_ins
                }
            };

            let prev_x = v[(offset as isize + prev_k) as usize];
            let prev_y = prev_x - prev_k;

            while x > prev_x && y > prev_y {
                edit_path.push((x - 1, y - 1, x, y));
                x -= 1;
                y -= 1;
            }

            if d > 0 {
                edit_path.push((prev_x, prev_y, x, y));
            }

            (x, y) = (prev_x, prev_y);
        }

        edit_path
    }
}

impl<T: Eq + Clone> DiffAlgorithm<T> for MyersDiff<'_, T> {
    fn diff(&self) -> Vec<Edit<T>> {
        if self.a.is_empty() && self.b.is_empty() {
            return Vec::new();
        }

        let mut diff = Vec::new();

        for (prev_x, prev_y, x, y) in self.backtrack() {
            if x == prev_x {
                // only y moved
                if prev_y >= 0 && prev_y < self.b.len() as isize {
                    diff.push(Edit::Insert {
                        value: self.b[prev_y as usize].clone(),
                    });
                }
            } else if y == prev_y {
                // only x moved
                if prev_x >= 0 && prev_x < self.a.len() as isize {
                    diff.push(Edit::Delete {
                        value: self.a[prev_x as usize].clone(),
                    });
                }
            } else if prev_x >= 0 && prev_x < self.a.len() as isize {
                diff.push(Edit::Equal {
                    value: self.a[prev_x as usize].clone(),
                });
            }
        }

        diff.reverse();
        diff
    }
}
