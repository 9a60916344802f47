//! CSR (Compressed Sparse Row) adjacency store
//!
//! Every graph kind keeps its adjacency lists in one contiguous backing
//! vector, sliced per vertex by a row-offset array.
//!
//! # CSR Format
//!
//! ```text
//! Digraph: 0 → 1, 0 → 2, 1 → 2
//!
//! CSR:
//!   row_offsets: [0, 2, 3]     // Row starts in `entries`
//!   row_lens:    [2, 1, 0]     // Vertex 0: entries [0..2), vertex 1: [2..3), vertex 2: empty
//!   entries:     [1, 2, 2]     // Entry payloads (neighbor, edge or edge id)
//! ```
//!
//! Batch construction packs rows back to back. Appending to a full row moves
//! it to the end of `entries` with doubled capacity, so appends are amortized
//! O(1) and the abandoned slots are never read again. Rows are append-only;
//! there is no removal.

/// Smallest capacity a row gets when it is moved to the end
const MIN_ROW_CAPACITY: usize = 4;

/// Vertex-indexed rows over a single backing vector
#[derive(Debug, Clone)]
pub struct Csr<T> {
    /// Start of each row in `entries`
    row_offsets: Vec<usize>,

    /// Live payloads per row
    row_lens: Vec<usize>,

    /// Reserved slots per row (live payloads plus slack)
    row_caps: Vec<usize>,

    /// Row payloads, grouped by row
    entries: Vec<T>,

    /// Live payloads across all rows
    len: usize,
}

impl<T> Csr<T> {
    /// Create `num_rows` empty rows
    #[must_use]
    pub fn new(num_rows: usize) -> Self {
        Self {
            row_offsets: vec![0; num_rows],
            row_lens: vec![0; num_rows],
            row_caps: vec![0; num_rows],
            entries: Vec::new(),
            len: 0,
        }
    }

    /// Build from `(row, payload)` pairs in one counting pass
    ///
    /// Payloads keep their relative order within a row. Callers validate rows
    /// beforehand.
    pub(crate) fn from_pairs(num_rows: usize, pairs: Vec<(usize, T)>) -> Self {
        let mut row_lens = vec![0_usize; num_rows];
        for (row, _) in &pairs {
            row_lens[*row] += 1;
        }

        let mut row_offsets = Vec::with_capacity(num_rows);
        let mut start = 0;
        for &len in &row_lens {
            row_offsets.push(start);
            start += len;
        }

        // Stable placement: fill each row from its start
        let mut cursor = row_offsets.clone();
        let len = pairs.len();
        let mut slots: Vec<Option<T>> = std::iter::repeat_with(|| None).take(len).collect();
        for (row, payload) in pairs {
            slots[cursor[row]] = Some(payload);
            cursor[row] += 1;
        }

        Self {
            row_offsets,
            row_caps: row_lens.clone(),
            row_lens,
            entries: slots.into_iter().flatten().collect(),
            len,
        }
    }

    /// Payloads of `row`
    #[must_use]
    pub fn row(&self, row: usize) -> &[T] {
        let start = self.row_offsets[row];
        &self.entries[start..start + self.row_lens[row]]
    }

    /// Number of payloads in `row`
    #[must_use]
    pub fn row_len(&self, row: usize) -> usize {
        self.row_lens[row]
    }

    /// Number of rows
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.row_lens.len()
    }

    /// Total number of payloads across all rows
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// True when no row holds a payload
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterate `(row, payloads)` pairs
    pub fn iter_rows(&self) -> impl Iterator<Item = (usize, &[T])> + '_ {
        (0..self.num_rows()).map(move |row| (row, self.row(row)))
    }

    /// All payloads in row order
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.iter_rows().flat_map(|(_, payloads)| payloads)
    }
}

impl<T: Clone> Csr<T> {
    /// Append `payload` to the end of `row`
    ///
    /// Amortized O(1): a full row either grows in place at the end of the
    /// backing vector or moves there with doubled capacity.
    pub(crate) fn push(&mut self, row: usize, payload: T) {
        let start = self.row_offsets[row];
        let len = self.row_lens[row];
        let cap = self.row_caps[row];

        if len < cap {
            self.entries[start + len] = payload;
        } else if start + cap == self.entries.len() {
            self.entries.push(payload);
            self.row_caps[row] += 1;
        } else {
            let new_start = self.entries.len();
            let new_cap = (2 * len).max(MIN_ROW_CAPACITY);
            self.entries.extend_from_within(start..start + len);
            // Slack is filled with copies of `payload`; only `row_lens` slots are read
            self.entries.resize(new_start + new_cap, payload);
            self.row_offsets[row] = new_start;
            self.row_caps[row] = new_cap;
        }

        self.row_lens[row] += 1;
        self.len += 1;
    }
}

impl<T: PartialEq> PartialEq for Csr<T> {
    fn eq(&self, other: &Self) -> bool {
        self.num_rows() == other.num_rows()
            && (0..self.num_rows()).all(|row| self.row(row) == other.row(row))
    }
}
