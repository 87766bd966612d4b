//! The sparse toroidal matrix at the heart of the Dancing Links technique.
//!
//! An exact cover instance is a 0/1 matrix; this module stores only the
//! 1-entries, as nodes linked into circular doubly-linked rings along both
//! axes. Each column is headed by a sentinel that tracks how many rows are
//! currently linked into it, and all column headers form a horizontal ring
//! around a root sentinel. The structure supports two reversible edits,
//! [`Matrix::cover`] and [`Matrix::uncover`], which unlink and relink a
//! column (and every row intersecting it) in time proportional to the number
//! of nodes touched. That reversibility is what lets the search backtrack
//! deeply without ever copying the matrix.
//!
//! All nodes live in a single arena (`Vec<Node>`) and links are indices into
//! it, so the cyclic pointer graph needs no shared mutable aliasing. The
//! root sentinel is always index 0.

/// Index of a node in the matrix arena.
pub type NodeId = usize;

/// Caller-chosen identifier shared by every node of one matrix row.
pub type RowId = usize;

/// The root sentinel. It is never covered and never belongs to a column.
pub(crate) const ROOT: NodeId = 0;

/// One 1-entry of the matrix, or a column header, or the root.
///
/// The four links form two independent circular rings: `up`/`down` within a
/// column, `left`/`right` within a row (or, for headers, within the header
/// ring). `count` is only meaningful on headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Node {
    up: NodeId,
    down: NodeId,
    left: NodeId,
    right: NodeId,
    column: NodeId,
    row: RowId,
    count: usize,
}

/// A sparse toroidal matrix for exact cover problems.
///
/// Build one with [`Matrix::new`] and [`Matrix::add_row`], then hand it to
/// [`Solver::solve`](crate::solver::search::Solver::solve). Rows and columns
/// carry no meaning of their own here; the problem frontend decides what
/// each column constrains and what each [`RowId`] encodes.
pub struct Matrix {
    nodes: Vec<Node>,
}

impl Matrix {
    /// Creates a matrix with `columns` empty columns and no rows.
    ///
    /// Column headers are linked into the header ring in index order, and
    /// the search's tie-breaking depends on that order, so callers that need
    /// reproducible solution sequences must add columns (and rows) in a
    /// fixed order.
    pub fn new(columns: usize) -> Self {
        let mut nodes = Vec::with_capacity(columns + 1);
        nodes.push(Node {
            up: ROOT,
            down: ROOT,
            left: ROOT,
            right: ROOT,
            column: ROOT,
            row: 0,
            count: 0,
        });
        let mut matrix = Matrix { nodes };
        for column in 0..columns {
            let id = column + 1;
            matrix.nodes.push(Node {
                up: id,
                down: id,
                left: ROOT,
                right: ROOT,
                column: id,
                row: 0,
                count: 0,
            });
            // Splice the header in just before the root, preserving order.
            let last = matrix.nodes[ROOT].left;
            matrix.nodes[id].right = ROOT;
            matrix.nodes[id].left = last;
            matrix.nodes[last].right = id;
            matrix.nodes[ROOT].left = id;
        }
        matrix
    }

    /// The header node for the 0-based column index `column`.
    pub fn header(&self, column: usize) -> NodeId {
        column + 1
    }

    /// Adds a row with 1-entries in the given columns.
    ///
    /// The row's nodes form a horizontal ring in the order given, and each
    /// node is appended at the bottom of its column's vertical ring. Rows
    /// may only be added before the search starts; nodes are never created
    /// or destroyed afterwards, only unlinked and relinked.
    pub fn add_row(&mut self, row: RowId, columns: &[usize]) {
        debug_assert!(!columns.is_empty(), "a row must touch at least one column");
        let base = self.nodes.len();
        let len = columns.len();
        for (i, &column) in columns.iter().enumerate() {
            let header = self.header(column);
            let id = base + i;
            let up = self.nodes[header].up;
            self.nodes.push(Node {
                up,
                down: header,
                left: base + (i + len - 1) % len,
                right: base + (i + 1) % len,
                column: header,
                row,
                count: 0,
            });
            self.nodes[up].down = id;
            self.nodes[header].up = id;
            self.nodes[header].count += 1;
        }
    }

    /// `true` once every column has been covered, i.e. the header ring
    /// contains only the root. This is the search's success condition.
    pub fn is_complete(&self) -> bool {
        self.nodes[ROOT].right == ROOT
    }

    /// Selects the live column with the fewest candidate rows (Knuth's "S
    /// heuristic"), breaking ties in favour of the column encountered first
    /// in ring order. Returns `None` only when the header ring is empty.
    ///
    /// Choosing the most constrained column first minimises the branching
    /// factor; a column with zero candidates is chosen eagerly, which makes
    /// the search fail that branch immediately.
    pub fn select_column(&self) -> Option<NodeId> {
        let mut best: Option<(NodeId, usize)> = None;
        let mut i = self.nodes[ROOT].right;
        while i != ROOT {
            let count = self.nodes[i].count;
            if best.map_or(true, |(_, smallest)| count < smallest) {
                best = Some((i, count));
            }
            i = self.nodes[i].right;
        }
        best.map(|(id, _)| id)
    }

    /// Unlinks `header`'s column from the header ring, then unlinks every
    /// row intersecting that column from all *other* columns it touches,
    /// decrementing their counts.
    ///
    /// The unlinked nodes keep their link fields untouched, so the whole
    /// edit can be reversed byte-for-byte by [`Matrix::uncover`]. Covers and
    /// uncovers must pair up LIFO; nothing else is snapshotted.
    pub fn cover(&mut self, header: NodeId) {
        let (left, right) = (self.nodes[header].left, self.nodes[header].right);
        self.nodes[right].left = left;
        self.nodes[left].right = right;
        let mut i = self.nodes[header].down;
        while i != header {
            let mut j = self.nodes[i].right;
            while j != i {
                let (up, down) = (self.nodes[j].up, self.nodes[j].down);
                self.nodes[down].up = up;
                self.nodes[up].down = down;
                let column = self.nodes[j].column;
                self.nodes[column].count -= 1;
                j = self.nodes[j].right;
            }
            i = self.nodes[i].down;
        }
    }

    /// Exact inverse of [`Matrix::cover`]: relinks the removed rows bottom
    /// to top, right to left (mirroring cover's traversal), restoring column
    /// counts, then relinks `header` into the header ring.
    pub fn uncover(&mut self, header: NodeId) {
        let mut i = self.nodes[header].up;
        while i != header {
            let mut j = self.nodes[i].left;
            while j != i {
                let (up, down) = (self.nodes[j].up, self.nodes[j].down);
                self.nodes[down].up = j;
                self.nodes[up].down = j;
                let column = self.nodes[j].column;
                self.nodes[column].count += 1;
                j = self.nodes[j].left;
            }
            i = self.nodes[i].up;
        }
        let (left, right) = (self.nodes[header].left, self.nodes[header].right);
        self.nodes[right].left = header;
        self.nodes[left].right = header;
    }

    // Read-only traversal for the search engine. The engine never edits
    // links directly; all mutation goes through cover/uncover.

    pub(crate) fn down(&self, id: NodeId) -> NodeId {
        self.nodes[id].down
    }

    pub(crate) fn right(&self, id: NodeId) -> NodeId {
        self.nodes[id].right
    }

    pub(crate) fn left(&self, id: NodeId) -> NodeId {
        self.nodes[id].left
    }

    pub(crate) fn column_of(&self, id: NodeId) -> NodeId {
        self.nodes[id].column
    }

    pub(crate) fn row_of(&self, id: NodeId) -> RowId {
        self.nodes[id].row
    }

    #[cfg(test)]
    pub(crate) fn count_of(&self, header: NodeId) -> usize {
        self.nodes[header].count
    }
}
