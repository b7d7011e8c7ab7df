//! Grid module - cell data owned by a layer
//!
//! A grid is a list of rows where each cell is either transparent (`None`) or an
//! opaque payload (`Some(P)`). Rows may be ragged: the grid's width is the length
//! of its longest row, and a cell past the end of a shorter row reads as
//! transparent. Nothing ever indexes past a row's real length.

/// A single cell: `None` is transparent, `Some(payload)` is opaque.
pub type Cell<P> = Option<P>;

/// 2D block of cells, row-major, possibly ragged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<P = char> {
    rows: Vec<Vec<Cell<P>>>,
    width: u32,
}

impl<P> Grid<P> {
    /// Build a grid from explicit rows.
    ///
    /// An empty row list becomes a single empty row so every grid has a height
    /// of at least one. Width is the longest row, with a floor of one.
    pub fn from_rows(mut rows: Vec<Vec<Cell<P>>>) -> Self {
        if rows.is_empty() {
            rows.push(Vec::new());
        }
        let longest = rows.iter().map(Vec::len).max().unwrap_or(0);
        let width = u32::try_from(longest).unwrap_or(u32::MAX).max(1);
        Self { rows, width }
    }

    /// Number of columns (longest row, at least 1).
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows (at least 1).
    pub fn height(&self) -> u32 {
        u32::try_from(self.rows.len()).unwrap_or(u32::MAX)
    }

    pub fn rows(&self) -> &[Vec<Cell<P>>] {
        &self.rows
    }

    /// Get the opaque payload at local `(x, y)`.
    ///
    /// Returns `None` for transparent cells, cells past the end of a short row,
    /// and coordinates outside the grid.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<&P> {
        self.rows.get(y)?.get(x)?.as_ref()
    }

    #[inline]
    pub fn is_opaque(&self, x: usize, y: usize) -> bool {
        self.get(x, y).is_some()
    }

    /// Count of opaque cells.
    pub fn opaque_count(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.iter().filter(|c| c.is_some()).count())
            .sum()
    }
}

impl<P: Clone> Grid<P> {
    /// A solid `width` x `height` block of one payload.
    pub fn filled(width: u32, height: u32, payload: P) -> Self {
        let row = vec![Some(payload); width as usize];
        Self::from_rows(vec![row; height as usize])
    }
}

impl Grid<char> {
    /// Convert a block of text into a grid.
    ///
    /// Lines are split on `\n` (a trailing `\r` is dropped). Every character equal
    /// to `transparent` becomes a transparent cell; all others become opaque
    /// single-character payloads. With `transparent = None` every character is
    /// opaque. Empty text yields a single empty row.
    ///
    /// # Examples
    ///
    /// ```
    /// use swears_core::Grid;
    ///
    /// let grid = Grid::from_text("ab\n c", Some(' '));
    /// assert_eq!(grid.width(), 2);
    /// assert_eq!(grid.height(), 2);
    /// assert_eq!(grid.get(0, 1), None);
    /// assert_eq!(grid.get(1, 1), Some(&'c'));
    /// ```
    pub fn from_text(text: &str, transparent: Option<char>) -> Self {
        let rows: Vec<Vec<Cell<char>>> = text
            .split('\n')
            .map(|line| {
                line.strip_suffix('\r')
                    .unwrap_or(line)
                    .chars()
                    .map(|ch| if Some(ch) == transparent { None } else { Some(ch) })
                    .collect::<Vec<_>>()
            })
            .collect();
        Self::from_rows(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_yields_single_empty_row() {
        let grid = Grid::from_text("", Some(' '));
        assert_eq!(grid.height(), 1);
        assert_eq!(grid.width(), 1);
        assert_eq!(grid.rows()[0].len(), 0);
        assert_eq!(grid.opaque_count(), 0);
    }

    #[test]
    fn ragged_lines_stay_ragged() {
        let grid = Grid::from_text("abcd\nx\nyz", None);
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.rows()[1].len(), 1);
        // Past the end of a short row reads as transparent.
        assert_eq!(grid.get(3, 1), None);
        assert_eq!(grid.get(3, 0), Some(&'d'));
    }

    #[test]
    fn transparent_marker_is_not_opaque() {
        let grid = Grid::from_text("a.b", Some('.'));
        assert!(grid.is_opaque(0, 0));
        assert!(!grid.is_opaque(1, 0));
        assert!(grid.is_opaque(2, 0));
        assert_eq!(grid.opaque_count(), 2);
    }

    #[test]
    fn no_transparent_marker_keeps_spaces_opaque() {
        let grid = Grid::from_text("a b", None);
        assert_eq!(grid.get(1, 0), Some(&' '));
    }

    #[test]
    fn carriage_returns_are_stripped() {
        let grid = Grid::from_text("ab\r\ncd", None);
        assert_eq!(grid.width(), 2);
        assert_eq!(grid.get(0, 1), Some(&'c'));
    }

    #[test]
    fn out_of_range_reads_are_none() {
        let grid = Grid::from_text("a", None);
        assert_eq!(grid.get(1, 0), None);
        assert_eq!(grid.get(0, 1), None);
        assert_eq!(grid.get(usize::MAX, usize::MAX), None);
    }

    #[test]
    fn filled_grid_is_fully_opaque() {
        let grid = Grid::filled(3, 2, 7u8);
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.opaque_count(), 6);
    }

    #[test]
    fn empty_row_list_becomes_one_row() {
        let grid: Grid<u8> = Grid::from_rows(Vec::new());
        assert_eq!(grid.height(), 1);
        assert_eq!(grid.width(), 1);
    }
}
