//! Heuristic table detection from positioned text cells.
//!
//! Detects a grid of aligned text cells on a page without relying on drawn
//! ruling lines: cells are clustered into rows by vertical position, runs of
//! consecutive rows with a consistent column count form a candidate region,
//! and the first such region is materialized as a table by assigning cells
//! to column bins derived from their X positions.
//!
//! Only the first detected region per page is reported. The conversion
//! pipeline deliberately models one table per page; a page holding several
//! distinct tables contributes its topmost one.

use crate::model::Row;

/// A text fragment with its bounding box, in top-left-origin page points.
#[derive(Debug, Clone)]
pub struct TextCell {
    /// Fragment text, already trimmed.
    pub text: String,
    /// Left coordinate.
    pub x: f32,
    /// Top coordinate.
    pub y: f32,
    /// Width.
    pub width: f32,
    /// Height.
    pub height: f32,
}

impl TextCell {
    fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    fn right(&self) -> f32 {
        self.x + self.width
    }
}

/// Table detector configuration.
#[derive(Debug, Clone)]
pub struct TableDetectorConfig {
    /// Cells whose vertical centers are within this distance (points) are
    /// considered to be on the same row.
    pub row_tolerance: f32,
    /// Left edges within this distance (points) fall into the same column.
    pub column_tolerance: f32,
    /// Minimum rows for a region to count as a table.
    pub min_rows: usize,
    /// Minimum columns for a region to count as a table.
    pub min_columns: usize,
}

impl Default for TableDetectorConfig {
    fn default() -> Self {
        Self {
            row_tolerance: 5.0,
            column_tolerance: 10.0,
            min_rows: 2,
            min_columns: 2,
        }
    }
}

/// Detects one table per page from positioned text cells.
#[derive(Debug, Clone, Default)]
pub struct TableDetector {
    config: TableDetectorConfig,
}

impl TableDetector {
    /// Create a detector with default configuration.
    pub fn new() -> Self {
        Self {
            config: TableDetectorConfig::default(),
        }
    }

    /// Create a detector with custom configuration.
    pub fn with_config(config: TableDetectorConfig) -> Self {
        Self { config }
    }

    /// Detect the first table on a page, returning its rows of cell strings.
    ///
    /// Returns `None` when no region of the page forms a grid.
    pub fn detect(&self, cells: &[TextCell]) -> Option<Vec<Row>> {
        if cells.len() < self.config.min_rows * self.config.min_columns {
            return None;
        }

        let lines = self.cluster_lines(cells);
        log::debug!(
            "TableDetector: {} cells clustered into {} lines",
            cells.len(),
            lines.len()
        );

        let region = self.first_grid_region(&lines)?;
        log::debug!("TableDetector: grid region of {} lines", region.len());

        self.build_rows(&region)
    }

    /// Cluster cells into visual lines by vertical center, top to bottom.
    fn cluster_lines<'a>(&self, cells: &'a [TextCell]) -> Vec<Vec<&'a TextCell>> {
        let mut lines: Vec<Vec<&TextCell>> = Vec::new();

        for cell in cells {
            let slot = lines.iter_mut().find(|line| {
                line.first()
                    .is_some_and(|first| (cell.center_y() - first.center_y()).abs() <= self.config.row_tolerance)
            });
            match slot {
                Some(line) => line.push(cell),
                None => lines.push(vec![cell]),
            }
        }

        for line in &mut lines {
            line.sort_by(|a, b| a.x.partial_cmp(&b.x).unwrap_or(std::cmp::Ordering::Equal));
        }
        lines.sort_by(|a, b| {
            let ay = a.first().map(|c| c.y).unwrap_or(0.0);
            let by = b.first().map(|c| c.y).unwrap_or(0.0);
            ay.partial_cmp(&by).unwrap_or(std::cmp::Ordering::Equal)
        });

        lines
    }

    /// Find the first run of consecutive lines that looks like a grid:
    /// every line has at least `min_columns` cells and the cell counts stay
    /// within one of each other.
    fn first_grid_region<'a>(
        &self,
        lines: &[Vec<&'a TextCell>],
    ) -> Option<Vec<Vec<&'a TextCell>>> {
        let mut region: Vec<Vec<&TextCell>> = Vec::new();
        let mut expected: Option<usize> = None;

        for line in lines {
            let count = line.len();
            let fits = count >= self.config.min_columns
                && expected.map_or(true, |exp| count.abs_diff(exp) <= 1);

            if fits {
                if expected.is_none() {
                    expected = Some(count);
                }
                region.push(line.clone());
            } else {
                if region.len() >= self.config.min_rows {
                    return Some(region);
                }
                region.clear();
                expected = None;
                // A multi-cell line that broke the previous run can still
                // start a new one.
                if count >= self.config.min_columns {
                    expected = Some(count);
                    region.push(line.clone());
                }
            }
        }

        if region.len() >= self.config.min_rows {
            Some(region)
        } else {
            None
        }
    }

    /// Materialize a grid region into rows by binning cells into columns.
    fn build_rows(&self, region: &[Vec<&TextCell>]) -> Option<Vec<Row>> {
        let boundaries = self.column_boundaries(region);
        let column_count = boundaries.len().saturating_sub(1);
        if column_count < self.config.min_columns {
            return None;
        }

        let mut rows = Vec::with_capacity(region.len());
        for line in region {
            let mut cells = vec![String::new(); column_count];
            for cell in line {
                let idx = column_index(cell, &boundaries).min(column_count - 1);
                if cells[idx].is_empty() {
                    cells[idx] = cell.text.clone();
                } else {
                    // Two fragments landed in one bin; join with a space.
                    cells[idx].push(' ');
                    cells[idx].push_str(&cell.text);
                }
            }
            rows.push(Row::new(cells));
        }

        Some(rows)
    }

    /// Cluster left edges across the region into column start positions,
    /// closed by the rightmost cell edge.
    fn column_boundaries(&self, region: &[Vec<&TextCell>]) -> Vec<f32> {
        let mut lefts: Vec<f32> = region
            .iter()
            .flat_map(|line| line.iter().map(|c| c.x))
            .collect();
        lefts.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let Some(&first) = lefts.first() else {
            return Vec::new();
        };

        let mut boundaries = vec![first];
        for &x in &lefts[1..] {
            if let Some(&last) = boundaries.last() {
                if x - last > self.config.column_tolerance {
                    boundaries.push(x);
                }
            }
        }

        if let Some(rightmost) = region
            .iter()
            .flat_map(|line| line.iter().map(|c| c.right()))
            .max_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
        {
            boundaries.push(rightmost);
        }

        boundaries
    }
}

/// Index of the column bin whose span contains the cell's center.
fn column_index(cell: &TextCell, boundaries: &[f32]) -> usize {
    let center = cell.center_x();
    for (i, pair) in boundaries.windows(2).enumerate() {
        if center >= pair[0] && center < pair[1] {
            return i;
        }
    }
    boundaries.len().saturating_sub(2)
}
