// Sheet regions and uniform grid layouts

/// A rectangular region of a sprite sheet, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl SheetRegion {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Whether the region lies fully inside a sheet of the given size
    ///
    /// Empty regions never fit.
    pub fn fits_within(&self, sheet_width: u32, sheet_height: u32) -> bool {
        if self.width == 0 || self.height == 0 {
            return false;
        }
        let right = self.x as u64 + self.width as u64;
        let bottom = self.y as u64 + self.height as u64;
        right <= sheet_width as u64 && bottom <= sheet_height as u64
    }
}

/// A sheet cut into equally sized cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub columns: u32,
    pub rows: u32,
    pub cell_width: u32,
    pub cell_height: u32,
}

impl GridLayout {
    pub const fn new(columns: u32, rows: u32, cell_width: u32, cell_height: u32) -> Self {
        Self {
            columns,
            rows,
            cell_width,
            cell_height,
        }
    }

    /// Total number of cells
    pub fn cell_count(&self) -> usize {
        self.columns as usize * self.rows as usize
    }

    /// Region covered by the cell at (column, row)
    pub fn cell(&self, column: u32, row: u32) -> SheetRegion {
        SheetRegion::new(
            column * self.cell_width,
            row * self.cell_height,
            self.cell_width,
            self.cell_height,
        )
    }

    /// All cells in row-major order: row 0 left to right, then row 1, ...
    pub fn cells(&self) -> impl Iterator<Item = SheetRegion> {
        let layout = *self;
        (0..layout.rows)
            .flat_map(move |row| (0..layout.columns).map(move |column| layout.cell(column, row)))
    }

    /// Smallest sheet size that holds every cell
    pub fn required_size(&self) -> (u32, u32) {
        (
            self.columns * self.cell_width,
            self.rows * self.cell_height,
        )
    }
}
