// ---------------------------------------------------------------------------
// Chart configuration
// ---------------------------------------------------------------------------

/// Everything the renderer needs to know about how the chart looks.
///
/// A fresh value is built for every window; nothing here is process-wide.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    /// Heading shown above the plot and used as the window title.
    pub title: String,
    /// Label of the horizontal (position) axis.
    pub x_label: String,
    /// Bar thickness in row units; rows are 1.0 apart.
    pub bar_thickness: f64,
    /// Draw the first feature at the top instead of the bottom.
    pub invert_y: bool,
    /// Initial window size in points.
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: "Gene subfeatures".to_string(),
            x_label: "Position".to_string(),
            bar_thickness: 0.3,
            invert_y: true,
            window_size: [1000.0, 600.0],
            min_window_size: [400.0, 250.0],
        }
    }
}

impl ChartConfig {
    /// Vertical coordinate of the bar for feature `index`.
    pub fn row_y(&self, index: usize) -> f64 {
        if self.invert_y {
            -(index as f64)
        } else {
            index as f64
        }
    }

    /// Inverse of [`ChartConfig::row_y`]: the feature index drawn at `y`,
    /// if `y` falls exactly on a row.
    pub fn row_index(&self, y: f64) -> Option<usize> {
        let row = if self.invert_y { -y } else { y };
        if row < 0.0 || row.fract() != 0.0 {
            return None;
        }
        Some(row as usize)
    }
}
