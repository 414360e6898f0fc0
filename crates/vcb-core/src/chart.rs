//! Geometry for the mini bar charts.
//!
//! Coordinates are in abstract units with the origin at the top left and y
//! growing downward, so the same bars can be drawn by the egui painter and
//! flipped onto a PDF page.

/// Headroom above the tallest bar.
pub const HEADROOM: f64 = 1.1;
/// Space between neighbouring bars.
pub const BAR_GAP: f32 = 6.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartPadding {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Default for ChartPadding {
    fn default() -> Self {
        Self {
            top: 12.0,
            right: 5.0,
            bottom: 15.0,
            left: 5.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Horizontal centre of the slot, for value and axis labels.
    pub center_x: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarChartGeometry {
    pub width: f32,
    pub height: f32,
    pub padding: ChartPadding,
    pub bar_gap: f32,
}

impl BarChartGeometry {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            padding: ChartPadding::default(),
            bar_gap: BAR_GAP,
        }
    }

    /// The newsletter chart: 200 × 55.
    pub fn mini() -> Self {
        Self::new(200.0, 55.0)
    }

    pub fn inner_width(&self) -> f32 {
        (self.width - self.padding.left - self.padding.right).max(0.0)
    }

    pub fn inner_height(&self) -> f32 {
        (self.height - self.padding.top - self.padding.bottom).max(0.0)
    }

    /// Baseline of the x-axis labels.
    pub fn axis_label_y(&self) -> f32 {
        self.height - 3.0
    }

    /// Top of the value scale. Never zero, so all-zero data draws flat bars.
    pub fn scale_max(values: &[f64]) -> f64 {
        let max = values
            .iter()
            .copied()
            .filter(|value| value.is_finite())
            .fold(0.0_f64, f64::max);
        if max > 0.0 { max * HEADROOM } else { 1.0 }
    }

    /// One rectangle per value. Negative and non-finite values draw as zero.
    pub fn bars(&self, values: &[f64]) -> Vec<BarRect> {
        if values.is_empty() {
            return Vec::new();
        }
        let scale = Self::scale_max(values);
        let slot = self.inner_width() / values.len() as f32;
        let bar_width = (slot - self.bar_gap).max(1.0);
        let inner_height = self.inner_height();
        let baseline = self.padding.top + inner_height;

        values
            .iter()
            .enumerate()
            .map(|(index, value)| {
                let clamped = if value.is_finite() { value.max(0.0) } else { 0.0 };
                let height = (clamped / scale) as f32 * inner_height;
                let center_x = self.padding.left + index as f32 * slot + slot / 2.0;
                BarRect {
                    x: center_x - bar_width / 2.0,
                    y: baseline - height,
                    width: bar_width,
                    height,
                    center_x,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tallest_bar_leaves_headroom() {
        let geometry = BarChartGeometry::mini();
        let bars = geometry.bars(&[1.0, 14.0, 1.0, 13.0, 29.0]);
        assert_eq!(bars.len(), 5);
        let tallest = bars[4].height;
        let expected = geometry.inner_height() / 1.1;
        assert!((tallest - expected).abs() < 1e-3);
        assert!(bars[4].y > geometry.padding.top);
    }

    #[test]
    fn slots_match_newsletter_layout() {
        let geometry = BarChartGeometry::mini();
        let bars = geometry.bars(&[1.0, 1.0, 1.0, 2.0, 5.0]);
        // 190 units across five slots of 38, bars 32 wide.
        assert!((bars[0].width - 32.0).abs() < 1e-4);
        assert!((bars[0].center_x - 24.0).abs() < 1e-4);
        assert!((bars[4].center_x - 176.0).abs() < 1e-4);
    }

    #[test]
    fn bars_share_a_baseline() {
        let geometry = BarChartGeometry::mini();
        for bar in geometry.bars(&[12.4, 19.5, 3.5, 20.9, 56.3]) {
            assert!((bar.y + bar.height - 40.0).abs() < 1e-3);
        }
    }

    #[test]
    fn degenerate_data_does_not_divide_by_zero() {
        let geometry = BarChartGeometry::mini();
        assert!(geometry.bars(&[]).is_empty());
        let flat = geometry.bars(&[0.0, 0.0]);
        assert!(flat.iter().all(|bar| bar.height == 0.0));
        let odd = geometry.bars(&[f64::NAN, -4.0, 2.0]);
        assert!(odd.iter().all(|bar| bar.height.is_finite()));
        assert_eq!(odd[0].height, 0.0);
        assert_eq!(odd[1].height, 0.0);
    }
}
