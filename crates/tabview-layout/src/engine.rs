//! Tab strip width computation

use tabview_host::{GridLength, ScrollBarVisibility, TabWidth};

use crate::mode::WidthMode;

pub const DEFAULT_MIN_TAB_WIDTH: f64 = 48.0;
pub const DEFAULT_MAX_TAB_WIDTH: f64 = 200.0;

/// Space taken by the fixed columns around the tab strip
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ReservedWidths {
    /// Actual width of the left custom content column
    pub left_content: f64,
    /// Actual width of the add button column
    pub add_button: f64,
    /// Desired width of the right custom content
    pub right_content: f64,
}

impl ReservedWidths {
    pub fn total(&self) -> f64 {
        self.left_content + self.add_button + self.right_content
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TabWidthBounds {
    pub min: f64,
    pub max: f64,
}

impl TabWidthBounds {
    /// A bound that is not a finite number falls back to its default
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            min: finite_or(min, DEFAULT_MIN_TAB_WIDTH),
            max: finite_or(max, DEFAULT_MAX_TAB_WIDTH),
        }
    }

    /// Clamp into the bounds. A `max` below `min` is treated as `min`.
    pub fn clamp(&self, width: f64) -> f64 {
        let min = finite_or(self.min, DEFAULT_MIN_TAB_WIDTH);
        let max = finite_or(self.max, DEFAULT_MAX_TAB_WIDTH);
        width.clamp(min, max.max(min))
    }
}

fn finite_or(value: f64, default: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        default
    }
}

impl Default for TabWidthBounds {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_TAB_WIDTH, DEFAULT_MAX_TAB_WIDTH)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StripRequest {
    /// Total width of the control
    pub control_width: f64,
    pub reserved: ReservedWidths,
    /// Left plus right padding of the control
    pub horizontal_padding: f64,
    pub tab_count: usize,
    pub mode: WidthMode,
    pub bounds: TabWidthBounds,
}

/// Outcome of a layout pass. `None` fields leave the target untouched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutMetrics {
    pub available_width: f64,
    pub bounds: TabWidthBounds,
    /// Width applied to every tab container
    pub tab_width: TabWidth,
    pub column_width: Option<GridLength>,
    pub column_max_width: Option<f64>,
    pub list_max_width: Option<f64>,
    pub scroll_bar: Option<ScrollBarVisibility>,
}

pub fn layout_strip(request: &StripRequest) -> LayoutMetrics {
    let available_width = request.control_width - request.reserved.total();

    let mut metrics = LayoutMetrics {
        available_width,
        bounds: request.bounds,
        tab_width: TabWidth::Auto,
        column_width: None,
        column_max_width: None,
        list_max_width: None,
        scroll_bar: None,
    };

    match request.mode {
        WidthMode::SizeToContent => {
            metrics.column_max_width = Some(available_width);
            metrics.column_width = Some(GridLength::Auto);
            metrics.list_max_width = Some(available_width);
            metrics.scroll_bar = Some(ScrollBarVisibility::Auto);
        }
        WidthMode::Equal if request.tab_count > 0 => {
            let count = request.tab_count as f64;
            let width_for_scroller = (available_width - request.horizontal_padding) / count;
            let tab_width = request.bounds.clamp(width_for_scroller);

            metrics.tab_width = TabWidth::Fixed(tab_width);
            metrics.column_max_width = Some(available_width);

            if tab_width * count >= available_width {
                metrics.column_width = Some(GridLength::Pixels(available_width));
                metrics.scroll_bar = Some(ScrollBarVisibility::Visible);
            } else {
                metrics.column_width = Some(GridLength::Auto);
                metrics.scroll_bar = Some(ScrollBarVisibility::Hidden);
            }
        }
        WidthMode::Equal => {}
    }

    tracing::trace!(
        mode = %request.mode,
        tab_count = request.tab_count,
        available_width,
        tab_width = ?metrics.tab_width,
        "Computed tab strip layout"
    );

    metrics
}

#[cfg(test)]
mod tests {
    use super::*;

    fn equal(control_width: f64, tab_count: usize) -> StripRequest {
        StripRequest {
            control_width,
            reserved: ReservedWidths::default(),
            horizontal_padding: 0.0,
            tab_count,
            mode: WidthMode::Equal,
            bounds: TabWidthBounds::default(),
        }
    }

    #[test]
    fn test_three_tabs_fill_exactly() {
        let metrics = layout_strip(&equal(300.0, 3));

        assert_eq!(metrics.tab_width, TabWidth::Fixed(100.0));
        assert_eq!(metrics.column_width, Some(GridLength::Pixels(300.0)));
        assert_eq!(metrics.scroll_bar, Some(ScrollBarVisibility::Visible));
    }

    #[test]
    fn test_wide_strip_caps_at_max() {
        let metrics = layout_strip(&equal(1000.0, 2));

        assert_eq!(metrics.tab_width, TabWidth::Fixed(200.0));
        assert_eq!(metrics.column_width, Some(GridLength::Auto));
        assert_eq!(metrics.scroll_bar, Some(ScrollBarVisibility::Hidden));
    }

    #[test]
    fn test_crowded_strip_floors_at_min_and_scrolls() {
        let metrics = layout_strip(&equal(300.0, 20));

        assert_eq!(metrics.tab_width, TabWidth::Fixed(48.0));
        assert_eq!(metrics.column_width, Some(GridLength::Pixels(300.0)));
        assert_eq!(metrics.scroll_bar, Some(ScrollBarVisibility::Visible));
    }

    #[test]
    fn test_reserved_space_and_padding() {
        let request = StripRequest {
            reserved: ReservedWidths {
                left_content: 40.0,
                add_button: 40.0,
                right_content: 120.0,
            },
            horizontal_padding: 20.0,
            ..equal(800.0, 4)
        };
        let metrics = layout_strip(&request);

        assert_eq!(metrics.available_width, 600.0);
        assert_eq!(metrics.tab_width, TabWidth::Fixed(145.0));
        assert_eq!(metrics.column_max_width, Some(600.0));
        assert_eq!(metrics.scroll_bar, Some(ScrollBarVisibility::Hidden));
    }

    #[test]
    fn test_size_to_content() {
        let request = StripRequest {
            mode: WidthMode::SizeToContent,
            reserved: ReservedWidths {
                add_button: 50.0,
                ..ReservedWidths::default()
            },
            ..equal(450.0, 5)
        };
        let metrics = layout_strip(&request);

        assert_eq!(metrics.tab_width, TabWidth::Auto);
        assert_eq!(metrics.column_max_width, Some(400.0));
        assert_eq!(metrics.column_width, Some(GridLength::Auto));
        assert_eq!(metrics.list_max_width, Some(400.0));
        assert_eq!(metrics.scroll_bar, Some(ScrollBarVisibility::Auto));
    }

    #[test]
    fn test_equal_without_tabs_is_skipped() {
        let metrics = layout_strip(&equal(300.0, 0));

        assert_eq!(metrics.tab_width, TabWidth::Auto);
        assert_eq!(metrics.column_width, None);
        assert_eq!(metrics.scroll_bar, None);
    }

    #[test]
    fn test_tab_width_always_within_bounds() {
        for tab_count in 1..40 {
            for control_width in [0.0, 47.0, 120.0, 301.5, 999.0, 4000.0] {
                let metrics = layout_strip(&equal(control_width, tab_count));
                let width = metrics.tab_width.fixed().unwrap();

                assert!((DEFAULT_MIN_TAB_WIDTH..=DEFAULT_MAX_TAB_WIDTH).contains(&width));
                if width * tab_count as f64 >= metrics.available_width {
                    assert_eq!(
                        metrics.column_width,
                        Some(GridLength::Pixels(metrics.available_width))
                    );
                }
            }
        }
    }

    #[test]
    fn test_inverted_bounds_do_not_panic() {
        let request = StripRequest {
            bounds: TabWidthBounds::new(120.0, 80.0),
            ..equal(1000.0, 2)
        };
        assert_eq!(layout_strip(&request).tab_width, TabWidth::Fixed(120.0));
    }

    #[test]
    fn test_non_finite_bounds_use_defaults() {
        let bounds = TabWidthBounds::new(f64::NAN, f64::INFINITY);
        assert_eq!(bounds, TabWidthBounds::default());

        let request = StripRequest {
            bounds: TabWidthBounds::new(f64::NAN, 150.0),
            ..equal(30.0, 1)
        };
        assert_eq!(layout_strip(&request).tab_width, TabWidth::Fixed(48.0));

        let raw = TabWidthBounds {
            min: f64::NAN,
            max: f64::NAN,
        };
        assert_eq!(raw.clamp(500.0), 200.0);
    }
}
