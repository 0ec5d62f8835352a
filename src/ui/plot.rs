use eframe::egui::Ui;
use egui_plot::{uniform_grid_spacer, Bar, BarChart, Plot};

use crate::color::feature_palette;
use crate::config::ChartConfig;
use crate::data::model::FeatureTrack;

// ---------------------------------------------------------------------------
// Feature bar chart (central panel)
// ---------------------------------------------------------------------------

/// One horizontal bar per feature, in track order.
///
/// Each bar sits on its row (see [`ChartConfig::row_y`]), starts at the
/// feature's start position and is `length` long.
pub fn build_bars(track: &FeatureTrack, config: &ChartConfig) -> Vec<Bar> {
    let colors = feature_palette(track.len());

    track
        .iter()
        .zip(colors)
        .map(|((i, name, start, length), color)| {
            Bar::new(config.row_y(i), length as f64)
                .base_offset(start as f64)
                .width(config.bar_thickness)
                .name(name)
                .fill(color)
        })
        .collect()
}

/// Y-axis label for a grid mark: the feature name on its row, blank elsewhere.
pub fn tick_label(track: &FeatureTrack, config: &ChartConfig, y: f64) -> String {
    config
        .row_index(y)
        .and_then(|i| track.names().get(i))
        .cloned()
        .unwrap_or_default()
}

/// Hover text for a bar.
fn bar_tooltip(bar: &Bar) -> String {
    let start = bar.base_offset.unwrap_or(0.0);
    format!(
        "{}\nstart: {:.0}\nend: {:.0}\nlength: {:.0}",
        bar.name,
        start,
        start + bar.value,
        bar.value
    )
}

/// Render the feature chart into the given panel.
pub fn feature_chart(ui: &mut Ui, track: &FeatureTrack, config: &ChartConfig) {
    let chart = BarChart::new(build_bars(track, config))
        .horizontal()
        .element_formatter(Box::new(|bar: &Bar, _chart: &BarChart| bar_tooltip(bar)));

    let mut plot = Plot::new("feature_chart")
        .x_axis_label(config.x_label.as_str())
        .y_axis_formatter(|mark, _range| tick_label(track, config, mark.value))
        .y_grid_spacer(uniform_grid_spacer(|_| [1.0, 5.0, 10.0]))
        .show_grid([true, false])
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true);

    // Frame every bar plus half a row of padding above and below.
    if let Some((lo, hi)) = track.span() {
        let first = config.row_y(0);
        let last = config.row_y(track.len() - 1);
        plot = plot
            .include_x(lo as f64)
            .include_x(hi as f64)
            .include_y(first.max(last) + 0.5)
            .include_y(first.min(last) - 0.5);
    }

    plot.show(ui, |plot_ui| {
        plot_ui.bar_chart(chart);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Feature;
    use eframe::egui::{CentralPanel, Context, RawInput};

    /// Run one headless frame that draws the chart.
    fn render(track: &FeatureTrack) {
        let config = ChartConfig::default();
        let ctx = Context::default();
        let _ = ctx.run(RawInput::default(), |ctx| {
            CentralPanel::default().show(ctx, |ui| feature_chart(ui, track, &config));
        });
    }

    fn track() -> FeatureTrack {
        FeatureTrack::from_features([
            Feature {
                name: "a".to_string(),
                start: 10,
                end: 20,
            },
            Feature {
                name: "b".to_string(),
                start: 30,
                end: 45,
            },
        ])
    }

    #[test]
    fn bars_follow_features() {
        let config = ChartConfig::default();
        let bars = build_bars(&track(), &config);

        assert_eq!(bars.len(), 2);
        assert_eq!(bars[0].name, "a");
        assert_eq!(bars[0].value, 10.0);
        assert_eq!(bars[0].base_offset, Some(10.0));
        assert_eq!(bars[1].name, "b");
        assert_eq!(bars[1].value, 15.0);
        assert_eq!(bars[1].base_offset, Some(30.0));
        for bar in &bars {
            assert_eq!(bar.bar_width, 0.3);
        }
    }

    #[test]
    fn first_feature_is_drawn_on_top() {
        let config = ChartConfig::default();
        let bars = build_bars(&track(), &config);
        assert!(bars[0].argument > bars[1].argument);
    }

    #[test]
    fn empty_track_has_no_bars() {
        let bars = build_bars(&FeatureTrack::new(), &ChartConfig::default());
        assert!(bars.is_empty());
    }

    #[test]
    fn tick_labels_name_rows() {
        let config = ChartConfig::default();
        let track = track();
        assert_eq!(tick_label(&track, &config, 0.0), "a");
        assert_eq!(tick_label(&track, &config, -1.0), "b");
        assert_eq!(tick_label(&track, &config, -2.0), "");
        assert_eq!(tick_label(&track, &config, 1.0), "");
    }

    #[test]
    fn tooltip_shows_coordinates() {
        let bars = build_bars(&track(), &ChartConfig::default());
        let text = bar_tooltip(&bars[1]);
        assert_eq!(text, "b\nstart: 30\nend: 45\nlength: 15");
    }

    #[test]
    fn empty_track_renders() {
        render(&FeatureTrack::new());
    }

    #[test]
    fn single_feature_renders() {
        let track = FeatureTrack::from_features([Feature {
            name: "exon1".to_string(),
            start: 100,
            end: 150,
        }]);
        render(&track);
    }

    #[test]
    fn several_features_render() {
        render(&track());
    }
}
