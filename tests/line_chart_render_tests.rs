use approx::assert_abs_diff_eq;
use chart_views::api::{ChartRenderer, ChartSettings, LineChart};
use chart_views::core::{ChartData, Viewport, project_line_segments};
use chart_views::render::{Color, Palette, RenderFrame, TextHAlign};

const GREEN: Color = Color::rgb(0.0, 0.6, 0.0);
const ORANGE: Color = Color::rgb(1.0, 0.5, 0.0);

fn sample_data() -> ChartData {
    ChartData::from_json_str(
        r#"{
            "data": [
                {"title": "Series A", "horizontal": ["Jan", "Feb", "Mar", "Apr"], "vertical": [10, "20", 47, 5]},
                {"title": "Series B", "horizontal": ["Jan", "Feb", "Mar", "Apr"], "vertical": [3, 4, 5, 6]}
            ]
        }"#,
    )
    .expect("valid chart json")
}

fn build_frame(data: &ChartData, settings: &ChartSettings) -> RenderFrame {
    let state = LineChart
        .layout(data, Viewport::new(200, 100), settings)
        .expect("layout");
    let mut palette = Palette::seeded(settings.colors.clone(), 5);
    LineChart
        .render(data, &state, settings, &mut palette)
        .expect("render")
}

fn preset_settings() -> ChartSettings {
    ChartSettings::default().with_colors(vec![GREEN, ORANGE])
}

#[test]
fn default_frame_counts() {
    let frame = build_frame(&sample_data(), &preset_settings());

    assert_eq!(frame.lines().count(), 26);
    assert_eq!(frame.texts().count(), 16);
    assert_eq!(frame.len(), 42);
    frame.validate().expect("frame is valid");
}

#[test]
fn polyline_starts_at_origin_and_visits_slot_edges() {
    let frame = build_frame(&sample_data(), &preset_settings());
    let segments: Vec<_> = frame.lines().skip(16).take(4).collect();

    let expected = [
        (20.0, 80.0, 60.0, 68.0),
        (60.0, 68.0, 100.0, 56.0),
        (100.0, 56.0, 140.0, 23.6),
        (140.0, 23.6, 180.0, 74.0),
    ];
    for (segment, (x1, y1, x2, y2)) in segments.iter().zip(expected) {
        assert_abs_diff_eq!(segment.x1, x1, epsilon = 1e-9);
        assert_abs_diff_eq!(segment.y1, y1, epsilon = 1e-9);
        assert_abs_diff_eq!(segment.x2, x2, epsilon = 1e-9);
        assert_abs_diff_eq!(segment.y2, y2, epsilon = 1e-9);
        assert_eq!(segment.color, GREEN);
        assert_abs_diff_eq!(segment.stroke_width, 1.0);
        assert!(!segment.is_dashed());
    }
}

#[test]
fn every_series_gets_its_own_polyline() {
    let frame = build_frame(&sample_data(), &preset_settings());
    let second: Vec<_> = frame.lines().skip(20).take(4).collect();

    assert!(second.iter().all(|segment| segment.color == ORANGE));
    assert_abs_diff_eq!(second[0].x1, 20.0);
    assert_abs_diff_eq!(second[0].y1, 80.0);
    assert_abs_diff_eq!(second[3].y2, 80.0 - 6.0 * 1.2, epsilon = 1e-9);
}

#[test]
fn vertical_gridlines_mark_each_category() {
    let frame = build_frame(&sample_data(), &preset_settings());
    let gridlines: Vec<_> = frame.lines().skip(2).take(4).collect();

    for (index, line) in gridlines.iter().enumerate() {
        let x = 20.0 + 40.0 * (index + 1) as f64;
        assert_abs_diff_eq!(line.x1, x);
        assert_abs_diff_eq!(line.x2, x);
        assert_abs_diff_eq!(line.y1, 20.0);
        assert_abs_diff_eq!(line.y2, 80.0);
        assert!(line.is_dashed());
    }

    let labels: Vec<_> = frame.texts().take(4).collect();
    assert_eq!(labels[1].text, "Feb");
    assert_eq!(labels[1].h_align, TextHAlign::Left);
    assert_abs_diff_eq!(labels[1].x, 100.0);
}

#[test]
fn hidden_grid_keeps_category_labels() {
    let frame = build_frame(&sample_data(), &preset_settings().with_grid(false));

    assert_eq!(frame.lines().filter(|line| line.is_dashed()).count(), 0);
    assert_eq!(frame.texts().filter(|text| text.text == "Mar").count(), 1);
}

#[test]
fn frame_matches_projected_geometry() {
    let data = sample_data();
    let settings = preset_settings();
    let state = LineChart
        .layout(&data, Viewport::new(200, 100), &settings)
        .expect("layout");
    let layout = state.as_cartesian().expect("cartesian state");
    let projected = project_line_segments(&data.series()[1], layout);

    let frame = build_frame(&data, &settings);
    for (segment, line) in projected.iter().zip(frame.lines().skip(20)) {
        assert_eq!(segment.x1, line.x1);
        assert_eq!(segment.y2, line.y2);
    }
}

#[test]
fn empty_series_draws_no_path() {
    let data = ChartData::from_json_str(
        r#"{"data": [{"title": "empty", "horizontal": [], "vertical": []}]}"#,
    )
    .expect("empty categories are valid");
    let settings = preset_settings();
    let frame = build_frame(&data, &settings);

    assert_eq!(frame.lines().count(), 2 + 10 + 1);
    frame.validate().expect("frame is valid");
}

#[test]
fn axis_titles_cover_both_axes() {
    let data = ChartData::from_json_str(
        r#"{
            "axesSettings": {"horizontal": {"title": "Month"}, "vertical": {"title": "Sales"}},
            "data": [{"title": "Series A", "horizontal": ["Jan", "Feb"], "vertical": [3, 8]}]
        }"#,
    )
    .expect("valid chart json");
    let frame = build_frame(&data, &preset_settings().with_axis_titles(true));

    let month = frame
        .texts()
        .find(|text| text.text == "Month")
        .expect("horizontal title");
    assert_abs_diff_eq!(month.x, 100.0);
    assert_abs_diff_eq!(month.y, 95.0);

    let sales = frame
        .texts()
        .find(|text| text.text == "Sales")
        .expect("vertical title");
    assert_eq!(sales.h_align, TextHAlign::Center);
    assert_abs_diff_eq!(sales.x, 20.0);
    assert_abs_diff_eq!(sales.y, 5.0);
}
