use std::f64::consts::TAU;

use chart_views::api::{ChartKind, ChartSettings, ChartView};
use chart_views::core::{ChartData, Series, TypedValue, Viewport};
use chart_views::render::NullRenderer;
use proptest::prelude::*;

fn chart_data(rows: &[Vec<f64>]) -> ChartData {
    let series = rows
        .iter()
        .map(|values| {
            let labels = (0..values.len())
                .map(|index| TypedValue::Text(format!("c{index}")))
                .collect();
            let values = values.iter().copied().map(TypedValue::Number).collect();
            Series::new(Some("series".to_owned()), labels, values)
        })
        .collect();
    ChartData::from_series(None, series).expect("well-formed data")
}

fn rows_strategy(min: f64, max: f64) -> impl Strategy<Value = Vec<Vec<f64>>> {
    (1usize..5, 1usize..9).prop_flat_map(move |(series_count, category_count)| {
        prop::collection::vec(
            prop::collection::vec(min..max, category_count),
            series_count,
        )
    })
}

fn view(kind: ChartKind, rows: &[Vec<f64>]) -> ChartView<NullRenderer> {
    ChartView::new(
        NullRenderer::default(),
        kind,
        chart_data(rows),
        ChartSettings::default().with_axis_titles(true),
    )
    .expect("view init")
}

proptest! {
    #[test]
    fn every_kind_produces_valid_frames(
        rows in rows_strategy(-500.0, 5_000.0),
        width in 10u32..2_000,
        height in 10u32..2_000
    ) {
        for kind in [ChartKind::Bar, ChartKind::Line, ChartKind::Donut] {
            let mut chart = view(kind, &rows);
            chart.render(Viewport::new(width, height)).expect("render");
            prop_assert_eq!(chart.renderer().frames_rendered, 1);
        }
    }

    #[test]
    fn passes_are_idempotent(
        rows in rows_strategy(0.0, 1_000.0),
        width in 10u32..1_500,
        height in 10u32..1_500
    ) {
        for kind in [ChartKind::Bar, ChartKind::Line, ChartKind::Donut] {
            let chart = view(kind, &rows);
            let viewport = Viewport::new(width, height);
            let first = chart.render_pass(viewport).expect("first pass");
            let second = chart.render_pass(viewport).expect("second pass");
            prop_assert_eq!(first, second);
        }
    }

    #[test]
    fn value_axis_covers_the_data(rows in rows_strategy(1.0, 10_000.0)) {
        let chart = view(ChartKind::Bar, &rows);
        let state = chart.layout(Viewport::new(640, 480)).expect("layout");
        let layout = state.as_cartesian().expect("cartesian");
        let max = chart.data().max_vertical_value().expect("non-empty");

        prop_assert!(layout.value_axis.max_value >= max * (1.0 - 1e-12));
        for value in rows.iter().flatten() {
            let y = layout.value_to_pixel_y(*value);
            prop_assert!(y <= layout.baseline_y() + 1e-9);
        }
    }

    #[test]
    fn donut_rings_sweep_full_circle(rows in rows_strategy(0.5, 100.0)) {
        let chart = view(ChartKind::Donut, &rows);
        let frame = chart.build_render_frame(Viewport::new(400, 400)).expect("frame");
        let arcs: Vec<_> = frame.arcs().collect();
        let per_ring = rows[0].len();

        prop_assert_eq!(arcs.len(), rows.len() * per_ring);
        for ring in arcs.chunks(per_ring) {
            let sweep: f64 = ring.iter().map(|arc| arc.sweep()).sum();
            prop_assert!((sweep - TAU).abs() <= 1e-9);
        }
    }
}
