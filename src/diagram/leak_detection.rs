use super::Diagram;
use crate::draw::{Annotation, ChartSeries, Shape, Status, TimelineChart};
use crate::util::NormalizedPoint;

const INPUTS: [&str; 3] = [
    "Local logs: request count, tokens, cost by provider",
    "Remote usage endpoint: billing/usage totals",
    "Thresholds: absolute delta + percentage + idle-window",
];

const LOCAL_USAGE: [(f64, f64); 7] = [
    (0.05, 0.78),
    (0.20, 0.70),
    (0.35, 0.58),
    (0.50, 0.54),
    (0.65, 0.48),
    (0.80, 0.44),
    (0.93, 0.40),
];

const PROVIDER_USAGE: [(f64, f64); 7] = [
    (0.05, 0.78),
    (0.20, 0.70),
    (0.35, 0.58),
    (0.50, 0.51),
    (0.65, 0.40),
    (0.80, 0.30),
    (0.93, 0.18),
];

fn series(label: &str, status: Status, points: &[(f64, f64)]) -> ChartSeries {
    ChartSeries {
        label: label.to_string(),
        status,
        points: points
            .iter()
            .map(|&(x, y)| NormalizedPoint::new(x, y))
            .collect(),
    }
}

pub(super) fn diagram() -> Diagram {
    let mut diagram = Diagram::with_header(
        "leak_detection",
        "Key Leak Detector",
        "Compare provider usage vs Tokfence logs and raise incidents",
    );

    diagram.add_shape(Shape::panel(56, 180, 1424, 260, "Detection Inputs"));
    for (input, y) in INPUTS.iter().zip([248, 292, 336]) {
        diagram.add_shape(Shape::bullet(84, y, input, Status::Ok));
    }

    diagram.add_shape(Shape::panel(56, 470, 1424, 470, "Detection Timeline"));
    diagram.add_shape(Shape::Chart(TimelineChart {
        x: 92,
        y: 560,
        w: 1360,
        h: 300,
        series: vec![
            series("Green = Tokfence local usage", Status::Ok, &LOCAL_USAGE),
            series("Red = provider-side usage", Status::Critical, &PROVIDER_USAGE),
        ],
        annotation: Some(Annotation {
            anchor: NormalizedPoint::new(0.82, 0.30),
            headline: "Delta exceeds threshold".to_string(),
            detail: "Risk -> RED, optional auto-revoke".to_string(),
            status: Status::Critical,
        }),
    }));
    diagram
}
