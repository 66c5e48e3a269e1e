use super::Diagram;
use crate::draw::{FontRole, Shape, Status, Tone};
use crate::util::Rect;

const THREATS: [&str; 5] = [
    "Prompt injection attempts to exfiltrate keys",
    "Compromised local process calls proxy",
    "Runaway token spend or abuse",
    "Dangerous endpoint/method misuse",
    "Leaked token appears in outputs",
];

const BOUNDARY_NOTE: [&str; 3] = [
    "localhost is not a full isolation boundary.",
    "UDS + capabilities reduce attack surface",
    "but do not replace host compromise defenses.",
];

const CONTROLS: [(&str, Status); 6] = [
    ("Vault-backed key injection (no plaintext key in agent)", Status::Ok),
    ("Dual listener: UDS preferred, TCP for Docker flows", Status::Info),
    ("Capability gating before upstream/tool actions", Status::Ok),
    ("Risk-state policy enforcement (scope + TTL)", Status::Ok),
    ("Budget/rate-limit/kill switch containment", Status::Ok),
    ("Canary leak detection with incident logging", Status::Caution),
];

/// Escalation order of the risk ladder.
const LADDER: [(&str, Status); 4] = [
    ("GREEN", Status::Ok),
    ("YELLOW", Status::Caution),
    ("ORANGE", Status::Elevated),
    ("RED", Status::Critical),
];

const RISK_BOX: Rect = Rect {
    x: 620,
    y: 590,
    width: 780,
    height: 290,
};
const SEGMENT_WIDTH: i32 = 170;
const SEGMENT_HEIGHT: i32 = 76;
const SEGMENT_GAP: i32 = 50;

pub(super) fn diagram() -> Diagram {
    let mut diagram = Diagram::with_header(
        "security_model",
        "Tokfence Security Model",
        "Practical trust boundaries and layered controls",
    );

    diagram.add_shape(Shape::panel(56, 180, 460, 760, "Threats"));
    for (i, threat) in THREATS.iter().enumerate() {
        diagram.add_shape(Shape::bullet(84, 250 + 50 * i as i32, threat, Status::Critical));
    }
    diagram.add_shape(Shape::text(
        84,
        530,
        "Boundary note:",
        FontRole::Heading,
        Tone::Text,
    ));
    for (line, y) in BOUNDARY_NOTE.iter().zip([574, 612, 650]) {
        diagram.add_shape(Shape::text(84, y, line, FontRole::Body, Tone::Muted));
    }

    diagram.add_shape(Shape::panel(556, 180, 924, 760, "Controls"));
    for (i, (control, status)) in CONTROLS.iter().enumerate() {
        diagram.add_shape(Shape::bullet(584, 250 + 50 * i as i32, control, *status));
    }

    add_risk_ladder(&mut diagram);
    diagram
}

fn add_risk_ladder(diagram: &mut Diagram) {
    diagram.add_shape(Shape::block(
        RISK_BOX.x,
        RISK_BOX.y,
        RISK_BOX.width,
        RISK_BOX.height,
        16.0,
        Tone::SurfaceAlt,
        Some(Tone::Border),
    ));
    diagram.add_shape(Shape::text(
        RISK_BOX.x + 24,
        RISK_BOX.y + 16,
        "Risk Escalation",
        FontRole::Heading,
        Tone::Text,
    ));

    let sy = RISK_BOX.y + 86;
    let mut sx = RISK_BOX.x + 28;
    for (name, status) in LADDER {
        diagram.add_shape(Shape::block(
            sx,
            sy,
            SEGMENT_WIDTH,
            SEGMENT_HEIGHT,
            12.0,
            Tone::Status(status),
            None,
        ));
        diagram.add_shape(Shape::text(
            sx + 46,
            sy + 24,
            name,
            FontRole::Heading,
            Tone::Background,
        ));
        // A connector only fits while there is room left inside the box
        if sx + SEGMENT_WIDTH + 42 < RISK_BOX.right() {
            diagram.add_shape(Shape::arrow(
                sx + SEGMENT_WIDTH + 8,
                sy + 38,
                sx + SEGMENT_WIDTH + 34,
                sy + 38,
                Status::Info,
            ));
        }
        sx += SEGMENT_WIDTH + SEGMENT_GAP;
    }

    diagram.add_shape(Shape::text(
        RISK_BOX.x + 24,
        RISK_BOX.y + 196,
        "No auto-downgrade in-session. New session/reset required.",
        FontRole::Body,
        Tone::Muted,
    ));
}
