use super::Diagram;
use crate::draw::{FontRole, Shape, Status, Tone};

const SURFACES: [&str; 4] = [
    "Agents tab: guided setup and runtime controls",
    "Overview / Activity / Budget / Providers",
    "Desktop snapshots for widget + menu bar",
    "CLI JSON contract for desktop integration",
];

const ACTIONS: [&str; 5] = [
    "tokfence start / stop / status",
    "tokfence launch / restart / logs",
    "tokfence kill / unkill / revoke / restore",
    "tokfence budget set / clear / status",
    "tokfence watch --once / --interval",
];

/// Runtime state rows: key, value and the status that colors the value.
const STATE: [(&str, &str, Status); 6] = [
    ("Daemon", "Online", Status::Ok),
    ("Transport", "UDS preferred + TCP fallback", Status::Info),
    ("Capabilities", "Session scoped + signed", Status::Ok),
    ("Risk", "GREEN / YELLOW / ORANGE / RED", Status::Caution),
    ("Kill switch", "Immediate global block", Status::Critical),
    ("Audit", "SQLite request logs + stats", Status::Ok),
];

const ROW_PITCH: i32 = 104;

pub(super) fn diagram() -> Diagram {
    let mut diagram = Diagram::with_header(
        "control_plane",
        "Tokfence Control Plane",
        "Desktop + CLI operate the same local daemon state",
    );

    diagram.add_shape(Shape::panel(56, 180, 720, 760, "Operator Surfaces"));
    for (i, surface) in SURFACES.iter().enumerate() {
        diagram.add_shape(Shape::bullet(84, 250 + 50 * i as i32, surface, Status::Ok));
    }

    diagram.add_shape(Shape::text(
        84,
        490,
        "Primary actions",
        FontRole::Heading,
        Tone::Text,
    ));
    for (i, action) in ACTIONS.iter().enumerate() {
        diagram.add_shape(Shape::text(
            84,
            540 + 44 * i as i32,
            &format!("- {action}"),
            FontRole::Body,
            Tone::Muted,
        ));
    }

    diagram.add_shape(Shape::panel(816, 180, 664, 760, "Runtime State"));
    for (i, (key, value, status)) in STATE.iter().enumerate() {
        let y = 250 + ROW_PITCH * i as i32;
        diagram.add_shape(Shape::block(
            844,
            y,
            608,
            90,
            14.0,
            Tone::SurfaceAlt,
            Some(Tone::Border),
        ));
        diagram.add_shape(Shape::text(870, y + 20, key, FontRole::Heading, Tone::Text));
        diagram.add_shape(Shape::text(
            1110,
            y + 24,
            value,
            FontRole::Body,
            Tone::Status(*status),
        ));
    }
    diagram
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actions_are_prefixed_list_items() {
        let diagram = diagram();
        assert!(diagram.shapes.contains(&Shape::text(
            84,
            540,
            "- tokfence start / stop / status",
            FontRole::Body,
            Tone::Muted
        )));
        assert!(diagram.shapes.contains(&Shape::text(
            84,
            716,
            "- tokfence watch --once / --interval",
            FontRole::Body,
            Tone::Muted
        )));
    }

    #[test]
    fn last_state_row_stays_inside_panel() {
        let diagram = diagram();
        let last_row = diagram
            .shapes
            .iter()
            .filter(|s| matches!(s, Shape::Block { .. }))
            .last()
            .and_then(Shape::bounding_box)
            .unwrap();
        assert_eq!(last_row.y, 770);
        assert!(last_row.bottom() <= 180 + 760);
    }
}
