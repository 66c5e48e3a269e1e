use super::Diagram;
use crate::draw::{Shape, Status};

const PANELS: [(i32, i32, i32, i32, &str); 6] = [
    (56, 180, 280, 260, "Clients"),
    (390, 180, 280, 260, "Transport"),
    (724, 180, 360, 260, "Tokfence Core"),
    (1138, 180, 340, 260, "Providers"),
    (56, 500, 700, 440, "Security Layer (ImmuneFence)"),
    (800, 500, 678, 440, "Data Plane Guarantees"),
];

/// Bullet baselines in the top and bottom panel rows.
const TOP_ROWS: [i32; 3] = [242, 286, 330];
const BOTTOM_ROWS: [i32; 5] = [562, 606, 650, 694, 738];

pub(super) fn diagram() -> Diagram {
    let mut diagram = Diagram::with_header(
        "architecture",
        "Tokfence Architecture",
        "Agents-first desktop + UDS/TCP dual transport + ImmuneFence",
    );
    for (x, y, w, h, title) in PANELS {
        diagram.add_shape(Shape::panel(x, y, w, h, title));
    }

    let top: [(i32, [(&str, Status); 3]); 4] = [
        (
            82,
            [
                ("OpenClaw", Status::Ok),
                ("CLI", Status::Ok),
                ("Desktop App", Status::Ok),
            ],
        ),
        (
            416,
            [
                ("UDS: ~/.tokfence/tokfence.sock", Status::Info),
                ("TCP: 127.0.0.1:9471", Status::Info),
                ("Socket perms: 0660", Status::Info),
            ],
        ),
        (
            750,
            [
                ("Proxy routing + header sanitization", Status::Ok),
                ("Budget + rate limits + kill switch", Status::Ok),
                ("Live logs + stats + watch", Status::Ok),
            ],
        ),
        (
            1164,
            [
                ("Anthropic / OpenAI / Groq", Status::Ok),
                ("Mistral / Google / OpenRouter", Status::Ok),
                ("Custom upstreams", Status::Ok),
            ],
        ),
    ];
    for (x, items) in top {
        for ((text, status), y) in items.into_iter().zip(TOP_ROWS) {
            diagram.add_shape(Shape::bullet(x, y, text, status));
        }
    }

    let bottom: [(i32, [(&str, Status); 5]); 2] = [
        (
            84,
            [
                ("Capability token validation (Ed25519)", Status::Ok),
                ("Risk ladder: GREEN -> YELLOW -> ORANGE -> RED", Status::Caution),
                ("Sensor scans: secret refs, endpoint abuse", Status::Ok),
                ("Canary leak tripwire -> RED escalation", Status::Critical),
                ("Scope restrictions per risk state", Status::Ok),
            ],
        ),
        (
            828,
            [
                ("Keys stay in vault (Keychain/Argon2 file)", Status::Ok),
                ("Agent receives dummy apiKey only", Status::Ok),
                ("Upstream auth injected at request time", Status::Ok),
                ("No secret bodies in normal request logs", Status::Ok),
                ("Desktop snapshots: local-only, 0600", Status::Ok),
            ],
        ),
    ];
    for (x, items) in bottom {
        for ((text, status), y) in items.into_iter().zip(BOTTOM_ROWS) {
            diagram.add_shape(Shape::bullet(x, y, text, status));
        }
    }

    // Connectors between the top-row panels
    for (x1, x2) in [(336, 390), (670, 724), (1084, 1138)] {
        diagram.add_shape(Shape::arrow(x1, 310, x2, 310, Status::Info));
    }
    diagram
}
