#![no_main]

use libfuzzer_sys::fuzz_target;
use plan_sketch::{build_wall_model, closed_polygon, PlanDocument};

fuzz_target!(|data: &[u8]| {
    let Ok(json) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(document) = PlanDocument::parse(json, 200.0) else {
        return;
    };

    // Geladene Segmente verweisen nur auf gültige, verschiedene Punkte
    for seg in &document.plan.segments {
        assert!(seg.a < document.plan.points.len());
        assert!(seg.b < document.plan.points.len());
        assert_ne!(seg.a, seg.b);
    }

    let _ = closed_polygon(&document.plan.segments);
    let _ = build_wall_model(&document.plan, document.px_per_m, 2.5, 0.05);
});
