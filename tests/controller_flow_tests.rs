use approx::assert_relative_eq;
use glam::DVec2;
use plan_sketch::{
    render, AppCommand, AppController, AppIntent, AppState, InteractionMode, LinkEvent, LinkMessage,
};

fn click(controller: &mut AppController, state: &mut AppState, x: f64, y: f64) {
    controller
        .handle_intent(
            state,
            AppIntent::CanvasClicked {
                pos: DVec2::new(x, y),
                shift: false,
            },
        )
        .expect("CanvasClicked sollte ohne Fehler durchlaufen");
}

fn receive_measure(controller: &mut AppController, state: &mut AppState, value_m: f64) {
    controller
        .handle_intent(
            state,
            AppIntent::LinkEventReceived {
                event: LinkEvent::Message(LinkMessage::Measure { value_m, ts: None }),
            },
        )
        .expect("Messung sollte übernommen werden");
}

fn intent(controller: &mut AppController, state: &mut AppState, intent: AppIntent) {
    controller
        .handle_intent(state, intent)
        .expect("Intent sollte ohne Fehler durchlaufen");
}

#[test]
fn test_measured_segment_flow_places_point_at_measured_distance() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    receive_measure(&mut controller, &mut state, 1.0);
    click(&mut controller, &mut state, 101.0, 99.0);
    assert_eq!(state.document.plan.point_pos(0), Some(DVec2::new(100.0, 100.0)));

    intent(&mut controller, &mut state, AppIntent::UseLastMeasurementRequested);
    assert_eq!(state.editor.mode, InteractionMode::Placing { start: 0 });

    // Richtung nach rechts, Klickposition liegt näher als die Messung
    click(&mut controller, &mut state, 160.0, 104.0);

    assert_eq!(state.editor.mode, InteractionMode::Idle);
    assert_eq!(state.point_count(), 2);
    assert_eq!(state.segment_count(), 1);
    let end = state.document.plan.point_pos(1).expect("Endpunkt erwartet");
    assert_relative_eq!(end.x, 300.0, epsilon = 1e-9);
    assert_relative_eq!(end.y, 100.0, epsilon = 1e-9);
    assert_eq!(state.document.plan.segments[0].len_m, Some(1.0));

    let last = state
        .command_log
        .entries()
        .last()
        .expect("Es sollte ein Command geloggt sein");
    assert!(matches!(last, AppCommand::PlaceMeasuredSegment { .. }));
}

#[test]
fn test_use_last_measurement_without_measure_is_noop() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    intent(&mut controller, &mut state, AppIntent::UseLastMeasurementRequested);

    assert_eq!(state.editor.mode, InteractionMode::Idle);
    assert_eq!(state.point_count(), 0);
    assert!(state.command_log.is_empty());
}

#[test]
fn test_ortho_constrains_placing_direction() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    intent(&mut controller, &mut state, AppIntent::OrthoToggled { enabled: true });
    receive_measure(&mut controller, &mut state, 0.5);
    click(&mut controller, &mut state, 100.0, 100.0);
    intent(&mut controller, &mut state, AppIntent::UseLastMeasurementRequested);
    click(&mut controller, &mut state, 140.0, 260.0);

    let end = state.document.plan.point_pos(1).expect("Endpunkt erwartet");
    assert_relative_eq!(end.x, 100.0, epsilon = 1e-9);
    assert_relative_eq!(end.y, 200.0, epsilon = 1e-9);
}

#[test]
fn test_undo_redo_inverse_over_command_sequence() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let initial = state.document.clone();

    receive_measure(&mut controller, &mut state, 1.5);
    click(&mut controller, &mut state, 100.0, 100.0);
    click(&mut controller, &mut state, 400.0, 100.0);
    intent(&mut controller, &mut state, AppIntent::UseLastMeasurementRequested);
    click(&mut controller, &mut state, 400.0, 500.0);
    let after_all = state.document.clone();

    for _ in 0..3 {
        intent(&mut controller, &mut state, AppIntent::UndoRequested);
    }
    assert_eq!(*state.document, *initial);
    assert!(!state.can_undo());

    // Leerer Stack: kein Fehler, keine Änderung
    intent(&mut controller, &mut state, AppIntent::UndoRequested);
    assert_eq!(*state.document, *initial);

    for _ in 0..3 {
        intent(&mut controller, &mut state, AppIntent::RedoRequested);
    }
    assert_eq!(*state.document, *after_all);
}

#[test]
fn test_new_mutation_clears_redo() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    click(&mut controller, &mut state, 100.0, 100.0);
    intent(&mut controller, &mut state, AppIntent::UndoRequested);
    assert!(state.can_redo());

    click(&mut controller, &mut state, 200.0, 100.0);
    assert!(!state.can_redo());
}

#[test]
fn test_drag_moves_point_as_single_undo_step() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    click(&mut controller, &mut state, 100.0, 100.0);

    intent(
        &mut controller,
        &mut state,
        AppIntent::PointerPressed {
            pos: DVec2::new(102.0, 101.0),
        },
    );
    assert_eq!(state.editor.mode, InteractionMode::Drag { point: 0 });

    for pos in [DVec2::new(150.0, 120.0), DVec2::new(210.0, 160.0)] {
        intent(&mut controller, &mut state, AppIntent::PointerMoved { pos });
    }
    intent(&mut controller, &mut state, AppIntent::PointerReleased);

    assert_eq!(state.editor.mode, InteractionMode::Idle);
    assert_eq!(state.document.plan.point_pos(0), Some(DVec2::new(200.0, 150.0)));

    intent(&mut controller, &mut state, AppIntent::UndoRequested);
    assert_eq!(state.document.plan.point_pos(0), Some(DVec2::new(100.0, 100.0)));
}

#[test]
fn test_measured_length_survives_dragging_end_point() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    receive_measure(&mut controller, &mut state, 1.0);
    click(&mut controller, &mut state, 100.0, 100.0);
    intent(&mut controller, &mut state, AppIntent::UseLastMeasurementRequested);
    click(&mut controller, &mut state, 160.0, 100.0);
    assert_eq!(state.document.plan.point_pos(1), Some(DVec2::new(300.0, 100.0)));

    intent(
        &mut controller,
        &mut state,
        AppIntent::PointerPressed {
            pos: DVec2::new(301.0, 101.0),
        },
    );
    assert_eq!(state.editor.mode, InteractionMode::Drag { point: 1 });
    intent(
        &mut controller,
        &mut state,
        AppIntent::PointerMoved {
            pos: DVec2::new(300.0, 400.0),
        },
    );
    intent(&mut controller, &mut state, AppIntent::PointerReleased);

    let end = state.document.plan.point_pos(1).expect("Endpunkt erwartet");
    assert_ne!(end, DVec2::new(300.0, 100.0));
    let px_per_m = state.document.px_per_m;
    assert_eq!(state.document.plan.segment_length_m(0, px_per_m), Some(1.0));

    let scene = controller.build_render_scene(&state);
    let list = render::build_plan_draw_list(&scene, &render::BitmapTextMeasure);
    assert!(list.iter().any(|p| matches!(
        p,
        render::DrawPrimitive::Label { text, .. } if text == "1.000 m"
    )));
}

#[test]
fn test_delete_point_reindexes_segments() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    {
        let plan = &mut state.document_mut().plan;
        plan.add_point(DVec2::new(0.0, 0.0));
        plan.add_point(DVec2::new(100.0, 0.0));
        plan.add_point(DVec2::new(100.0, 100.0));
        plan.add_point(DVec2::new(0.0, 100.0));
        plan.add_segment(0, 1, None);
        plan.add_segment(1, 2, None);
        plan.add_segment(2, 3, None);
    }

    intent(&mut controller, &mut state, AppIntent::DeleteModeToggled);
    assert_eq!(state.editor.mode, InteractionMode::Delete);
    click(&mut controller, &mut state, 101.0, 1.0);

    let plan = &state.document.plan;
    assert_eq!(plan.point_count(), 3);
    assert_eq!(plan.segment_count(), 1);
    assert_eq!((plan.segments[0].a, plan.segments[0].b), (1, 2));
    assert_eq!(state.editor.mode, InteractionMode::Delete);

    // Nichts getroffen: kein weiterer Undo-Eintrag
    let undo_before = state.history.undo_len();
    click(&mut controller, &mut state, 600.0, 600.0);
    assert_eq!(state.history.undo_len(), undo_before);

    intent(&mut controller, &mut state, AppIntent::CancelRequested);
    assert_eq!(state.editor.mode, InteractionMode::Idle);
}

#[test]
fn test_undo_leaves_placing_when_start_point_vanishes() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    receive_measure(&mut controller, &mut state, 1.0);
    intent(&mut controller, &mut state, AppIntent::UseLastMeasurementRequested);
    assert_eq!(state.editor.mode, InteractionMode::Placing { start: 0 });

    intent(&mut controller, &mut state, AppIntent::UndoRequested);

    assert_eq!(state.point_count(), 0);
    assert_eq!(state.editor.mode, InteractionMode::Idle);
}

#[test]
fn test_link_status_updates_device_state() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    intent(
        &mut controller,
        &mut state,
        AppIntent::LinkEventReceived {
            event: LinkEvent::Connected,
        },
    );
    let status = plan_sketch::link::decode_text(
        r#"{"type":"ble_status","connected":true,"device_name":"GLM","device_address":"AA:BB"}"#,
    )
    .expect("Status sollte dekodierbar sein")
    .expect("Status erwartet");
    intent(
        &mut controller,
        &mut state,
        AppIntent::LinkEventReceived {
            event: LinkEvent::Message(status),
        },
    );

    assert!(state.link.bridge_connected);
    assert!(state.link.device.connected);
    assert_eq!(state.link.device.label(), "GLM • AA:BB");
}

#[test]
fn test_view3d_open_close_controls_frame_loop() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    click(&mut controller, &mut state, 100.0, 100.0);

    intent(&mut controller, &mut state, AppIntent::View3dOpenRequested);
    assert!(state.view3d.open);
    assert!(state.view3d.frame_loop.is_running());
    assert!(state.view3d.model.is_some());

    // Zweites Öffnen startet keine zweite Schleife
    assert!(!state.view3d.frame_loop.clone().start());

    intent(&mut controller, &mut state, AppIntent::View3dCloseRequested);
    assert!(!state.view3d.open);
    assert!(!state.view3d.frame_loop.is_running());
    assert!(!state.view3d.frame_loop.clone().tick());
}

#[test]
fn test_wall_height_from_measurement_rebuilds_model() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    {
        let plan = &mut state.document_mut().plan;
        plan.add_point(DVec2::new(0.0, 0.0));
        plan.add_point(DVec2::new(400.0, 0.0));
        plan.add_segment(0, 1, None);
    }
    intent(&mut controller, &mut state, AppIntent::View3dOpenRequested);
    receive_measure(&mut controller, &mut state, 2.75);

    intent(
        &mut controller,
        &mut state,
        AppIntent::WallHeightFromMeasurementRequested,
    );

    let model = state.view3d.model.as_ref().expect("Modell erwartet");
    assert_eq!(model.walls.len(), 1);
    assert_relative_eq!(model.walls[0].size.y, 2.75, epsilon = 1e-12);
    assert_relative_eq!(model.walls[0].size.x, 2.0, epsilon = 1e-12);
}

#[test]
fn test_exit_requested_sets_exit_flag_and_logs_command() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    assert!(!state.should_exit);

    intent(&mut controller, &mut state, AppIntent::ExitRequested);

    assert!(state.should_exit);
    let last = state
        .command_log
        .entries()
        .last()
        .expect("Es sollte ein Command geloggt sein");
    match last {
        AppCommand::RequestExit => {}
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}
