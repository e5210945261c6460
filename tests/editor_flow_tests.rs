use approx::assert_abs_diff_eq;
use bezier_connector_editor::{
    ClickTarget, ConnectionId, DiagramAnchor, DiagramConnection, DiagramHost, EditMode,
    EditRequest, EditorController, EditorError, EditorEvent, EditorOptions, ElementBounds, Face,
    MemoryDiagram, VisualId,
};
use glam::Vec2;

const CONN: ConnectionId = 1;

/// Quelle (0,0), Ziel (0,100), Default-Steuerpunkte [[50,0],[50,100]].
fn vertical_diagram() -> MemoryDiagram {
    let mut diagram = MemoryDiagram::new().with_curviness(50.0);
    diagram.add_element(1, ElementBounds::new(Vec2::new(0.0, 0.0), Vec2::ZERO));
    diagram.add_element(2, ElementBounds::new(Vec2::new(0.0, 100.0), Vec2::ZERO));
    diagram.add_connection(
        CONN,
        DiagramConnection::new("Bezier", 1, 2).with_anchors(
            DiagramAnchor::fixed(Face::Right),
            DiagramAnchor::fixed(Face::Right),
        ),
    );
    diagram
}

/// Quelle (0,0), Ziel (100,100), State-Machine-Connector.
fn diagonal_diagram() -> MemoryDiagram {
    let mut diagram = MemoryDiagram::new();
    diagram.add_element(1, ElementBounds::new(Vec2::new(0.0, 0.0), Vec2::ZERO));
    diagram.add_element(2, ElementBounds::new(Vec2::new(100.0, 100.0), Vec2::ZERO));
    diagram.add_connection(CONN, DiagramConnection::new("StateMachine", 1, 2));
    diagram
}

fn open_editor(controller: &mut EditorController, diagram: &mut MemoryDiagram, request: EditRequest) {
    controller
        .edit_connection(diagram, request)
        .expect("Editor-Anforderung sollte gelingen");
    controller.end_of_dispatch(diagram);
}

fn main_handle(controller: &EditorController) -> VisualId {
    controller
        .editor(CONN)
        .expect("Editor sollte existieren")
        .handles()
        .main
}

fn drag(controller: &mut EditorController, diagram: &mut MemoryDiagram, visual: VisualId, pointer: Vec2) {
    controller.dispatch(diagram, EditorEvent::HandleDragged { visual, pointer });
}

fn is_active(controller: &EditorController) -> bool {
    controller.editor(CONN).is_some_and(|e| e.is_active())
}

// ─── Szenarien ────────────────────────────────────────────────────────────────

#[test]
fn test_single_drag_writes_geometry() {
    let mut diagram = vertical_diagram();
    let mut controller = EditorController::new();
    open_editor(&mut controller, &mut diagram, EditRequest::new(CONN));

    let handle = main_handle(&controller);
    drag(&mut controller, &mut diagram, handle, Vec2::new(80.0, 40.0));

    let geometry = diagram
        .connector_geometry(CONN)
        .expect("Geometrie muss gesetzt sein");
    assert_eq!(geometry.control_points, [[80.0, 40.0], [50.0, 100.0]]);
}

#[test]
fn test_dual_drag_writes_perpendicular_control_points() {
    let mut diagram = diagonal_diagram();
    let mut controller = EditorController::new();
    open_editor(
        &mut controller,
        &mut diagram,
        EditRequest::new(CONN).with_mode(EditMode::Dual),
    );

    let handle = main_handle(&controller);
    drag(&mut controller, &mut diagram, handle, Vec2::new(150.0, 50.0));

    let [cp1, cp2] = diagram
        .connector_geometry(CONN)
        .expect("Geometrie muss gesetzt sein")
        .control_points;
    assert_abs_diff_eq!(cp1[0], 50.0, epsilon = 1e-3);
    assert_abs_diff_eq!(cp1[1], 200.0, epsilon = 1e-3);
    assert_abs_diff_eq!(cp2[0], 50.0, epsilon = 1e-3);
    assert_abs_diff_eq!(cp2[1], -100.0, epsilon = 1e-3);
}

#[test]
fn test_click_on_handle_keeps_editor_open() {
    let mut diagram = vertical_diagram();
    let mut controller = EditorController::new();
    open_editor(&mut controller, &mut diagram, EditRequest::new(CONN));

    let handle = main_handle(&controller);
    controller.dispatch(
        &mut diagram,
        EditorEvent::DocumentClicked {
            target: ClickTarget::Visual(handle),
        },
    );
    assert!(is_active(&controller), "Klick auf Handle darf nicht schließen");

    controller.dispatch(
        &mut diagram,
        EditorEvent::DocumentClicked {
            target: ClickTarget::Background,
        },
    );
    assert!(!is_active(&controller));
    assert_eq!(diagram.visible_visual_count(), 0);
}

// ─── Lifecycle über den Controller ───────────────────────────────────────────

#[test]
fn test_requesting_click_does_not_close_deferred_editor() {
    let mut diagram = vertical_diagram();
    let mut controller = EditorController::new();

    controller
        .edit_connection(&mut diagram, EditRequest::new(CONN))
        .expect("Bezier ist registriert");
    // Der auslösende Klick läuft noch im selben Dispatch
    controller.dispatch(
        &mut diagram,
        EditorEvent::DocumentClicked {
            target: ClickTarget::Element(2),
        },
    );
    assert!(!is_active(&controller));

    controller.end_of_dispatch(&mut diagram);
    assert!(is_active(&controller));
    assert_eq!(diagram.visible_visual_count(), 4);
}

#[test]
fn test_close_on_mouse_up_disabled_ignores_clicks() {
    let mut diagram = vertical_diagram();
    let mut controller = EditorController::new();
    open_editor(
        &mut controller,
        &mut diagram,
        EditRequest::new(CONN).with_close_on_mouse_up(false),
    );

    controller.dispatch(
        &mut diagram,
        EditorEvent::DocumentClicked {
            target: ClickTarget::Background,
        },
    );
    assert!(is_active(&controller));
}

#[test]
fn test_reedit_reactivates_existing_session() {
    let mut diagram = vertical_diagram();
    let mut controller = EditorController::new();
    open_editor(&mut controller, &mut diagram, EditRequest::new(CONN));
    let handle = main_handle(&controller);
    drag(&mut controller, &mut diagram, handle, Vec2::new(80.0, 40.0));
    controller.dispatch(
        &mut diagram,
        EditorEvent::DocumentClicked {
            target: ClickTarget::Background,
        },
    );

    open_editor(&mut controller, &mut diagram, EditRequest::new(CONN));

    assert!(is_active(&controller));
    assert_eq!(main_handle(&controller), handle);
    assert_eq!(diagram.visual_count(), 6);
    let editor = controller.editor(CONN).expect("Editor sollte existieren");
    assert_eq!(editor.control_points().cp1, Vec2::new(80.0, 40.0));
}

#[test]
fn test_endpoint_drag_start_resets_geometry_when_clear_on_drag() {
    let mut diagram = vertical_diagram();
    let mut controller = EditorController::new();
    open_editor(&mut controller, &mut diagram, EditRequest::new(CONN));
    let handle = main_handle(&controller);
    drag(&mut controller, &mut diagram, handle, Vec2::new(80.0, 40.0));

    controller.dispatch(&mut diagram, EditorEvent::ElementDragStarted { element: 2 });

    assert_eq!(diagram.connector_geometry(CONN), None);
    assert!(!is_active(&controller));
    assert_eq!(diagram.connection_repaints(CONN), 1);
}

#[test]
fn test_endpoint_drag_tracks_handles_without_clear_on_drag() {
    let mut diagram = vertical_diagram();
    let mut controller = EditorController::new();
    open_editor(
        &mut controller,
        &mut diagram,
        EditRequest::new(CONN).with_clear_on_drag(false),
    );
    let handle = main_handle(&controller);
    drag(&mut controller, &mut diagram, handle, Vec2::new(80.0, 40.0));

    controller.dispatch(&mut diagram, EditorEvent::ElementDragStarted { element: 1 });
    assert!(diagram.connector_geometry(CONN).is_some());

    diagram.move_element(1, Vec2::new(-20.0, 0.0));
    controller.dispatch(&mut diagram, EditorEvent::ElementDragged { element: 1 });

    assert!(is_active(&controller));
    let position = diagram.visual(handle).expect("Handle existiert").position;
    assert_eq!(position, Vec2::new(60.0, 40.0));
}

#[test]
fn test_unrelated_element_drag_is_ignored() {
    let mut diagram = vertical_diagram();
    diagram.add_element(9, ElementBounds::new(Vec2::new(500.0, 500.0), Vec2::ZERO));
    let mut controller = EditorController::new();
    open_editor(&mut controller, &mut diagram, EditRequest::new(CONN));

    controller.dispatch(&mut diagram, EditorEvent::ElementDragStarted { element: 9 });

    assert!(is_active(&controller));
    assert!(diagram.connector_geometry(CONN).is_some());
}

#[test]
fn test_connection_removed_cleans_up() {
    let mut diagram = vertical_diagram();
    let mut controller = EditorController::new();
    open_editor(&mut controller, &mut diagram, EditRequest::new(CONN));

    diagram.remove_connection(CONN);
    controller.dispatch(&mut diagram, EditorEvent::ConnectionRemoved { connection: CONN });

    assert!(controller.editor(CONN).is_none());
    assert_eq!(diagram.visual_count(), 0);
    assert!(controller.subscribed_connections(1).is_empty());
    assert!(controller.subscribed_connections(2).is_empty());

    // Spätere Element-Drags laufen ins Leere
    controller.dispatch(&mut diagram, EditorEvent::ElementDragStarted { element: 1 });
}

// ─── Fehlerfälle ─────────────────────────────────────────────────────────────

#[test]
fn test_unsupported_connector_type_fails_without_visuals() {
    let mut diagram = MemoryDiagram::new();
    diagram.add_element(1, ElementBounds::new(Vec2::ZERO, Vec2::new(40.0, 40.0)));
    diagram.add_element(2, ElementBounds::new(Vec2::new(100.0, 0.0), Vec2::new(40.0, 40.0)));
    diagram.add_connection(CONN, DiagramConnection::new("Flowchart", 1, 2));
    let mut controller = EditorController::new();

    let result = controller.edit_connection(&mut diagram, EditRequest::new(CONN));

    assert_eq!(
        result,
        Err(EditorError::UnsupportedConnectorType("Flowchart".to_string()))
    );
    assert_eq!(diagram.visual_count(), 0);
    assert_eq!(controller.editor_count(), 0);
    assert_eq!(controller.pending_tasks(), 0);
}

#[test]
fn test_custom_connector_type_can_be_registered() {
    let mut diagram = MemoryDiagram::new();
    diagram.add_element(1, ElementBounds::new(Vec2::ZERO, Vec2::new(40.0, 40.0)));
    diagram.add_element(2, ElementBounds::new(Vec2::new(100.0, 0.0), Vec2::new(40.0, 40.0)));
    diagram.add_connection(CONN, DiagramConnection::new("Flowchart", 1, 2));
    let mut controller = EditorController::new();
    controller
        .registry_mut()
        .register("Flowchart", bezier_connector_editor::EditorKind::Bezier);

    open_editor(&mut controller, &mut diagram, EditRequest::new(CONN));
    assert!(is_active(&controller));
}

#[test]
fn test_unknown_connection_is_an_error() {
    let mut diagram = vertical_diagram();
    let mut controller = EditorController::new();
    assert_eq!(
        controller.edit_connection(&mut diagram, EditRequest::new(42)),
        Err(EditorError::UnknownConnection(42))
    );
}

#[test]
fn test_read_only_connector_is_ignored() {
    let mut diagram = MemoryDiagram::new();
    diagram.add_element(1, ElementBounds::new(Vec2::ZERO, Vec2::new(40.0, 40.0)));
    diagram.add_element(2, ElementBounds::new(Vec2::new(100.0, 0.0), Vec2::new(40.0, 40.0)));
    diagram.add_connection(CONN, DiagramConnection::new("Bezier", 1, 2).read_only());
    let mut controller = EditorController::new();

    open_editor(&mut controller, &mut diagram, EditRequest::new(CONN));

    assert!(controller.editor(CONN).is_none());
    assert_eq!(diagram.visual_count(), 0);
}

#[test]
fn test_reedit_ignored_after_connector_became_read_only() {
    let mut diagram = vertical_diagram();
    let mut controller = EditorController::new();
    open_editor(&mut controller, &mut diagram, EditRequest::new(CONN));
    controller.dispatch(
        &mut diagram,
        EditorEvent::DocumentClicked {
            target: ClickTarget::Background,
        },
    );

    diagram.add_connection(
        CONN,
        DiagramConnection::new("Bezier", 1, 2)
            .with_anchors(
                DiagramAnchor::fixed(Face::Right),
                DiagramAnchor::fixed(Face::Right),
            )
            .read_only(),
    );
    controller
        .edit_connection(&mut diagram, EditRequest::new(CONN))
        .expect("Nicht editierbar ist kein Fehler");
    assert_eq!(controller.pending_tasks(), 0);
    controller.end_of_dispatch(&mut diagram);

    assert!(!is_active(&controller), "Nicht editierbarer Connector darf nicht aktiv werden");
    assert_eq!(diagram.visible_visual_count(), 0);
}

// ─── Optionen ────────────────────────────────────────────────────────────────

#[test]
fn test_options_from_toml_select_default_mode() {
    let path = std::env::temp_dir().join("bezier_connector_editor_flow_test.toml");
    std::fs::write(&path, "default_mode = \"dual\"\nclose_on_mouse_up = false\n")
        .expect("Temp-Datei schreibbar");
    let options = EditorOptions::load_from_file(&path);
    let _ = std::fs::remove_file(&path);

    let mut diagram = diagonal_diagram();
    let mut controller = EditorController::with_options(options);
    open_editor(&mut controller, &mut diagram, EditRequest::new(CONN));

    let editor = controller.editor(CONN).expect("Editor sollte existieren");
    assert_eq!(editor.mode(), EditMode::Dual);
    assert!(!editor.listens_for_clicks());
    // Dual + gekoppelt: Main, zwei Marker, zwei Guidelines
    assert_eq!(diagram.visible_visual_count(), 5);
}
