use super::*;
use crate::core::{EditMode, EditorKind, ElementBounds};
use crate::host::{DiagramConnection, MemoryDiagram};
use crate::shared::EditorOptions;
use glam::Vec2;

fn diagram_with(connector_type: &str) -> MemoryDiagram {
    let mut diagram = MemoryDiagram::new();
    diagram.add_element(1, ElementBounds::new(Vec2::ZERO, Vec2::new(40.0, 40.0)));
    diagram.add_element(2, ElementBounds::new(Vec2::new(200.0, 100.0), Vec2::new(40.0, 40.0)));
    diagram.add_connection(7, DiagramConnection::new(connector_type, 1, 2));
    diagram
}

#[test]
fn test_deferred_queue_deduplicates_and_keeps_order() {
    let mut queue = DeferredQueue::new();
    queue.push(DeferredTask::Activate(1));
    queue.push(DeferredTask::Activate(2));
    queue.push(DeferredTask::Activate(1));
    assert_eq!(queue.len(), 2);

    queue.cancel(1);
    assert_eq!(queue.drain(), vec![DeferredTask::Activate(2)]);
    assert!(queue.is_empty());
}

#[test]
fn test_edit_request_overrides_options() {
    let options = EditorOptions::default();
    let settings = EditRequest::new(3)
        .with_mode(EditMode::Dual)
        .with_clear_on_drag(false)
        .settings(&options);

    assert_eq!(settings.mode, EditMode::Dual);
    assert!(!settings.clear_on_drag);
    assert_eq!(settings.close_on_mouse_up, options.close_on_mouse_up);
}

#[test]
fn test_registry_defaults_and_custom_types() {
    let mut registry = EditorRegistry::with_defaults();
    assert_eq!(registry.kind_for("Bezier"), Some(EditorKind::Bezier));
    assert_eq!(registry.kind_for("StateMachine"), Some(EditorKind::StateMachine));
    assert_eq!(registry.kind_for("Flowchart"), None);

    registry.register("Flowchart", EditorKind::StateMachine);
    assert_eq!(registry.kind_for("Flowchart"), Some(EditorKind::StateMachine));
    assert_eq!(
        registry.connector_types().collect::<Vec<_>>(),
        vec!["Bezier", "StateMachine", "Flowchart"]
    );
}

#[test]
fn test_registry_rejects_unsupported_type_before_creating_visuals() {
    let mut diagram = diagram_with("Straight");
    let result = EditorRegistry::with_defaults().create(
        &mut diagram,
        &EditRequest::new(7),
        &EditorOptions::default(),
    );

    assert_eq!(
        result.err(),
        Some(EditorError::UnsupportedConnectorType("Straight".to_string()))
    );
    assert_eq!(diagram.visual_count(), 0);
}

#[test]
fn test_registry_reports_unknown_connection() {
    let mut diagram = diagram_with("Bezier");
    let result = EditorRegistry::with_defaults().create(
        &mut diagram,
        &EditRequest::new(99),
        &EditorOptions::default(),
    );
    assert_eq!(result.err(), Some(EditorError::UnknownConnection(99)));
}

#[test]
fn test_error_messages() {
    assert_eq!(
        EditorError::UnsupportedConnectorType("Flowchart".into()).to_string(),
        "Kein Editor für Connector-Typ [Flowchart] registriert"
    );
    assert_eq!(
        EditorError::UnknownConnection(4).to_string(),
        "Verbindung 4 unbekannt"
    );
}

#[test]
fn test_edit_connection_defers_activation() {
    let mut diagram = diagram_with("Bezier");
    let mut controller = EditorController::new();

    controller
        .edit_connection(&mut diagram, EditRequest::new(7))
        .expect("Bezier ist registriert");

    assert_eq!(controller.pending_tasks(), 1);
    assert!(controller.editor(7).is_some_and(|e| !e.is_active()));

    controller.end_of_dispatch(&mut diagram);
    assert_eq!(controller.pending_tasks(), 0);
    assert!(controller.editor(7).is_some_and(|e| e.is_active()));
}

#[test]
fn test_edit_connection_twice_reuses_session() {
    let mut diagram = diagram_with("Bezier");
    let mut controller = EditorController::new();

    controller
        .edit_connection(&mut diagram, EditRequest::new(7))
        .expect("erste Anforderung");
    controller.end_of_dispatch(&mut diagram);
    controller
        .edit_connection(&mut diagram, EditRequest::new(7))
        .expect("zweite Anforderung");
    controller.end_of_dispatch(&mut diagram);

    assert_eq!(controller.editor_count(), 1);
    assert_eq!(diagram.visual_count(), 6);
    assert_eq!(controller.subscribed_connections(1), &[7]);
    assert_eq!(controller.subscribed_connections(2), &[7]);
}

#[test]
fn test_edit_connection_ignores_read_only_connector() {
    let mut diagram = MemoryDiagram::new();
    diagram.add_element(1, ElementBounds::new(Vec2::ZERO, Vec2::new(40.0, 40.0)));
    diagram.add_element(2, ElementBounds::new(Vec2::new(100.0, 0.0), Vec2::new(40.0, 40.0)));
    diagram.add_connection(7, DiagramConnection::new("Bezier", 1, 2).read_only());
    let mut controller = EditorController::new();

    assert!(controller.edit_connection(&mut diagram, EditRequest::new(7)).is_ok());
    assert_eq!(controller.editor_count(), 0);
    assert_eq!(controller.pending_tasks(), 0);
    assert_eq!(diagram.visual_count(), 0);
}

#[test]
fn test_connection_removed_disposes_editor() {
    let mut diagram = diagram_with("Bezier");
    let mut controller = EditorController::new();
    controller
        .edit_connection(&mut diagram, EditRequest::new(7))
        .expect("Bezier ist registriert");

    controller.dispatch(&mut diagram, EditorEvent::ConnectionRemoved { connection: 7 });

    assert_eq!(controller.editor_count(), 0);
    assert_eq!(controller.pending_tasks(), 0);
    assert!(controller.subscribed_connections(1).is_empty());
    assert_eq!(diagram.visual_count(), 0);
}
