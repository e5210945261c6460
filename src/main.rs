//! Bézier Connector Editor: Demo-Lauf gegen ein In-Memory-Diagramm.
//!
//! Spielt eine Single- und eine Dual-Sitzung durch und gibt die resultierende
//! Connector-Geometrie als JSON aus.

use bezier_connector_editor::{
    ClickTarget, ConnectionId, DiagramAnchor, DiagramConnection, DiagramHost, EditMode,
    EditRequest, EditorController, EditorEvent, EditorOptions, ElementBounds, MemoryDiagram,
    VisualId,
};
use glam::Vec2;

const BEZIER_CONNECTION: ConnectionId = 10;
const STATE_CONNECTION: ConnectionId = 11;

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!(
        "Bezier Connector Editor v{} startet...",
        env!("CARGO_PKG_VERSION")
    );

    let options = EditorOptions::load_from_file(&EditorOptions::config_path());
    let mut diagram = build_diagram();
    let mut controller = EditorController::with_options(options);

    // Single: freies Bézier-Handle
    controller.edit_connection(&mut diagram, EditRequest::new(BEZIER_CONNECTION))?;
    controller.end_of_dispatch(&mut diagram);
    let single_handle = main_handle(&controller, BEZIER_CONNECTION)?;
    for pointer in [Vec2::new(180.0, 40.0), Vec2::new(210.0, -20.0)] {
        controller.dispatch(
            &mut diagram,
            EditorEvent::HandleDragged {
                visual: single_handle,
                pointer,
            },
        );
    }
    print_geometry(&diagram, BEZIER_CONNECTION)?;
    controller.dispatch(
        &mut diagram,
        EditorEvent::DocumentClicked {
            target: ClickTarget::Background,
        },
    );

    // Dual: gekoppelte State-Machine-Kurve mit kontinuierlichen Ankern
    controller.edit_connection(
        &mut diagram,
        EditRequest::new(STATE_CONNECTION).with_mode(EditMode::Dual),
    )?;
    controller.end_of_dispatch(&mut diagram);
    let dual_handle = main_handle(&controller, STATE_CONNECTION)?;
    for pointer in [Vec2::new(260.0, 140.0), Vec2::new(320.0, 90.0)] {
        controller.dispatch(
            &mut diagram,
            EditorEvent::HandleDragged {
                visual: dual_handle,
                pointer,
            },
        );
    }
    print_geometry(&diagram, STATE_CONNECTION)?;

    controller.dispatch(
        &mut diagram,
        EditorEvent::ConnectionRemoved {
            connection: STATE_CONNECTION,
        },
    );
    log::info!(
        "Demo beendet, {} Editor(en) aktiv, {} Overlay(s) übrig",
        controller.editor_count(),
        diagram.visual_count()
    );
    Ok(())
}

fn build_diagram() -> MemoryDiagram {
    let mut diagram = MemoryDiagram::new();
    diagram.add_element(1, ElementBounds::new(Vec2::new(0.0, 0.0), Vec2::new(80.0, 40.0)));
    diagram.add_element(2, ElementBounds::new(Vec2::new(300.0, 160.0), Vec2::new(80.0, 40.0)));
    diagram.add_element(3, ElementBounds::new(Vec2::new(420.0, 0.0), Vec2::new(80.0, 40.0)));

    diagram.add_connection(BEZIER_CONNECTION, DiagramConnection::new("Bezier", 1, 2));
    diagram.add_connection(
        STATE_CONNECTION,
        DiagramConnection::new("StateMachine", 2, 3)
            .with_anchors(DiagramAnchor::continuous(), DiagramAnchor::continuous()),
    );
    diagram
}

fn main_handle(controller: &EditorController, connection: ConnectionId) -> anyhow::Result<VisualId> {
    controller
        .editor(connection)
        .map(|editor| editor.handles().main)
        .ok_or_else(|| anyhow::anyhow!("Kein Editor für Verbindung {}", connection))
}

fn print_geometry(diagram: &MemoryDiagram, connection: ConnectionId) -> anyhow::Result<()> {
    let geometry = diagram
        .connector_geometry(connection)
        .ok_or_else(|| anyhow::anyhow!("Verbindung {} ohne Geometrie", connection))?;
    println!(
        "Verbindung {}: {}",
        connection,
        serde_json::to_string_pretty(&geometry)?
    );
    Ok(())
}
