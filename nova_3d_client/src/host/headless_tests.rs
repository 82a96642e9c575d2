use super::*;

// ============================================================================
// Chain resolution
// ============================================================================

#[test]
fn test_attached_canvas_resolves_full_chain() {
    let window = HeadlessWindow::new(800, 600);
    let canvas = HeadlessCanvas::new(window);

    let document = canvas.owner_document();
    assert!(document.is_some());

    let view = document.unwrap().default_view();
    assert!(view.is_some());
    assert_eq!(view.unwrap().viewport_size(), (800, 600));
}

#[test]
fn test_detached_canvas_has_no_document() {
    let canvas = HeadlessCanvas::detached();
    assert!(canvas.owner_document().is_none());
}

#[test]
fn test_orphaned_canvas_has_document_but_no_window() {
    let canvas = HeadlessCanvas::orphaned();
    let document = canvas.owner_document();
    assert!(document.is_some());
    assert!(document.unwrap().default_view().is_none());
}

// ============================================================================
// Viewport size
// ============================================================================

#[test]
fn test_set_viewport_size_updates_reports() {
    let window = HeadlessWindow::new(800, 600);
    window.set_viewport_size(1920, 1080);
    assert_eq!(window.viewport_size(), (1920, 1080));
}

#[test]
fn test_surface_tracks_window_size() {
    let window = HeadlessWindow::new(640, 480);
    let canvas = HeadlessCanvas::new(Arc::clone(&window));

    let surface = canvas.surface();
    assert_eq!((surface.width, surface.height), (640, 480));
    assert!(surface.display_handle.is_none());
    assert!(surface.window_handle.is_none());

    window.set_viewport_size(300, 200);
    let surface = canvas.surface();
    assert_eq!((surface.width, surface.height), (300, 200));
}

#[test]
fn test_surface_of_broken_chain_is_zero_sized() {
    let canvas = HeadlessCanvas::detached();
    let surface = canvas.surface();
    assert_eq!((surface.width, surface.height), (0, 0));
}

// ============================================================================
// Optional capabilities
// ============================================================================

#[test]
fn test_frame_scheduler_records_requests() {
    let window = HeadlessWindow::new(800, 600);
    let request = window.frame_request_fn().unwrap();

    request();
    request();
    assert_eq!(window.frame_request_count(), 2);
}

#[test]
fn test_clock_is_monotonic() {
    let window = HeadlessWindow::new(800, 600);
    let clock = window.clock_fn().unwrap();

    let first = clock();
    let second = clock();
    assert!(second >= first);
    assert!(first >= 0.0);
}

#[test]
fn test_minimal_window_has_no_capabilities() {
    let window = HeadlessWindow::minimal(800, 600);
    assert!(window.frame_request_fn().is_none());
    assert!(window.clock_fn().is_none());
    assert_eq!(window.viewport_size(), (800, 600));
}
