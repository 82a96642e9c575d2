use super::*;
use std::sync::{Arc, Mutex};
use glam::Vec3;
use crate::injector::{Injector, InjectorCtx};
use crate::resource::{GeometryDef, GeometryKey};
use crate::scene::{Color, Scene};

/// Injector recording row changes as "+name" / "-name" strings.
struct RecordingInjector {
    log: Arc<Mutex<Vec<String>>>,
}

impl RecordingInjector {
    fn new() -> (Box<Self>, Arc<Mutex<Vec<String>>>) {
        let log = Arc::new(Mutex::new(Vec::new()));
        (
            Box::new(Self {
                log: Arc::clone(&log),
            }),
            log,
        )
    }
}

impl Injector for RecordingInjector {
    type Key = GeometryKey;
    type Row = GeometryDef;

    fn row_inserted(&mut self, _key: GeometryKey, row: &GeometryDef, _ctx: &mut InjectorCtx<'_>) {
        self.log.lock().unwrap().push(format!("+{}", row.name()));
    }

    fn row_removed(&mut self, _key: GeometryKey, row: &GeometryDef, _ctx: &mut InjectorCtx<'_>) {
        self.log.lock().unwrap().push(format!("-{}", row.name()));
    }
}

fn tri(name: &str) -> GeometryDef {
    GeometryDef::new(
        name,
        vec![Vec3::ZERO, Vec3::X, Vec3::Y],
        vec![0, 1, 2],
    )
    .unwrap()
}

fn test_collection() -> Collection<GeometryKey, GeometryDef> {
    Collection::new("geometries")
}

// ============================================================================
// Row store
// ============================================================================

#[test]
fn test_new_collection_is_empty() {
    let collection = test_collection();

    assert_eq!(collection.label(), "geometries");
    assert!(collection.is_empty());
    assert_eq!(collection.len(), 0);
    assert_eq!(collection.pending_event_count(), 0);
    assert!(!collection.has_injector());
}

#[test]
fn test_insert_and_lookup() {
    let mut collection = test_collection();
    let key = collection.insert(tri("floor")).unwrap();

    assert_eq!(collection.len(), 1);
    assert_eq!(collection.get("floor").unwrap().name(), "floor");
    assert_eq!(collection.get_by_key(key).unwrap().name(), "floor");
    assert_eq!(collection.key_of("floor"), Some(key));
    assert!(collection.get("ceiling").is_none());
}

#[test]
fn test_insert_duplicate_name_fails() {
    let mut collection = test_collection();
    collection.insert(tri("floor")).unwrap();

    let result = collection.insert(tri("floor"));
    assert!(result.is_err());
    assert_eq!(collection.len(), 1);
    // The rejected insert queued no event
    assert_eq!(collection.pending_event_count(), 1);
}

#[test]
fn test_remove_frees_name_immediately() {
    let mut collection = test_collection();
    collection.insert(tri("floor")).unwrap();

    assert!(collection.remove("floor"));
    assert!(collection.is_empty());
    assert!(collection.get("floor").is_none());

    // Name reusable before any dispatch runs
    collection.insert(tri("floor")).unwrap();
}

#[test]
fn test_remove_unknown_name() {
    let mut collection = test_collection();

    assert!(!collection.remove("floor"));
    assert_eq!(collection.pending_event_count(), 0);
}

#[test]
fn test_keys_stay_valid_after_other_removals() {
    let mut collection = test_collection();
    let floor = collection.insert(tri("floor")).unwrap();
    collection.insert(tri("wall")).unwrap();

    collection.remove("wall");
    assert_eq!(collection.get_by_key(floor).unwrap().name(), "floor");
}

#[test]
fn test_iter_visits_all_rows() {
    let mut collection = test_collection();
    collection.insert(tri("floor")).unwrap();
    collection.insert(tri("wall")).unwrap();

    let mut names: Vec<&str> = collection.iter().map(|(_, row)| row.name()).collect();
    names.sort();
    assert_eq!(names, vec!["floor", "wall"]);
}

// ============================================================================
// Deferred dispatch
// ============================================================================

#[test]
fn test_dispatch_delivers_events_in_order() {
    let mut collection = test_collection();
    let (injector, log) = RecordingInjector::new();
    collection.set_injector(injector);

    collection.insert(tri("floor")).unwrap();
    collection.insert(tri("wall")).unwrap();
    collection.remove("floor");
    assert_eq!(collection.pending_event_count(), 3);

    let mut scene = Scene::new(Color::from_hex(0));
    let mut ctx = InjectorCtx {
        renderer: None,
        scene: &mut scene,
    };
    collection.dispatch_events(&mut ctx);

    assert_eq!(*log.lock().unwrap(), vec!["+floor", "+wall", "-floor"]);
    assert_eq!(collection.pending_event_count(), 0);
    // The injector survives the dispatch
    assert!(collection.has_injector());
}

#[test]
fn test_dispatch_without_injector_drops_queue() {
    let mut collection = test_collection();
    collection.insert(tri("floor")).unwrap();

    let mut scene = Scene::new(Color::from_hex(0));
    let mut ctx = InjectorCtx {
        renderer: None,
        scene: &mut scene,
    };
    collection.dispatch_events(&mut ctx);

    assert_eq!(collection.pending_event_count(), 0);
    assert_eq!(collection.len(), 1);
}

#[test]
fn test_insert_then_remove_before_dispatch() {
    let mut collection = test_collection();
    let (injector, log) = RecordingInjector::new();
    collection.set_injector(injector);

    collection.insert(tri("floor")).unwrap();
    collection.remove("floor");

    let mut scene = Scene::new(Color::from_hex(0));
    let mut ctx = InjectorCtx {
        renderer: None,
        scene: &mut scene,
    };
    collection.dispatch_events(&mut ctx);

    // The insert resolves to a vanished row and is skipped; only the
    // removal (carrying the evicted row) reaches the injector.
    assert_eq!(*log.lock().unwrap(), vec!["-floor"]);
}

#[test]
fn test_set_injector_replays_existing_rows() {
    let mut collection = test_collection();
    collection.insert(tri("floor")).unwrap();
    collection.insert(tri("wall")).unwrap();

    // Stale queue from before the attach is discarded
    let mut scene = Scene::new(Color::from_hex(0));
    let mut ctx = InjectorCtx {
        renderer: None,
        scene: &mut scene,
    };
    collection.dispatch_events(&mut ctx);

    let (injector, log) = RecordingInjector::new();
    collection.set_injector(injector);
    assert_eq!(collection.pending_event_count(), 2);

    collection.dispatch_events(&mut ctx);
    let mut seen = log.lock().unwrap().clone();
    seen.sort();
    assert_eq!(seen, vec!["+floor", "+wall"]);
}

#[test]
fn test_set_injector_discards_stale_events() {
    let mut collection = test_collection();
    collection.insert(tri("floor")).unwrap();
    collection.remove("floor");
    collection.insert(tri("wall")).unwrap();
    assert_eq!(collection.pending_event_count(), 3);

    let (injector, log) = RecordingInjector::new();
    collection.set_injector(injector);

    // Only the surviving row is replayed; the dead insert/remove pair is gone
    let mut scene = Scene::new(Color::from_hex(0));
    let mut ctx = InjectorCtx {
        renderer: None,
        scene: &mut scene,
    };
    collection.dispatch_events(&mut ctx);
    assert_eq!(*log.lock().unwrap(), vec!["+wall"]);
}

#[test]
fn test_clear_injector_detaches() {
    let mut collection = test_collection();
    let (injector, _log) = RecordingInjector::new();
    collection.set_injector(injector);
    assert!(collection.has_injector());

    collection.clear_injector();
    assert!(!collection.has_injector());
}

// ============================================================================
// Clear
// ============================================================================

#[test]
fn test_clear_removes_rows_and_events() {
    let mut collection = test_collection();
    let (injector, log) = RecordingInjector::new();
    collection.set_injector(injector);
    collection.insert(tri("floor")).unwrap();

    collection.clear();
    assert!(collection.is_empty());
    assert_eq!(collection.pending_event_count(), 0);
    // Injector stays attached but sees nothing
    assert!(collection.has_injector());

    let mut scene = Scene::new(Color::from_hex(0));
    let mut ctx = InjectorCtx {
        renderer: None,
        scene: &mut scene,
    };
    collection.dispatch_events(&mut ctx);
    assert!(log.lock().unwrap().is_empty());
}
