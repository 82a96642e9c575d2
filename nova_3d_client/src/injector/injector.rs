/// Injection strategies.
///
/// An Injector turns collection rows into live engine state: GPU uploads,
/// scene items, rig bindings. The client attaches one injector per
/// collection; the collection defers row changes and replays them into
/// the injector on the next client update.

use std::marker::PhantomData;
use slotmap::Key;
use crate::renderer::Renderer;
use crate::scene::Scene;

/// Engine state an injector is allowed to touch while processing rows.
///
/// The renderer is absent while the client runs degraded (context
/// creation failed); injectors must tolerate that and skip GPU work.
pub struct InjectorCtx<'a> {
    /// Live rendering backend, if any
    pub renderer: Option<&'a mut (dyn Renderer + 'static)>,
    /// The scene root items are materialized into
    pub scene: &'a mut Scene,
}

/// Strategy for synchronizing collection rows into engine state.
///
/// Called from the client's update pass, once per deferred row change.
/// `&mut self` allows stateful implementations to track what they
/// created (scene keys, bindings) so removal can undo it.
pub trait Injector: Send + Sync {
    /// Key type of the collection this injector attaches to.
    type Key: Key;

    /// Row type of the collection this injector attaches to.
    type Row;

    /// A row was inserted into the collection.
    fn row_inserted(&mut self, key: Self::Key, row: &Self::Row, ctx: &mut InjectorCtx<'_>);

    /// A row was removed from the collection.
    ///
    /// Receives the evicted row so side effects can be undone by name
    /// even though the collection no longer holds it.
    fn row_removed(&mut self, key: Self::Key, row: &Self::Row, ctx: &mut InjectorCtx<'_>);
}

/// No-op injector — ignores every row change.
///
/// Placeholder for collections whose rows need no engine-side state.
pub struct NoOpInjector<K: Key, T> {
    _marker: PhantomData<fn() -> (K, T)>,
}

impl<K: Key, T> NoOpInjector<K, T> {
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<K: Key, T> Injector for NoOpInjector<K, T> {
    type Key = K;
    type Row = T;

    fn row_inserted(&mut self, _key: K, _row: &T, _ctx: &mut InjectorCtx<'_>) {}

    fn row_removed(&mut self, _key: K, _row: &T, _ctx: &mut InjectorCtx<'_>) {}
}
