use futures::future::LocalFutureObj;
use futures::task::{LocalSpawn, SpawnError};

/// Runs local futures on the browser's microtask queue.
#[derive(Debug, Clone, Copy, Default)]
pub struct Spawner;

impl Spawner {
    pub fn new() -> Self {
        Self
    }
}

impl LocalSpawn for Spawner {
    fn spawn_local_obj(&self, future: LocalFutureObj<'static, ()>) -> Result<(), SpawnError> {
        wasm_bindgen_futures::spawn_local(future);
        Ok(())
    }
}
