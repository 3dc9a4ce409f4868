//! Identity directory: lookup of actor descriptors by id.
//!
//! The core consumes actors from an external identity provider. The only
//! place a lookup is needed is the manager link-reassignment rule, where
//! the guard must know the target actor's company.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use forgehr_auth::Actor;
use forgehr_core::ActorId;

use crate::hr_store::{StoreError, StoreResult};

/// Read-only view of the identity provider's actor records.
pub trait ActorDirectory: Send + Sync {
    fn actor(&self, id: ActorId) -> StoreResult<Option<Actor>>;
}

impl<D> ActorDirectory for Arc<D>
where
    D: ActorDirectory + ?Sized,
{
    fn actor(&self, id: ActorId) -> StoreResult<Option<Actor>> {
        (**self).actor(id)
    }
}

/// In-memory directory for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryActorDirectory {
    actors: RwLock<HashMap<ActorId, Actor>>,
}

impl InMemoryActorDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, actor: Actor) {
        if let Ok(mut actors) = self.actors.write() {
            actors.insert(actor.id, actor);
        }
    }
}

impl ActorDirectory for InMemoryActorDirectory {
    fn actor(&self, id: ActorId) -> StoreResult<Option<Actor>> {
        let actors = self
            .actors
            .read()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))?;
        Ok(actors.get(&id).copied())
    }
}
