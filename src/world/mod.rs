// Copyright 2016-2018 Matthew D. Michelotti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! A headless simulation layer on top of the collision tests.

use crate::geom::{Shape, Vec2};
use crate::sat::{Response, Sat};
use fnv::FnvHashMap;

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

#[cfg(test)]
mod tests;

/// Type used as a handle for entities in a `World`.
pub type EntityId = u64;

/// How an entity takes part in overlap resolution.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Default, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct EntityFlags {
    /// Solid entities are pushed apart when they overlap other solid entities.
    /// Overlaps involving a non-solid entity are only reported.
    pub solid: bool,
    /// Heavy entities are never moved by overlap resolution.
    pub heavy: bool,
}

impl EntityFlags {
    /// A solid entity that can be pushed around.
    pub fn solid() -> EntityFlags {
        EntityFlags { solid: true, heavy: false }
    }

    /// A solid entity that never moves.
    pub fn heavy() -> EntityFlags {
        EntityFlags { solid: true, heavy: true }
    }
}

/// A shape tracked by a `World`.
#[derive(PartialEq, Clone, Debug)]
pub struct Entity {
    /// The shape, moved in place by `World::simulate`.
    pub shape: Shape,
    /// How the entity is resolved against others.
    pub flags: EntityFlags,
}

/// Settings for a `World`.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct WorldConfig {
    /// Number of all-pairs passes made by each call to `simulate`.
    /// More passes let stacked entities settle at a higher cost.
    pub loop_count: u32,
}

impl Default for WorldConfig {
    fn default() -> WorldConfig {
        WorldConfig { loop_count: 1 }
    }
}

/// An overlap found by `World::simulate`, before it was resolved.
#[derive(PartialEq, Copy, Clone, Debug)]
pub struct Contact {
    /// The entity with the smaller id.
    pub a: EntityId,
    /// The entity with the larger id.
    pub b: EntityId,
    /// `Response::overlap_v` of the test between `a` and `b`.
    pub overlap_v: Vec2,
    /// `Response::overlap` of the test between `a` and `b`.
    pub overlap: f64,
}

/// A set of entities that are tested pairwise and pushed apart when they overlap.
///
/// There is no broad phase: every pair is tested on every pass.
pub struct World {
    config: WorldConfig,
    entities: FnvHashMap<EntityId, Entity>,
    next_id: EntityId,
    sat: Sat,
    response: Response,
}

impl World {
    /// Constructs an empty world.
    pub fn new(config: WorldConfig) -> World {
        World {
            config,
            entities: FnvHashMap::default(),
            next_id: 0,
            sat: Sat::new(),
            response: Response::new(),
        }
    }

    /// Returns the settings given to `new`.
    pub fn config(&self) -> WorldConfig {
        self.config
    }

    /// Number of entities.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether the world has no entities.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Adds an entity and returns its id. Ids are never reused.
    pub fn add_entity<S: Into<Shape>>(&mut self, shape: S, flags: EntityFlags) -> EntityId {
        let id = self.next_id;
        self.next_id += 1;
        let entity = Entity { shape: shape.into(), flags };
        log::trace!("adding {:?} entity {}", entity.shape.kind(), id);
        self.entities.insert(id, entity);
        id
    }

    /// Removes an entity, returning it if it was present.
    pub fn remove_entity(&mut self, id: EntityId) -> Option<Entity> {
        let removed = self.entities.remove(&id);
        if removed.is_some() {
            log::trace!("removed entity {}", id);
        }
        removed
    }

    /// Returns the entity with the given id.
    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(&id)
    }

    /// Returns a mutable reference to the entity with the given id.
    pub fn entity_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.get_mut(&id)
    }

    /// Iterates over all entities in no particular order.
    pub fn entities(&self) -> impl Iterator<Item = (EntityId, &Entity)> {
        self.entities.iter().map(|(&id, entity)| (id, entity))
    }

    /// Runs `loop_count` passes over every pair of entities, in ascending id order.
    ///
    /// Each overlapping pair is reported, then resolved: if both are solid and not
    /// both heavy, a heavy entity pushes the other one out by the whole overlap,
    /// otherwise each moves half of the way.
    pub fn simulate(&mut self) -> Vec<Contact> {
        let mut ids: Vec<EntityId> = self.entities.keys().cloned().collect();
        ids.sort();

        let mut contacts = Vec::new();
        for _ in 0..self.config.loop_count {
            for (index, &id_a) in ids.iter().enumerate() {
                for &id_b in &ids[index + 1..] {
                    self.response.clear();
                    let collided = self.sat.test_shapes(
                        &self.entities[&id_a].shape,
                        &self.entities[&id_b].shape,
                        Some(&mut self.response),
                    );
                    if collided {
                        let contact = Contact {
                            a: id_a,
                            b: id_b,
                            overlap_v: self.response.overlap_v,
                            overlap: self.response.overlap,
                        };
                        self.resolve(&contact);
                        contacts.push(contact);
                    }
                }
            }
        }
        log::debug!("simulated {} entities, {} contacts", ids.len(), contacts.len());
        contacts
    }

    fn resolve(&mut self, contact: &Contact) {
        let flags_a = self.entities[&contact.a].flags;
        let flags_b = self.entities[&contact.b].flags;
        if !(flags_a.solid && flags_b.solid) || (flags_a.heavy && flags_b.heavy) {
            return;
        }

        let (push_a, push_b) = if flags_a.heavy {
            (Vec2::zero(), contact.overlap_v)
        } else if flags_b.heavy {
            (contact.overlap_v, Vec2::zero())
        } else {
            let half = contact.overlap_v * 0.5;
            (half, half)
        };

        if let Some(entity) = self.entities.get_mut(&contact.a) {
            *entity.shape.pos_mut() -= push_a;
        }
        if let Some(entity) = self.entities.get_mut(&contact.b) {
            *entity.shape.pos_mut() += push_b;
        }
    }
}

impl Default for World {
    fn default() -> World {
        World::new(WorldConfig::default())
    }
}
