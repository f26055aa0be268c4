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

use super::*;
use crate::geom::{v2, Circle, Rect};

#[test]
fn test_add_and_remove() {
    let mut world = World::default();
    assert!(world.is_empty());
    let id_0 = world.add_entity(Circle::new(v2(0.0, 0.0), 5.0), EntityFlags::solid());
    let id_1 = world.add_entity(Rect::new(v2(50.0, 0.0), 10.0, 10.0), EntityFlags::default());
    assert_ne!(id_0, id_1);
    assert_eq!(world.len(), 2);
    assert_eq!(world.entity(id_1).map(|e| e.shape.pos()), Some(v2(50.0, 0.0)));

    let removed = world.remove_entity(id_0);
    assert_eq!(removed.map(|e| e.flags), Some(EntityFlags::solid()));
    assert!(world.remove_entity(id_0).is_none());
    assert!(world.entity(id_0).is_none());

    let id_2 = world.add_entity(Circle::new(v2(0.0, 0.0), 1.0), EntityFlags::heavy());
    assert!(id_2 != id_0 && id_2 != id_1);
    assert_eq!(world.entities().count(), 2);
}

#[test]
fn test_no_contacts() {
    let mut world = World::default();
    world.add_entity(Rect::new(v2(0.0, 0.0), 20.0, 20.0), EntityFlags::solid());
    world.add_entity(Rect::new(v2(100.0, 100.0), 20.0, 20.0), EntityFlags::solid());
    assert!(world.simulate().is_empty());
}

#[test]
fn test_solid_pair_split_evenly() {
    let mut world = World::default();
    let a = world.add_entity(Circle::new(v2(0.0, 0.0), 20.0), EntityFlags::solid());
    let b = world.add_entity(Circle::new(v2(30.0, 0.0), 20.0), EntityFlags::solid());
    let contacts = world.simulate();
    assert_eq!(
        contacts,
        vec![Contact { a, b, overlap_v: v2(10.0, 0.0), overlap: 10.0 }]
    );
    assert_eq!(world.entity(a).map(|e| e.shape.pos()), Some(v2(-5.0, 0.0)));
    assert_eq!(world.entity(b).map(|e| e.shape.pos()), Some(v2(35.0, 0.0)));
    assert!(world.simulate().len() == 1);
}

#[test]
fn test_heavy_pushes_other() {
    let mut world = World::default();
    let wall = world.add_entity(Rect::new(v2(0.0, 0.0), 40.0, 40.0), EntityFlags::heavy());
    let ball = world.add_entity(Circle::new(v2(20.0, 50.0), 15.0), EntityFlags::solid());
    let contacts = world.simulate();
    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0].overlap_v, v2(0.0, 5.0));
    assert_eq!(world.entity(wall).map(|e| e.shape.pos()), Some(v2(0.0, 0.0)));
    assert_eq!(world.entity(ball).map(|e| e.shape.pos()), Some(v2(20.0, 55.0)));
}

#[test]
fn test_pushed_away_from_heavy_second() {
    let mut world = World::default();
    let ball = world.add_entity(Circle::new(v2(20.0, 50.0), 15.0), EntityFlags::solid());
    let wall = world.add_entity(Rect::new(v2(0.0, 0.0), 40.0, 40.0), EntityFlags::heavy());
    world.simulate();
    assert_eq!(world.entity(ball).map(|e| e.shape.pos()), Some(v2(20.0, 55.0)));
    assert_eq!(world.entity(wall).map(|e| e.shape.pos()), Some(v2(0.0, 0.0)));
}

#[test]
fn test_ghost_and_heavy_pairs_stay_put() {
    let mut world = World::default();
    let ghost = world.add_entity(Circle::new(v2(0.0, 0.0), 20.0), EntityFlags::default());
    let heavy_1 = world.add_entity(Circle::new(v2(30.0, 0.0), 20.0), EntityFlags::heavy());
    let heavy_2 = world.add_entity(Circle::new(v2(15.0, 25.0), 20.0), EntityFlags::heavy());
    let contacts = world.simulate();
    assert_eq!(contacts.len(), 3);
    assert_eq!(world.entity(ghost).map(|e| e.shape.pos()), Some(v2(0.0, 0.0)));
    assert_eq!(world.entity(heavy_1).map(|e| e.shape.pos()), Some(v2(30.0, 0.0)));
    assert_eq!(world.entity(heavy_2).map(|e| e.shape.pos()), Some(v2(15.0, 25.0)));
}

#[test]
fn test_loop_count() {
    let mut world = World::new(WorldConfig { loop_count: 3 });
    assert_eq!(world.config().loop_count, 3);
    world.add_entity(Rect::new(v2(0.0, 0.0), 10.0, 10.0), EntityFlags::solid());
    world.add_entity(Rect::new(v2(6.0, 0.0), 10.0, 10.0), EntityFlags::solid());
    // the first pass separates them exactly, later passes find them touching
    let contacts = world.simulate();
    assert_eq!(contacts.len(), 3);
    assert_eq!(contacts[0].overlap, 4.0);
    assert_eq!(contacts[1].overlap, 0.0);
    assert_eq!(contacts[2].overlap, 0.0);
}
