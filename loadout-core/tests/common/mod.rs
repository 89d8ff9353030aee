#![allow(dead_code)]

use loadout_core::*;

/// Plays back a fixed index sequence, then repeats `then` forever.
pub struct ScriptedDraw {
    script: Vec<usize>,
    pos: usize,
    then: usize,
    pub calls: usize,
}

impl ScriptedDraw {
    pub fn new(script: Vec<usize>, then: usize) -> Self {
        Self {
            script,
            pos: 0,
            then,
            calls: 0,
        }
    }
}

impl Draw for ScriptedDraw {
    fn next_index(&mut self) -> usize {
        self.calls += 1;
        let index = self.script.get(self.pos).copied().unwrap_or(self.then);
        self.pos += 1;
        index
    }
}

pub fn two_item_catalog() -> Catalog {
    Catalog::from_items(vec![
        Item::from_parts("A", 100, 1.0, 0.5).unwrap(),
        Item::from_parts("B", 2000, 10.0, 0.5).unwrap(),
    ])
}
