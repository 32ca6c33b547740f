use super::end::EndClass;
use super::sequence::DnaSequence;
use super::tileset::TileSet;
use std::collections::HashMap;

/// An ordered, indexable snapshot of one orientation class's ends. The slot
/// of an end is its position in this pool; reordering permutes slot
/// assignments, never the pool itself.
#[derive(Debug, Clone)]
pub struct EndPool {
    class: EndClass,
    names: Vec<String>,
    sequences: Vec<DnaSequence>,
    index: HashMap<String, usize>,
}

impl EndPool {
    pub fn from_tileset(tileset: &TileSet, class: EndClass) -> Self {
        let mut names = Vec::new();
        let mut sequences = Vec::new();
        let mut index = HashMap::new();
        for end in tileset.ends.iter().filter(|e| e.class == class) {
            index.insert(end.name.clone(), names.len());
            names.push(end.name.clone());
            sequences.push(end.sequence.clone());
        }
        Self {
            class,
            names,
            sequences,
            index,
        }
    }

    pub fn class(&self) -> EndClass {
        self.class
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn name(&self, slot: usize) -> &str {
        &self.names[slot]
    }

    pub fn sequence(&self, slot: usize) -> &DnaSequence {
        &self.sequences[slot]
    }

    pub fn sequences(&self) -> &[DnaSequence] {
        &self.sequences
    }

    pub fn slot_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }
}
