use super::classify::ClassifiedPair;
use super::end::{End, EndRef};
use super::sequence::DnaSequence;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TileSetError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse tile-set document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate end name '{0}'")]
    DuplicateEnd(String),

    #[error("Tile '{tile}' references unknown end '{end}'")]
    UnknownEndInTile { tile: String, end: String },

    #[error("Pair classification references unknown end '{0}'")]
    UnknownEndInPair(String),

    #[error("Input pair references unknown end '{0}'")]
    UnknownEndInInputPair(String),

    #[error("Unknown end '{0}'")]
    UnknownEnd(String),
}

/// A tile: a named structure whose edges reference ends by name, possibly
/// as complements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub name: String,
    pub ends: Vec<EndRef>,
}

/// Whether an input port binds as the named sequence or as its structural
/// complement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputPolarity {
    Sequence,
    Complement,
}

/// One side of a designated input pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputPort {
    pub name: String,
    pub polarity: InputPolarity,
}

/// Two ends acting as logically connected input/output ports. Their
/// self-binding strengths are kept close together by an extra score term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputPair {
    pub a: InputPort,
    pub b: InputPort,
}

/// The tile-system snapshot consumed and produced by the reordering
/// workflow: the full end list, the tiles referencing them, the externally
/// derived pair-classification table, and optional input pairs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileSet {
    pub ends: Vec<End>,
    #[serde(default)]
    pub tiles: Vec<Tile>,
    #[serde(default)]
    pub pair_classes: Vec<ClassifiedPair>,
    #[serde(default)]
    pub input_pairs: Vec<InputPair>,
}

impl TileSet {
    pub fn read_from_path(path: &Path) -> Result<Self, TileSetError> {
        let file = File::open(path)?;
        let tileset: TileSet = serde_json::from_reader(BufReader::new(file))?;
        tileset.validate()?;
        Ok(tileset)
    }

    pub fn write_to_path(&self, path: &Path) -> Result<(), TileSetError> {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(BufWriter::new(file), self)?;
        Ok(())
    }

    /// Referential integrity of the document: unique end names, and every
    /// tile, classification and input-pair reference must resolve.
    pub fn validate(&self) -> Result<(), TileSetError> {
        let mut names: HashSet<&str> = HashSet::with_capacity(self.ends.len());
        for end in &self.ends {
            if !names.insert(end.name.as_str()) {
                return Err(TileSetError::DuplicateEnd(end.name.clone()));
            }
        }

        for tile in &self.tiles {
            for end_ref in &tile.ends {
                if !names.contains(end_ref.name.as_str()) {
                    return Err(TileSetError::UnknownEndInTile {
                        tile: tile.name.clone(),
                        end: end_ref.name.clone(),
                    });
                }
            }
        }

        for pair in &self.pair_classes {
            for end_ref in [&pair.a, &pair.b] {
                if !names.contains(end_ref.name.as_str()) {
                    return Err(TileSetError::UnknownEndInPair(end_ref.name.clone()));
                }
            }
        }

        for pair in &self.input_pairs {
            for port in [&pair.a, &pair.b] {
                if !names.contains(port.name.as_str()) {
                    return Err(TileSetError::UnknownEndInInputPair(port.name.clone()));
                }
            }
        }

        Ok(())
    }

    pub fn end(&self, name: &str) -> Option<&End> {
        self.ends.iter().find(|e| e.name == name)
    }

    pub fn set_end_sequence(
        &mut self,
        name: &str,
        sequence: DnaSequence,
    ) -> Result<(), TileSetError> {
        let end = self
            .ends
            .iter_mut()
            .find(|e| e.name == name)
            .ok_or_else(|| TileSetError::UnknownEnd(name.to_string()))?;
        end.sequence = sequence;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::classify::PairClass;
    use crate::core::models::end::EndClass;

    fn end(name: &str, class: EndClass, seq: &str) -> End {
        End {
            name: name.to_string(),
            class,
            sequence: seq.parse().unwrap(),
        }
    }

    fn sample_tileset() -> TileSet {
        TileSet {
            ends: vec![
                end("e1", EndClass::Td, "ACGTT"),
                end("e2", EndClass::Td, "TTGCA"),
                end("f1", EndClass::Dt, "GGATC"),
            ],
            tiles: vec![Tile {
                name: "t1".to_string(),
                ends: vec![
                    EndRef::plain("e1"),
                    EndRef::complement("e2"),
                    EndRef::plain("f1"),
                ],
            }],
            pair_classes: vec![ClassifiedPair {
                a: EndRef::plain("e1"),
                b: EndRef::complement("e2"),
                class: PairClass::OneGo,
            }],
            input_pairs: vec![],
        }
    }

    #[test]
    fn valid_tileset_passes_validation() {
        sample_tileset().validate().unwrap();
    }

    #[test]
    fn duplicate_end_names_fail_validation() {
        let mut ts = sample_tileset();
        ts.ends.push(end("e1", EndClass::Dt, "AAAAA"));
        assert!(matches!(
            ts.validate(),
            Err(TileSetError::DuplicateEnd(name)) if name == "e1"
        ));
    }

    #[test]
    fn unknown_tile_reference_fails_validation() {
        let mut ts = sample_tileset();
        ts.tiles[0].ends.push(EndRef::plain("missing"));
        assert!(matches!(
            ts.validate(),
            Err(TileSetError::UnknownEndInTile { end, .. }) if end == "missing"
        ));
    }

    #[test]
    fn unknown_pair_reference_fails_validation() {
        let mut ts = sample_tileset();
        ts.pair_classes[0].b = EndRef::plain("missing");
        assert!(matches!(
            ts.validate(),
            Err(TileSetError::UnknownEndInPair(name)) if name == "missing"
        ));
    }

    #[test]
    fn set_end_sequence_replaces_the_sequence() {
        let mut ts = sample_tileset();
        ts.set_end_sequence("e2", "CCCCC".parse().unwrap()).unwrap();
        assert_eq!(ts.end("e2").unwrap().sequence.as_str(), "CCCCC");
    }

    #[test]
    fn set_end_sequence_on_unknown_end_is_an_error() {
        let mut ts = sample_tileset();
        let result = ts.set_end_sequence("nope", "CCCCC".parse().unwrap());
        assert!(matches!(result, Err(TileSetError::UnknownEnd(_))));
    }

    #[test]
    fn document_round_trips_through_a_file() {
        let ts = sample_tileset();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tileset.json");
        ts.write_to_path(&path).unwrap();
        let back = TileSet::read_from_path(&path).unwrap();
        assert_eq!(back, ts);
    }

    #[test]
    fn document_parses_marker_suffix_references() {
        let json = r#"{
            "ends": [
                { "name": "e1", "class": "TD", "sequence": "ACGTT" },
                { "name": "e2", "class": "TD", "sequence": "TTGCA" }
            ],
            "tiles": [ { "name": "t1", "ends": ["e1", "e2/"] } ],
            "pair_classes": [ { "a": "e1", "b": "e2/", "class": "I" } ]
        }"#;
        let ts: TileSet = serde_json::from_str(json).unwrap();
        ts.validate().unwrap();
        assert!(ts.tiles[0].ends[1].is_complement);
        assert_eq!(ts.pair_classes[0].class, PairClass::Identity);
    }
}
