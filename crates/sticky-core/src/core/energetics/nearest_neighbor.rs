use super::{EnergeticsError, EnergeticsModel, PairKind};
use crate::core::models::sequence::{DnaSequence, bases_pair};

/// Nearest-neighbor stacking free energies at 37 C (kcal/mol), derived from
/// the unified parameters of SantaLucia & Hicks (2004) via dG = dH - T*dS.
/// Keyed by the top-strand dinucleotide; the bottom strand is the implied
/// Watson-Crick complement.
static NN_DG37: phf::Map<&'static str, f64> = phf::phf_map! {
    "AA" => -0.99, "TT" => -0.99,
    "AT" => -0.87,
    "TA" => -0.59,
    "CA" => -1.46, "TG" => -1.46,
    "GT" => -1.45, "AC" => -1.45,
    "CT" => -1.29, "AG" => -1.29,
    "GA" => -1.31, "TC" => -1.31,
    "CG" => -2.16,
    "GC" => -2.23,
    "GG" => -1.83, "CC" => -1.83,
};

/// Duplex initiation penalty at 37 C.
const DUPLEX_INIT: f64 = 1.97;

/// Extra penalty per terminal A-T pair.
const TERMINAL_AT: f64 = 0.06;

/// A simple nearest-neighbor hybridization model for sticky-end overhangs.
/// Scores the best antiparallel alignment of the two strands, summing
/// stacking contributions over consecutive Watson-Crick paired positions.
/// Loops, bulges and dangling ends are not modeled; for the short overhangs
/// used in tile assembly the stacked-core estimate is what the reordering
/// score needs.
#[derive(Debug, Clone, Copy, Default)]
pub struct NearestNeighborModel;

impl NearestNeighborModel {
    pub fn new() -> Self {
        Self
    }

    fn strand(seq: &DnaSequence, as_complement: bool) -> DnaSequence {
        if as_complement {
            seq.reverse_complement()
        } else {
            seq.clone()
        }
    }

    /// Energy of one gap-free alignment window. `bottom` is already
    /// reversed, so position i of `top` faces position i of `bottom`.
    fn window_energy(top: &[u8], bottom: &[u8]) -> f64 {
        debug_assert_eq!(top.len(), bottom.len());
        let paired: Vec<bool> = top
            .iter()
            .zip(bottom.iter())
            .map(|(&t, &b)| bases_pair(t, b))
            .collect();

        let mut energy = 0.0;
        let mut stacked = false;
        for i in 0..top.len().saturating_sub(1) {
            if paired[i] && paired[i + 1] {
                let key = std::str::from_utf8(&top[i..=i + 1]).unwrap_or("");
                if let Some(dg) = NN_DG37.get(key) {
                    energy += dg;
                    stacked = true;
                }
            }
        }
        if !stacked {
            return 0.0;
        }

        energy += DUPLEX_INIT;
        if paired[0] && matches!(top[0], b'A' | b'T') {
            energy += TERMINAL_AT;
        }
        let last = top.len() - 1;
        if paired[last] && matches!(top[last], b'A' | b'T') {
            energy += TERMINAL_AT;
        }
        energy
    }
}

impl EnergeticsModel for NearestNeighborModel {
    fn binding_energy(
        &self,
        a: &DnaSequence,
        b: &DnaSequence,
        kind: PairKind,
    ) -> Result<f64, EnergeticsError> {
        let (a_comp, b_comp) = kind.sides();
        let top = Self::strand(a, a_comp);
        let bottom = Self::strand(b, b_comp);

        // Antiparallel pairing: reverse the bottom strand so that aligned
        // positions face each other.
        let top_bytes = top.as_bytes();
        let bottom_rev: Vec<u8> = bottom.as_bytes().iter().rev().copied().collect();

        let (long, short): (&[u8], &[u8]) = if top_bytes.len() >= bottom_rev.len() {
            (top_bytes, bottom_rev.as_slice())
        } else {
            (bottom_rev.as_slice(), top_bytes)
        };
        let top_is_long = top_bytes.len() >= bottom_rev.len();

        // Slide the shorter strand along the longer one and keep the
        // strongest (most negative) gap-free alignment.
        let mut best = 0.0f64;
        for offset in 0..=(long.len() - short.len()) {
            let window = &long[offset..offset + short.len()];
            let energy = if top_is_long {
                Self::window_energy(window, short)
            } else {
                Self::window_energy(short, window)
            };
            best = best.min(energy);
        }
        Ok(best)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(s: &str) -> DnaSequence {
        s.parse().unwrap()
    }

    fn model() -> NearestNeighborModel {
        NearestNeighborModel::new()
    }

    #[test]
    fn intended_match_binds_strongly() {
        let e = seq("GATTACA");
        let energy = model()
            .binding_energy(&e, &e, PairKind::SelfComp)
            .unwrap();
        assert!(energy < -1.0, "expected strong binding, got {energy}");
    }

    #[test]
    fn gc_rich_duplex_is_stronger_than_at_rich() {
        let gc = seq("GCGCGC");
        let at = seq("ATATAT");
        let m = model();
        let e_gc = m.binding_energy(&gc, &gc, PairKind::SelfComp).unwrap();
        let e_at = m.binding_energy(&at, &at, PairKind::SelfComp).unwrap();
        assert!(e_gc < e_at);
    }

    #[test]
    fn unrelated_sequences_bind_weakly_or_not_at_all() {
        let a = seq("GGGGGG");
        let m = model();
        let matched = m.binding_energy(&a, &a, PairKind::SelfComp).unwrap();
        let spurious = m.binding_energy(&a, &a, PairKind::SelfSelf).unwrap();
        assert!(spurious > matched);
        assert!(spurious <= 0.0);
    }

    #[test]
    fn binding_energy_is_never_positive() {
        // Alignments that cannot even form one stack contribute nothing.
        let a = seq("AAAA");
        let b = seq("CCCC");
        let energy = model().binding_energy(&a, &b, PairKind::SelfSelf).unwrap();
        assert_eq!(energy, 0.0);
    }

    #[test]
    fn shorter_sequence_slides_to_its_best_alignment() {
        let long = seq("TTTTGCGC");
        let probe = seq("GCGC");
        let m = model();
        let energy = m
            .binding_energy(&long, &probe, PairKind::SelfComp)
            .unwrap();
        assert!(energy < 0.0);
    }

    #[test]
    fn matching_energies_use_the_self_complement_kind() {
        use crate::core::models::end::{End, EndClass};
        use crate::core::models::pool::EndPool;
        use crate::core::models::tileset::TileSet;

        let ts = TileSet {
            ends: vec![End {
                name: "e1".to_string(),
                class: EndClass::Td,
                sequence: seq("GATTACA"),
            }],
            tiles: vec![],
            pair_classes: vec![],
            input_pairs: vec![],
        };
        let pool = EndPool::from_tileset(&ts, EndClass::Td);
        let m = model();
        let energies = m.matching_energies(&pool).unwrap();
        let direct = m
            .binding_energy(pool.sequence(0), pool.sequence(0), PairKind::SelfComp)
            .unwrap();
        assert_eq!(energies, vec![direct]);
    }
}
