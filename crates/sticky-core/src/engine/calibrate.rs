use super::error::EngineError;
use crate::core::energetics::EnergeticsModel;
use crate::core::models::classify::PairClass;
use crate::core::models::pool::EndPool;
use tracing::debug;

/// Per-interaction-class penalty multipliers, derived once per energetics
/// model from the mean intended-match ("non-spurious") binding energy:
/// `multiplier[class] = exp(-coefficient[class] * baseline)`.
///
/// Total over the [`PairClass`] enum, so every class always has a
/// multiplier; unknown labels are rejected earlier, at the document
/// boundary.
#[derive(Debug, Clone)]
pub struct MultiplierTable {
    baseline: f64,
    values: [f64; PairClass::ALL.len()],
}

impl MultiplierTable {
    /// Runs the model once over both pools to establish the baseline. Not
    /// part of the scoring hot path.
    pub fn calibrate(
        model: &dyn EnergeticsModel,
        td: &EndPool,
        dt: &EndPool,
    ) -> Result<Self, EngineError> {
        let mut energies = model.matching_energies(td)?;
        energies.extend(model.matching_energies(dt)?);
        if energies.is_empty() {
            return Err(EngineError::NothingToOptimize);
        }
        let baseline = energies.iter().sum::<f64>() / energies.len() as f64;

        let mut values = [0.0; PairClass::ALL.len()];
        for class in PairClass::ALL {
            values[class.index()] = (-class.coefficient() * baseline).exp();
        }
        debug!(baseline, "Calibrated interaction-class multipliers");
        Ok(Self { baseline, values })
    }

    pub fn baseline(&self) -> f64 {
        self.baseline
    }

    pub fn get(&self, class: PairClass) -> f64 {
        self.values[class.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::energetics::{EnergeticsError, PairKind};
    use crate::core::models::end::{End, EndClass};
    use crate::core::models::sequence::DnaSequence;
    use crate::core::models::tileset::TileSet;

    struct ConstModel(f64);

    impl EnergeticsModel for ConstModel {
        fn binding_energy(
            &self,
            _a: &DnaSequence,
            _b: &DnaSequence,
            _kind: PairKind,
        ) -> Result<f64, EnergeticsError> {
            Ok(self.0)
        }
    }

    fn pool(class: EndClass, n: usize) -> EndPool {
        let ends = (0..n)
            .map(|i| End {
                name: format!("{class}{i}"),
                class,
                sequence: "ACGTT".parse().unwrap(),
            })
            .collect();
        let ts = TileSet {
            ends,
            tiles: vec![],
            pair_classes: vec![],
            input_pairs: vec![],
        };
        EndPool::from_tileset(&ts, class)
    }

    #[test]
    fn multipliers_follow_the_exponential_calibration_formula() {
        let td = pool(EndClass::Td, 2);
        let dt = pool(EndClass::Dt, 0);
        let table = MultiplierTable::calibrate(&ConstModel(-5.0), &td, &dt).unwrap();
        assert_eq!(table.baseline(), -5.0);
        for class in PairClass::ALL {
            let expected = (-class.coefficient() * -5.0).exp();
            assert!((table.get(class) - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn identity_multiplier_equals_exp_of_negated_baseline() {
        let td = pool(EndClass::Td, 1);
        let dt = pool(EndClass::Dt, 1);
        let table = MultiplierTable::calibrate(&ConstModel(-5.0), &td, &dt).unwrap();
        assert!((table.get(PairClass::Identity) - 5.0f64.exp()).abs() < 1e-9);
    }

    #[test]
    fn empty_pools_cannot_be_calibrated() {
        let td = pool(EndClass::Td, 0);
        let dt = pool(EndClass::Dt, 0);
        let result = MultiplierTable::calibrate(&ConstModel(-5.0), &td, &dt);
        assert!(matches!(result, Err(EngineError::NothingToOptimize)));
    }
}
