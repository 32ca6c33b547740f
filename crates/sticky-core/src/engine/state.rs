use crate::core::models::end::EndClass;

/// The optimization state: one slot permutation per orientation class.
/// `perm[slot]` is the base-pool index of the sequence currently assigned to
/// that slot. The pools themselves never change; only these arrays do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentState {
    td: Vec<usize>,
    dt: Vec<usize>,
}

impl AssignmentState {
    /// Every slot holds its own original sequence.
    pub fn identity(td_len: usize, dt_len: usize) -> Self {
        Self {
            td: (0..td_len).collect(),
            dt: (0..dt_len).collect(),
        }
    }

    pub fn perm(&self, class: EndClass) -> &[usize] {
        match class {
            EndClass::Td => &self.td,
            EndClass::Dt => &self.dt,
        }
    }

    pub fn len(&self, class: EndClass) -> usize {
        self.perm(class).len()
    }

    pub fn is_empty(&self) -> bool {
        self.td.is_empty() && self.dt.is_empty()
    }

    /// Swap the assignments of two slots within one class. Swapping a slot
    /// with itself is a legal no-op.
    pub fn swap(&mut self, class: EndClass, a: usize, b: usize) {
        let perm = match class {
            EndClass::Td => &mut self.td,
            EndClass::Dt => &mut self.dt,
        };
        perm.swap(a, b);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_state_maps_each_slot_to_itself() {
        let state = AssignmentState::identity(3, 2);
        assert_eq!(state.perm(EndClass::Td), &[0, 1, 2]);
        assert_eq!(state.perm(EndClass::Dt), &[0, 1]);
    }

    #[test]
    fn swap_exchanges_two_assignments() {
        let mut state = AssignmentState::identity(3, 0);
        state.swap(EndClass::Td, 0, 2);
        assert_eq!(state.perm(EndClass::Td), &[2, 1, 0]);
    }

    #[test]
    fn self_swap_is_a_no_op() {
        let mut state = AssignmentState::identity(3, 3);
        let before = state.clone();
        state.swap(EndClass::Td, 1, 1);
        assert_eq!(state, before);
    }

    #[test]
    fn swap_is_an_involution() {
        let mut state = AssignmentState::identity(4, 0);
        let before = state.clone();
        state.swap(EndClass::Td, 0, 3);
        state.swap(EndClass::Td, 0, 3);
        assert_eq!(state, before);
    }

    #[test]
    fn classes_are_independent() {
        let mut state = AssignmentState::identity(2, 2);
        state.swap(EndClass::Dt, 0, 1);
        assert_eq!(state.perm(EndClass::Td), &[0, 1]);
        assert_eq!(state.perm(EndClass::Dt), &[1, 0]);
    }
}
