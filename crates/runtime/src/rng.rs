//! Stateless deterministic random numbers for damage rolls.
//!
//! Every roll is a pure function of a seed, so a battle replays exactly
//! given its base seed and the order of its strikes.

/// PCG-XSH-RR output of one LCG step: 64-bit state in, 32 bits out.
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    #[inline]
    fn step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    #[inline]
    fn output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    pub fn next_u32(&self, seed: u64) -> u32 {
        Self::output(Self::step(seed))
    }

    /// Roll a d100 (1-100 inclusive).
    pub fn roll_d100(&self, seed: u64) -> u32 {
        (self.next_u32(seed) % 100) + 1
    }

    /// Uniform value in `[0, bound)`; 0 when `bound` is 0.
    pub fn below(&self, seed: u64, bound: u32) -> u32 {
        if bound == 0 {
            0
        } else {
            self.next_u32(seed) % bound
        }
    }
}

/// Mixes the inputs of one roll into a seed.
///
/// `context` separates independent rolls of the same strike:
/// 0 hit check, 1 armor roll, 2 scratch damage.
pub fn compute_seed(base_seed: u64, sequence: u64, attacker: u32, context: u32) -> u64 {
    let mut hash = base_seed;
    hash ^= sequence.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= u64::from(attacker).wrapping_mul(0x517cc1b727220a95);
    hash ^= u64::from(context).wrapping_mul(0x85ebca6b);

    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;
    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_value() {
        let rng = PcgRng;
        assert_eq!(rng.next_u32(7), rng.next_u32(7));
        assert_ne!(rng.next_u32(7), rng.next_u32(8));
    }

    #[test]
    fn bounded_rolls_stay_in_range() {
        let rng = PcgRng;
        for seed in 0..1_000 {
            assert!((1..=100).contains(&rng.roll_d100(seed)));
            assert!(rng.below(seed, 13) < 13);
        }
        assert_eq!(rng.below(5, 0), 0);
    }

    #[test]
    fn contexts_decorrelate() {
        assert_ne!(compute_seed(1, 2, 3, 0), compute_seed(1, 2, 3, 1));
        assert_ne!(compute_seed(1, 2, 3, 0), compute_seed(1, 3, 3, 0));
    }
}
