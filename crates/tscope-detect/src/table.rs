//! Violation likelihood table and weighted type sampling.

use rand::distr::weighted::WeightedIndex;
use rand::distr::Distribution;
use rand::Rng;

use tscope_models::ViolationType;

/// One row of the likelihood table.
#[derive(Debug, Clone, Copy)]
pub struct ViolationProfile {
    /// Violation category
    pub violation_type: ViolationType,
    /// Relative likelihood of fabricating this category
    pub likelihood: f64,
}

/// Likelihood table for fabricated detections.
pub const VIOLATION_TABLE: &[ViolationProfile] = &[
    ViolationProfile {
        violation_type: ViolationType::RedLight,
        likelihood: 0.30,
    },
    ViolationProfile {
        violation_type: ViolationType::IllegalUturn,
        likelihood: 0.20,
    },
    ViolationProfile {
        violation_type: ViolationType::WrongLane,
        likelihood: 0.25,
    },
    ViolationProfile {
        violation_type: ViolationType::Speeding,
        likelihood: 0.25,
    },
];

/// Weighted sampler over the likelihood table.
///
/// The distribution is built once and reused for every draw.
pub struct TypeSampler {
    dist: WeightedIndex<f64>,
}

impl TypeSampler {
    /// Build the sampler from the static table.
    pub fn new() -> Self {
        let dist = WeightedIndex::new(VIOLATION_TABLE.iter().map(|profile| profile.likelihood))
            .expect("likelihood table has positive weights");
        Self { dist }
    }

    /// Draw a violation type.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> ViolationType {
        VIOLATION_TABLE[self.dist.sample(rng)].violation_type
    }
}

impl Default for TypeSampler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_covers_all_types() {
        for violation_type in ViolationType::ALL {
            assert!(VIOLATION_TABLE
                .iter()
                .any(|profile| profile.violation_type == *violation_type));
        }
    }

    #[test]
    fn test_likelihoods_sum_to_one() {
        let sum: f64 = VIOLATION_TABLE.iter().map(|p| p.likelihood).sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_sampler_tracks_weights() {
        let sampler = TypeSampler::new();
        let mut rng = rand::rng();

        let mut red_light = 0usize;
        let draws = 10_000;
        for _ in 0..draws {
            if sampler.sample(&mut rng) == ViolationType::RedLight {
                red_light += 1;
            }
        }

        // 0.30 likelihood; allow generous slack for a statistical test
        let share = red_light as f64 / draws as f64;
        assert!(share > 0.2 && share < 0.4, "red_light share was {}", share);
    }
}
