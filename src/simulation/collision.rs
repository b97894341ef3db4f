//! Pairwise collision detection over the bounds snapshot.
//!
//! Every unordered pair of distinct tracked parts is interval-tested.
//! Structural contacts listed in the [`AllowedPairSet`] are skipped, as is
//! the distinguished hitch pair, whose intersection is the coupling trigger
//! and not a fault. Everything else that intersects is reported at `warn`
//! level; there is no physical response at this scale.
//!
//! The nested loop is O(n^2) in tracked parts, which is fine for the couple
//! of dozen parts this rig has.

use std::collections::HashSet;

use super::bounds::BoundsSnapshot;

/// Unordered pair of part names, normalized so `(a, b) == (b, a)`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PartPair(String, String);

impl PartPair {
    pub fn new(a: &str, b: &str) -> Self {
        if a <= b {
            Self(a.to_string(), b.to_string())
        } else {
            Self(b.to_string(), a.to_string())
        }
    }
}

/// Part pairs whose overlap is expected and never reported
#[derive(Debug, Default)]
pub struct AllowedPairSet {
    pairs: HashSet<PartPair>,
}

impl AllowedPairSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, a: &str, b: &str) {
        self.pairs.insert(PartPair::new(a, b));
    }

    pub fn contains(&self, a: &str, b: &str) -> bool {
        self.pairs.contains(&PartPair::new(a, b))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// A reported (unexpected) overlap between two parts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
    pub a: String,
    pub b: String,
}

/// Tests every tracked pair against the allow-list
pub struct CollisionDetector {
    allowed: AllowedPairSet,
    hitch: PartPair,
}

impl CollisionDetector {
    /// `hitch` is the distinguished pair routed to the coupling handler; it
    /// is excluded from reporting independently of the allow-list.
    pub fn new(allowed: AllowedPairSet, hitch: PartPair) -> Self {
        Self { allowed, hitch }
    }

    /// Reports all unexpected intersections in the snapshot.
    ///
    /// Iterates part names in sorted order so reports are deterministic.
    pub fn check(&self, bounds: &BoundsSnapshot) -> Vec<Collision> {
        let mut names: Vec<&String> = bounds.keys().collect();
        names.sort();

        let mut collisions = Vec::new();
        for (i, a) in names.iter().enumerate() {
            for b in &names[i + 1..] {
                let pair = PartPair::new(a, b);
                if pair == self.hitch || self.allowed.contains(a, b) {
                    continue;
                }
                if bounds[*a].intersects(&bounds[*b]) {
                    log::warn!("unexpected collision between `{}` and `{}`", a, b);
                    collisions.push(Collision {
                        a: (*a).clone(),
                        b: (*b).clone(),
                    });
                }
            }
        }
        collisions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::bounds::Aabb;
    use cgmath::Vector3;

    fn boxed(center: (f32, f32, f32), half: f32) -> Aabb {
        let c = Vector3::new(center.0, center.1, center.2);
        let h = Vector3::new(half, half, half);
        Aabb { min: c - h, max: c + h }
    }

    #[test]
    fn test_pair_normalization() {
        assert_eq!(PartPair::new("torso", "head"), PartPair::new("head", "torso"));
    }

    #[test]
    fn test_allow_list_is_order_insensitive() {
        let mut allowed = AllowedPairSet::new();
        allowed.insert("torso", "head");
        assert!(allowed.contains("head", "torso"));
        assert!(!allowed.contains("head", "foot"));
    }

    #[test]
    fn test_disjoint_parts_report_nothing() {
        let detector = CollisionDetector::new(AllowedPairSet::new(), PartPair::new("x", "y"));
        let mut bounds = BoundsSnapshot::new();
        bounds.insert("head".to_string(), boxed((0.0, 40.0, 0.0), 2.0));
        bounds.insert("right_foot".to_string(), boxed((3.0, 1.0, 4.0), 2.0));
        assert!(detector.check(&bounds).is_empty());
    }

    #[test]
    fn test_overlap_outside_allow_list_is_reported() {
        let mut allowed = AllowedPairSet::new();
        allowed.insert("a", "b");
        let detector = CollisionDetector::new(allowed, PartPair::new("hitch1", "hitch2"));

        let mut bounds = BoundsSnapshot::new();
        bounds.insert("a".to_string(), boxed((0.0, 0.0, 0.0), 1.0));
        bounds.insert("b".to_string(), boxed((0.5, 0.0, 0.0), 1.0));
        bounds.insert("c".to_string(), boxed((0.0, 0.5, 0.0), 1.0));

        let collisions = detector.check(&bounds);
        // a/b is allowed; a/c and b/c both overlap and are reported.
        assert_eq!(collisions.len(), 2);
        assert!(collisions.contains(&Collision { a: "a".to_string(), b: "c".to_string() }));
    }

    #[test]
    fn test_hitch_pair_is_never_reported() {
        let detector = CollisionDetector::new(
            AllowedPairSet::new(),
            PartPair::new("right_foot", "trailer_link"),
        );
        let mut bounds = BoundsSnapshot::new();
        bounds.insert("right_foot".to_string(), boxed((0.0, 0.0, 0.0), 2.0));
        bounds.insert("trailer_link".to_string(), boxed((1.0, 0.0, 0.0), 2.0));
        assert!(detector.check(&bounds).is_empty());
    }
}
