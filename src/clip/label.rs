//! Entry/exit labelling of crossing nodes.
//!
//! Containment relative to the opposite ring flips exactly at topological
//! crossings, so the alternating flag is assigned to crossing-classified
//! nodes only and the classifier must have run first. The seed status comes
//! from an edge midpoint rather than a vertex: open sub-segments between
//! consecutive woven nodes cannot cross the opposite ring, so a midpoint off
//! the opposite boundary decides the containment of its whole sub-segment
//! even when every single vertex lies on that boundary.

use super::weave::Node;
use crate::polygon::{Location, Ring};
use num_traits::Float;

/// Result of a labelling pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LabelOutcome {
    /// Crossing nodes carry alternating entry/exit flags.
    Labeled,
    /// Every woven edge lies on the opposite boundary: the rings coincide.
    AllOnBoundary,
}

/// Assigns `ent_exit` to the crossing nodes of one woven list with respect
/// to the opposite ring.
pub(crate) fn flag_entry_exit<F: Float>(
    list: &mut [Node<F>],
    opposite: &Ring<F>,
) -> LabelOutcome {
    let n = list.len();

    let mut seed = None;
    for i in 0..n {
        let mid = list[i].point.midpoint(list[(i + 1) % n].point);
        match opposite.locate(mid) {
            Location::OnBoundary => continue,
            loc => {
                seed = Some((i, loc));
                break;
            }
        }
    }
    let Some((start, loc)) = seed else {
        return LabelOutcome::AllOnBoundary;
    };

    // Walking out of the seeded edge: the next crossing is an entry iff the
    // edge lies outside the opposite ring.
    let mut status = loc != Location::Inside;
    for k in 1..=n {
        let node = &mut list[(start + k) % n];
        if node.inter && node.crossing {
            node.ent_exit = status;
            status = !status;
        }
    }
    LabelOutcome::Labeled
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clip::crossing::classify_crossings;
    use crate::clip::weave::build_lists;
    use crate::primitives::Point2;

    fn ring(coords: &[(f64, f64)]) -> Ring<f64> {
        Ring::new(coords.iter().map(|&(x, y)| Point2::new(x, y)).collect())
    }

    fn labeled(a: &Ring<f64>, b: &Ring<f64>) -> (Vec<Node<f64>>, Vec<Node<f64>>) {
        let (mut a_list, mut b_list, _) = build_lists(a, b);
        classify_crossings(&mut a_list, &mut b_list);
        assert_eq!(flag_entry_exit(&mut a_list, b), LabelOutcome::Labeled);
        assert_eq!(flag_entry_exit(&mut b_list, a), LabelOutcome::Labeled);
        (a_list, b_list)
    }

    #[test]
    fn test_alternation_on_overlapping_squares() {
        let a = ring(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)]);
        let b = ring(&[(1.0, 1.0), (3.0, 1.0), (3.0, 3.0), (1.0, 3.0)]);
        let (a_list, b_list) = labeled(&a, &b);

        // Walking a CCW from (0,0): enter b at (2,1), exit at (1,2)
        for n in &a_list {
            if n.inter && n.crossing {
                let expect_entry = n.point == Point2::new(2.0, 1.0);
                assert_eq!(n.ent_exit, expect_entry, "at {:?}", n.point);
            }
        }
        // Walking b CCW from (1,1): exit a at (3,1)? (3,1) is outside a;
        // b's crossings are the same two points with roles seen from b.
        for n in &b_list {
            if n.inter && n.crossing {
                let expect_entry = n.point == Point2::new(1.0, 2.0);
                assert_eq!(n.ent_exit, expect_entry, "at {:?}", n.point);
            }
        }
    }

    #[test]
    fn test_four_crossings_alternate() {
        // Tall rectangle through a wide rectangle: four crossings
        let a = ring(&[(0.0, 0.0), (6.0, 0.0), (6.0, 2.0), (0.0, 2.0)]);
        let b = ring(&[(2.0, -1.0), (4.0, -1.0), (4.0, 3.0), (2.0, 3.0)]);
        let (a_list, _) = labeled(&a, &b);

        let flags: Vec<bool> = a_list
            .iter()
            .filter(|n| n.inter && n.crossing)
            .map(|n| n.ent_exit)
            .collect();
        assert_eq!(flags.len(), 4);
        for w in flags.windows(2) {
            assert_ne!(w[0], w[1]);
        }
    }

    #[test]
    fn test_identical_rings_report_all_on() {
        let a = ring(&[(0.0, 0.0), (3.0, 0.0), (3.0, 3.0), (0.0, 3.0)]);
        let (mut a_list, mut b_list, _) = build_lists(&a, &a.clone());
        classify_crossings(&mut a_list, &mut b_list);
        assert_eq!(flag_entry_exit(&mut a_list, &a), LabelOutcome::AllOnBoundary);
    }

    #[test]
    fn test_all_vertices_on_boundary_still_labels() {
        // Fig-13 style inputs: every vertex is an intersection, yet edge
        // midpoints decide containment unambiguously.
        let a = ring(&[(0.0, 0.0), (4.0, 0.0), (4.0, 2.0), (3.0, 1.0), (1.0, 1.0), (0.0, 2.0)]);
        let b = ring(&[(4.0, 0.0), (3.0, 1.0), (1.0, 1.0), (0.0, 0.0), (0.0, 2.0), (4.0, 2.0)]);
        let (a_list, _) = labeled(&a, &b);

        let crossings: Vec<_> = a_list.iter().filter(|n| n.inter && n.crossing).collect();
        assert_eq!(crossings.len(), 2);
        assert_ne!(crossings[0].ent_exit, crossings[1].ent_exit);
    }
}
