//! Weaving builder: interleaves two rings at every intersection.
//!
//! Produces one vertex list per ring with intersection nodes spliced in at
//! their parametric positions, plus the index of intersection positions in
//! list A. Twin nodes reference each other through the `neighbor` index; no
//! pointers, no cycles, all mutation is by position.

use super::segment::{segment_meet, SegmentMeet};
use crate::polygon::Ring;
use crate::primitives::Point2;
use num_traits::Float;

/// One entry of a woven vertex list.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Node<F> {
    /// Coordinates of the vertex or intersection point.
    pub point: Point2<F>,
    /// True if this node marks an intersection of the two rings.
    pub inter: bool,
    /// For intersection nodes: the twin's position in the opposite list.
    /// While list A is under construction this temporarily holds the
    /// opposite ring's edge number.
    pub neighbor: usize,
    /// Entry (true) or exit (false) with respect to the opposite ring.
    /// Meaningful on crossing nodes after labelling.
    pub ent_exit: bool,
    /// Fraction along the originating A-edge.
    pub alpha: F,
    /// Fraction along the originating B-edge.
    pub beta: F,
    /// True once the classifier deems this a topological crossing.
    pub crossing: bool,
}

impl<F: Float> Node<F> {
    fn original(point: Point2<F>) -> Self {
        Self {
            point,
            inter: false,
            neighbor: 0,
            ent_exit: false,
            alpha: F::zero(),
            beta: F::zero(),
            crossing: false,
        }
    }

    fn intersection(point: Point2<F>, edge_b: usize, alpha: F, beta: F) -> Self {
        Self {
            point,
            inter: true,
            neighbor: edge_b,
            ent_exit: false,
            alpha,
            beta,
            crossing: false,
        }
    }
}

/// Builds the woven lists for rings `a` and `b` and the intersection index
/// into list A.
///
/// Intersections within one A-edge are ordered by their `alpha` fraction;
/// within one B-edge by `beta`. A hit landing exactly on an edge's far
/// endpoint is skipped here and re-emitted as the near endpoint of the next
/// edge, which keeps every meeting point represented exactly once per list.
pub(crate) fn build_lists<F: Float>(
    a: &Ring<F>,
    b: &Ring<F>,
) -> (Vec<Node<F>>, Vec<Node<F>>, Vec<Option<usize>>) {
    let a_pts = a.points();
    let b_pts = b.points();
    let na = a_pts.len();
    let nb = b_pts.len();

    let mut a_list: Vec<Node<F>> = Vec::with_capacity(na + nb);
    let mut edge_hits: Vec<Node<F>> = Vec::new();

    for i in 0..na {
        let a1 = a_pts[i];
        let a2 = a_pts[(i + 1) % na];
        a_list.push(Node::original(a1));
        let a1_pos = a_list.len() - 1;

        edge_hits.clear();
        for j in 0..nb {
            let b1 = b_pts[j];
            let b2 = b_pts[(j + 1) % nb];

            match segment_meet(a1, a2, b1, b2) {
                SegmentMeet::Skew { point, alpha, beta } => {
                    let alpha_interior = alpha > F::zero() && alpha < F::one();
                    let beta_interior = beta > F::zero() && beta < F::one();
                    if alpha_interior && beta_interior {
                        edge_hits.push(Node::intersection(point, j, alpha, beta));
                    } else if alpha == F::zero() && beta >= F::zero() && beta < F::one() {
                        // a1 sits on this B-edge (possibly on b1 itself)
                        a_list[a1_pos] = Node::intersection(a1, j, F::zero(), beta);
                    } else if alpha_interior && beta == F::zero() {
                        // b1 sits strictly inside this A-edge
                        edge_hits.push(Node::intersection(b1, j, alpha, F::zero()));
                    }
                }
                SegmentMeet::Collinear { alpha, beta } => {
                    // Decompose the overlap into its endpoint events; the
                    // crossing classifier resolves the chain later.
                    if beta >= F::zero() && beta < F::one() {
                        a_list[a1_pos] = Node::intersection(a1, j, F::zero(), beta);
                    }
                    if alpha > F::zero() && alpha < F::one() {
                        edge_hits.push(Node::intersection(b1, j, alpha, F::zero()));
                    }
                }
                SegmentMeet::Parallel => {}
            }
        }

        edge_hits.sort_by(|m, n| {
            m.alpha
                .partial_cmp(&n.alpha)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        a_list.extend(edge_hits.iter().copied());
    }

    // Intersections of A in the order they appear along B: by B-edge, then
    // by fraction within the edge.
    let mut order: Vec<usize> = (0..a_list.len()).filter(|&p| a_list[p].inter).collect();
    order.sort_by(|&p, &q| {
        let (m, n) = (&a_list[p], &a_list[q]);
        m.neighbor.cmp(&n.neighbor).then(
            m.beta
                .partial_cmp(&n.beta)
                .unwrap_or(std::cmp::Ordering::Equal),
        )
    });

    let mut b_list: Vec<Node<F>> = Vec::with_capacity(nb + order.len());
    let mut next = order.into_iter().peekable();
    for j in 0..nb {
        let bv = b_pts[j];
        b_list.push(Node::original(bv));
        let bv_pos = b_list.len() - 1;

        while let Some(&ap) = next.peek() {
            if a_list[ap].neighbor != j {
                break;
            }
            next.next();
            let twin = a_list[ap];
            if twin.point == bv {
                // The intersection IS the B-vertex just emitted; coalesce.
                let node = &mut b_list[bv_pos];
                node.inter = true;
                node.neighbor = ap;
                node.alpha = twin.alpha;
                node.beta = twin.beta;
                a_list[ap].neighbor = bv_pos;
            } else {
                b_list.push(Node::intersection(twin.point, ap, twin.alpha, twin.beta));
                a_list[ap].neighbor = b_list.len() - 1;
            }
        }
    }

    let a_idx: Vec<Option<usize>> = (0..a_list.len())
        .filter(|&p| a_list[p].inter)
        .map(Some)
        .collect();

    (a_list, b_list, a_idx)
}
