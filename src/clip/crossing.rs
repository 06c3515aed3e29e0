//! Crossing classifier: separates topological crossings from bounces.
//!
//! A crossing requires the two edges of one ring incident to an intersection
//! to lie on opposite sides of the other ring's local arc. Touch-and-return
//! contacts (bounces) and collinear overlap chains must not seed or steer the
//! tracer; a chain collapses to a single crossing-or-bounce verdict on its
//! terminal node.

use super::weave::Node;
use crate::primitives::Point2;
use num_traits::Float;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

/// Twice the signed area of triangle (a, b, c).
#[inline]
fn signed_area<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>) -> F {
    (b - a).cross(c - a)
}

/// Which side of the oriented arc (p1, p2, p3) the point `q` falls on.
///
/// Convex arcs require `q` left of both legs to count as left; reflex arcs
/// count `q` as right when it is left of either leg. A `q` on a leg lands on
/// the right. Only equality of two side values is ever consulted, so the
/// convention is free as long as it is consistent.
fn side_of<F: Float>(q: Point2<F>, p1: Point2<F>, p2: Point2<F>, p3: Point2<F>) -> Side {
    let s1 = signed_area(q, p1, p2);
    let s2 = signed_area(q, p2, p3);
    let s3 = signed_area(p1, p2, p3);

    if s3 >= F::zero() {
        if s1 > F::zero() && s2 > F::zero() {
            Side::Left
        } else {
            Side::Right
        }
    } else if s1 > F::zero() || s2 > F::zero() {
        Side::Right
    } else {
        Side::Left
    }
}

fn set_crossing<F: Float>(a_list: &mut [Node<F>], b_list: &mut [Node<F>], i: usize, val: bool) {
    a_list[i].crossing = val;
    let j = a_list[i].neighbor;
    b_list[j].crossing = val;
}

/// Local neighborhood of an intersection node: its own predecessor and
/// successor points and the twin's predecessor and successor points.
struct Hood<F> {
    p_minus: Point2<F>,
    p_plus: Point2<F>,
    q_minus: Point2<F>,
    q_plus: Point2<F>,
}

fn hood<F: Float>(a_list: &[Node<F>], b_list: &[Node<F>], i: usize) -> Hood<F> {
    let na = a_list.len();
    let nb = b_list.len();
    let j = a_list[i].neighbor;
    Hood {
        p_minus: a_list[(i + na - 1) % na].point,
        p_plus: a_list[(i + 1) % na].point,
        q_minus: b_list[(j + nb - 1) % nb].point,
        q_plus: b_list[(j + 1) % nb].point,
    }
}

/// Classifies every intersection node of both lists as crossing or bounce.
///
/// Chains are walked forward from their start node (the one whose successor
/// point is shared with the twin's neighborhood but whose predecessor is
/// not). Nodes whose predecessor is shared belong to some chain's interior
/// or terminal and are left to that walk, which may wrap the list origin. A
/// walk that returns to its own start means the rings coincide; everything
/// is a bounce then and the caller's identical-rings path takes over.
pub(crate) fn classify_crossings<F: Float>(a_list: &mut [Node<F>], b_list: &mut [Node<F>]) {
    let na = a_list.len();
    let mut done = vec![false; na];

    for i in 0..na {
        if !a_list[i].inter || done[i] {
            continue;
        }

        let h = hood(a_list, b_list, i);
        let point = a_list[i].point;
        let prev_shared = h.p_minus == h.q_minus || h.p_minus == h.q_plus;
        let next_shared = h.p_plus == h.q_minus || h.p_plus == h.q_plus;

        if prev_shared {
            // Chain interior or terminal; the walk from its start owns it.
            continue;
        }
        done[i] = true;

        if !next_shared {
            let s_minus = side_of(h.q_minus, h.p_minus, point, h.p_plus);
            let s_plus = side_of(h.q_plus, h.p_minus, point, h.p_plus);
            set_crossing(a_list, b_list, i, s_minus != s_plus);
            continue;
        }

        // Overlap chain starting here.
        set_crossing(a_list, b_list, i, false);
        let start_q = if h.p_plus == h.q_minus {
            h.q_plus
        } else {
            h.q_minus
        };
        let start_side = side_of(start_q, h.p_minus, point, h.p_plus);

        let chain_start = i;
        let mut curr = (i + 1) % na;
        loop {
            if curr == chain_start {
                // The chain wrapped the whole ring: the boundaries coincide.
                break;
            }
            done[curr] = true;
            let h = hood(a_list, b_list, curr);
            let point = a_list[curr].point;
            let continues = h.p_plus == h.q_minus || h.p_plus == h.q_plus;

            if continues {
                set_crossing(a_list, b_list, curr, false);
                curr = (curr + 1) % na;
            } else {
                let end_q = if h.q_minus == h.p_minus {
                    h.q_plus
                } else {
                    h.q_minus
                };
                let end_side = side_of(end_q, h.p_minus, point, h.p_plus);
                set_crossing(a_list, b_list, curr, start_side != end_side);
                break;
            }
        }
    }
}
