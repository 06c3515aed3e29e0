//! Ring tracer: walks the woven lists and emits output rings.
//!
//! One tracer serves all three operations; the only difference is the
//! two-bit step rule deciding walk direction at each crossing.

use super::weave::Node;
use crate::polygon::Ring;
use crate::primitives::Point2;
use num_traits::Float;

/// The boolean operation being traced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ClipOp {
    Intersection,
    Union,
    Difference,
}

impl ClipOp {
    /// Walk direction leaving a crossing: +1 follows the list forward,
    /// -1 backward.
    fn step(self, ent_exit: bool, on_a: bool) -> isize {
        match self {
            ClipOp::Intersection => {
                if ent_exit {
                    1
                } else {
                    -1
                }
            }
            ClipOp::Union => {
                if ent_exit {
                    -1
                } else {
                    1
                }
            }
            ClipOp::Difference => {
                if ent_exit != on_a {
                    -1
                } else {
                    1
                }
            }
        }
    }
}

#[inline]
fn advance(pos: usize, step: isize, len: usize) -> usize {
    (pos as isize + step).rem_euclid(len as isize) as usize
}

/// Clears every index entry whose node sits at `point`, absorbing coalesced
/// vertex-on-edge duplicates.
fn consume_at<F: Float>(a_idx: &mut [Option<usize>], a_list: &[Node<F>], point: Point2<F>) {
    for entry in a_idx.iter_mut() {
        if let Some(p) = *entry {
            if a_list[p].point == point {
                *entry = None;
            }
        }
    }
}

/// Traces output rings for `op`, consuming index entries as it goes.
///
/// Only crossing-classified intersections seed rings, stop rings, or cause
/// twin jumps; bounce intersections pass through like ordinary vertices.
pub(crate) fn trace_rings<F: Float>(
    a_list: &[Node<F>],
    b_list: &[Node<F>],
    a_idx: &mut [Option<usize>],
    op: ClipOp,
) -> Vec<Ring<F>> {
    let mut rings = Vec::new();
    // A traced ring can visit each node of both lists at most once per list
    // direction; anything longer means the labels were inconsistent.
    let max_len = 2 * (a_list.len() + b_list.len()) + 2;

    loop {
        let seed = a_idx
            .iter()
            .position(|e| e.map_or(false, |p| a_list[p].crossing));
        let Some(k) = seed else { break };
        let start = a_idx[k].take().unwrap();
        let start_twin = a_list[start].neighbor;
        let start_point = a_list[start].point;
        consume_at(a_idx, a_list, start_point);

        let mut points = vec![start_point];
        let mut on_a = true;
        let mut curr = start;
        let mut closed = false;

        while points.len() <= max_len {
            let list = if on_a { a_list } else { b_list };
            let step = op.step(list[curr].ent_exit, on_a);

            loop {
                curr = advance(curr, step, list.len());
                points.push(list[curr].point);
                if list[curr].inter && list[curr].crossing {
                    break;
                }
            }

            if (on_a && curr == start) || (!on_a && curr == start_twin) {
                closed = true;
                break;
            }

            consume_at(a_idx, a_list, list[curr].point);
            curr = list[curr].neighbor;
            on_a = !on_a;
        }

        if closed {
            rings.push(Ring::new(points));
        }
    }

    rings
}
