//! Bridge selection: the best intermediate vertex on a two-edge path.
//!
//! For words `w1` and `w2` a bridge is a vertex `b` with edges `w1 -> b`
//! and `b -> w2`. Its score is the sum of the two edge weights. Candidates
//! are exactly the targets of `w1`, so a query costs one point lookup per
//! out-edge of `w1`.
//!
//! Ties on score go to the smallest label.

use graphpoet_core::graph::WeightedGraph;
use graphpoet_core::types::{Label, Weight};
use serde::Serialize;
use std::cmp::Ordering;

/// A bridge vertex and its combined two-edge weight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bridge<L> {
    pub label: L,
    /// `weight(w1 -> label) + weight(label -> w2)`.
    pub weight: Weight,
}

impl<L: Ord> Bridge<L> {
    /// Ranking order: heavier first, then smaller label.
    fn rank(&self, other: &Self) -> Ordering {
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| self.label.cmp(&other.label))
    }
}

/// Find the best bridge from `w1` to `w2`, or `None` if no vertex links them.
pub fn find_bridge<L, G>(graph: &G, w1: &L, w2: &L) -> Option<Bridge<L>>
where
    L: Label,
    G: WeightedGraph<L> + ?Sized,
{
    let mut best: Option<Bridge<L>> = None;

    // `targets` is label-ordered, so keeping the first of equal scores
    // keeps the smallest label.
    for (candidate, first_leg) in graph.targets(w1) {
        let second_leg = graph.weight(&candidate, w2);
        if second_leg == 0 {
            continue;
        }
        let weight = first_leg + second_leg;
        if best.as_ref().map_or(true, |b| weight > b.weight) {
            best = Some(Bridge {
                label: candidate,
                weight,
            });
        }
    }

    best
}

/// Every bridge from `w1` to `w2`, best first.
pub fn rank_bridges<L, G>(graph: &G, w1: &L, w2: &L) -> Vec<Bridge<L>>
where
    L: Label,
    G: WeightedGraph<L> + ?Sized,
{
    let mut bridges: Vec<Bridge<L>> = graph
        .targets(w1)
        .into_iter()
        .filter_map(|(candidate, first_leg)| {
            let second_leg = graph.weight(&candidate, w2);
            (second_leg > 0).then(|| Bridge {
                label: candidate,
                weight: first_leg + second_leg,
            })
        })
        .collect();
    bridges.sort_by(|a, b| a.rank(b));
    bridges
}
