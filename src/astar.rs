//! Generic best-first search core used by [Pathfinder](crate::Pathfinder).
//!
//! Node state lives in an insertion-ordered arena ([IndexMap] keyed by node,
//! valued by `(parent index, best known cost)`), so parent links are plain
//! indices and the estimated cost is recomputed on every push instead of
//! being cached on a node.
use fxhash::FxBuildHasher;
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use log::warn;
use num_traits::Zero;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

struct OpenEntry<K> {
    estimated_cost: K,
    cost: K,
    seq: usize,
    index: usize,
}

impl<K: PartialEq> Eq for OpenEntry<K> {}

impl<K: PartialEq> PartialEq for OpenEntry<K> {
    fn eq(&self, other: &Self) -> bool {
        self.estimated_cost.eq(&other.estimated_cost)
            && self.cost.eq(&other.cost)
            && self.seq == other.seq
    }
}

impl<K: Ord> PartialOrd for OpenEntry<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for OpenEntry<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Orders by estimated total cost first, then prefers the entry with
        // the larger cost-so-far (equivalently the smaller heuristic), and
        // finally the entry that was pushed earliest. The sequence number is
        // unique, making the order total and the pop order deterministic.
        match other.estimated_cost.cmp(&self.estimated_cost) {
            Ordering::Equal => match self.cost.cmp(&other.cost) {
                Ordering::Equal => other.seq.cmp(&self.seq),
                s => s,
            },
            s => s,
        }
    }
}

fn reverse_path<N, V, F>(parents: &FxIndexMap<N, V>, mut parent: F, start: usize) -> Vec<N>
where
    N: Eq + Hash + Clone,
    F: FnMut(&V) -> usize,
{
    let mut path: Vec<N> = itertools::unfold(start, |i| {
        parents.get_index(*i).map(|(node, value)| {
            *i = parent(value);
            node.clone()
        })
    })
    .collect();
    path.reverse();
    path
}

/// A* over an implicit graph. `successors` is invoked exactly once per
/// expanded node, which callers can use to observe the expansion order.
pub(crate) fn astar_search<N, C, FN, IN, FH, FS>(
    start: &N,
    mut successors: FN,
    mut heuristic: FH,
    mut success: FS,
) -> Option<(Vec<N>, C)>
where
    N: Eq + Hash + Clone,
    C: Zero + Ord + Copy,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = (N, C)>,
    FH: FnMut(&N) -> C,
    FS: FnMut(&N) -> bool,
{
    let mut next_seq: usize = 0;
    let mut to_see = BinaryHeap::new();
    to_see.push(OpenEntry {
        estimated_cost: heuristic(start),
        cost: Zero::zero(),
        seq: next_seq,
        index: 0,
    });
    next_seq += 1;
    let mut parents: FxIndexMap<N, (usize, C)> = FxIndexMap::default();
    parents.insert(start.clone(), (usize::MAX, Zero::zero()));
    while let Some(OpenEntry { cost, index, .. }) = to_see.pop() {
        let successors = {
            let (node, &(_, c)) = parents.get_index(index).unwrap();
            if success(node) {
                let path = reverse_path(&parents, |&(p, _)| p, index);
                return Some((path, cost));
            }
            // A node may sit in the heap several times if a better way to
            // reach it was found after it was pushed. Only the entry carrying
            // the best cost is expanded; the stale ones are discarded here.
            if cost > c {
                continue;
            }
            successors(node)
        };
        for (successor, move_cost) in successors {
            let new_cost = cost + move_cost;
            let h; // heuristic(&successor)
            let n; // arena index of successor
            match parents.entry(successor) {
                Vacant(e) => {
                    h = heuristic(e.key());
                    n = e.index();
                    e.insert((index, new_cost));
                }
                Occupied(mut e) => {
                    if e.get().1 > new_cost {
                        h = heuristic(e.key());
                        n = e.index();
                        e.insert((index, new_cost));
                    } else {
                        continue;
                    }
                }
            }

            to_see.push(OpenEntry {
                estimated_cost: new_cost + h,
                cost: new_cost,
                seq: next_seq,
                index: n,
            });
            next_seq += 1;
        }
    }
    // Callers precheck reachability with connected components, so running out
    // of open nodes means the component data disagreed with the grid.
    warn!("open set exhausted without reaching a goal that was deemed reachable");
    None
}
