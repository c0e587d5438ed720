use std::collections::BinaryHeap;

use gridnav_core::Cell;

use crate::GridPathfinder;
use crate::error::QueryError;
use crate::path::Path;
use crate::pathfinder::{Node, NodeRef};
use crate::traits::AstarPather;

impl GridPathfinder {
    /// A* from `from` to `to` over the index space of this pathfinder's grid.
    ///
    /// Endpoints are assumed valid. The frontier uses lazy deletion: an
    /// improved neighbor is pushed again and the outdated entry is skipped
    /// when popped, because its cell is already closed by then.
    pub(crate) fn astar<P: AstarPather>(
        &self,
        pather: &P,
        from: Cell,
        to: Cell,
        mut should_stop: impl FnMut() -> bool,
    ) -> Result<Option<Path>, QueryError> {
        let (Some(start_idx), Some(goal_idx)) = (self.idx(from), self.idx(to)) else {
            return Ok(None);
        };

        let mut nodes = vec![Node::default(); self.grid().len()];
        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();

        let h0 = pather.estimate(from, to);
        nodes[start_idx].seen = true;
        open.push(NodeRef {
            idx: start_idx,
            cell: from,
            f: h0,
            h: h0,
        });

        let mut nbuf = Vec::with_capacity(4);
        let mut expanded = 0usize;
        let mut stale = 0usize;
        let mut peak = 1usize;

        let found = loop {
            if should_stop() {
                log::debug!("astar {from} -> {to}: cancelled after {expanded} expansions");
                return Err(QueryError::Cancelled);
            }
            let Some(current) = open.pop() else {
                break false;
            };

            let ci = current.idx;

            // Skip stale entries.
            if nodes[ci].closed {
                stale += 1;
                continue;
            }

            log::trace!("pop {} f={} h={}", current.cell, current.f, current.h);

            if ci == goal_idx {
                break true;
            }

            nodes[ci].closed = true;
            expanded += 1;
            let current_g = nodes[ci].g;

            nbuf.clear();
            pather.neighbors(current.cell, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                let n = &mut nodes[ni];
                if n.closed {
                    continue;
                }
                let tentative_g = current_g + pather.cost(current.cell, np);
                if n.seen && tentative_g >= n.g {
                    continue;
                }

                n.seen = true;
                n.g = tentative_g;
                n.parent = ci;

                let h = pather.estimate(np, to);
                open.push(NodeRef {
                    idx: ni,
                    cell: np,
                    f: tentative_g + h,
                    h,
                });
            }
            peak = peak.max(open.len());
        };

        log::debug!(
            "astar {from} -> {to}: found={found} expanded={expanded} stale={stale} peak_frontier={peak}"
        );

        if !found {
            return Ok(None);
        }

        // Reconstruct path.
        let mut cells = Vec::new();
        let mut ci = goal_idx;
        while ci != usize::MAX {
            cells.push(self.cell(ci));
            ci = nodes[ci].parent;
        }
        cells.reverse();
        Ok(Some(Path::from_cells(cells)))
    }
}
