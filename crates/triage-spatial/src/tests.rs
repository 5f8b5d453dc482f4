//! Unit tests for triage-spatial.
//!
//! All tests use small hand-placed grids so expected paths can be traced by
//! hand.

#[cfg(test)]
mod helpers {
    use triage_core::GridPos;

    use crate::GridPath;

    /// Every consecutive pair of cells is exactly one 4-connected torus step.
    pub fn assert_connected(path: &GridPath, width: u32, height: u32) {
        for pair in path.cells.windows(2) {
            assert_eq!(
                pair[0].torus_manhattan(pair[1], width, height),
                1,
                "{} → {} is not a single step",
                pair[0],
                pair[1]
            );
        }
    }

    pub fn p(x: i32, y: i32) -> GridPos {
        GridPos::new(x, y)
    }
}

// ── Grid placement & movement ─────────────────────────────────────────────────

#[cfg(test)]
mod grid {
    use triage_core::{AgentId, GridPos};

    use super::helpers::p;
    use crate::{GridError, SpatialGrid};

    #[test]
    fn zero_dimensions_rejected() {
        assert!(matches!(
            SpatialGrid::new(0, 5),
            Err(GridError::InvalidDimensions { width: 0, height: 5 })
        ));
        assert!(SpatialGrid::new(5, 0).is_err());
    }

    #[test]
    fn cell_id_overflow_rejected() {
        assert!(matches!(
            SpatialGrid::new(65_536, 65_536),
            Err(GridError::InvalidDimensions { width: 65_536, height: 65_536 })
        ));
        assert!(SpatialGrid::new(u32::MAX / 2, 3).is_err());
    }

    #[test]
    fn place_wraps_coordinates() {
        let mut g = SpatialGrid::new(15, 15).unwrap();
        let at = g.place(AgentId(0), p(-1, 16));
        assert_eq!(at, p(14, 1));
        assert_eq!(g.position(AgentId(0)), Some(p(14, 1)));
        assert_eq!(g.agents_at(p(14, 1)), &[AgentId(0)]);
    }

    #[test]
    fn multi_occupancy_keeps_arrival_order() {
        let mut g = SpatialGrid::new(5, 5).unwrap();
        g.place(AgentId(2), p(1, 1));
        g.place(AgentId(0), p(1, 1));
        g.place(AgentId(1), p(6, 6));
        assert_eq!(g.agents_at(p(1, 1)), &[AgentId(2), AgentId(0), AgentId(1)]);
    }

    #[test]
    fn move_updates_registration_and_position() {
        let mut g = SpatialGrid::new(5, 5).unwrap();
        g.place(AgentId(0), p(0, 0));
        let at = g.move_agent(AgentId(0), p(-1, 0)).unwrap();
        assert_eq!(at, p(4, 0));
        assert!(g.agents_at(p(0, 0)).is_empty());
        assert_eq!(g.agents_at(p(4, 0)), &[AgentId(0)]);
        assert_eq!(g.position(AgentId(0)), Some(p(4, 0)));
        assert!(g.verify(AgentId(0)).is_ok());
    }

    #[test]
    fn placing_twice_relocates() {
        let mut g = SpatialGrid::new(5, 5).unwrap();
        g.place(AgentId(0), p(0, 0));
        g.place(AgentId(0), p(2, 2));
        assert!(g.agents_at(p(0, 0)).is_empty());
        assert_eq!(g.position(AgentId(0)), Some(p(2, 2)));
    }

    #[test]
    fn moving_unplaced_agent_is_invariant_violation() {
        let mut g = SpatialGrid::new(5, 5).unwrap();
        g.place(AgentId(1), p(0, 0));
        assert!(matches!(
            g.move_agent(AgentId(0), p(1, 1)),
            Err(GridError::NotPlaced(AgentId(0)))
        ));
        assert!(matches!(
            g.move_agent(AgentId(9), p(1, 1)),
            Err(GridError::NotPlaced(_))
        ));
        assert_eq!(g.position(AgentId(0)), None);
        // The failed move left the placed agent alone.
        assert_eq!(g.agents_at(p(0, 0)), &[AgentId(1)]);
    }

    #[test]
    fn cell_id_round_trip() {
        let g = SpatialGrid::new(7, 3).unwrap();
        let pos = GridPos::new(5, 2);
        assert_eq!(g.cell_id(pos).0, 2 * 7 + 5);
        assert_eq!(g.cell_pos(g.cell_id(pos)), pos);
    }
}

// ── Neighbourhood queries ─────────────────────────────────────────────────────

#[cfg(test)]
mod neighborhood {
    use std::collections::HashSet;

    use triage_core::AgentId;

    use super::helpers::p;
    use crate::SpatialGrid;

    #[test]
    fn radius_one_counts() {
        let g = SpatialGrid::new(15, 15).unwrap();
        assert_eq!(g.neighborhood(p(7, 7), 1, true).len(), 9);
        assert_eq!(g.neighborhood(p(7, 7), 1, false).len(), 8);
    }

    #[test]
    fn wraps_at_corner() {
        let g = SpatialGrid::new(15, 15).unwrap();
        let cells: HashSet<_> = g.neighborhood(p(0, 0), 1, false).into_iter().collect();
        assert!(cells.contains(&p(14, 14)));
        assert!(cells.contains(&p(14, 0)));
        assert!(cells.contains(&p(0, 1)));
        assert!(!cells.contains(&p(0, 0)));
        assert_eq!(cells.len(), 8);
    }

    #[test]
    fn board_wide_radius_lists_each_cell_once() {
        let g = SpatialGrid::new(15, 15).unwrap();
        let all = g.neighborhood(p(3, 4), 15, true);
        assert_eq!(all.len(), 225);
        let unique: HashSet<_> = all.iter().copied().collect();
        assert_eq!(unique.len(), 225);

        let without = g.neighborhood(p(3, 4), 15, false);
        assert_eq!(without.len(), 224);
        assert!(!without.contains(&p(3, 4)));
    }

    #[test]
    fn every_cell_is_within_radius() {
        let g = SpatialGrid::new(10, 6).unwrap();
        for cell in g.neighborhood(p(9, 0), 2, true) {
            assert!(cell.torus_chebyshev(p(9, 0), 10, 6) <= 2);
        }
    }

    #[test]
    fn tiny_grid_without_center_is_empty() {
        let g = SpatialGrid::new(1, 1).unwrap();
        assert!(g.neighborhood(p(0, 0), 3, false).is_empty());
        assert_eq!(g.neighborhood(p(0, 0), 3, true), vec![p(0, 0)]);
    }

    #[test]
    fn contents_are_deduplicated() {
        let mut g = SpatialGrid::new(5, 5).unwrap();
        g.place(AgentId(0), p(1, 1));
        g.place(AgentId(1), p(1, 1));
        g.place(AgentId(2), p(3, 3));
        let found = g.contents_of(&[p(1, 1), p(6, 6), p(3, 3), p(0, 0)]);
        assert_eq!(found, vec![AgentId(0), AgentId(1), AgentId(2)]);
    }
}

// ── A* planning ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod planning {
    use std::cell::Cell;

    use super::helpers::{assert_connected, p};
    use crate::{AStarPlanner, PathPlanner, SpatialGrid};

    fn open(_: triage_core::GridPos) -> bool {
        false
    }

    #[test]
    fn straight_line_on_open_board() {
        let g = SpatialGrid::new(15, 15).unwrap();
        let path = AStarPlanner.plan(&g, p(0, 0), p(5, 0), &open).unwrap();
        assert_eq!(path.len(), 6);
        assert_eq!(path.cells, (0..=5).map(|x| p(x, 0)).collect::<Vec<_>>());
        assert_eq!(path.next_step(), Some(p(1, 0)));
        assert_eq!(path.steps(), 5);
    }

    #[test]
    fn trivial_same_cell() {
        let g = SpatialGrid::new(15, 15).unwrap();
        let path = AStarPlanner.plan(&g, p(3, 3), p(18, 3), &open).unwrap();
        assert!(path.is_trivial());
        assert_eq!(path.cells, vec![p(3, 3)]);
        assert_eq!(path.next_step(), None);
    }

    #[test]
    fn crosses_the_seam() {
        let g = SpatialGrid::new(15, 15).unwrap();
        let path = AStarPlanner.plan(&g, p(0, 0), p(14, 0), &open).unwrap();
        assert_eq!(path.cells, vec![p(0, 0), p(14, 0)]);
    }

    #[test]
    fn routes_around_obstacles() {
        let g = SpatialGrid::new(15, 15).unwrap();
        let wall = |pos: triage_core::GridPos| pos.x == 3 && (0..=2).contains(&pos.y);
        let path = AStarPlanner.plan(&g, p(0, 1), p(5, 1), &wall).unwrap();
        assert!(path.cells.iter().all(|&c| !wall(c)));
        assert_connected(&path, 15, 15);
        assert_eq!(path.cells.first(), Some(&p(0, 1)));
        assert_eq!(path.cells.last(), Some(&p(5, 1)));
        assert!(path.len() as u32 > p(0, 1).torus_chebyshev(p(5, 1), 15, 15));
    }

    #[test]
    fn goal_is_always_enterable() {
        let g = SpatialGrid::new(15, 15).unwrap();
        let everything = |_: triage_core::GridPos| true;
        let path = AStarPlanner.plan(&g, p(4, 4), p(4, 5), &everything).unwrap();
        assert_eq!(path.cells, vec![p(4, 4), p(4, 5)]);
    }

    #[test]
    fn goal_is_never_tested_for_blocking() {
        let g = SpatialGrid::new(9, 9).unwrap();
        let asked_for_goal = Cell::new(false);
        let probe = |pos: triage_core::GridPos| {
            if pos == p(6, 6) {
                asked_for_goal.set(true);
            }
            false
        };
        assert!(AStarPlanner.plan(&g, p(0, 0), p(6, 6), &probe).is_some());
        assert!(!asked_for_goal.get());
    }

    #[test]
    fn enclosed_goal_has_no_path() {
        let g = SpatialGrid::new(15, 15).unwrap();
        let ring = |pos: triage_core::GridPos| pos.torus_manhattan(p(7, 7), 15, 15) == 1;
        assert!(AStarPlanner.plan(&g, p(0, 0), p(7, 7), &ring).is_none());
    }

    #[test]
    fn blocked_everywhere_but_distant_goal_has_no_path() {
        let g = SpatialGrid::new(15, 15).unwrap();
        let everything = |_: triage_core::GridPos| true;
        assert!(AStarPlanner.plan(&g, p(0, 0), p(5, 5), &everything).is_none());
    }

    #[test]
    fn path_length_bounded_below_by_chebyshev() {
        let g = SpatialGrid::new(11, 7).unwrap();
        // A wall across rows 1..=5 of column 5; rows 0 and 6 stay open.
        let wall = |pos: triage_core::GridPos| pos.x == 5 && (1..=5).contains(&pos.y);
        for (start, goal) in [(p(1, 1), p(9, 5)), (p(0, 6), p(10, 0)), (p(5, 0), p(2, 2)), (p(4, 3), p(6, 3))] {
            let path = AStarPlanner.plan(&g, start, goal, &wall).unwrap();
            assert!(path.len() as u32 > start.torus_chebyshev(goal, 11, 7));
            assert!(path.cells.iter().all(|&c| !wall(c)));
            assert_eq!(path.cells.first(), Some(&start));
            assert_eq!(path.cells.last(), Some(&goal));
            assert_connected(&path, 11, 7);
        }
    }

    #[test]
    fn narrow_grid_does_not_revisit() {
        // Left and right both wrap onto the same column on a 2-wide torus.
        let g = SpatialGrid::new(2, 4).unwrap();
        let path = AStarPlanner.plan(&g, p(0, 0), p(1, 3), &open).unwrap();
        assert_connected(&path, 2, 4);
        assert_eq!(path.steps(), 2);
    }
}
