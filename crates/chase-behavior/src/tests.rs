//! Unit tests for chase-behavior.
//!
//! Every test drives a single behavior directly, the way the agent loop
//! would: re-enter on `Continue`, stop on `Settled` or `Done`, and give up
//! once the iteration guard trips.

#[cfg(test)]
mod helpers {
    use chase_core::{AgentId, AgentRng, NodeId, Tick};
    use chase_mobility::{guard_tripped, Body};
    use chase_spatial::{Graph, TileCoord, TileGrid};

    use crate::{AgentView, Behavior, SimContext, Step};

    /// How a driven tick ended.
    #[derive(Copy, Clone, Debug, PartialEq)]
    pub enum Outcome {
        Settled,
        Done(Tick),
        Guarded,
    }

    pub fn drive(
        behavior: &mut dyn Behavior,
        body:     &mut Body,
        ctx:      &SimContext<'_>,
        rng:      &mut AgentRng,
        ms:       f64,
    ) -> Outcome {
        let mut tick = Tick::new(ms);
        loop {
            if guard_tripped(tick, behavior.name()) {
                return Outcome::Guarded;
            }
            match behavior.update(body, ctx, rng, tick) {
                Step::Settled => return Outcome::Settled,
                Step::Continue(next) => tick = next,
                Step::Done(next) => return Outcome::Done(next),
            }
        }
    }

    pub fn world(columns: u32, rows: u32, blocked: &[(u32, u32)]) -> (TileGrid, Graph) {
        let mut grid = TileGrid::new(columns, rows, columns as f64 * 10.0, rows as f64 * 10.0);
        for &(c, r) in blocked {
            grid.set_blocked(TileCoord::new(c, r), true);
        }
        let graph = Graph::new(&grid);
        (grid, graph)
    }

    /// 3×3 ring around a blocked center.
    pub fn ring() -> (TileGrid, Graph) {
        world(3, 3, &[(1, 1)])
    }

    /// Five columns, three rows:
    ///
    /// ```text
    ///   . . . . .
    ///   # # . # .
    ///   . . . . .
    /// ```
    ///
    /// (2,0) and (2,2) are the only intersections.
    pub fn crossroads() -> (TileGrid, Graph) {
        world(5, 3, &[(0, 1), (1, 1), (3, 1)])
    }

    /// Two corridors joined at the right:
    ///
    /// ```text
    ///   . . . . .
    ///   # # # # .
    ///   . . . . .
    /// ```
    pub fn hairpin() -> (TileGrid, Graph) {
        world(5, 3, &[(0, 1), (1, 1), (2, 1), (3, 1)])
    }

    pub fn at(graph: &Graph, column: u32, row: u32) -> NodeId {
        graph.node_at(TileCoord::new(column, row)).unwrap()
    }

    pub fn body_at(graph: &Graph, node: NodeId, speed: f64) -> Body {
        Body::new(node, graph.center(node).unwrap(), speed)
    }

    pub fn rng(agent: u32) -> AgentRng {
        AgentRng::new(7, AgentId(agent))
    }

    pub fn view(id: u32, body: &Body, graph: &Graph) -> AgentView {
        AgentView::of(AgentId(id), body, graph)
    }
}

// ── Still ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod still {
    use chase_core::AgentId;

    use super::helpers::*;
    use crate::{Behavior, SimContext, Still};

    #[test]
    fn never_moves() {
        let (grid, graph) = ring();
        let mut body = body_at(&graph, at(&graph, 0, 0), 10.0);
        let views = [view(0, &body, &graph)];
        let ctx = SimContext::new(AgentId(0), &graph, &grid, &views);
        let mut rng = rng(0);

        let mut still = Still;
        for _ in 0..5 {
            assert_eq!(drive(&mut still, &mut body, &ctx, &mut rng, 100.0), Outcome::Settled);
        }
        assert_eq!(body.position, graph.center(at(&graph, 0, 0)).unwrap());
        assert_eq!(still.name(), "still");
    }
}

// ── RandomWalk ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod random_walk {
    use chase_core::AgentId;

    use super::helpers::*;
    use crate::{RandomWalk, SimContext};

    #[test]
    fn never_backtracks_on_a_ring() {
        let (grid, graph) = ring();
        let mut body = body_at(&graph, at(&graph, 0, 0), 10.0);
        let views = [view(0, &body, &graph)];
        let ctx = SimContext::new(AgentId(0), &graph, &grid, &views);
        let mut rng = rng(0);
        let mut walk = RandomWalk;

        // One tile per millisecond: every tick reaches a node and picks the
        // next one.
        let mut targets = Vec::new();
        for _ in 0..24 {
            drive(&mut walk, &mut body, &ctx, &mut rng, 1.0);
            targets.push(body.target_node);
        }
        for w in targets.windows(3) {
            assert_ne!(w[0], w[2], "walked back from {:?}", w[1]);
        }
    }

    #[test]
    fn turns_back_at_a_dead_end() {
        let (grid, graph) = world(3, 1, &[]);
        let mut body = body_at(&graph, at(&graph, 0, 0), 10.0);
        let views = [view(0, &body, &graph)];
        let ctx = SimContext::new(AgentId(0), &graph, &grid, &views);
        let mut rng = rng(0);
        let mut walk = RandomWalk;

        let mut columns = Vec::new();
        for _ in 0..5 {
            drive(&mut walk, &mut body, &ctx, &mut rng, 1.0);
            columns.push(graph.node(body.target_node).unwrap().coord().column);
        }
        assert_eq!(columns, vec![1, 2, 1, 0, 1]);
    }

    #[test]
    fn stalls_on_an_isolated_node() {
        let (grid, graph) = world(1, 1, &[]);
        let start = at(&graph, 0, 0);
        let mut body = body_at(&graph, start, 10.0);
        let views = [view(0, &body, &graph)];
        let ctx = SimContext::new(AgentId(0), &graph, &grid, &views);

        let outcome = drive(&mut RandomWalk, &mut body, &ctx, &mut rng(0), 50.0);
        assert_eq!(outcome, Outcome::Settled);
        assert_eq!(body.target_node, start);
        assert_eq!(body.position, graph.center(start).unwrap());
    }

    #[test]
    fn zero_size_tiles_trip_the_guard() {
        // Every node sits on the same point, so each arrival is immediate
        // and the tick is never used up.
        let grid = chase_spatial::TileGrid::new(3, 1, 0.0, 0.0);
        let graph = chase_spatial::Graph::new(&grid);
        let start = graph.root().unwrap();
        let mut body = body_at(&graph, start, 1.0);
        let views = [view(0, &body, &graph)];
        let ctx = SimContext::new(AgentId(0), &graph, &grid, &views);

        let outcome = drive(&mut RandomWalk, &mut body, &ctx, &mut rng(0), 10.0);
        assert_eq!(outcome, Outcome::Guarded);
        assert!(body.position.is_finite());
    }
}

// ── ToIntersection ────────────────────────────────────────────────────────────

#[cfg(test)]
mod to_intersection {
    use chase_core::AgentId;

    use super::helpers::*;
    use crate::{Behavior, SimContext, ToIntersection};

    #[test]
    fn walks_to_the_first_intersection() {
        let (grid, graph) = crossroads();
        let mut body = body_at(&graph, at(&graph, 0, 0), 3.0);
        let views = [view(0, &body, &graph)];
        let ctx = SimContext::new(AgentId(0), &graph, &grid, &views);
        let mut rng = rng(0);
        let mut walk = ToIntersection::default();
        walk.reset();

        let mut xs = Vec::new();
        for _ in 0..3 {
            assert_eq!(drive(&mut walk, &mut body, &ctx, &mut rng, 2.0), Outcome::Settled);
            xs.push(body.position.x);
        }
        assert_eq!(xs, vec![11.0, 17.0, 23.0]);

        let Outcome::Done(rest) = drive(&mut walk, &mut body, &ctx, &mut rng, 2.0) else {
            panic!("should have stopped at the intersection");
        };
        assert_eq!(body.position.x, 25.0);
        assert_eq!(body.closest_node(&graph), Some(at(&graph, 2, 0)));
        assert!((rest.elapsed_ms - (2.0 - 2.0 / 3.0)).abs() < 1e-9);
        assert_eq!(walk.name(), "toIntersection");
    }

    #[test]
    fn finishes_at_once_on_an_intersection() {
        let (grid, graph) = crossroads();
        let mut body = body_at(&graph, at(&graph, 2, 0), 3.0);
        let views = [view(0, &body, &graph)];
        let ctx = SimContext::new(AgentId(0), &graph, &grid, &views);
        let mut walk = ToIntersection::default();
        walk.reset();

        let outcome = drive(&mut walk, &mut body, &ctx, &mut rng(0), 2.0);
        assert!(matches!(outcome, Outcome::Done(_)));
        assert_eq!(body.position, graph.center(at(&graph, 2, 0)).unwrap());
    }

    #[test]
    fn moving_on_leaves_the_current_intersection() {
        let (grid, graph) = crossroads();
        let here = at(&graph, 2, 0);
        let mut body = body_at(&graph, here, 3.0);
        let views = [view(0, &body, &graph)];
        let ctx = SimContext::new(AgentId(0), &graph, &grid, &views);
        let mut walk = ToIntersection::default();
        walk.reset_moving_on();

        assert_eq!(drive(&mut walk, &mut body, &ctx, &mut rng(0), 1.0), Outcome::Settled);
        assert_ne!(body.target_node, here);
        assert_ne!(body.position, graph.center(here).unwrap());
    }
}

// ── FollowPath / Follow ───────────────────────────────────────────────────────

#[cfg(test)]
mod follow_path {
    use chase_core::{AgentId, Vector};

    use super::helpers::*;
    use crate::{Behavior, Follow, FollowPath, SimContext};

    #[test]
    fn walks_the_path_then_finishes() {
        let (grid, graph) = ring();
        let mut body = body_at(&graph, at(&graph, 0, 0), 10.0);
        let views = [view(0, &body, &graph)];
        let ctx = SimContext::new(AgentId(0), &graph, &grid, &views);
        let mut rng = rng(0);

        let mut path = FollowPath::default();
        path.reset(&mut body, &ctx, &mut rng, at(&graph, 0, 2));
        // Already on the first node: heading for the second.
        assert_eq!(body.target_node, at(&graph, 0, 1));
        assert_eq!(path.path(), &[at(&graph, 0, 1), at(&graph, 0, 2)]);

        assert_eq!(drive(&mut path, &mut body, &ctx, &mut rng, 1.0), Outcome::Settled);
        assert_eq!(body.position, Vector::new(5.0, 15.0));
        assert_eq!(drive(&mut path, &mut body, &ctx, &mut rng, 1.0), Outcome::Settled);
        assert_eq!(body.position, Vector::new(5.0, 25.0));
        assert!(matches!(
            drive(&mut path, &mut body, &ctx, &mut rng, 1.0),
            Outcome::Done(_)
        ));
        assert_eq!(body.last_node, at(&graph, 0, 2));
        assert_eq!(body.target_node, at(&graph, 0, 2));
        assert!(path.path().is_empty());
    }

    #[test]
    fn leftover_time_carries_onto_the_next_edge() {
        let (grid, graph) = world(3, 1, &[]);
        let mut body = body_at(&graph, at(&graph, 0, 0), 1.0);
        let views = [view(0, &body, &graph)];
        let ctx = SimContext::new(AgentId(0), &graph, &grid, &views);
        let mut rng = rng(0);

        let mut path = FollowPath::default();
        path.reset(&mut body, &ctx, &mut rng, at(&graph, 2, 0));
        assert_eq!(drive(&mut path, &mut body, &ctx, &mut rng, 16.0), Outcome::Settled);

        // 10 units to the middle node, 6 more along the second edge.
        assert_eq!(body.position, Vector::new(21.0, 5.0));
        assert_eq!(body.last_node, at(&graph, 1, 0));
        assert_eq!(body.target_node, at(&graph, 2, 0));
        assert_eq!(body.current_edge, graph.edge_to(at(&graph, 1, 0), at(&graph, 2, 0)));
    }

    #[test]
    fn turns_around_mid_edge() {
        let (grid, graph) = ring();
        let mut body = body_at(&graph, at(&graph, 0, 0), 10.0);
        body.set_target(&graph, at(&graph, 1, 0), None);
        body.position = Vector::new(10.0, 5.0);
        let views = [view(0, &body, &graph)];
        let ctx = SimContext::new(AgentId(0), &graph, &grid, &views);
        let mut rng = rng(0);

        let mut path = FollowPath::default();
        path.reset(&mut body, &ctx, &mut rng, at(&graph, 0, 1));
        assert_eq!(body.last_node, at(&graph, 1, 0));
        assert_eq!(body.target_node, at(&graph, 0, 0));
        assert_eq!(body.current_edge, graph.edge_to(at(&graph, 1, 0), at(&graph, 0, 0)));
        assert_eq!(path.goal(), Some(at(&graph, 0, 1)));
    }

    #[test]
    fn draws_remaining_nodes() {
        let (grid, graph) = ring();
        let mut body = body_at(&graph, at(&graph, 0, 0), 10.0);
        let views = [view(0, &body, &graph)];
        let ctx = SimContext::new(AgentId(0), &graph, &grid, &views);

        let mut path = FollowPath::default();
        path.reset(&mut body, &ctx, &mut rng(0), at(&graph, 0, 2));
        let mut surface = chase_core::RecordingSurface::new();
        path.draw(&body, &ctx, &mut surface);
        assert_eq!(surface.points().count(), 2);
        assert_eq!(surface.lines().count(), 1);
    }

    #[test]
    fn follow_replans_when_the_target_moves() {
        let (grid, graph) = world(5, 1, &[]);
        let mut body = body_at(&graph, at(&graph, 0, 0), 10.0);
        let mut quarry = body_at(&graph, at(&graph, 4, 0), 10.0);
        let mut rng = rng(0);
        let mut follow = Follow::default();

        {
            let views = [view(0, &body, &graph), view(1, &quarry, &graph)];
            let ctx = SimContext::new(AgentId(0), &graph, &grid, &views);
            follow.reset(&mut body, &ctx, &mut rng, AgentId(1));
            assert_eq!(drive(&mut follow, &mut body, &ctx, &mut rng, 1.0), Outcome::Settled);
        }
        assert_eq!(body.position, Vector::new(15.0, 5.0));

        // The quarry jumps back to column 2; the follower stops there.
        quarry.set_node(&graph, at(&graph, 2, 0));
        let views = [view(0, &body, &graph), view(1, &quarry, &graph)];
        let ctx = SimContext::new(AgentId(0), &graph, &grid, &views);
        assert_eq!(drive(&mut follow, &mut body, &ctx, &mut rng, 1.0), Outcome::Settled);
        assert_eq!(body.position, Vector::new(25.0, 5.0));
        assert_eq!(drive(&mut follow, &mut body, &ctx, &mut rng, 1.0), Outcome::Settled);
        assert_eq!(body.position, Vector::new(25.0, 5.0));
        assert_eq!(follow.target(), Some(AgentId(1)));
    }
}

// ── LookAround / Wait ─────────────────────────────────────────────────────────

#[cfg(test)]
mod timed {
    use chase_core::{AgentId, Direction};

    use super::helpers::*;
    use crate::{LookAround, SimContext, Wait};

    #[test]
    fn looks_down_every_unvisited_edge() {
        let (grid, graph) = crossroads();
        let mut body = body_at(&graph, at(&graph, 1, 0), 3.0);
        body.set_target(&graph, at(&graph, 2, 0), None);
        body.set_node(&graph, at(&graph, 2, 0));
        let views = [view(0, &body, &graph)];
        let ctx = SimContext::new(AgentId(0), &graph, &grid, &views);
        let mut rng = rng(0);

        let mut look = LookAround::new(500.0);
        let visited = body.inverse_edge(&graph).into_iter().collect();
        look.reset(&mut body, &ctx, &mut rng, None, visited);
        assert_eq!(look.node(), Some(at(&graph, 2, 0)));
        let first = body.facing_direction().unwrap();
        assert!(matches!(first, Direction::Right | Direction::Down));

        assert_eq!(drive(&mut look, &mut body, &ctx, &mut rng, 500.0), Outcome::Settled);
        assert_eq!(body.facing_direction(), Some(first));

        assert_eq!(drive(&mut look, &mut body, &ctx, &mut rng, 1.0), Outcome::Settled);
        let second = body.facing_direction().unwrap();
        assert!(matches!(second, Direction::Right | Direction::Down));
        assert_ne!(first, second);
        assert_eq!(look.visited().len(), 3);

        let Outcome::Done(rest) = drive(&mut look, &mut body, &ctx, &mut rng, 500.0) else {
            panic!("every edge has been looked at");
        };
        assert!((rest.elapsed_ms - 1.0).abs() < 1e-9);
        assert_eq!(body.position, graph.center(at(&graph, 2, 0)).unwrap());
    }

    #[test]
    fn dead_end_looks_back() {
        let (grid, graph) = world(2, 1, &[]);
        let mut body = body_at(&graph, at(&graph, 0, 0), 3.0);
        body.set_target(&graph, at(&graph, 1, 0), None);
        body.set_node(&graph, at(&graph, 1, 0));
        let views = [view(0, &body, &graph)];
        let ctx = SimContext::new(AgentId(0), &graph, &grid, &views);

        let mut look = LookAround::new(500.0);
        let visited = body.inverse_edge(&graph).into_iter().collect();
        look.reset(&mut body, &ctx, &mut rng(0), None, visited);
        assert_eq!(body.facing_direction(), Some(Direction::Left));
    }

    #[test]
    fn edgeless_node_finishes_immediately() {
        let (grid, graph) = world(1, 1, &[]);
        let mut body = body_at(&graph, at(&graph, 0, 0), 3.0);
        let views = [view(0, &body, &graph)];
        let ctx = SimContext::new(AgentId(0), &graph, &grid, &views);
        let mut rng = rng(0);

        let mut look = LookAround::new(500.0);
        look.reset(&mut body, &ctx, &mut rng, None, Vec::new());
        let Outcome::Done(rest) = drive(&mut look, &mut body, &ctx, &mut rng, 16.0) else {
            panic!("nothing to look at");
        };
        assert_eq!(rest.elapsed_ms, 16.0);
    }

    #[test]
    fn wait_finishes_after_its_duration() {
        let (grid, graph) = ring();
        let mut body = body_at(&graph, at(&graph, 0, 0), 3.0);
        let views = [view(0, &body, &graph)];
        let ctx = SimContext::new(AgentId(0), &graph, &grid, &views);
        let mut rng = rng(0);

        let mut wait = Wait::new(1_000.0);
        wait.reset();
        assert_eq!(drive(&mut wait, &mut body, &ctx, &mut rng, 1_000.0), Outcome::Settled);
        assert_eq!(wait.elapsed_ms(), 1_000.0);

        let Outcome::Done(rest) = drive(&mut wait, &mut body, &ctx, &mut rng, 1.0) else {
            panic!("the wait is over");
        };
        assert_eq!(rest.elapsed_ms, 1.0);
        assert_eq!(wait.elapsed_ms(), 0.0);
    }
}

// ── Patrol ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod patrol {
    use chase_core::AgentId;

    use super::helpers::*;
    use crate::{Patrol, SimContext};

    #[test]
    fn alternates_walking_and_looking() {
        let (grid, graph) = crossroads();
        let mut body = body_at(&graph, at(&graph, 0, 0), 3.0);
        let views = [view(0, &body, &graph)];
        let ctx = SimContext::new(AgentId(0), &graph, &grid, &views);
        let mut rng = rng(0);

        let mut patrol = Patrol::new(500.0);
        patrol.reset();
        for _ in 0..4 {
            drive(&mut patrol, &mut body, &ctx, &mut rng, 2.0);
        }
        let crossing = graph.center(at(&graph, 2, 0)).unwrap();
        assert_eq!(body.position, crossing);
        assert_eq!(body.target_node, at(&graph, 2, 0));

        // Two unvisited edges, one look each; the body stays put while looking.
        drive(&mut patrol, &mut body, &ctx, &mut rng, 500.0);
        assert_eq!(body.position, crossing);
        assert_eq!(body.target_node, at(&graph, 2, 0));
        drive(&mut patrol, &mut body, &ctx, &mut rng, 500.0);

        // Off to a new node, not back the way it came.
        let next = body.target_node;
        assert!(next == at(&graph, 3, 0) || next == at(&graph, 2, 1));
    }
}

// ── Hunt ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod hunt {
    use chase_core::{AgentId, AgentSettings};
    use chase_mobility::Body;
    use chase_spatial::{Graph, TileGrid};

    use super::helpers::*;
    use crate::{Behavior, FollowPath, Hunt, HuntMode, SimContext};

    const HUNTED: u32 = 0;
    const HUNTER: u32 = 1;

    fn settings() -> AgentSettings {
        AgentSettings { walk_speed: 3.0, run_speed: 6.0, look_wait_ms: 500.0, alert_wait_ms: 1_000.0 }
    }

    struct Scene {
        grid:    TileGrid,
        graph:   Graph,
        hunted:  Body,
        hunter:  Body,
        hunt:    Hunt,
        run:     FollowPath,
    }

    impl Scene {
        fn new() -> Self {
            let (grid, graph) = hairpin();
            let hunted = body_at(&graph, at(&graph, 4, 1), settings().run_speed);
            let mut hunter = body_at(&graph, at(&graph, 0, 0), settings().walk_speed);
            let mut hunt = Hunt::new(settings());
            hunt.reset(&mut hunter, AgentId(HUNTED));
            Self { grid, graph, hunted, hunter, hunt, run: FollowPath::default() }
        }

        fn update_hunter(&mut self, ms: f64) -> Outcome {
            let views = [view(HUNTED, &self.hunted, &self.graph), view(HUNTER, &self.hunter, &self.graph)];
            let ctx = SimContext::new(AgentId(HUNTER), &self.graph, &self.grid, &views);
            drive(&mut self.hunt, &mut self.hunter, &ctx, &mut rng(HUNTER), ms)
        }

        fn hunted_runs_to(&mut self, column: u32, row: u32) {
            let goal = at(&self.graph, column, row);
            let views = [view(HUNTED, &self.hunted, &self.graph)];
            let ctx = SimContext::new(AgentId(HUNTED), &self.graph, &self.grid, &views);
            self.run.reset(&mut self.hunted, &ctx, &mut rng(HUNTED), goal);
        }

        fn update_hunted(&mut self, ms: f64) {
            let views = [view(HUNTED, &self.hunted, &self.graph)];
            let ctx = SimContext::new(AgentId(HUNTED), &self.graph, &self.grid, &views);
            drive(&mut self.run, &mut self.hunted, &ctx, &mut rng(HUNTED), ms);
        }
    }

    #[test]
    fn strolls_while_the_target_is_hidden() {
        let mut scene = Scene::new();
        scene.update_hunter(1.0);
        assert_eq!(scene.hunt.mode(), HuntMode::StrollAround);
        assert!(!scene.hunt.is_alert());
        assert_eq!(scene.hunter.speed, settings().walk_speed);
        assert_eq!(scene.hunt.name(), "lookFor");
    }

    #[test]
    fn spots_then_chases_then_loses_around_a_corner() {
        let mut scene = Scene::new();
        scene.hunted_runs_to(4, 0);
        scene.update_hunted(100.0);
        assert_eq!(scene.hunted.closest_node(&scene.graph), Some(at(&scene.graph, 4, 0)));

        // The first step turns the hunter to face down the top corridor.
        scene.update_hunter(1.0);
        assert_eq!(scene.hunt.mode(), HuntMode::JustSpotted);
        assert!(scene.hunt.is_alert());
        assert!(!scene.hunt.is_chasing());

        // The target starts down the right-hand side, still in sight.
        scene.hunted_runs_to(3, 2);
        scene.update_hunted(0.5);
        assert_eq!(scene.hunted.closest_node(&scene.graph), Some(at(&scene.graph, 4, 0)));
        assert_eq!(scene.hunted.target_node, at(&scene.graph, 4, 1));

        scene.update_hunter(1_000.0);
        assert_eq!(scene.hunt.mode(), HuntMode::ChaseVisible);
        assert_eq!(scene.hunt.last_seen(), Some(at(&scene.graph, 4, 1)));
        assert_eq!(scene.hunter.speed, settings().run_speed);
        assert!(scene.hunt.is_chasing());

        for _ in 0..4 {
            scene.update_hunted(1.0);
        }
        assert_eq!(scene.hunted.closest_node(&scene.graph), Some(at(&scene.graph, 3, 2)));

        scene.update_hunter(1.0);
        assert_eq!(scene.hunt.mode(), HuntMode::ChaseAroundCorner);
        assert_eq!(scene.hunt.last_seen(), Some(at(&scene.graph, 4, 1)));
    }

    #[test]
    fn full_cycle_on_the_crossroads() {
        let (grid, graph) = crossroads();
        let mut hunted = body_at(&graph, at(&graph, 0, 0), settings().run_speed);
        let mut hunter = body_at(&graph, at(&graph, 4, 0), settings().walk_speed);
        hunter.set_target(&graph, at(&graph, 3, 0), None);
        let mut hunt = Hunt::new(settings());
        hunt.reset(&mut hunter, AgentId(HUNTED));
        let mut rng = rng(HUNTER);

        let expected_speed = |mode: HuntMode| match mode {
            HuntMode::StrollAround | HuntMode::JustSpotted | HuntMode::GiveUp => settings().walk_speed,
            _ => settings().run_speed,
        };

        let mut modes = vec![hunt.mode()];
        let mut hidden = false;
        for _ in 0..5_000 {
            let views = [view(HUNTED, &hunted, &graph), view(HUNTER, &hunter, &graph)];
            let ctx = SimContext::new(AgentId(HUNTER), &graph, &grid, &views);
            drive(&mut hunt, &mut hunter, &ctx, &mut rng, 1.0);

            let mode = hunt.mode();
            assert_eq!(hunter.speed, expected_speed(mode), "speed while in {mode}");
            if modes.last() != Some(&mode) {
                modes.push(mode);
            }
            // Once the chase is on, the target slips into the bottom corridor.
            if mode == HuntMode::ChaseVisible && !hidden {
                hunted = body_at(&graph, at(&graph, 4, 2), settings().run_speed);
                hidden = true;
            }
            if mode == HuntMode::StrollAround && modes.len() > 1 {
                break;
            }
        }

        assert_eq!(
            modes,
            [
                HuntMode::StrollAround,
                HuntMode::JustSpotted,
                HuntMode::ChaseVisible,
                HuntMode::ChaseAroundCorner,
                HuntMode::ChaseToIntersection,
                HuntMode::LookAround,
                HuntMode::GiveUp,
                HuntMode::StrollAround,
            ]
        );
        assert_eq!(hunt.last_seen(), Some(at(&graph, 0, 0)));
        assert!(!hunt.is_alert());
    }

    #[test]
    fn without_a_target_nothing_happens() {
        let (grid, graph) = hairpin();
        let mut body = body_at(&graph, at(&graph, 0, 0), 3.0);
        let views = [view(0, &body, &graph)];
        let ctx = SimContext::new(AgentId(0), &graph, &grid, &views);

        let mut hunt = Hunt::new(settings());
        assert_eq!(drive(&mut hunt, &mut body, &ctx, &mut rng(0), 10.0), Outcome::Settled);
        assert_eq!(body.position, graph.center(at(&graph, 0, 0)).unwrap());
    }

    #[test]
    fn mode_names() {
        let names: Vec<_> = HuntMode::ALL.iter().map(|m| m.as_str()).collect();
        assert_eq!(
            names,
            [
                "strollAround",
                "justSpotted",
                "chaseVisible",
                "chaseAroundCorner",
                "chaseToIntersection",
                "lookAround",
                "giveUp",
            ]
        );
        assert!(!HuntMode::GiveUp.is_alert());
        assert!(HuntMode::JustSpotted.is_alert());
        assert!(!HuntMode::JustSpotted.is_chasing());
    }
}

// ── GroupSearch ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod group {
    use chase_core::{AgentId, AgentSettings};

    use super::helpers::*;
    use crate::{Behavior, GroupSearch, HuntMode, SimContext};

    const TARGET: u32 = 0;
    const ME: u32 = 1;
    const FRIEND: u32 = 2;

    #[test]
    fn rallies_to_an_alert_friend_and_returns_when_it_calms() {
        let (grid, graph) = hairpin();
        let target = body_at(&graph, at(&graph, 0, 2), 3.0);
        let friend = body_at(&graph, at(&graph, 2, 0), 3.0);
        let mut me = body_at(&graph, at(&graph, 0, 0), 3.0);
        me.set_target(&graph, at(&graph, 1, 0), None);
        let mut rng = rng(ME);

        let mut search = GroupSearch::new(AgentSettings::with_speeds(3.0, 6.0));
        search.reset(&mut me, AgentId(TARGET), vec![AgentId(ME), AgentId(FRIEND)]);
        assert_eq!(search.rallying_to(), None);

        // The friend is alert and in sight: go to it.  Our own (alert) view
        // is ignored.
        let mut views = [
            view(TARGET, &target, &graph),
            view(ME, &me, &graph),
            view(FRIEND, &friend, &graph),
        ];
        views[1].is_alert = true;
        views[2].is_alert = true;
        {
            let ctx = SimContext::new(AgentId(ME), &graph, &grid, &views);
            assert_eq!(search.closest_visible_alert_friend(&me, &ctx), Some(AgentId(FRIEND)));
            drive(&mut search, &mut me, &ctx, &mut rng, 1.0);
        }
        assert_eq!(search.rallying_to(), Some(AgentId(FRIEND)));
        assert_eq!(search.hunt().mode(), HuntMode::JustSpotted);
        assert!(search.is_alert());

        // The friend calms down while still in sight: back to the target.
        views[2].is_alert = false;
        let ctx = SimContext::new(AgentId(ME), &graph, &grid, &views);
        drive(&mut search, &mut me, &ctx, &mut rng, 1.0);
        assert_eq!(search.rallying_to(), None);
        assert_eq!(search.hunt().mode(), HuntMode::StrollAround);
        assert_eq!(search.name(), "searchFor");
    }

    #[test]
    fn the_target_in_sight_wins_over_friends() {
        let (grid, graph) = hairpin();
        let target = body_at(&graph, at(&graph, 3, 0), 3.0);
        let friend = body_at(&graph, at(&graph, 2, 0), 3.0);
        let mut me = body_at(&graph, at(&graph, 0, 0), 3.0);
        me.set_target(&graph, at(&graph, 1, 0), None);

        let mut search = GroupSearch::new(AgentSettings::with_speeds(3.0, 6.0));
        search.reset(&mut me, AgentId(TARGET), vec![AgentId(FRIEND)]);

        let mut views = [
            view(TARGET, &target, &graph),
            view(ME, &me, &graph),
            view(FRIEND, &friend, &graph),
        ];
        views[2].is_alert = true;
        let ctx = SimContext::new(AgentId(ME), &graph, &grid, &views);
        drive(&mut search, &mut me, &ctx, &mut rng(ME), 1.0);

        assert_eq!(search.rallying_to(), None);
        assert_eq!(search.hunt().mode(), HuntMode::JustSpotted);
        assert_eq!(search.hunt().target(), Some(AgentId(TARGET)));
    }
}
