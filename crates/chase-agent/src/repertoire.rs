//! One pre-built instance of every behavior an agent can switch to.

use chase_behavior::{
    Behavior, Follow, FollowPath, GroupSearch, Hunt, LookAround, Patrol, RandomWalk, Still,
    ToIntersection, Wait,
};
use chase_core::AgentSettings;

/// Which entry of the [`Repertoire`] is active.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum BehaviorKind {
    #[default]
    Still,
    RandomWalk,
    FollowPath,
    Follow,
    ToIntersection,
    LookAround,
    Wait,
    Patrol,
    Hunt,
    GroupSearch,
}

impl BehaviorKind {
    pub const ALL: [BehaviorKind; 10] = [
        BehaviorKind::Still,
        BehaviorKind::RandomWalk,
        BehaviorKind::FollowPath,
        BehaviorKind::Follow,
        BehaviorKind::ToIntersection,
        BehaviorKind::LookAround,
        BehaviorKind::Wait,
        BehaviorKind::Patrol,
        BehaviorKind::Hunt,
        BehaviorKind::GroupSearch,
    ];
}

/// Behaviors are created once per agent and reset on every activation, so
/// switching never allocates.
#[derive(Clone, Debug)]
pub struct Repertoire {
    pub still:           Still,
    pub random_walk:     RandomWalk,
    pub follow_path:     FollowPath,
    pub follow:          Follow,
    pub to_intersection: ToIntersection,
    pub look_around:     LookAround,
    pub wait:            Wait,
    pub patrol:          Patrol,
    pub hunt:            Hunt,
    pub group_search:    GroupSearch,
}

impl Repertoire {
    pub fn new(settings: AgentSettings) -> Self {
        Self {
            still:           Still,
            random_walk:     RandomWalk,
            follow_path:     FollowPath::default(),
            follow:          Follow::default(),
            to_intersection: ToIntersection::default(),
            look_around:     LookAround::new(settings.look_wait_ms),
            wait:            Wait::new(settings.alert_wait_ms),
            patrol:          Patrol::new(settings.look_wait_ms),
            hunt:            Hunt::new(settings),
            group_search:    GroupSearch::new(settings),
        }
    }

    pub fn get(&self, kind: BehaviorKind) -> &dyn Behavior {
        match kind {
            BehaviorKind::Still => &self.still,
            BehaviorKind::RandomWalk => &self.random_walk,
            BehaviorKind::FollowPath => &self.follow_path,
            BehaviorKind::Follow => &self.follow,
            BehaviorKind::ToIntersection => &self.to_intersection,
            BehaviorKind::LookAround => &self.look_around,
            BehaviorKind::Wait => &self.wait,
            BehaviorKind::Patrol => &self.patrol,
            BehaviorKind::Hunt => &self.hunt,
            BehaviorKind::GroupSearch => &self.group_search,
        }
    }

    pub fn get_mut(&mut self, kind: BehaviorKind) -> &mut dyn Behavior {
        match kind {
            BehaviorKind::Still => &mut self.still,
            BehaviorKind::RandomWalk => &mut self.random_walk,
            BehaviorKind::FollowPath => &mut self.follow_path,
            BehaviorKind::Follow => &mut self.follow,
            BehaviorKind::ToIntersection => &mut self.to_intersection,
            BehaviorKind::LookAround => &mut self.look_around,
            BehaviorKind::Wait => &mut self.wait,
            BehaviorKind::Patrol => &mut self.patrol,
            BehaviorKind::Hunt => &mut self.hunt,
            BehaviorKind::GroupSearch => &mut self.group_search,
        }
    }
}
