use crate::axis::Axis;
use crate::color::Color;
use crate::geometry::{Point, Rect};
use crate::simulation::collision::{contact_axis, exchange, Peers};
use crate::utils::{MAX_BACKTRACK_STEPS, MAX_SPEED, MIN_SPEED};
use std::fmt;

/// Why a block was removed from the simulation
#[derive(Clone, Debug, PartialEq)]
pub enum KillCause {
    /// Could not back out of another block
    Collision { peer_id: u32, peer_rect: Rect },
    /// Could not get back inside the simulation bounds
    Containment {
        before_move: Rect,
        before_velocity: [i32; 2],
        rect_before: Rect,
        rect_after: Rect,
    },
}

/// Diagnostic record emitted when a block is removed
#[derive(Clone, Debug, PartialEq)]
pub struct KillReport {
    pub id: u32,
    pub rect: Rect,
    pub velocity: [i32; 2],
    pub direction: [f64; 2],
    /// Backtracking steps taken before giving up
    pub steps: u32,
    pub cause: KillCause,
}

impl KillReport {
    /// Resolution stage that gave up
    pub fn stage(&self) -> &'static str {
        match self.cause {
            KillCause::Collision { .. } => "collide",
            KillCause::Containment { .. } => "constrain",
        }
    }
}

impl fmt::Display for KillReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = format!("({:.4}, {:.4})", self.direction[0], self.direction[1]);
        match &self.cause {
            KillCause::Collision { peer_id, peer_rect } => write!(
                f,
                "Rect: {}, Other: {} (block {}), Velocity: {:?}, Unit: {}",
                self.rect, peer_rect, peer_id, self.velocity, unit
            )?,
            KillCause::Containment {
                before_move,
                before_velocity,
                rect_before,
                rect_after,
            } => write!(
                f,
                "Before movement: {}, Before velocity: {:?}, Unit: {}, Rect before: {}, Rect after: {}",
                before_move, before_velocity, unit, rect_before, rect_after
            )?,
        }
        write!(f, ", gave up after {} steps", self.steps)
    }
}

/// A bouncing square.
///
/// `pos` is the sub-pixel center; `rect` is re-derived from its rounded value
/// after every move and is what all collision tests use.
#[derive(Clone, Debug)]
pub struct Block {
    pub id: u32,
    pub color: Color,
    pos: [f64; 2],
    rect: Rect,
    velocity: [i32; 2],
    direction: [f64; 2],
    alive: bool,
    before_move: Rect,
    before_velocity: [i32; 2],
}

impl Block {
    /// Create a block centered at `center` with a random velocity,
    /// each component uniform in `[-5, 5]`
    pub fn new(id: u32, color: Color, center: [f64; 2], size: i32, rng: &mut fastrand::Rng) -> Self {
        let velocity = [
            rng.i32(MIN_SPEED..=MAX_SPEED),
            rng.i32(MIN_SPEED..=MAX_SPEED),
        ];
        Self::with_velocity(id, color, center, size, velocity)
    }

    /// Create a block with a known velocity
    pub fn with_velocity(
        id: u32,
        color: Color,
        center: [f64; 2],
        size: i32,
        velocity: [i32; 2],
    ) -> Self {
        let rect = Rect::from_center(Point::rounded(center), size, size);
        Self {
            id,
            color,
            pos: center,
            rect,
            velocity,
            direction: Self::unit_vector(velocity),
            alive: true,
            before_move: rect,
            before_velocity: velocity,
        }
    }

    /// Unit vector of `v`, or zero when `v` is zero
    pub fn unit_vector(v: [i32; 2]) -> [f64; 2] {
        let (x, y) = (f64::from(v[0]), f64::from(v[1]));
        let magnitude = x.hypot(y);
        if magnitude > 0.0 {
            [x / magnitude, y / magnitude]
        } else {
            [0.0, 0.0]
        }
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Remove this block from the simulation for good
    #[inline]
    pub fn kill(&mut self) {
        self.alive = false;
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    #[inline]
    pub fn position(&self) -> [f64; 2] {
        self.pos
    }

    #[inline]
    pub fn velocity(&self) -> [i32; 2] {
        self.velocity
    }

    #[inline]
    pub fn direction(&self) -> [f64; 2] {
        self.direction
    }

    /// Replace the velocity and recompute the direction
    pub fn set_velocity(&mut self, velocity: [i32; 2]) {
        self.velocity = velocity;
        self.direction = Self::unit_vector(velocity);
    }

    /// Advance one tick: move, bounce off the bounds, then resolve overlaps
    /// with `peers`. Returns a report when the block had to be removed.
    pub fn update(&mut self, bounds: Rect, peers: &mut Peers<'_>) -> Option<KillReport> {
        if !self.alive {
            return None;
        }
        self.before_move = self.rect;
        self.before_velocity = self.velocity;

        for axis in Axis::ALL {
            let i = axis.index();
            self.pos[i] += f64::from(self.velocity[i]);
        }
        self.sync_rect();

        if let Some(report) = self.collide_walls(bounds) {
            return Some(report);
        }
        self.collide(peers)
    }

    /// Reverse each velocity component whose axis left `bounds`, then pull
    /// the block back inside.
    ///
    /// The pull-back uses the direction of travel from before the bounce, so
    /// the block retraces its own path.
    pub fn collide_walls(&mut self, bounds: Rect) -> Option<KillReport> {
        let mut out = false;
        for axis in Axis::ALL {
            let (lo, hi) = self.rect.span(axis);
            let (min, max) = bounds.span(axis);
            if lo < min || hi > max {
                self.velocity[axis.index()] *= -1;
                out = true;
            }
        }
        if !out {
            return None;
        }

        let report = self.constrain(bounds);
        self.direction = Self::unit_vector(self.velocity);
        report
    }

    /// Back away from any overlapping peer, then swap one velocity component
    /// with the last peer hit.
    pub fn collide(&mut self, peers: &mut Peers<'_>) -> Option<KillReport> {
        let mut hit = None;
        let mut steps = 0;

        while let Some((idx, other)) = peers.first_overlapping(&self.rect) {
            hit = Some(idx);
            if steps == MAX_BACKTRACK_STEPS {
                let cause = KillCause::Collision {
                    peer_id: other.id,
                    peer_rect: other.rect,
                };
                self.kill();
                return Some(self.report(steps, cause));
            }
            self.step_back();
            steps += 1;
        }

        if let Some(idx) = hit {
            if let Some(other) = peers.get_mut(idx) {
                let axis = contact_axis(&self.rect, &other.rect);
                exchange(self, other, axis);
            }
        }
        None
    }

    /// Step back until fully inside `bounds`
    pub fn constrain(&mut self, bounds: Rect) -> Option<KillReport> {
        let rect_before = self.rect;
        let mut steps = 0;

        while !bounds.contains(&self.rect) {
            if steps == MAX_BACKTRACK_STEPS {
                let cause = KillCause::Containment {
                    before_move: self.before_move,
                    before_velocity: self.before_velocity,
                    rect_before,
                    rect_after: self.rect,
                };
                self.kill();
                return Some(self.report(steps, cause));
            }
            self.step_back();
            steps += 1;
        }
        None
    }

    /// Move one unit against the direction of travel
    #[inline]
    pub fn step_back(&mut self) {
        self.pos[0] -= self.direction[0];
        self.pos[1] -= self.direction[1];
        self.sync_rect();
    }

    #[inline]
    fn sync_rect(&mut self) {
        self.rect = Rect::from_center(Point::rounded(self.pos), self.rect.w, self.rect.h);
    }

    fn report(&self, steps: u32, cause: KillCause) -> KillReport {
        KillReport {
            id: self.id,
            rect: self.rect,
            velocity: self.velocity,
            direction: self.direction,
            steps,
            cause,
        }
    }
}
