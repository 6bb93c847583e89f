use glam::IVec2;

use crate::Rect;

/// Which edge of the court a paddle (and its player) belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// True when a ball with horizontal velocity `vx` is travelling from the
    /// court interior toward this side's paddle.
    pub fn is_approached_by(self, vx: i32) -> bool {
        match self {
            Side::Left => vx < 0,
            Side::Right => vx > 0,
        }
    }

    pub fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Velocity axis for ball reflection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Paddle component - a player's paddle
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    rect: Rect,
    velocity: i32,    // -speed = up, 0 = stop, +speed = down
    court_height: i32,
}

impl Paddle {
    pub fn new(side: Side, rect: Rect, court_height: i32) -> Self {
        Self {
            side,
            rect,
            velocity: 0,
            court_height,
        }
    }

    /// Set vertical velocity. Callers pass one of -speed, 0 or +speed.
    pub fn set_velocity(&mut self, velocity: i32) {
        self.velocity = velocity;
    }

    pub fn velocity(&self) -> i32 {
        self.velocity
    }

    /// Move by the current velocity, then clamp into the court.
    pub fn advance(&mut self) {
        self.rect.translate(IVec2::new(0, self.velocity));

        // A single step cannot push both edges out at once
        if self.rect.top() < 0 {
            self.rect.set_top(0);
        } else if self.rect.bottom() > self.court_height {
            self.rect.set_bottom(self.court_height);
        }
    }

    /// Bounding rectangle by value
    pub fn rect(&self) -> Rect {
        self.rect
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub center: IVec2,
    pub vel: IVec2,
    pub radius: i32,
}

impl Ball {
    pub fn new(center: IVec2, vel: IVec2, radius: i32) -> Self {
        Self {
            center,
            vel,
            radius,
        }
    }

    /// Move by the current velocity. Leaving the court is detected by the
    /// scoring system, so no clamping happens here.
    pub fn advance(&mut self) {
        self.center += self.vel;
    }

    /// Negate one velocity component.
    ///
    /// Reflecting a zero component leaves it at zero. That is intended: a
    /// stalled axis stays stalled rather than being treated as an error.
    pub fn reflect(&mut self, axis: Axis) {
        match axis {
            Axis::X => self.vel.x = -self.vel.x,
            Axis::Y => self.vel.y = -self.vel.y,
        }
    }

    /// Put the ball back at `center` with velocity `vel`
    pub fn reset(&mut self, center: IVec2, vel: IVec2) {
        self.center = center;
        self.vel = vel;
    }

    pub fn left(&self) -> i32 {
        self.center.x - self.radius
    }

    pub fn right(&self) -> i32 {
        self.center.x + self.radius
    }

    pub fn top(&self) -> i32 {
        self.center.y - self.radius
    }

    pub fn bottom(&self) -> i32 {
        self.center.y + self.radius
    }
}
