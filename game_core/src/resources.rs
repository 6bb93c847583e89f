use crate::Side;

/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f32,    // Seconds covered by the last tick
    pub now: f32,   // Total elapsed time
    pub frame: u64, // Frames simulated while the match was active
}

impl Time {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self, dt: f32) {
        self.dt = dt;
        self.now += dt;
    }
}

impl Default for Time {
    fn default() -> Self {
        Self {
            dt: 1.0 / 60.0,
            now: 0.0,
            frame: 0,
        }
    }
}

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u8,  // Left player score
    pub right: u8, // Right player score
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }

    pub fn get(&self, side: Side) -> u8 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn has_winner(&self, win_score: u8) -> Option<Side> {
        if self.left >= win_score {
            Some(Side::Left)
        } else if self.right >= win_score {
            Some(Side::Right)
        } else {
            None
        }
    }
}

/// Match lifecycle. `Active -> Over` is one-way.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchState {
    #[default]
    Active,
    Over,
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Events {
    pub left_scored: bool,
    pub right_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.left_scored = false;
        self.right_scored = false;
        self.ball_hit_paddle = false;
        self.ball_hit_wall = false;
    }

    /// Whether the ball's x velocity was negated this frame
    pub fn reflected_x(&self) -> bool {
        self.ball_hit_paddle || self.left_scored || self.right_scored
    }

    /// Whether the ball's y velocity was negated this frame
    pub fn reflected_y(&self) -> bool {
        self.ball_hit_wall
    }
}

/// Paddle control keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    LeftUp,
    LeftDown,
    RightUp,
    RightDown,
}

impl Key {
    pub fn side(self) -> Side {
        match self {
            Key::LeftUp | Key::LeftDown => Side::Left,
            Key::RightUp | Key::RightDown => Side::Right,
        }
    }

    /// -1 = up, 1 = down
    pub fn dir(self) -> i32 {
        match self {
            Key::LeftUp | Key::RightUp => -1,
            Key::LeftDown | Key::RightDown => 1,
        }
    }
}

/// A single key transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub pressed: bool,
}

impl KeyEvent {
    pub fn down(key: Key) -> Self {
        Self { key, pressed: true }
    }

    pub fn up(key: Key) -> Self {
        Self {
            key,
            pressed: false,
        }
    }
}

/// Input sampled for one frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub keys: Vec<KeyEvent>, // In arrival order
    pub close_requested: bool,
}

impl FrameInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: KeyEvent) {
        self.keys.push(event);
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty() && !self.close_requested
    }
}

/// What the driving loop should do after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_increment_left() {
        let mut score = Score::new();
        assert_eq!(score.left, 0);
        score.increment(Side::Left);
        assert_eq!(score.left, 1);
        score.increment(Side::Left);
        assert_eq!(score.left, 2);
        assert_eq!(score.right, 0);
    }

    #[test]
    fn test_score_increment_right() {
        let mut score = Score::new();
        score.increment(Side::Right);
        assert_eq!(score.get(Side::Right), 1);
        assert_eq!(score.get(Side::Left), 0);
    }

    #[test]
    fn test_score_has_winner_left() {
        let mut score = Score::new();
        for _ in 0..11 {
            score.increment(Side::Left);
        }
        assert_eq!(
            score.has_winner(11),
            Some(Side::Left),
            "Left player should win at 11"
        );
    }

    #[test]
    fn test_score_has_winner_right() {
        let score = Score { left: 3, right: 11 };
        assert_eq!(
            score.has_winner(11),
            Some(Side::Right),
            "Right player should win at 11"
        );
    }

    #[test]
    fn test_score_no_winner_below_threshold() {
        let score = Score { left: 10, right: 10 };
        assert_eq!(score.has_winner(11), None, "No winner below threshold");
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.left_scored = true;
        events.right_scored = true;
        events.ball_hit_paddle = true;
        events.ball_hit_wall = true;

        events.clear();

        assert_eq!(events, Events::default());
    }

    #[test]
    fn test_events_reflection_class() {
        let mut events = Events::new();
        assert!(!events.reflected_x() && !events.reflected_y());
        events.ball_hit_wall = true;
        assert!(!events.reflected_x() && events.reflected_y());
        events.right_scored = true;
        assert!(events.reflected_x() && events.reflected_y());
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(Key::LeftUp.side(), Side::Left);
        assert_eq!(Key::RightDown.side(), Side::Right);
        assert_eq!(Key::LeftUp.dir(), -1);
        assert_eq!(Key::RightDown.dir(), 1);
    }

    #[test]
    fn test_frame_input_push() {
        let mut input = FrameInput::new();
        assert!(input.is_empty());
        input.push(KeyEvent::down(Key::LeftUp));
        input.push(KeyEvent::up(Key::LeftUp));
        assert_eq!(input.keys.len(), 2);
        assert!(input.keys[0].pressed);
        assert!(!input.keys[1].pressed);
        assert!(!input.is_empty());
    }

    #[test]
    fn test_time_advance() {
        let mut time = Time::new();
        time.advance(0.5);
        time.advance(0.25);
        assert_eq!(time.dt, 0.25);
        assert_eq!(time.now, 0.75);
    }
}
