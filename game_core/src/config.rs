use glam::IVec2;

use crate::{Court, Params, Rect, Side};

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub court_width: i32,
    pub court_height: i32,
    pub paddle_width: i32,
    pub paddle_height: i32,
    pub paddle_speed: i32,
    pub left_paddle_x: i32,
    pub right_paddle_x: i32,
    pub ball_radius: i32,
    pub ball_velocity: IVec2,
    pub win_score: u8,
    pub foreground: [f32; 4],
    pub background: [f32; 4],
}

impl Default for Config {
    fn default() -> Self {
        Self {
            court_width: Params::COURT_WIDTH,
            court_height: Params::COURT_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            left_paddle_x: Params::LEFT_PADDLE_X,
            right_paddle_x: Params::RIGHT_PADDLE_X,
            ball_radius: Params::BALL_RADIUS,
            ball_velocity: IVec2::new(Params::BALL_VELOCITY_X, Params::BALL_VELOCITY_Y),
            win_score: Params::WIN_SCORE,
            foreground: Params::FOREGROUND,
            background: Params::BACKGROUND,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn court(&self) -> Court {
        Court::new(self.court_width, self.court_height)
    }

    /// Get X offset for a paddle's left edge based on its side
    pub fn paddle_x(&self, side: Side) -> i32 {
        match side {
            Side::Left => self.left_paddle_x,
            Side::Right => self.right_paddle_x,
        }
    }

    /// Top edge that vertically centers a paddle in the court
    pub fn paddle_start_top(&self) -> i32 {
        self.court_height / 2 - self.paddle_height / 2
    }

    /// Starting rectangle for a paddle
    pub fn paddle_spawn(&self, side: Side) -> Rect {
        Rect::new(
            IVec2::new(self.paddle_x(side), self.paddle_start_top()),
            IVec2::new(self.paddle_width, self.paddle_height),
        )
    }

    /// Ball spawn point (court center)
    pub fn ball_spawn(&self) -> IVec2 {
        self.court().center()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_paddle_x() {
        let config = Config::new();
        assert_eq!(config.paddle_x(Side::Left), 90, "Left paddle X offset");
        assert_eq!(config.paddle_x(Side::Right), 400, "Right paddle X offset");
    }

    #[test]
    fn test_config_paddle_spawn_is_vertically_centered() {
        let config = Config::new();
        let rect = config.paddle_spawn(Side::Left);
        assert_eq!(rect.top(), 175);
        assert_eq!(rect.bottom(), 225);
        assert_eq!(rect.size, IVec2::new(10, 50));
    }

    #[test]
    fn test_config_ball_spawn() {
        let config = Config::new();
        assert_eq!(config.ball_spawn(), IVec2::new(250, 200));
        assert_eq!(config.ball_velocity, IVec2::new(4, 2));
    }
}
