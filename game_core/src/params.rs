/// Fixed game constants for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Court
    pub const COURT_WIDTH: i32 = 500;
    pub const COURT_HEIGHT: i32 = 400;

    // Paddle
    pub const PADDLE_WIDTH: i32 = 10;
    pub const PADDLE_HEIGHT: i32 = 50;
    pub const PADDLE_SPEED: i32 = 8; // pixels per frame
    pub const LEFT_PADDLE_X: i32 = 90;
    pub const RIGHT_PADDLE_X: i32 = 400;

    // Ball
    pub const BALL_RADIUS: i32 = 5;
    pub const BALL_VELOCITY_X: i32 = 4;
    pub const BALL_VELOCITY_Y: i32 = 2;

    // Score
    pub const WIN_SCORE: u8 = 11; // First to 11 wins

    // Loop
    pub const FRAME_RATE: u32 = 60;

    // Colors (rgba)
    pub const FOREGROUND: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const BACKGROUND: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
}
