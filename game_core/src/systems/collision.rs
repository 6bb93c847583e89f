use crate::{Axis, Ball, Events, Paddle, Rect, Side};
use hecs::World;

/// Reflect the ball off any paddle it is entering.
///
/// Only the ball's center point is tested against the paddle rectangle.
/// A bounce also requires the ball to be travelling toward that paddle, so a
/// ball still inside the rectangle on the next frame is not reflected again.
pub fn check_paddle_hits(world: &mut World, events: &mut Events) {
    // Copy paddle rectangles out before borrowing the ball mutably
    let paddles: Vec<(Side, Rect)> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| (paddle.side, paddle.rect()))
        .collect();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        for &(side, rect) in &paddles {
            if rect.contains(ball.center) && side.is_approached_by(ball.vel.x) {
                ball.reflect(Axis::X);
                events.ball_hit_paddle = true;
                log::trace!("ball hit {:?} paddle at {}", side, ball.center);
            }
        }
    }
}
