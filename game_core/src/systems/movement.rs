use crate::{Ball, Paddle};
use hecs::World;

/// Move paddles by their velocity, clamped to the court
pub fn move_paddles(world: &mut World) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        paddle.advance();
    }
}

/// Move ball by its velocity
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.advance();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle, Config, Side};
    use glam::IVec2;

    #[test]
    fn test_move_ball_one_frame() {
        let config = Config::new();
        let mut world = World::new();
        create_ball(&mut world, &config);

        move_ball(&mut world);

        for (_e, ball) in world.query::<&Ball>().iter() {
            assert_eq!(ball.center, IVec2::new(254, 202));
            assert_eq!(ball.vel, IVec2::new(4, 2), "Velocity should be unchanged");
        }
    }

    #[test]
    fn test_move_paddles_independently() {
        let config = Config::new();
        let mut world = World::new();
        create_paddle(&mut world, Side::Left, &config);
        create_paddle(&mut world, Side::Right, &config);
        for (_e, paddle) in world.query_mut::<&mut Paddle>() {
            if paddle.side == Side::Left {
                paddle.set_velocity(-8);
            }
        }

        move_paddles(&mut world);

        for (_e, paddle) in world.query::<&Paddle>().iter() {
            match paddle.side {
                Side::Left => assert_eq!(paddle.rect().top(), 167),
                Side::Right => assert_eq!(paddle.rect().top(), 175),
            }
        }
    }
}
