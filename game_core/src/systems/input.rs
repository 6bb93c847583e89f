use hecs::World;

use crate::{Config, FrameInput, Paddle};

/// Apply key transitions to paddle velocities.
///
/// Key-down sets the paddle moving in the key's direction; releasing either
/// of a paddle's keys stops it. Events apply in arrival order, so the last
/// transition in a frame wins.
pub fn apply_inputs(world: &mut World, input: &FrameInput, config: &Config) {
    for event in &input.keys {
        let side = event.key.side();
        let velocity = if event.pressed {
            event.key.dir() * config.paddle_speed
        } else {
            0
        };

        for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
            if paddle.side == side {
                paddle.set_velocity(velocity);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_paddle, Key, KeyEvent, Side};

    fn velocities(world: &World) -> (i32, i32) {
        let mut left = 0;
        let mut right = 0;
        for (_e, paddle) in world.query::<&Paddle>().iter() {
            match paddle.side {
                Side::Left => left = paddle.velocity(),
                Side::Right => right = paddle.velocity(),
            }
        }
        (left, right)
    }

    fn setup_world() -> (World, Config) {
        let config = Config::new();
        let mut world = World::new();
        create_paddle(&mut world, Side::Left, &config);
        create_paddle(&mut world, Side::Right, &config);
        (world, config)
    }

    #[test]
    fn test_key_down_sets_velocity() {
        let (mut world, config) = setup_world();
        let input = FrameInput {
            keys: vec![KeyEvent::down(Key::LeftUp), KeyEvent::down(Key::RightDown)],
            close_requested: false,
        };

        apply_inputs(&mut world, &input, &config);

        assert_eq!(velocities(&world), (-8, 8));
    }

    #[test]
    fn test_key_up_stops_paddle() {
        let (mut world, config) = setup_world();
        let mut input = FrameInput::new();
        input.push(KeyEvent::down(Key::RightUp));
        apply_inputs(&mut world, &input, &config);
        assert_eq!(velocities(&world), (0, -8));

        let mut input = FrameInput::new();
        input.push(KeyEvent::up(Key::RightUp));
        apply_inputs(&mut world, &input, &config);
        assert_eq!(velocities(&world), (0, 0));
    }

    #[test]
    fn test_releasing_opposite_key_also_stops_paddle() {
        let (mut world, config) = setup_world();
        let mut input = FrameInput::new();
        input.push(KeyEvent::down(Key::LeftDown));
        input.push(KeyEvent::up(Key::LeftUp));
        apply_inputs(&mut world, &input, &config);
        assert_eq!(velocities(&world), (0, 0), "Any key-up of a paddle zeroes it");
    }

    #[test]
    fn test_velocity_persists_without_events() {
        let (mut world, config) = setup_world();
        let mut input = FrameInput::new();
        input.push(KeyEvent::down(Key::LeftDown));
        apply_inputs(&mut world, &input, &config);

        apply_inputs(&mut world, &FrameInput::new(), &config);
        assert_eq!(velocities(&world), (8, 0));
    }
}
