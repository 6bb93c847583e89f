use crate::{Axis, Ball, Config, Events, MatchState, Score, Side};
use hecs::World;

/// Check the ball against the court edges after it has moved.
///
/// Top and bottom edges bounce the ball. Left and right edges score a point
/// for the opposite player and put the ball back at center with the initial
/// velocity. Every condition is evaluated from the same post-motion center,
/// so a corner hit both bounces and scores.
pub fn check_boundaries(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let hit_wall = ball.top() <= 0 || ball.bottom() >= config.court_height;
        let exited_left = ball.left() <= 0;
        let exited_right = ball.right() >= config.court_width;

        // Bounce first so a reset below always wins
        if hit_wall {
            ball.reflect(Axis::Y);
            events.ball_hit_wall = true;
        }

        if exited_left {
            ball.reflect(Axis::X);
            award_point(ball, Side::Right, config, score, events);
        }

        if exited_right {
            ball.reflect(Axis::X);
            award_point(ball, Side::Left, config, score, events);
        }
    }
}

fn award_point(
    ball: &mut Ball,
    scorer: Side,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
) {
    score.increment(scorer);
    match scorer {
        Side::Left => events.left_scored = true,
        Side::Right => events.right_scored = true,
    }
    ball.reset(config.ball_spawn(), config.ball_velocity);
    log::debug!(
        "{:?} player scored, score is now {}-{}",
        scorer,
        score.left,
        score.right
    );
}

/// Evaluate the win condition. Once over, the state never returns to active.
pub fn check_win(score: &Score, config: &Config, state: MatchState) -> MatchState {
    match state {
        MatchState::Over => MatchState::Over,
        MatchState::Active => {
            if score.has_winner(config.win_score).is_some() {
                MatchState::Over
            } else {
                MatchState::Active
            }
        }
    }
}
