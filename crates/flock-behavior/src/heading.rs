//! Forward alignment: the heading trails the velocity and is occasionally
//! "shaken" toward a random offset so the flock does not look rigid.

use flock_agent::{Agent, ShakeState};
use flock_core::{AgentRng, Vec2};

use crate::BehaviorParams;

/// Advance the heading state machine by `dt`.
///
/// - **Settled**: tick the shake timer and blend toward the velocity at
///   `forward_speed`.  Once the timer has run out, pick a shake target,
///   switch to `Shaking`, and re-seed the timer.
/// - **Shaking**: blend toward `velocity + target` at `shake_speed` and
///   settle when the heading is within `convergence_threshold` of that
///   direction.
pub fn forward_alignment(agent: &mut Agent, params: &BehaviorParams, dt: f32, rng: &mut AgentRng) {
    if agent.shake.is_settled() {
        agent.shake_timer.advance(dt);
        let blended = agent.forward().lerp(agent.velocity, params.forward_speed * dt);
        agent.set_forward(blended);
    }

    match agent.shake {
        ShakeState::Shaking { target } => {
            let aim = agent.velocity + target;
            let blended = agent.forward().lerp(aim, params.shake_speed * dt);
            agent.set_forward(blended);

            if aim == Vec2::ZERO {
                // No direction to converge on.
                agent.shake = ShakeState::Settled;
            } else if Vec2::from_angle(aim.angle()).distance(agent.forward())
                <= params.convergence_threshold
            {
                agent.shake = ShakeState::Settled;
            }
        }
        ShakeState::Settled if agent.shake_timer.is_elapsed() => {
            agent.shake = ShakeState::Shaking { target: shake_target(agent.velocity, params, rng) };
            agent.shake_timer.set(params.shake_reseed.sample(rng));
        }
        ShakeState::Settled => {}
    }
}

/// Random heading offset.  Both axes draw a magnitude from
/// `shake_magnitude` and a random sign, except that `y` is zero while the
/// agent drifts vertically.
pub fn shake_target(velocity: Vec2, params: &BehaviorParams, rng: &mut AgentRng) -> Vec2 {
    let x = params.shake_magnitude.sample(rng);
    let y = params.shake_magnitude.sample(rng);
    let x = x * rng.sign();
    let y = if velocity.y == 0.0 { y * rng.sign() } else { 0.0 };
    Vec2::new(x, y)
}
