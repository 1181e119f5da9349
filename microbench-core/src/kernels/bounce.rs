// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Bouncing balls in a box, counting wall reflections.

use super::random::Random;
use crate::error::KernelResult;
use crate::outcome::Outcome;
use crate::types::{RunPlan, WorkloadTag};
use crate::workload::Workload;

pub const TAG: &str = "bounce";

pub const BALL_COUNT: usize = 100;
pub const STEPS: usize = 50;

/// Bounce events over the whole run.
pub const EXPECTED: u64 = 1331;

const LIMIT: i32 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ball {
    x: i32,
    y: i32,
    x_vel: i32,
    y_vel: i32,
}

impl Ball {
    fn new(random: &mut Random) -> Self {
        // Each coordinate draws from the generator in this exact order.
        let x = (random.next_value() % 500) as i32;
        let y = (random.next_value() % 500) as i32;
        let x_vel = (random.next_value() % 300) as i32 - 150;
        let y_vel = (random.next_value() % 300) as i32 - 150;
        Self { x, y, x_vel, y_vel }
    }

    /// Move one step; returns whether any wall was hit.
    pub fn bounce(&mut self) -> bool {
        let mut bounced = false;

        self.x += self.x_vel;
        self.y += self.y_vel;

        if self.x > LIMIT {
            self.x = LIMIT;
            self.x_vel = -self.x_vel.abs();
            bounced = true;
        }
        if self.x < 0 {
            self.x = 0;
            self.x_vel = self.x_vel.abs();
            bounced = true;
        }
        if self.y > LIMIT {
            self.y = LIMIT;
            self.y_vel = -self.y_vel.abs();
            bounced = true;
        }
        if self.y < 0 {
            self.y = 0;
            self.y_vel = self.y_vel.abs();
            bounced = true;
        }

        bounced
    }

    fn in_bounds(&self) -> bool {
        (0..=LIMIT).contains(&self.x) && (0..=LIMIT).contains(&self.y)
    }
}

/// Simulate the fixed scene and count bounces.
pub fn simulate(balls: usize, steps: usize) -> u64 {
    let mut random = Random::new();
    let mut scene: Vec<Ball> = (0..balls).map(|_| Ball::new(&mut random)).collect();

    let mut bounces = 0;
    for _ in 0..steps {
        for ball in scene.iter_mut() {
            if ball.bounce() {
                bounces += 1;
            }
        }
    }
    debug_assert!(scene.iter().all(Ball::in_bounds));
    bounces
}

fn run() -> KernelResult<Outcome> {
    Ok(Outcome::Count(simulate(BALL_COUNT, STEPS)))
}

fn verify(outcome: &Outcome) -> bool {
    *outcome == Outcome::Count(EXPECTED)
}

pub fn workload() -> Workload {
    Workload::new(
        WorkloadTag::new_unchecked(TAG),
        "100 balls bouncing in a box for 50 steps",
        RunPlan::builtin(1, 4),
        run,
        verify,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wall_reflection() {
        let mut ball = Ball {
            x: 490,
            y: 10,
            x_vel: 20,
            y_vel: -20,
        };
        assert!(ball.bounce());
        assert_eq!(ball, Ball { x: 500, y: 0, x_vel: -20, y_vel: 20 });
        assert!(!ball.bounce());
        assert_eq!((ball.x, ball.y), (480, 20));
    }

    #[test]
    fn test_no_steps_no_bounces() {
        assert_eq!(simulate(BALL_COUNT, 0), 0);
    }

    #[test]
    fn test_bounce_count() {
        assert_eq!(run().unwrap(), Outcome::Count(EXPECTED));
    }
}
