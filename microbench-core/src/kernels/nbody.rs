// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Five-body solar system simulation.
//!
//! The golden energy is an exact `f64` literal. Pair iteration order
//! (i ascending, then j > i ascending) and the grouping of every expression
//! below determine the low bits of the result, so none of it may be
//! reordered, fused, or rewritten for precision.

use std::f64::consts::PI;

use crate::error::KernelResult;
use crate::outcome::Outcome;
use crate::types::{RunPlan, WorkloadTag};
use crate::workload::Workload;

pub const TAG: &str = "nbody";

pub const SOLAR_MASS: f64 = 4.0 * PI * PI;
pub const DAYS_PER_YEAR: f64 = 365.24;

/// Number of bodies in the model.
pub const BODY_COUNT: usize = 5;

/// Steps advanced per kernel run.
pub const ADVANCE_STEPS: usize = 250_000;

/// Time step per advance.
pub const TIME_STEP: f64 = 0.01;

/// System energy right after setup, before any advance.
pub const INITIAL_ENERGY: f64 = -0.16907516382852447;

/// System energy after [`ADVANCE_STEPS`] steps of [`TIME_STEP`].
pub const EXPECTED_ENERGY: f64 = -0.1690859889909308;

/// A point mass with position and velocity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub vx: f64,
    pub vy: f64,
    pub vz: f64,
    pub mass: f64,
}

impl Body {
    /// Build a body from velocities in AU/day and mass in solar masses.
    fn scaled(x: f64, y: f64, z: f64, vx: f64, vy: f64, vz: f64, mass: f64) -> Self {
        Self {
            x,
            y,
            z,
            vx: vx * DAYS_PER_YEAR,
            vy: vy * DAYS_PER_YEAR,
            vz: vz * DAYS_PER_YEAR,
            mass: mass * SOLAR_MASS,
        }
    }

    fn sun() -> Self {
        Self::scaled(0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0)
    }

    fn jupiter() -> Self {
        Self::scaled(
            4.84143144246472090e00,
            -1.16032004402742839e00,
            -1.03622044471123109e-01,
            1.66007664274403694e-03,
            7.69901118419740425e-03,
            -6.90460016972063023e-05,
            9.54791938424326609e-04,
        )
    }

    fn saturn() -> Self {
        Self::scaled(
            8.34336671824457987e00,
            4.12479856412430479e00,
            -4.03523417114321381e-01,
            -2.76742510726862411e-03,
            4.99852801234917238e-03,
            2.30417297573763929e-05,
            2.85885980666130812e-04,
        )
    }

    fn uranus() -> Self {
        Self::scaled(
            1.28943695621391310e01,
            -1.51111514016986312e01,
            -2.23307578892655734e-01,
            2.96460137564761618e-03,
            2.37847173959480950e-03,
            -2.96589568540237556e-05,
            4.36624404335156298e-05,
        )
    }

    fn neptune() -> Self {
        Self::scaled(
            1.53796971148509165e01,
            -2.59193146099879641e01,
            1.79258772950371181e-01,
            2.68067772490389322e-03,
            1.62824170038242295e-03,
            -9.51592254519715870e-05,
            5.15138902046611451e-05,
        )
    }
}

/// Sun plus four outer planets, with the sun's velocity set so the total
/// momentum of the system is zero.
pub fn solar_system() -> [Body; BODY_COUNT] {
    let mut bodies = [
        Body::sun(),
        Body::jupiter(),
        Body::saturn(),
        Body::uranus(),
        Body::neptune(),
    ];

    let (mut px, mut py, mut pz) = (0.0, 0.0, 0.0);
    for body in &bodies {
        px += body.vx * body.mass;
        py += body.vy * body.mass;
        pz += body.vz * body.mass;
    }

    bodies[0].vx = -(px / SOLAR_MASS);
    bodies[0].vy = -(py / SOLAR_MASS);
    bodies[0].vz = -(pz / SOLAR_MASS);
    bodies
}

/// Advance the system by one time step.
pub fn advance(bodies: &mut [Body; BODY_COUNT], dt: f64) {
    for i in 0..BODY_COUNT {
        let (head, tail) = bodies.split_at_mut(i + 1);
        let bi = &mut head[i];

        for bj in tail.iter_mut() {
            let dx = bi.x - bj.x;
            let dy = bi.y - bj.y;
            let dz = bi.z - bj.z;

            let d_squared = dx * dx + dy * dy + dz * dz;
            let distance = d_squared.sqrt();
            let mag = dt / (d_squared * distance);

            bi.vx -= dx * bj.mass * mag;
            bi.vy -= dy * bj.mass * mag;
            bi.vz -= dz * bj.mass * mag;

            bj.vx += dx * bi.mass * mag;
            bj.vy += dy * bi.mass * mag;
            bj.vz += dz * bi.mass * mag;
        }
    }

    for body in bodies.iter_mut() {
        body.x += dt * body.vx;
        body.y += dt * body.vy;
        body.z += dt * body.vz;
    }
}

/// Kinetic minus potential energy of the system.
pub fn energy(bodies: &[Body; BODY_COUNT]) -> f64 {
    let mut e = 0.0;

    for (i, bi) in bodies.iter().enumerate() {
        e += 0.5 * bi.mass * (bi.vx * bi.vx + bi.vy * bi.vy + bi.vz * bi.vz);

        for bj in &bodies[i + 1..] {
            let dx = bi.x - bj.x;
            let dy = bi.y - bj.y;
            let dz = bi.z - bj.z;

            let distance = (dx * dx + dy * dy + dz * dz).sqrt();
            e -= (bi.mass * bj.mass) / distance;
        }
    }

    e
}

/// Set up a fresh system, advance it `steps` times, and return its energy.
pub fn simulate(steps: usize) -> f64 {
    let mut bodies = solar_system();
    for _ in 0..steps {
        advance(&mut bodies, TIME_STEP);
    }
    energy(&bodies)
}

fn run() -> KernelResult<Outcome> {
    Ok(Outcome::Scalar(simulate(ADVANCE_STEPS)))
}

fn verify(outcome: &Outcome) -> bool {
    // Bit-exact on purpose.
    matches!(outcome, Outcome::Scalar(e) if e.to_bits() == EXPECTED_ENERGY.to_bits())
}

pub fn workload() -> Workload {
    Workload::new(
        WorkloadTag::new_unchecked(TAG),
        "250k leapfrog steps of a five-body solar system",
        RunPlan::builtin(0, 2),
        run,
        verify,
    )
}
