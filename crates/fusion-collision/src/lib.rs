//! Monte Carlo binary-collision nuclear fusion for PIC macro-particles.
//!
//! Given a candidate pair of macro-particles, decides stochastically whether
//! a fusion reaction occurs during one timestep and, if so, records the
//! outcome and the statistical weight of the fusion products. The event
//! model follows Higginson et al., J. Comput. Phys. 388, 439 (2019), with
//! the lab/center-of-mass density correction of Perez et al.,
//! Phys. Plasmas 19, 083104 (2012).
//!
//! Evaluation order for one pair: center-of-mass kinematics, reaction cross
//! section, variance-reduced probability, one uniform draw. Each evaluation
//! is pure apart from two scalar writes to caller-owned output slots, so
//! pair lists can be processed in parallel with no synchronization.

pub mod batch;
pub mod cross_section;
pub mod event;
pub mod kinematics;
pub mod probability;
pub mod reactivity;
