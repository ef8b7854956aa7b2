//! Camera targeting: the Idle / MovingToTarget / MovingToRest cycle that
//! flies the camera to a selected body and back out to the rest pose.

mod targeting;

pub use targeting::{CameraTuning, camera_targeting_system, dismiss_system};
