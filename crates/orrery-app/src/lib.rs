//! Application layer for the orrery.
//!
//! Assembles the ECS world, the frame schedules, and the collaborator
//! handles into one [`OrreryApp`] a host window layer can drive: feed it
//! pointer events and resizes, call [`OrreryApp::frame`] once per display
//! frame, and the simulation does the rest.

mod app;
mod fetch;
mod frame_loop;
mod render;

pub use app::OrreryApp;
pub use fetch::{FetchHandle, drain_fetch_outcomes, submit_initial_fetches};
pub use frame_loop::{FrameLoop, MAX_FRAME_TIME};
pub use render::{clear_pointer_transients, push_scene_state};
