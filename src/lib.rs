//! Inline and fullscreen playback of one media asset through two independent
//! players, kept in sync by an explicit handoff.

pub mod core;
pub mod video;
