//! Pure placement functions. Nothing here touches a scene; results are points and shifts.

pub mod arrange;
pub mod axes;
pub mod network;
pub mod radial;
