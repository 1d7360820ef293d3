//! Page components.

pub mod background;
pub mod countdown;
pub mod email;
pub mod social;
pub mod toast;
