//! Page components, one file per section of the layout.

pub mod about;
pub mod contact;
pub mod footer;
pub mod header;
pub mod hero;
pub mod particles_layer;
pub mod profiles;
pub mod projects;
pub mod skills;
