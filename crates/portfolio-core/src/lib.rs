pub mod camera;
pub mod clipboard;
pub mod config;
pub mod constants;
pub mod contact;
pub mod delivery;
pub mod grid;
pub mod hero;
pub mod layout;
pub mod particles;
pub mod props;
pub mod scene;
pub mod timer;

pub use camera::*;
pub use clipboard::*;
pub use config::*;
pub use contact::*;
pub use delivery::*;
pub use grid::*;
pub use hero::*;
pub use layout::*;
pub use particles::*;
pub use props::*;
pub use scene::*;
pub use timer::*;
