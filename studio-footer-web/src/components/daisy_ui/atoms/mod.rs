pub mod button;
pub mod icon;
pub mod image;
pub mod link;

pub use button::{Button, ButtonProps};
pub use icon::{Icon, IconKind, IconProps};
pub use image::{Image, ImageProps};
pub use link::{Link, LinkProps};
