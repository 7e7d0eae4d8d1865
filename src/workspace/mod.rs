pub mod albums;
mod home;

pub use home::Home;
