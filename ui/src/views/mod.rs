mod about;
mod capabilities;
mod contact;
mod home;
mod services;

pub use about::About;
pub use capabilities::Capabilities;
pub use contact::Contact;
pub use home::Home;
pub use services::Services;
