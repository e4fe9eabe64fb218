// Landing page sections, top to bottom.

mod about;
mod blog;
mod contact;
mod footer;
mod hero;
mod nav;
mod portfolio;
mod services;
mod testimonials;

pub use about::About;
pub use blog::Blog;
pub use contact::Contact;
pub use footer::Footer;
pub use hero::Hero;
pub use nav::Nav;
pub use portfolio::Portfolio;
pub use services::Services;
pub use testimonials::Testimonials;
