// Landing page sections
// Munch landing page, Leptos 0.8 Edition

mod about;
mod diagrams;
mod features;
mod hero;
mod nav;
mod page;
mod team;
mod video;

pub use about::About;
pub use diagrams::Diagrams;
pub use features::Features;
pub use hero::Hero;
pub use nav::Nav;
pub use page::LandingPage;
pub use team::Team;
pub use video::VideoDemos;
