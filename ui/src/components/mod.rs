pub mod drawer;
pub mod faq;
pub mod floating;
pub mod footer;
pub mod loading_screen;
pub mod site_navbar;
pub mod tabs;
pub mod theme;

pub use faq::{FaqAccordion, FaqEntry};
pub use floating::{EmergencyFloat, WhatsAppLink};
pub use footer::SiteFooter;
pub use loading_screen::LoadingScreen;
pub use site_navbar::{register_nav, NavBuilder, NavLinkFn, SiteNavbar};
pub use tabs::{FeatureTab, FeatureTabs};
pub use theme::{Theme, ThemeToggle};
