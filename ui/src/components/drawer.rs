//! Mobile navigation drawer state machine.

use crate::core::config::DRAWER_BREAKPOINT_PX;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawerEvent {
    /// Hamburger button.
    Toggle,
    BackdropClick,
    Escape,
    /// A navigation link was followed.
    LinkClick { viewport_width: f64 },
    Resize { viewport_width: f64 },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrawerState {
    pub open: bool,
}

impl DrawerState {
    pub const CLOSED: Self = Self { open: false };
    pub const OPEN: Self = Self { open: true };

    pub fn apply(self, event: DrawerEvent) -> Self {
        match event {
            DrawerEvent::Toggle => Self { open: !self.open },
            DrawerEvent::BackdropClick | DrawerEvent::Escape => Self::CLOSED,
            DrawerEvent::LinkClick { viewport_width } if is_mobile_width(viewport_width) => {
                Self::CLOSED
            }
            DrawerEvent::Resize { viewport_width } if !is_mobile_width(viewport_width) => {
                Self::CLOSED
            }
            DrawerEvent::LinkClick { .. } | DrawerEvent::Resize { .. } => self,
        }
    }

    pub fn aria_expanded(self) -> &'static str {
        if self.open {
            "true"
        } else {
            "false"
        }
    }

    /// `active` on the link list, hamburger and backdrop while open.
    pub fn active_class(self) -> &'static str {
        if self.open {
            "active"
        } else {
            ""
        }
    }

    /// Background scrolling is suspended while the drawer is open.
    pub fn locks_scroll(self) -> bool {
        self.open
    }
}

pub fn is_mobile_width(viewport_width: f64) -> bool {
    viewport_width <= DRAWER_BREAKPOINT_PX
}
