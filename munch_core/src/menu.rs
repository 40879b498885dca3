//! Mobile menu state machine: `Closed` ⇄ `Open`.

/// Visibility of the mobile nav panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    /// Menu button pressed.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    /// A nav link was selected. Always ends closed.
    #[must_use]
    pub fn link_selected(self) -> Self {
        MenuState::Closed
    }

    /// Glyph for the menu button.
    pub fn glyph(self) -> &'static str {
        match self {
            MenuState::Closed => "☰",
            MenuState::Open => "✕",
        }
    }

    /// Value for the button's `aria-expanded` attribute.
    pub fn aria_expanded(self) -> &'static str {
        if self.is_open() { "true" } else { "false" }
    }
}

impl From<bool> for MenuState {
    fn from(open: bool) -> Self {
        if open { MenuState::Open } else { MenuState::Closed }
    }
}
