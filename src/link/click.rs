//! Click events and the interception check.

// ============================================================================
// Types
// ============================================================================

/// Mouse button that triggered a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MouseButton {
    /// Usually the left button.
    #[default]
    Primary,
    /// Usually the wheel button.
    Auxiliary,
    /// Usually the right button.
    Secondary,
    /// Any other button.
    Other(u8),
}

impl MouseButton {
    /// Maps a DOM `MouseEvent.button` code.
    #[inline]
    #[must_use]
    pub const fn from_code(code: u8) -> Self {
        match code {
            0 => Self::Primary,
            1 => Self::Auxiliary,
            2 => Self::Secondary,
            other => Self::Other(other),
        }
    }
}

/// The parts of a click event that decide whether the router handles it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClickEvent {
    /// Button pressed.
    pub button: MouseButton,
    /// Ctrl held.
    pub ctrl: bool,
    /// Meta (Cmd / Win) held.
    pub meta: bool,
    /// Shift held.
    pub shift: bool,
    /// Alt held.
    pub alt: bool,
    /// Another handler already called `preventDefault`.
    pub default_prevented: bool,
}

impl ClickEvent {
    /// A plain primary-button click.
    #[inline]
    #[must_use]
    pub fn primary() -> Self {
        Self::default()
    }

    /// Sets the button.
    #[inline]
    #[must_use]
    pub fn with_button(mut self, button: MouseButton) -> Self {
        self.button = button;
        self
    }

    /// Holds ctrl.
    #[inline]
    #[must_use]
    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    /// Holds meta.
    #[inline]
    #[must_use]
    pub fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }

    /// Holds shift.
    #[inline]
    #[must_use]
    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    /// Holds alt.
    #[inline]
    #[must_use]
    pub fn with_alt(mut self) -> Self {
        self.alt = true;
        self
    }

    /// Marks the event as already handled.
    #[inline]
    #[must_use]
    pub fn prevented(mut self) -> Self {
        self.default_prevented = true;
        self
    }

    /// Returns `true` if any modifier key is held.
    #[inline]
    #[must_use]
    pub const fn has_modifier(&self) -> bool {
        self.ctrl || self.meta || self.shift || self.alt
    }
}

// ============================================================================
// Interception
// ============================================================================

/// Returns `true` if the router should handle this click.
///
/// Only an unmodified primary click nobody has handled yet, on a link that
/// stays inside the application, is routed. Everything else is left to the
/// host (new browser window, context menu, download, external site).
#[must_use]
pub fn should_intercept(event: &ClickEvent, external: bool) -> bool {
    !external
        && !event.default_prevented
        && event.button == MouseButton::Primary
        && !event.has_modifier()
}

// ============================================================================
// Tests
// ============================================================================
