// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The user-facing controls, independent of any markup.

/// A button or toggle offered by one of the widgets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Control {
    /// One zoom step in.
    ZoomIn,
    /// One zoom step out.
    ZoomOut,
    /// Back to unit scale, centered.
    ResetView,
    /// Show every node of the hierarchy.
    ExpandAll,
    /// Hide everything below the root.
    CollapseAll,
    /// Switch between light and dark presentation.
    ToggleTheme,
    /// Run the defang rules over the text tool's input.
    Defang,
    /// Run the undefang rules over the text tool's input.
    Undefang,
    /// Empty the text tool's buffers.
    Clear,
    /// Copy the text tool's output.
    CopyToClipboard,
}

impl Control {
    /// Every control, in presentation order.
    pub const ALL: [Self; 10] = [
        Self::ZoomIn,
        Self::ZoomOut,
        Self::ResetView,
        Self::ExpandAll,
        Self::CollapseAll,
        Self::ToggleTheme,
        Self::Defang,
        Self::Undefang,
        Self::Clear,
        Self::CopyToClipboard,
    ];

    /// Stable identifier, suitable as an element id.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::ZoomIn => "zoomIn",
            Self::ZoomOut => "zoomOut",
            Self::ResetView => "resetView",
            Self::ExpandAll => "expandAll",
            Self::CollapseAll => "collapseAll",
            Self::ToggleTheme => "darkModeToggle",
            Self::Defang => "defangBtn",
            Self::Undefang => "undefangBtn",
            Self::Clear => "clearBtn",
            Self::CopyToClipboard => "copyBtn",
        }
    }

    /// Returns `true` for controls that act on a pan/zoom viewport.
    #[must_use]
    pub fn is_view_control(self) -> bool {
        matches!(self, Self::ZoomIn | Self::ZoomOut | Self::ResetView)
    }
}

/// Light or dark presentation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    /// The default.
    #[default]
    Light,
    /// Dark mode.
    Dark,
}

impl Theme {
    /// The other theme.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Label for the toggle, naming the theme it switches to.
    #[must_use]
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => "Dark Mode",
            Self::Dark => "Light Mode",
        }
    }
}
