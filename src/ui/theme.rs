//! Theme system for the playlist analyzer
//! Supports both dark and light modes with a blue/purple accent palette

use iced::color;
use iced::font::Weight;
use iced::gradient::{self, Gradient};
use iced::widget::{button, container, scrollable, text_input};
use iced::{Background, Border, Color, Degrees, Shadow, Theme, Vector};

// ============================================================================
// Font Weights
// ============================================================================

/// Bold font weight (SF Pro looks better with Semibold on macOS)
#[cfg(target_os = "macos")]
pub const BOLD_WEIGHT: Weight = Weight::Semibold;

#[cfg(not(target_os = "macos"))]
pub const BOLD_WEIGHT: Weight = Weight::Bold;

/// Medium font weight
#[cfg(target_os = "macos")]
pub const MEDIUM_WEIGHT: Weight = Weight::Medium;

#[cfg(not(target_os = "macos"))]
pub const MEDIUM_WEIGHT: Weight = Weight::Normal;

// ============================================================================
// Color Palette - Dynamic based on theme
// ============================================================================

/// Check if theme is dark mode
pub fn is_dark(theme: &Theme) -> bool {
    theme.extended_palette().is_dark
}

// Dark mode colors
mod dark {
    use super::*;
    pub const BACKGROUND_TOP: Color = color!(0x111827);
    pub const BACKGROUND_BOTTOM: Color = color!(0x1f2937);
    pub const SURFACE: Color = Color::from_rgba(1.0, 1.0, 1.0, 0.1);
    pub const ROW: Color = color!(0x1f2937);
    pub const ROW_HOVER: Color = color!(0x374151);
    pub const BORDER: Color = color!(0x374151);
    pub const INPUT_BORDER: Color = color!(0x4b5563);
    pub const TEXT_MUTED: Color = color!(0x9ca3af);
    pub const TEXT_SECONDARY: Color = color!(0xd1d5db);
    pub const TEXT_PRIMARY: Color = color!(0xffffff);
}

// Light mode colors
mod light {
    use super::*;
    pub const BACKGROUND_TOP: Color = color!(0xf3f4f6);
    pub const BACKGROUND_BOTTOM: Color = color!(0xe5e7eb);
    pub const SURFACE: Color = Color::from_rgba(1.0, 1.0, 1.0, 0.8);
    pub const ROW: Color = color!(0xf9fafb);
    pub const ROW_HOVER: Color = color!(0xe5e7eb);
    pub const BORDER: Color = color!(0xd1d5db);
    pub const INPUT_BORDER: Color = color!(0x9ca3af);
    pub const TEXT_MUTED: Color = color!(0x6b7280);
    pub const TEXT_SECONDARY: Color = color!(0x374151);
    pub const TEXT_PRIMARY: Color = color!(0x111827);
}

/// Card surface color based on theme
pub fn surface(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::SURFACE
    } else {
        light::SURFACE
    }
}

/// List row background
pub fn row_bg(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::ROW
    } else {
        light::ROW
    }
}

/// List row background under the cursor
pub fn surface_hover(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::ROW_HOVER
    } else {
        light::ROW_HOVER
    }
}

/// Get border color based on theme
pub fn border_color(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BORDER
    } else {
        light::BORDER
    }
}

/// Get muted text color based on theme
pub fn text_muted(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_MUTED
    } else {
        light::TEXT_MUTED
    }
}

/// Get secondary text color based on theme
pub fn text_secondary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_SECONDARY
    } else {
        light::TEXT_SECONDARY
    }
}

/// Get primary text color based on theme
pub fn text_primary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_PRIMARY
    } else {
        light::TEXT_PRIMARY
    }
}

/// Accent for ranks and view counts
pub const ACCENT: Color = color!(0x60a5fa);

/// Solid button accent
pub const ACCENT_STRONG: Color = color!(0x3b82f6);

/// Hover state for solid accent
pub const ACCENT_HOVER: Color = color!(0x2563eb);

/// Purple end of the accent gradients
pub const ACCENT_PURPLE: Color = color!(0x9333ea);

/// Hover state for the purple end
pub const ACCENT_PURPLE_HOVER: Color = color!(0x7e22ce);

/// Header title gradient colors
pub const TITLE_BLUE: Color = color!(0x60a5fa);
pub const TITLE_PURPLE: Color = color!(0xa855f7);

/// Chart series color
pub const CHART_LINE: Color = color!(0x8884d8);

/// Chart grid color
pub const CHART_GRID: Color = color!(0x555555);

/// Chart tooltip background
pub const CHART_TOOLTIP: Color = color!(0x1f2937);

/// Disabled text color (for inactive buttons)
pub const TEXT_DISABLED: Color = Color::from_rgba(1.0, 1.0, 1.0, 0.6);

/// Elevated surface (toasts)
pub fn surface_elevated(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgb(0.12, 0.12, 0.14)
    } else {
        Color::from_rgb(0.96, 0.96, 0.98)
    }
}

/// Danger color
pub fn danger(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgb(0.9, 0.3, 0.3)
    } else {
        Color::from_rgb(0.8, 0.2, 0.2)
    }
}

/// Shadow color for panels
pub fn shadow_color(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgba(0.0, 0.0, 0.0, 0.5)
    } else {
        Color::from_rgba(0.0, 0.0, 0.0, 0.15)
    }
}

/// Placeholder background (for missing thumbnails)
pub fn placeholder_bg(theme: &Theme) -> Color {
    if is_dark(theme) {
        color!(0x374151)
    } else {
        Color::from_rgb(0.9, 0.9, 0.9)
    }
}

/// Left-to-right two stop gradient
pub fn horizontal_gradient(from: Color, to: Color) -> Background {
    Background::Gradient(Gradient::Linear(
        gradient::Linear::new(Degrees(90.0))
            .add_stop(0.0, from)
            .add_stop(1.0, to),
    ))
}

// ============================================================================
// Container Styles
// ============================================================================

/// Window background, dark gray fading downward
pub fn page(theme: &Theme) -> container::Style {
    let (top, bottom) = if is_dark(theme) {
        (dark::BACKGROUND_TOP, dark::BACKGROUND_BOTTOM)
    } else {
        (light::BACKGROUND_TOP, light::BACKGROUND_BOTTOM)
    };
    container::Style {
        background: Some(Background::Gradient(Gradient::Linear(
            gradient::Linear::new(Degrees(180.0))
                .add_stop(0.0, top)
                .add_stop(1.0, bottom),
        ))),
        text_color: Some(text_primary(theme)),
        ..Default::default()
    }
}

/// Translucent rounded card
pub fn card(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(surface(theme))),
        text_color: Some(text_primary(theme)),
        border: Border {
            radius: 12.0.into(),
            width: 1.0,
            color: border_color(theme),
        },
        shadow: Shadow {
            color: shadow_color(theme),
            offset: Vector::new(0.0, 12.0),
            blur_radius: 32.0,
        },
        ..Default::default()
    }
}

/// Gradient strip at the top of a card
pub fn card_header(from: Color, to: Color) -> container::Style {
    container::Style {
        background: Some(horizontal_gradient(from, to)),
        text_color: Some(Color::WHITE),
        border: Border {
            radius: iced::border::Radius {
                top_left: 12.0,
                top_right: 12.0,
                bottom_right: 0.0,
                bottom_left: 0.0,
            },
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Fallback thumbnail tile
pub fn placeholder_tile(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(placeholder_bg(theme))),
        border: Border {
            radius: 6.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

// ============================================================================
// Button Styles
// ============================================================================

/// Full-width gradient submit button
pub fn gradient_button(_theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(horizontal_gradient(ACCENT_STRONG, ACCENT_PURPLE)),
        text_color: Color::WHITE,
        border: Border {
            radius: 8.0.into(),
            ..Default::default()
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(horizontal_gradient(ACCENT_HOVER, ACCENT_PURPLE_HOVER)),
            shadow: Shadow {
                color: Color::from_rgba(0.35, 0.3, 0.9, 0.35),
                offset: Vector::new(0.0, 4.0),
                blur_radius: 16.0,
            },
            ..base
        },
        button::Status::Disabled => button::Style {
            background: Some(horizontal_gradient(
                Color {
                    a: 0.5,
                    ..ACCENT_STRONG
                },
                Color {
                    a: 0.5,
                    ..ACCENT_PURPLE
                },
            )),
            text_color: TEXT_DISABLED,
            ..base
        },
        _ => base,
    }
}

/// Primary button style
pub fn primary_button(_theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(ACCENT_STRONG)),
        text_color: Color::WHITE,
        border: Border {
            radius: 8.0.into(),
            ..Default::default()
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(Background::Color(ACCENT_HOVER)),
            ..base
        },
        _ => base,
    }
}

// ============================================================================
// Input Styles
// ============================================================================

/// URL input: dark field with a blue focus ring
pub fn url_input(theme: &Theme, status: text_input::Status) -> text_input::Style {
    let (background, border) = if is_dark(theme) {
        (dark::ROW, dark::INPUT_BORDER)
    } else {
        (Color::WHITE, light::INPUT_BORDER)
    };

    let border = match status {
        text_input::Status::Focused { .. } => Border {
            radius: 8.0.into(),
            width: 2.0,
            color: ACCENT_STRONG,
        },
        text_input::Status::Hovered => Border {
            radius: 8.0.into(),
            width: 1.0,
            color: text_muted(theme),
        },
        _ => Border {
            radius: 8.0.into(),
            width: 1.0,
            color: border,
        },
    };

    text_input::Style {
        background: Background::Color(background),
        border,
        icon: text_muted(theme),
        placeholder: text_muted(theme),
        value: text_primary(theme),
        selection: Color {
            a: 0.4,
            ..ACCENT_STRONG
        },
    }
}

// ============================================================================
// Scrollable Styles
// ============================================================================

/// Scrollbar style for the page and the video list
pub fn dark_scrollable(theme: &Theme, _status: scrollable::Status) -> scrollable::Style {
    let scrollbar = scrollable::Rail {
        background: Some(Background::Color(Color::TRANSPARENT)),
        border: Border::default(),
        scroller: scrollable::Scroller {
            background: Background::Color(border_color(theme)),
            border: Border {
                radius: 4.0.into(),
                ..Default::default()
            },
        },
    };

    scrollable::Style {
        container: container::Style::default(),
        vertical_rail: scrollbar.clone(),
        horizontal_rail: scrollbar,
        gap: None,
        auto_scroll: scrollable::AutoScroll {
            background: Background::Color(row_bg(theme)),
            border: Border::default(),
            shadow: Shadow::default(),
            icon: text_muted(theme),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dark_detection() {
        assert!(is_dark(&Theme::Dark));
        assert!(!is_dark(&Theme::Light));
    }

    #[test]
    fn test_text_contrast_follows_theme() {
        assert_eq!(text_primary(&Theme::Dark), Color::WHITE);
        assert_ne!(text_primary(&Theme::Light), Color::WHITE);
    }
}
