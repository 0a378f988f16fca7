use std::io::IsTerminal;

use clap::{
  ValueEnum,
  builder::styling::{Color as ClapColor, RgbColor, Style, Styles},
};
use crossterm::style::Color;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorMode {
  Always,
  Auto,
  Never,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ThemeMode {
  Dark,
  Light,
  Auto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
  Dark,
  Light,
}

/// What a piece of synthesize output means. Each role has one color per theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
  Timestamp,
  Progress,
  StatLabel,
  /// Attribute and member counts.
  Count,
  /// A request that failed and was left out of the output.
  Skipped,
  /// A request that produced no members.
  Empty,
  Done,
}

impl Role {
  const fn rgb(self, theme: Theme) -> (u8, u8, u8) {
    match (self, theme) {
      (Self::Timestamp, Theme::Dark) => (118, 166, 166),
      (Self::Timestamp, Theme::Light) => (92, 62, 38),
      (Self::Progress, Theme::Dark) => (191, 126, 4),
      (Self::Progress, Theme::Light) => (70, 42, 25),
      (Self::StatLabel, Theme::Dark) => (217, 164, 4),
      (Self::StatLabel, Theme::Light) => (176, 103, 66),
      (Self::Count, Theme::Dark) => (242, 211, 56),
      (Self::Count, Theme::Light) => (199, 146, 76),
      (Self::Skipped, Theme::Dark) => (214, 92, 70),
      (Self::Skipped, Theme::Light) => (178, 34, 34),
      (Self::Empty, Theme::Dark) => (160, 160, 160),
      (Self::Empty, Theme::Light) => (110, 110, 110),
      (Self::Done, Theme::Dark) => (126, 200, 120),
      (Self::Done, Theme::Light) => (34, 142, 90),
    }
  }
}

#[derive(Debug, Clone, Copy)]
pub struct Colors {
  enabled: bool,
  theme: Theme,
}

impl Colors {
  pub const fn new(enabled: bool, theme: Theme) -> Self {
    Self { enabled, theme }
  }

  /// Colors for stderr, following `--color` and `--theme`.
  pub fn detect(mode: ColorMode, theme: ThemeMode) -> Self {
    let enabled = match mode {
      ColorMode::Always => true,
      ColorMode::Never => false,
      ColorMode::Auto => std::io::stderr().is_terminal(),
    };
    let theme = match theme {
      ThemeMode::Dark => Theme::Dark,
      ThemeMode::Light => Theme::Light,
      ThemeMode::Auto => std::env::var("COLORFGBG")
        .ok()
        .and_then(|value| theme_from_colorfgbg(&value))
        .unwrap_or(Theme::Dark),
    };
    Self::new(enabled, theme)
  }

  pub const fn enabled(&self) -> bool {
    self.enabled
  }

  pub const fn role(&self, role: Role) -> Color {
    if !self.enabled {
      return Color::Reset;
    }
    let (r, g, b) = role.rgb(self.theme);
    Color::Rgb { r, g, b }
  }

  pub const fn clap_styles() -> Styles {
    const fn fg(role: Role) -> Option<ClapColor> {
      let (r, g, b) = role.rgb(Theme::Dark);
      Some(ClapColor::Rgb(RgbColor(r, g, b)))
    }

    Styles::styled()
      .header(Style::new().bold().underline().fg_color(fg(Role::StatLabel)))
      .usage(Style::new().bold().fg_color(fg(Role::StatLabel)))
      .literal(Style::new().fg_color(fg(Role::Done)))
      .error(Style::new().bold().fg_color(fg(Role::Skipped)))
      .valid(Style::new().fg_color(fg(Role::Done)))
      .invalid(Style::new().bold().fg_color(fg(Role::Skipped)))
  }
}

/// `COLORFGBG` is `fg;bg` (sometimes `fg;default;bg`); a background index of 8 or more is light.
fn theme_from_colorfgbg(value: &str) -> Option<Theme> {
  let background = value.split(';').next_back()?.parse::<u8>().ok()?;
  Some(if background >= 8 { Theme::Light } else { Theme::Dark })
}
