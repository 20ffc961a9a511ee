/*
 *  menu/state.rs
 *
 *  Lightpainter - paint with light
 *  (c) 2020-26 Stuart Hunter
 *
 *  Menu screens and the transitions between them
 *
 *  This program is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  This program is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  See <http://www.gnu.org/licenses/> to get a copy of the GNU General
 *  Public License.
 *
 */

use crate::input::InputEvent;
use crate::menu::settings::SettingKind;

/// The two choices under the title
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartChoice {
    Start,
    Menu,
}

impl StartChoice {
    pub const COUNT: usize = 2;

    pub fn index(self) -> usize {
        match self {
            StartChoice::Start => 0,
            StartChoice::Menu => 1,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            StartChoice::Start => StartChoice::Menu,
            StartChoice::Menu => StartChoice::Start,
        }
    }
}

/// Pages of the main menu, left to right
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainOption {
    SelectFile,
    Brightness,
    Speed,
    Delay,
    SaveSettings,
}

impl MainOption {
    pub const COUNT: usize = 5;

    pub const ALL: [MainOption; Self::COUNT] = [
        MainOption::SelectFile,
        MainOption::Brightness,
        MainOption::Speed,
        MainOption::Delay,
        MainOption::SaveSettings,
    ];

    pub fn index(self) -> usize {
        match self {
            MainOption::SelectFile => 0,
            MainOption::Brightness => 1,
            MainOption::Speed => 2,
            MainOption::Delay => 3,
            MainOption::SaveSettings => 4,
        }
    }

    /// Out-of-range indices land on the nearest end
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index.min(Self::COUNT - 1)]
    }

    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    pub fn previous(self) -> Self {
        Self::from_index(self.index().saturating_sub(1))
    }

    pub fn label(self) -> &'static str {
        match self {
            MainOption::SelectFile => "Select file",
            MainOption::SaveSettings => "Save settings",
            other => other.setting().map(SettingKind::label).unwrap_or_default(),
        }
    }

    pub fn setting(self) -> Option<SettingKind> {
        match self {
            MainOption::Brightness => Some(SettingKind::Brightness),
            MainOption::Speed => Some(SettingKind::Speed),
            MainOption::Delay => Some(SettingKind::Delay),
            _ => None,
        }
    }

    pub fn for_setting(kind: SettingKind) -> Self {
        match kind {
            SettingKind::Brightness => MainOption::Brightness,
            SettingKind::Speed => MainOption::Speed,
            SettingKind::Delay => MainOption::Delay,
        }
    }
}

/// One full-canvas layout, carrying exactly the selection it needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuScreen {
    Title,
    StartMenu { choice: StartChoice },
    MainMenu { option: MainOption },
    SelectFile { cursor: usize },
    AdjustValue { setting: SettingKind },
    SaveConfirm,
}

/// Work the menu asks its owner to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEffect {
    /// Run the LED stick with the given image
    StartPainting { image: usize },
    /// Make this catalog entry the active image
    ChooseImage(usize),
    /// Change a setting by `delta`
    AdjustSetting { setting: SettingKind, delta: i16 },
    /// Persist the current settings
    SaveSettings,
}

/// Outcome of one input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub screen: MenuScreen,
    pub effect: Option<MenuEffect>,
}

impl Transition {
    fn to(screen: MenuScreen) -> Self {
        Self { screen, effect: None }
    }

    fn with(screen: MenuScreen, effect: MenuEffect) -> Self {
        Self { screen, effect: Some(effect) }
    }
}

impl MenuScreen {
    pub fn name(&self) -> &'static str {
        match self {
            MenuScreen::Title => "title",
            MenuScreen::StartMenu { .. } => "start",
            MenuScreen::MainMenu { .. } => "main",
            MenuScreen::SelectFile { .. } => "select_file",
            MenuScreen::AdjustValue { .. } => "adjust",
            MenuScreen::SaveConfirm => "saved",
        }
    }

    /// Highlighted option index within this screen
    pub fn selection(&self) -> usize {
        match *self {
            MenuScreen::Title | MenuScreen::SaveConfirm => 0,
            MenuScreen::StartMenu { choice } => choice.index(),
            MenuScreen::MainMenu { option } => option.index(),
            MenuScreen::SelectFile { cursor } => cursor,
            MenuScreen::AdjustValue { setting } => {
                SettingKind::ALL.iter().position(|k| *k == setting).unwrap_or(0)
            }
        }
    }

    /// Number of valid selections; an empty file list still has slot 0
    pub fn option_count(&self, catalog_len: usize) -> usize {
        match self {
            MenuScreen::Title | MenuScreen::SaveConfirm => 1,
            MenuScreen::StartMenu { .. } => StartChoice::COUNT,
            MenuScreen::MainMenu { .. } => MainOption::COUNT,
            MenuScreen::SelectFile { .. } => catalog_len.max(1),
            MenuScreen::AdjustValue { .. } => SettingKind::ALL.len(),
        }
    }

    /// Pull a file cursor back inside a catalog of `catalog_len`
    pub fn clamped(self, catalog_len: usize) -> Self {
        match self {
            MenuScreen::SelectFile { cursor } => MenuScreen::SelectFile {
                cursor: cursor.min(catalog_len.saturating_sub(1)),
            },
            other => other,
        }
    }

    /// Next screen for `event`.
    ///
    /// `current_image` is where the file list opens; the returned
    /// selection is always inside the new screen's range.
    pub fn apply(self, event: InputEvent, catalog_len: usize, current_image: usize) -> Transition {
        use InputEvent::*;

        let transition = match self {
            MenuScreen::Title => match event {
                Select | Next => Transition::to(MenuScreen::StartMenu { choice: StartChoice::Start }),
                _ => Transition::to(self),
            },

            MenuScreen::StartMenu { choice } => match event {
                Next | Previous | Adjust(_) => {
                    Transition::to(MenuScreen::StartMenu { choice: choice.toggled() })
                }
                Select => match choice {
                    StartChoice::Start if catalog_len > 0 => Transition::with(
                        self,
                        MenuEffect::StartPainting { image: current_image.min(catalog_len - 1) },
                    ),
                    StartChoice::Start => Transition::to(self),
                    StartChoice::Menu => {
                        Transition::to(MenuScreen::MainMenu { option: MainOption::SelectFile })
                    }
                },
                Back => Transition::to(MenuScreen::Title),
            },

            MenuScreen::MainMenu { option } => match event {
                Next => Transition::to(MenuScreen::MainMenu { option: option.next() }),
                Previous => Transition::to(MenuScreen::MainMenu { option: option.previous() }),
                Adjust(d) if d > 0 => Transition::to(MenuScreen::MainMenu { option: option.next() }),
                Adjust(d) if d < 0 => Transition::to(MenuScreen::MainMenu { option: option.previous() }),
                Adjust(_) => Transition::to(self),
                Select => match option {
                    MainOption::SelectFile => Transition::to(MenuScreen::SelectFile {
                        cursor: current_image.min(catalog_len.saturating_sub(1)),
                    }),
                    MainOption::SaveSettings => {
                        Transition::with(MenuScreen::SaveConfirm, MenuEffect::SaveSettings)
                    }
                    adjustable => match adjustable.setting() {
                        Some(setting) => Transition::to(MenuScreen::AdjustValue { setting }),
                        None => Transition::to(self),
                    },
                },
                Back => Transition::to(MenuScreen::StartMenu { choice: StartChoice::Menu }),
            },

            MenuScreen::SelectFile { cursor } => {
                let back = MenuScreen::MainMenu { option: MainOption::SelectFile };
                let last = catalog_len.saturating_sub(1);
                match event {
                    Next => Transition::to(MenuScreen::SelectFile { cursor: (cursor + 1).min(last) }),
                    Previous => Transition::to(MenuScreen::SelectFile { cursor: cursor.saturating_sub(1) }),
                    Adjust(d) => {
                        let moved = if d >= 0 {
                            cursor.saturating_add(d as usize)
                        } else {
                            cursor.saturating_sub(d.unsigned_abs() as usize)
                        };
                        Transition::to(MenuScreen::SelectFile { cursor: moved.min(last) })
                    }
                    Select if catalog_len > 0 => {
                        Transition::with(back, MenuEffect::ChooseImage(cursor.min(last)))
                    }
                    Select | Back => Transition::to(back),
                }
            }

            MenuScreen::AdjustValue { setting } => match event {
                Next => Transition::with(self, MenuEffect::AdjustSetting { setting, delta: 1 }),
                Previous => Transition::with(self, MenuEffect::AdjustSetting { setting, delta: -1 }),
                Adjust(0) => Transition::to(self),
                Adjust(delta) => Transition::with(self, MenuEffect::AdjustSetting { setting, delta }),
                Select => Transition::with(MenuScreen::SaveConfirm, MenuEffect::SaveSettings),
                Back => Transition::to(MenuScreen::MainMenu { option: MainOption::for_setting(setting) }),
            },

            MenuScreen::SaveConfirm => {
                Transition::to(MenuScreen::MainMenu { option: MainOption::SaveSettings })
            }
        };

        Transition { screen: transition.screen.clamped(catalog_len), ..transition }
    }
}
