/*
 *  menu/settings.rs
 *
 *  Lightpainter - paint with light
 *  (c) 2020-26 Stuart Hunter
 *
 *  Adjustable device settings and their display scaling
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

use arrayvec::ArrayString;
use core::fmt::Write;
use serde::{Deserialize, Serialize};

/// Longest bar the adjust screen draws, for a value of 255
pub const BAR_MAX: u32 = 120;

/// The three tunable parameters of the LED stick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SettingKind {
    Brightness,
    Speed,
    Delay,
}

impl SettingKind {
    pub const ALL: [SettingKind; 3] = [SettingKind::Brightness, SettingKind::Speed, SettingKind::Delay];

    pub fn label(self) -> &'static str {
        match self {
            SettingKind::Brightness => "Brightness",
            SettingKind::Speed => "Speed",
            SettingKind::Delay => "Delay",
        }
    }
}

/// Read access to the setting store
pub trait SettingSource {
    fn get(&self, kind: SettingKind) -> u8;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub brightness: u8,
    pub speed: u8,
    pub delay: u8,
}

impl Default for Settings {
    fn default() -> Self {
        Self { brightness: 64, speed: 128, delay: 32 }
    }
}

impl Settings {
    pub fn set(&mut self, kind: SettingKind, value: u8) {
        match kind {
            SettingKind::Brightness => self.brightness = value,
            SettingKind::Speed => self.speed = value,
            SettingKind::Delay => self.delay = value,
        }
    }

    /// Nudge a value, saturating at 0 and 255; returns the new value
    pub fn adjust(&mut self, kind: SettingKind, delta: i16) -> u8 {
        let value = (self.get(kind) as i16).saturating_add(delta).clamp(0, 255) as u8;
        self.set(kind, value);
        value
    }
}

impl SettingSource for Settings {
    fn get(&self, kind: SettingKind) -> u8 {
        match kind {
            SettingKind::Brightness => self.brightness,
            SettingKind::Speed => self.speed,
            SettingKind::Delay => self.delay,
        }
    }
}

/// Map 0..=255 onto 0..=BAR_MAX, truncating like Arduino `map`
pub fn bar_length(value: u8) -> u32 {
    value as u32 * BAR_MAX / 255
}

/// Raw value as decimal text, no heap
pub fn readout(value: u8) -> ArrayString<4> {
    let mut buf = ArrayString::new();
    let _ = write!(&mut buf, "{}", value);
    buf
}
