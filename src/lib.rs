/*
 *  lib.rs
 *
 *  Lightpainter - paint with light
 *  (c) 2020-26 Stuart Hunter
 *
 *  Library root - menu core, display plumbing and collaborators
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

pub mod app;
pub mod clock;
pub mod config;
pub mod display;
pub mod input;
pub mod menu;
pub mod storage;
pub mod vframebuf;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use input::InputEvent;
pub use menu::{MenuController, MenuScreen};
