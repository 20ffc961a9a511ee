/*
 *  menu/mod.rs
 *
 *  Lightpainter - paint with light
 *  (c) 2020-26 Stuart Hunter
 *
 *  Menu navigation and rendering core
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

pub mod catalog;
pub mod controller;
pub mod render;
pub mod scroll;
pub mod settings;
pub mod state;
pub mod window;

pub use catalog::{DirCatalog, FileCatalog};
pub use controller::MenuController;
pub use render::{render, MenuView};
pub use scroll::{ScrollState, WrapPolicy, SCROLL_INTERVAL_MS};
pub use settings::{bar_length, SettingKind, SettingSource, Settings};
pub use state::{MainOption, MenuEffect, MenuScreen, StartChoice, Transition};
pub use window::{compute_scrollbar, compute_window, selection_bar_y, ListWindow, ScrollbarGeometry};
