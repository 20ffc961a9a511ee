/*
 *  menu/render.rs
 *
 *  Lightpainter - paint with light
 *  (c) 2020-26 Stuart Hunter
 *
 *  Per-screen layouts for the 128x32 menu
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

use crate::display::surface::{DrawColor, FontId, IconId, Surface};
use crate::menu::catalog::FileCatalog;
use crate::menu::scroll::LABEL_VIEWPORT;
use crate::menu::settings::{bar_length, readout, SettingKind, SettingSource};
use crate::menu::state::{MainOption, MenuScreen, StartChoice};
use crate::menu::window::{compute_scrollbar, compute_window, selection_bar_y, TRACK_HEIGHT};

const ROW_HEIGHT: i32 = 10;
const PAGE_DOT_Y: i32 = 28;
const PAGE_DOT_RADIUS: u32 = 3;
const EMPTY_CATALOG: &str = "No files";

/// Everything one frame of the menu is drawn from.
///
/// Offsets come from the controller's scroll animators and are read,
/// never advanced, here.
pub struct MenuView<'a> {
    pub screen: MenuScreen,
    pub current_image: usize,
    pub catalog: &'a dyn FileCatalog,
    pub settings: &'a dyn SettingSource,
    pub title: &'a str,
    pub title_offset: i32,
    pub label_offset: i32,
}

/// Issue the draw calls for the active screen
pub fn render<S: Surface + ?Sized>(view: &MenuView<'_>, surface: &mut S) {
    match view.screen {
        MenuScreen::Title => draw_title(view, surface),
        MenuScreen::StartMenu { choice } => draw_start_menu(view, choice, surface),
        MenuScreen::MainMenu { option } => draw_main_menu(option, surface),
        MenuScreen::SelectFile { cursor } => draw_file_list(view, cursor, surface),
        MenuScreen::AdjustValue { setting } => draw_adjust(view, setting, surface),
        MenuScreen::SaveConfirm => draw_saved(surface),
    }
}

/// X position of a page dot
pub fn page_dot_x(option: MainOption) -> i32 {
    30 + 15 * option.index() as i32
}

/// Left edge that centers `text` on the 128 px canvas
fn centered_x<S: Surface + ?Sized>(surface: &S, text: &str) -> i32 {
    64 - (surface.measure_text_width(text) / 2) as i32
}

fn draw_title<S: Surface + ?Sized>(view: &MenuView<'_>, surface: &mut S) {
    surface.set_font(FontId::Title);
    surface.draw_text(view.title_offset, 24, view.title);
}

fn draw_start_menu<S: Surface + ?Sized>(view: &MenuView<'_>, choice: StartChoice, surface: &mut S) {
    surface.set_font(FontId::Choice);
    surface.draw_text(10, 30, "Start");
    surface.draw_text(80, 30, "Menu");
    let frame_x = match choice {
        StartChoice::Start => 0,
        StartChoice::Menu => 64,
    };
    surface.draw_rounded_frame(frame_x, 16, 64, 16, 3);

    // active file on the top line
    surface.draw_glyph(1, 9, IconId::File);
    surface.set_font(FontId::List);
    let name = view.catalog.name_at(view.current_image).unwrap_or(EMPTY_CATALOG);
    surface.draw_text(10, 9, name);
}

fn draw_main_menu<S: Surface + ?Sized>(option: MainOption, surface: &mut S) {
    surface.set_font(FontId::Heading);
    for page in MainOption::ALL {
        surface.draw_circle(page_dot_x(page), PAGE_DOT_Y, PAGE_DOT_RADIUS);
    }

    let label = option.label();
    let pos = page_dot_x(option);
    surface.draw_text(centered_x(surface, label), 16, label);
    surface.draw_disc(pos, PAGE_DOT_Y, PAGE_DOT_RADIUS);

    if pos > 40 {
        surface.set_font(FontId::Arrow);
        surface.draw_text(0, 26, "<");
    }
    if pos < 80 {
        surface.set_font(FontId::Arrow);
        surface.draw_text(122, 26, ">");
    }
}

fn draw_file_list<S: Surface + ?Sized>(view: &MenuView<'_>, cursor: usize, surface: &mut S) {
    let total = view.catalog.count();
    surface.set_font(FontId::List);

    let Some(window) = compute_window(cursor, total) else {
        surface.draw_text(2, ROW_HEIGHT * 2, EMPTY_CATALOG);
        surface.draw_frame(122, 0, 6, 32);
        return;
    };

    for (row, index) in window.indices().enumerate() {
        let Some(name) = view.catalog.name_at(index) else {
            continue;
        };
        let y = ROW_HEIGHT * (row as i32 + 1);
        let x = if index == cursor && surface.measure_text_width(name) > LABEL_VIEWPORT as u32 {
            view.label_offset
        } else {
            2
        };
        surface.draw_text(x, y, name);
    }

    surface.set_draw_color(DrawColor::Xor);
    surface.draw_box(1, selection_bar_y(cursor, total), 120, 10);
    surface.set_draw_color(DrawColor::Normal);

    surface.draw_frame(122, 0, 6, 32);
    let (thumb_height, thumb_offset) = compute_scrollbar(total, cursor, TRACK_HEIGHT).to_pixels();
    surface.draw_box(124, 2 + thumb_offset, 2, thumb_height);
}

fn draw_adjust<S: Surface + ?Sized>(view: &MenuView<'_>, setting: SettingKind, surface: &mut S) {
    let value = view.settings.get(setting);
    let label = setting.label();

    surface.draw_frame(3, 0, 122, 15);
    surface.set_font(FontId::Value);
    surface.draw_text(centered_x(surface, label), 12, label);
    surface.draw_text(82, 30, "Save");
    surface.draw_frame(73, 17, 52, 15);
    surface.draw_text(3, 32, readout(value).as_str());

    surface.set_draw_color(DrawColor::Xor);
    surface.draw_box(4, 1, bar_length(value), 13);
    surface.set_draw_color(DrawColor::Normal);
}

fn draw_saved<S: Surface + ?Sized>(surface: &mut S) {
    surface.draw_glyph(10, 32, IconId::Check);
    surface.set_font(FontId::Choice);
    surface.draw_text(40, 20, "Settings");
    surface.draw_text(40, 32, "Saved");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::recording::{DrawOp, RecordingSurface};
    use crate::menu::settings::Settings;

    fn files(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("img{:02}.bmp", i)).collect()
    }

    fn draw(screen: MenuScreen, catalog: &Vec<String>, settings: &Settings) -> RecordingSurface {
        let view = MenuView {
            screen,
            current_image: 1,
            catalog,
            settings,
            title: "Lightpainter2",
            title_offset: -7,
            label_offset: -3,
        };
        let mut surface = RecordingSurface::new();
        render(&view, &mut surface);
        surface
    }

    #[test]
    fn test_title_uses_scroll_offset() {
        let s = draw(MenuScreen::Title, &files(2), &Settings::default());
        assert_eq!(s.text_position("Lightpainter2"), Some((-7, 24)));
    }

    #[test]
    fn test_start_menu_frames_selected_choice() {
        let menu = MenuScreen::StartMenu { choice: StartChoice::Menu };
        let s = draw(menu, &files(3), &Settings::default());
        assert!(s.contains(&DrawOp::RoundedFrame { x: 64, y: 16, w: 64, h: 16, radius: 3 }));
        assert!(!s.contains(&DrawOp::RoundedFrame { x: 0, y: 16, w: 64, h: 16, radius: 3 }));
        assert_eq!(s.text_position("img01.bmp"), Some((10, 9)));
        assert!(s.contains(&DrawOp::Glyph { x: 1, y: 9, icon: IconId::File }));
    }

    #[test]
    fn test_start_menu_without_files() {
        let start = MenuScreen::StartMenu { choice: StartChoice::Start };
        let s = draw(start, &Vec::new(), &Settings::default());
        assert_eq!(s.text_position(EMPTY_CATALOG), Some((10, 9)));
    }

    #[test]
    fn test_main_menu_dots_and_arrows() {
        let s = draw(MenuScreen::MainMenu { option: MainOption::SelectFile }, &files(1), &Settings::default());
        let circles = s.ops().iter().filter(|op| matches!(op, DrawOp::Circle { .. })).count();
        assert_eq!(circles, 5);
        assert!(s.contains(&DrawOp::Disc { x: 30, y: 28, radius: 3 }));
        assert!(s.text_position(">").is_some());
        assert!(s.text_position("<").is_none());

        let s = draw(MenuScreen::MainMenu { option: MainOption::SaveSettings }, &files(1), &Settings::default());
        assert!(s.contains(&DrawOp::Disc { x: 90, y: 28, radius: 3 }));
        assert!(s.text_position("<").is_some());
        assert!(s.text_position(">").is_none());

        let s = draw(MenuScreen::MainMenu { option: MainOption::Speed }, &files(1), &Settings::default());
        assert!(s.text_position("<").is_some());
        assert!(s.text_position(">").is_some());
    }

    #[test]
    fn test_main_menu_label_is_centered() {
        let s = draw(MenuScreen::MainMenu { option: MainOption::Delay }, &files(1), &Settings::default());
        let width = FontId::Heading.measure("Delay") as i32;
        assert_eq!(s.text_position("Delay"), Some((64 - width / 2, 16)));
    }

    #[test]
    fn test_file_list_window_and_bar() {
        let s = draw(MenuScreen::SelectFile { cursor: 4 }, &files(5), &Settings::default());
        assert_eq!(s.texts(), vec!["img02.bmp", "img03.bmp", "img04.bmp"]);
        assert_eq!(s.text_position("img02.bmp"), Some((2, 10)));
        assert_eq!(s.text_position("img04.bmp"), Some((2, 30)));
        // last entry still highlighted on the middle row
        assert!(s.contains(&DrawOp::Box { x: 1, y: 11, w: 120, h: 10 }));
        assert!(s.contains(&DrawOp::Frame { x: 122, y: 0, w: 6, h: 32 }));
    }

    #[test]
    fn test_file_list_thumb_truncates() {
        let s = draw(MenuScreen::SelectFile { cursor: 2 }, &files(5), &Settings::default());
        // height 21.0, offset 3.5
        assert!(s.contains(&DrawOp::Box { x: 124, y: 5, w: 2, h: 21 }));
        assert!(s.contains(&DrawOp::Box { x: 1, y: 11, w: 120, h: 10 }));
    }

    #[test]
    fn test_selection_bar_drawn_in_xor() {
        let s = draw(MenuScreen::SelectFile { cursor: 0 }, &files(5), &Settings::default());
        let bar = DrawOp::Box { x: 1, y: 1, w: 120, h: 10 };
        let at = s.ops().iter().position(|op| *op == bar).unwrap();
        assert_eq!(s.ops()[at - 1], DrawOp::Color(DrawColor::Xor));
        assert_eq!(s.ops()[at + 1], DrawOp::Color(DrawColor::Normal));
    }

    #[test]
    fn test_long_name_uses_label_offset() {
        let mut catalog = files(3);
        catalog[1] = "a_really_long_light_painting_name.bmp".to_string();
        let s = draw(MenuScreen::SelectFile { cursor: 1 }, &catalog, &Settings::default());
        assert_eq!(s.text_position(&catalog[1]), Some((-3, 20)));
        assert_eq!(s.text_position("img00.bmp"), Some((2, 10)));
    }

    #[test]
    fn test_short_catalogs() {
        let s = draw(MenuScreen::SelectFile { cursor: 1 }, &files(2), &Settings::default());
        assert_eq!(s.texts(), vec!["img00.bmp", "img01.bmp"]);
        assert!(s.contains(&DrawOp::Box { x: 124, y: 2, w: 2, h: 28 }));

        let s = draw(MenuScreen::SelectFile { cursor: 0 }, &Vec::new(), &Settings::default());
        assert_eq!(s.texts(), vec![EMPTY_CATALOG]);
        assert!(!s.ops().iter().any(|op| matches!(op, DrawOp::Box { .. })));
    }

    #[test]
    fn test_adjust_shows_raw_and_scaled() {
        let settings = Settings { brightness: 255, speed: 128, delay: 0 };
        let s = draw(MenuScreen::AdjustValue { setting: SettingKind::Speed }, &files(1), &settings);
        assert_eq!(s.text_position("128"), Some((3, 32)));
        assert!(s.contains(&DrawOp::Box { x: 4, y: 1, w: 60, h: 13 }));
        assert!(s.text_position("Speed").is_some());
        assert_eq!(s.text_position("Save"), Some((82, 30)));

        let s = draw(MenuScreen::AdjustValue { setting: SettingKind::Brightness }, &files(1), &settings);
        assert!(s.contains(&DrawOp::Box { x: 4, y: 1, w: 120, h: 13 }));
        assert_eq!(s.text_position("255"), Some((3, 32)));
    }

    #[test]
    fn test_save_confirmation() {
        let s = draw(MenuScreen::SaveConfirm, &files(1), &Settings::default());
        assert_eq!(s.texts(), vec!["Settings", "Saved"]);
        assert!(s.contains(&DrawOp::Glyph { x: 10, y: 32, icon: IconId::Check }));
    }
}
