/*
 *  menu/controller.rs
 *
 *  Lightpainter - paint with light
 *  (c) 2020-26 Stuart Hunter
 *
 *  Menu controller, owns screen, active image and marquees
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

use log::{debug, info};

use crate::display::surface::{FontId, Surface};
use crate::input::InputEvent;
use crate::menu::catalog::FileCatalog;
use crate::menu::render::{render, MenuView};
use crate::menu::scroll::{ScrollState, WrapPolicy, SCROLL_INTERVAL_MS};
use crate::menu::settings::SettingSource;
use crate::menu::state::{MenuEffect, MenuScreen};

/// Single owner of all mutable menu state.
///
/// Input goes through [`MenuController::handle`], which hands back any
/// effect for the caller to carry out. Once per display tick
/// [`MenuController::frame`] advances the marquees and then draws.
#[derive(Debug, Clone)]
pub struct MenuController {
    screen: MenuScreen,
    current_image: usize,
    title: String,
    title_scroll: ScrollState,
    label_scroll: ScrollState,
}

impl MenuController {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            screen: MenuScreen::Title,
            current_image: 0,
            title: title.into(),
            title_scroll: ScrollState::default(),
            label_scroll: ScrollState::default(),
        }
    }

    pub fn screen(&self) -> MenuScreen {
        self.screen
    }

    /// Catalog index of the image that painting would use
    pub fn current_image(&self) -> usize {
        self.current_image
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn title_scroll(&self) -> ScrollState {
        self.title_scroll
    }

    pub fn label_scroll(&self) -> ScrollState {
        self.label_scroll
    }

    /// File under the list cursor, if the list is showing
    fn highlighted(&self) -> Option<usize> {
        match self.screen {
            MenuScreen::SelectFile { cursor } => Some(cursor),
            _ => None,
        }
    }

    /// Apply one input event
    pub fn handle(&mut self, event: InputEvent, catalog_len: usize) -> Option<MenuEffect> {
        let before = self.highlighted();
        let transition = self.screen.apply(event, catalog_len, self.current_image);

        if transition.screen != self.screen {
            debug!("menu {} -> {} on {:?}", self.screen.name(), transition.screen.name(), event);
        }
        self.screen = transition.screen;

        if let Some(MenuEffect::ChooseImage(index)) = transition.effect {
            info!("Active image is now #{}", index);
            self.current_image = index;
        }
        if self.highlighted() != before {
            self.label_scroll.rewind();
        }

        transition.effect
    }

    /// Keep indices valid after the catalog changed size
    pub fn sync_catalog(&mut self, catalog_len: usize) {
        let last = catalog_len.saturating_sub(1);
        if self.current_image > last {
            debug!("catalog shrank to {}, active image {} -> {}", catalog_len, self.current_image, last);
            self.current_image = last;
        }
        let clamped = self.screen.clamped(catalog_len);
        if clamped != self.screen {
            self.screen = clamped;
            self.label_scroll.rewind();
        }
    }

    /// Step whichever marquee the active screen shows
    pub fn animate(&mut self, now_ms: u64, catalog: &dyn FileCatalog) {
        match self.screen {
            MenuScreen::Title => {
                self.title_scroll = self.title_scroll.tick(now_ms, SCROLL_INTERVAL_MS, WrapPolicy::Title);
            }
            MenuScreen::SelectFile { cursor } => {
                let text_width = catalog.name_at(cursor).map(|name| FontId::List.measure(name)).unwrap_or(0);
                self.label_scroll =
                    self.label_scroll.tick(now_ms, SCROLL_INTERVAL_MS, WrapPolicy::Label { text_width });
            }
            _ => {}
        }
    }

    /// One display tick: clamp, animate, then draw
    pub fn frame<S: Surface + ?Sized>(
        &mut self,
        now_ms: u64,
        catalog: &dyn FileCatalog,
        settings: &dyn SettingSource,
        surface: &mut S,
    ) {
        self.sync_catalog(catalog.count());
        self.animate(now_ms, catalog);

        let view = MenuView {
            screen: self.screen,
            current_image: self.current_image,
            catalog,
            settings,
            title: &self.title,
            title_offset: self.title_scroll.offset,
            label_offset: self.label_scroll.offset,
        };
        render(&view, surface);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::recording::RecordingSurface;
    use crate::menu::settings::Settings;
    use crate::menu::state::{MainOption, StartChoice};
    use InputEvent::*;

    fn catalog() -> Vec<String> {
        vec![
            "alpha.bmp".to_string(),
            "a_much_longer_file_name_that_needs_a_marquee.bmp".to_string(),
            "gamma.bmp".to_string(),
            "delta.bmp".to_string(),
        ]
    }

    fn to_file_list(menu: &mut MenuController, len: usize) {
        menu.handle(Select, len);
        menu.handle(Next, len);
        menu.handle(Select, len);
        menu.handle(Select, len);
        assert_eq!(menu.screen(), MenuScreen::SelectFile { cursor: menu.current_image() });
    }

    #[test]
    fn test_choose_image_updates_current() {
        let mut menu = MenuController::new("Lightpainter2");
        to_file_list(&mut menu, 4);
        menu.handle(Next, 4);
        menu.handle(Next, 4);
        assert_eq!(menu.handle(Select, 4), Some(MenuEffect::ChooseImage(2)));
        assert_eq!(menu.current_image(), 2);
        assert_eq!(menu.screen(), MenuScreen::MainMenu { option: MainOption::SelectFile });

        // list reopens on the chosen image
        menu.handle(Select, 4);
        assert_eq!(menu.screen(), MenuScreen::SelectFile { cursor: 2 });
    }

    #[test]
    fn test_back_keeps_current_image() {
        let mut menu = MenuController::new("t");
        to_file_list(&mut menu, 4);
        menu.handle(Next, 4);
        assert_eq!(menu.handle(Back, 4), None);
        assert_eq!(menu.current_image(), 0);
    }

    #[test]
    fn test_title_scrolls_only_on_title() {
        let mut menu = MenuController::new("Lightpainter2");
        let files = catalog();
        menu.animate(15, &files);
        menu.animate(20, &files);
        menu.animate(30, &files);
        assert_eq!(menu.title_scroll().offset, -2);

        menu.handle(Select, files.len());
        menu.animate(100, &files);
        assert_eq!(menu.title_scroll().offset, -2);
    }

    #[test]
    fn test_label_scroll_resets_on_cursor_move() {
        let files = catalog();
        let mut menu = MenuController::new("t");
        to_file_list(&mut menu, files.len());
        menu.handle(Next, files.len());

        for step in 1..=10 {
            menu.animate(step * 15, &files);
        }
        assert_eq!(menu.label_scroll().offset, -10);

        menu.handle(Next, files.len());
        assert_eq!(menu.label_scroll().offset, 0);
    }

    #[test]
    fn test_short_label_never_scrolls() {
        let files = catalog();
        let mut menu = MenuController::new("t");
        to_file_list(&mut menu, files.len());
        for step in 1..=10 {
            menu.animate(step * 15, &files);
        }
        assert_eq!(menu.label_scroll().offset, 0);
    }

    #[test]
    fn test_long_label_wraps_after_tail_clears() {
        let files = catalog();
        let width = FontId::List.measure(&files[1]) as i32;
        let mut menu = MenuController::new("t");
        to_file_list(&mut menu, files.len());
        menu.handle(Next, files.len());

        let mut now = 0;
        let mut seen_min = 0;
        for _ in 0..(width as u64 + 10) {
            now += 15;
            menu.animate(now, &files);
            seen_min = seen_min.min(menu.label_scroll().offset);
        }
        assert_eq!(seen_min, 120 - width);
        assert!(menu.label_scroll().offset > 120 - width);
    }

    #[test]
    fn test_sync_catalog_clamps() {
        let mut menu = MenuController::new("t");
        to_file_list(&mut menu, 4);
        menu.handle(Next, 4);
        menu.handle(Next, 4);
        menu.handle(Next, 4);
        menu.handle(Select, 4);
        assert_eq!(menu.current_image(), 3);

        menu.sync_catalog(2);
        assert_eq!(menu.current_image(), 1);

        menu.sync_catalog(0);
        assert_eq!(menu.current_image(), 0);
    }

    #[test]
    fn test_frame_animates_before_drawing() {
        let files = catalog();
        let settings = Settings::default();
        let mut menu = MenuController::new("Lightpainter2");
        let mut surface = RecordingSurface::new();

        menu.frame(15, &files, &settings, &mut surface);
        assert_eq!(surface.text_position("Lightpainter2"), Some((-1, 24)));
    }

    #[test]
    fn test_start_effect_uses_current_image() {
        let mut menu = MenuController::new("t");
        menu.handle(Select, 4);
        assert_eq!(menu.screen(), MenuScreen::StartMenu { choice: StartChoice::Start });
        assert_eq!(menu.handle(Select, 4), Some(MenuEffect::StartPainting { image: 0 }));
    }
}
