/*
 *  app.rs
 *
 *  Lightpainter - paint with light
 *  (c) 2020-26 Stuart Hunter
 *
 *  Ties the menu to the panel, input, catalog and settings store
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

use std::time::Duration;

use log::{debug, error, info, warn};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::signal::unix::{signal, SignalKind};
use tokio::time::MissedTickBehavior;

use crate::clock::Clock;
use crate::display::{Canvas, DisplayError};
use crate::input::{parse_key, InputEvent};
use crate::menu::{FileCatalog, MenuController, MenuEffect, MenuScreen, Settings};
use crate::storage::SettingsStore;

/// The running appliance: one menu, one panel, one card, one store.
pub struct App {
    menu: MenuController,
    canvas: Canvas,
    catalog: Box<dyn FileCatalog>,
    settings: Settings,
    store: Box<dyn SettingsStore>,
    clock: Box<dyn Clock>,
    frame_period: Duration,
}

impl App {
    /// Saved settings are loaded here; a broken store falls back to defaults
    pub fn new(
        menu: MenuController,
        canvas: Canvas,
        catalog: Box<dyn FileCatalog>,
        store: Box<dyn SettingsStore>,
        clock: Box<dyn Clock>,
        frame_rate: u32,
    ) -> Self {
        let settings = match store.load() {
            Ok(Some(saved)) => {
                info!("Loaded settings: brightness {} speed {} delay {}", saved.brightness, saved.speed, saved.delay);
                saved
            }
            Ok(None) => Settings::default(),
            Err(e) => {
                warn!("Could not load saved settings, using defaults: {}", e);
                Settings::default()
            }
        };

        let max_fps = canvas.capabilities().max_fps.max(1);
        let fps = frame_rate.clamp(1, max_fps);
        if fps != frame_rate {
            warn!("Frame rate {} outside 1..={} for this panel, using {}", frame_rate, max_fps, fps);
        }
        let frame_period = Duration::from_millis(1000 / u64::from(fps)).max(Duration::from_millis(1));

        Self {
            menu,
            canvas,
            catalog,
            settings,
            store,
            clock,
            frame_period,
        }
    }

    pub fn menu(&self) -> &MenuController {
        &self.menu
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn frame_period(&self) -> Duration {
        self.frame_period
    }

    /// Feed one input event through the menu and carry out its effect
    pub fn handle_event(&mut self, event: InputEvent) -> Option<MenuEffect> {
        let was_listing = matches!(self.menu.screen(), MenuScreen::SelectFile { .. });
        let effect = self.menu.handle(event, self.catalog.count());

        // pick up uploads made since the list was last open
        if !was_listing && matches!(self.menu.screen(), MenuScreen::SelectFile { .. }) {
            self.catalog.refresh();
            self.menu.sync_catalog(self.catalog.count());
        }

        if let Some(effect) = effect {
            self.apply(effect);
        }
        effect
    }

    fn apply(&mut self, effect: MenuEffect) {
        match effect {
            MenuEffect::StartPainting { image } => {
                let name = self.catalog.name_at(image).unwrap_or("?");
                info!(
                    "Painting {} (brightness {}, speed {}, delay {})",
                    name, self.settings.brightness, self.settings.speed, self.settings.delay
                );
            }
            MenuEffect::ChooseImage(index) => {
                debug!("chose {:?}", self.catalog.name_at(index));
            }
            MenuEffect::AdjustSetting { setting, delta } => {
                let value = self.settings.adjust(setting, delta);
                debug!("{} -> {}", setting.label(), value);
            }
            MenuEffect::SaveSettings => {
                if let Err(e) = self.store.save(&self.settings) {
                    warn!("Failed to save settings: {}", e);
                }
            }
        }
    }

    /// Draw the active screen and push it to the panel
    pub fn render_frame(&mut self) -> Result<(), DisplayError> {
        let now = self.clock.now_millis();
        self.canvas.begin_frame();
        self.menu.frame(now, self.catalog.as_ref(), &self.settings, &mut self.canvas);
        self.canvas.present()
    }

    /// Frame ticks and console keys until a signal or stdin closes
    pub async fn run(&mut self) -> anyhow::Result<()> {
        let mut ticker = tokio::time::interval(self.frame_period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        let shutdown = signal_handler();
        tokio::pin!(shutdown);

        info!(
            "Menu running at {} ms per frame, {} image(s)",
            self.frame_period.as_millis(),
            self.catalog.count()
        );

        loop {
            tokio::select! {
                res = &mut shutdown => {
                    if let Err(e) = res {
                        error!("Signal handling failed: {}", e);
                    }
                    break;
                }
                _ = ticker.tick() => {
                    if let Err(e) = self.render_frame() {
                        error!("Failed to render menu frame: {}", e);
                    }
                }
                line = lines.next_line() => match line {
                    Ok(Some(key)) => match parse_key(&key) {
                        Some(event) => {
                            self.handle_event(event);
                        }
                        None => warn!("Unknown key {:?}", key.trim()),
                    },
                    Ok(None) => {
                        info!("Input closed. Shutting down.");
                        break;
                    }
                    Err(e) => {
                        error!("Failed to read input: {}", e);
                        break;
                    }
                },
            }
        }

        if let Err(e) = self.canvas.driver_mut().clear() {
            warn!("Failed to blank the panel: {}", e);
        }
        Ok(())
    }
}

/// Waits for SIGINT, SIGTERM or SIGHUP.
async fn signal_handler() -> std::io::Result<()> {
    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;
    let mut sighup = signal(SignalKind::hangup())?;

    tokio::select! {
        _ = sigint.recv() => {
            info!("SIGINT received. Initiating graceful shutdown.");
        }
        _ = sigterm.recv() => {
            info!("SIGTERM received. Initiating graceful shutdown.");
        }
        _ = sighup.recv() => {
            info!("SIGHUP received. Initiating graceful shutdown.");
        }
    }
    Ok(())
}
