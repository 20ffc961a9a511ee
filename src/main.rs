/*
 *  main.rs
 *
 *  Lightpainter - paint with light
 *  (c) 2020-26 Stuart Hunter
 *
 *  Lightpainter menu controller entry point
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

use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use log::info;

use lightpainter::app::App;
use lightpainter::config::{self, Cli};
use lightpainter::display::{create_driver, Canvas};
use lightpainter::menu::{DirCatalog, FileCatalog, MenuController};
use lightpainter::storage;
use lightpainter::MonotonicClock;

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = config::load(&cli).context("loading configuration")?;

    if cli.dump_config {
        println!("{}", config::dump_config(&cfg)?);
        return Ok(());
    }

    env_logger::Builder::from_env(Env::default().default_filter_or(cfg.log_level()))
        .format_timestamp_secs()
        .init();

    info!("{} - paint with light", env!("CARGO_PKG_NAME"));
    info!("v.{} built {}", env!("CARGO_PKG_VERSION"), BUILD_DATE);

    let display_cfg = cfg.display();
    let menu_cfg = cfg.menu();

    let driver = create_driver(&display_cfg).context("creating display driver")?;
    let mut canvas = Canvas::new(driver);
    canvas.init().context("initializing display")?;
    let (width, height) = canvas.dimensions();
    info!("Display ready {}x{}", width, height);

    let catalog = DirCatalog::open(menu_cfg.catalog_dir());
    info!("{} image(s) in {}", catalog.count(), catalog.root().display());

    let store = storage::open_store(cli.headless, menu_cfg.settings_file());

    let mut app = App::new(
        MenuController::new(menu_cfg.title()),
        canvas,
        Box::new(catalog),
        store,
        Box::new(MonotonicClock::new()),
        menu_cfg.frame_rate(),
    );

    app.run().await?;

    info!("{} stopped", env!("CARGO_PKG_NAME"));
    Ok(())
}
