/*
 *  display/factory.rs
 *
 *  Lightpainter - paint with light
 *  (c) 2020-26 Stuart Hunter
 *
 *  Driver selection from configuration
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

use crate::config::{BusConfig, DisplayConfig, DriverKind};
use crate::display::drivers::mock::MockDriver;
use crate::display::error::DisplayFactoryError;
use crate::display::traits::DisplayDriver;
use log::{debug, info};

#[cfg(feature = "driver-ssd1306")]
use crate::display::drivers::ssd1306::Ssd1306Driver;

/// Type alias for boxed display driver trait objects
pub type BoxedDriver = Box<dyn DisplayDriver>;

/// Create a display driver from configuration
///
/// Examines the driver kind and bus wiring and builds the matching
/// driver. The mock panel needs no bus.
///
/// ```ignore
/// let config = DisplayConfig {
///     driver: Some(DriverKind::Ssd1306),
///     bus: Some(BusConfig::I2c { bus: "/dev/i2c-1".to_string(), address: 0x3C }),
///     ..Default::default()
/// };
/// let driver = create_driver(&config)?;
/// ```
pub fn create_driver(config: &DisplayConfig) -> Result<BoxedDriver, DisplayFactoryError> {
    let driver_kind = config.driver.as_ref()
        .ok_or(DisplayFactoryError::NoDriverSpecified)?;

    debug!("Creating display driver {:?}", driver_kind);

    match driver_kind {
        DriverKind::Mock => {
            info!("Using in-memory panel (headless)");
            Ok(Box::new(MockDriver::new(config)?))
        }
        DriverKind::Ssd1306 => {
            let bus_config = config.bus.as_ref()
                .ok_or(DisplayFactoryError::NoBusConfiguration)?;
            create_ssd1306(bus_config, config)
        }
    }
}

#[cfg(feature = "driver-ssd1306")]
fn create_ssd1306(bus: &BusConfig, config: &DisplayConfig) -> Result<BoxedDriver, DisplayFactoryError> {
    match bus {
        BusConfig::I2c { bus, address } => {
            Ok(Box::new(Ssd1306Driver::new_i2c(bus, *address, config)?))
        }
    }
}

#[cfg(not(feature = "driver-ssd1306"))]
fn create_ssd1306(_bus: &BusConfig, _config: &DisplayConfig) -> Result<BoxedDriver, DisplayFactoryError> {
    Err(DisplayFactoryError::ConfigError(
        "SSD1306 driver not enabled. Enable with --features driver-ssd1306".to_string()
    ))
}
