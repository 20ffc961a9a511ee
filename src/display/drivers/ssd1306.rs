/*
 *  display/drivers/ssd1306.rs
 *
 *  Lightpainter - paint with light
 *  (c) 2020-26 Stuart Hunter
 *
 *  SSD1306 OLED display driver over Linux I2C
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

use linux_embedded_hal::I2cdev;
use ssd1306::{
    mode::BufferedGraphicsMode,
    prelude::*,
    size::{DisplaySize128x32, DisplaySize128x64},
    I2CDisplayInterface,
    Ssd1306,
};

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;

use crate::config::DisplayConfig;
use ssd1306::mode::DisplayConfig as _;
use crate::display::error::DisplayError;
use crate::display::traits::{DisplayCapabilities, DisplayDriver};

use log::info;

type Panel<S> = Ssd1306<I2CInterface<I2cdev>, S, BufferedGraphicsMode<S>>;

/// SSD1306 display driver wrapper
pub struct Ssd1306Driver {
    display: Ssd1306Variants,
    capabilities: DisplayCapabilities,
}

/// The two panel sizes the appliance ships with
enum Ssd1306Variants {
    Size128x32(Panel<DisplaySize128x32>),
    Size128x64(Panel<DisplaySize128x64>),
}

/// Run the same body against whichever panel size is wired
macro_rules! with_panel {
    ($variants:expr, $panel:ident => $body:expr) => {
        match $variants {
            Ssd1306Variants::Size128x32($panel) => $body,
            Ssd1306Variants::Size128x64($panel) => $body,
        }
    };
}

impl Ssd1306Driver {
    /// Create a new SSD1306 driver on an I2C bus (e.g. "/dev/i2c-1", 0x3C)
    pub fn new_i2c(
        i2c_bus_path: &str,
        address: u8,
        config: &DisplayConfig,
    ) -> Result<Self, DisplayError> {
        info!("Initializing SSD1306 on {} at address 0x{:02X}", i2c_bus_path, address);

        let i2c = I2cdev::new(i2c_bus_path)
            .map_err(|e| DisplayError::Bus(format!("cannot open {}: {}", i2c_bus_path, e)))?;
        let interface = I2CDisplayInterface::new_custom_address(i2c, address);

        let width = config.width.unwrap_or(128);
        let height = config.height.unwrap_or(32);

        let display = match (width, height) {
            (128, 32) => Ssd1306Variants::Size128x32(
                Ssd1306::new(interface, DisplaySize128x32, DisplayRotation::Rotate0)
                    .into_buffered_graphics_mode(),
            ),
            (128, 64) => Ssd1306Variants::Size128x64(
                Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
                    .into_buffered_graphics_mode(),
            ),
            _ => {
                return Err(DisplayError::UnsupportedSize { width, height });
            }
        };

        let capabilities = DisplayCapabilities {
            width,
            height,
            max_fps: 30, // I2C is slower
        };

        let mut driver = Self { display, capabilities };
        driver.init()?;

        if let Some(brightness) = config.brightness {
            driver.set_brightness(brightness)?;
        }
        if let Some(invert) = config.invert {
            driver.set_invert(invert)?;
        }
        if let Some(rotation) = config.rotate_deg {
            driver.set_rotation(rotation)?;
        }

        info!("SSD1306 initialized successfully ({}x{})", width, height);

        Ok(driver)
    }
}

impl DisplayDriver for Ssd1306Driver {
    fn capabilities(&self) -> &DisplayCapabilities {
        &self.capabilities
    }

    fn init(&mut self) -> Result<(), DisplayError> {
        with_panel!(&mut self.display, panel => panel.init()
            .map_err(|e| DisplayError::PanelInit(format!("{:?}", e))))
    }

    fn set_brightness(&mut self, value: u8) -> Result<(), DisplayError> {
        let brightness = match value {
            0..=63 => Brightness::DIMMEST,
            64..=127 => Brightness::DIM,
            128..=191 => Brightness::NORMAL,
            _ => Brightness::BRIGHTEST,
        };
        with_panel!(&mut self.display, panel => panel.set_brightness(brightness)
            .map_err(|e| DisplayError::Command(format!("contrast {:?}", e))))
    }

    fn clear(&mut self) -> Result<(), DisplayError> {
        with_panel!(&mut self.display, panel => {
            panel.clear_buffer();
            panel.flush().map_err(DisplayError::from)
        })
    }

    fn write_buffer(&mut self, buffer: &[u8]) -> Result<(), DisplayError> {
        let expected_size = self.capabilities.frame_bytes();
        if buffer.len() != expected_size {
            return Err(DisplayError::BufferSizeMismatch {
                expected: expected_size,
                actual: buffer.len(),
            });
        }

        let width = self.capabilities.width as usize;
        let lit = buffer.iter().enumerate().flat_map(|(byte_idx, &byte)| {
            (0..8).filter(move |bit| byte & (1 << bit) != 0).map(move |bit| {
                let i = byte_idx * 8 + bit;
                Pixel(Point::new((i % width) as i32, (i / width) as i32), BinaryColor::On)
            })
        });

        with_panel!(&mut self.display, panel => {
            panel.clear_buffer();
            panel.draw_iter(lit)
                .map_err(|e| DisplayError::Command(format!("draw {:?}", e)))?;
            panel.flush().map_err(DisplayError::from)
        })
    }

    fn set_invert(&mut self, inverted: bool) -> Result<(), DisplayError> {
        with_panel!(&mut self.display, panel => panel.set_invert(inverted)
            .map_err(|e| DisplayError::Command(format!("invert {:?}", e))))
    }

    fn set_rotation(&mut self, degrees: u16) -> Result<(), DisplayError> {
        let rotation = match degrees {
            0 => DisplayRotation::Rotate0,
            90 => DisplayRotation::Rotate90,
            180 => DisplayRotation::Rotate180,
            270 => DisplayRotation::Rotate270,
            _ => return Err(DisplayError::InvalidRotation(degrees)),
        };
        with_panel!(&mut self.display, panel => panel.set_rotation(rotation)
            .map_err(|e| DisplayError::Command(format!("rotate {:?}", e))))
    }
}
