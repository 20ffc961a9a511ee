/*
 *  display/error.rs
 *
 *  Lightpainter - paint with light
 *  (c) 2020-26 Stuart Hunter
 *
 *  What can go wrong between a composed frame and the panel
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

use std::error::Error;
use std::fmt;

/// Failures talking to the panel.
#[derive(Debug)]
pub enum DisplayError {
    /// Panel did not answer its power-up sequence
    PanelInit(String),
    /// The I2C bus device could not be opened or written
    Bus(String),
    /// Geometry no driver can show
    UnsupportedSize { width: u32, height: u32 },
    /// The driver has no such control
    Unsupported(&'static str),
    InvalidRotation(u16),
    /// A packed frame must hold exactly one bit per panel pixel
    BufferSizeMismatch { expected: usize, actual: usize },
    /// Raised by the panel's command interface
    Interface(display_interface::DisplayError),
    /// A panel command failed; the text names it
    Command(String),
}

impl fmt::Display for DisplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayError::PanelInit(msg) => write!(f, "panel did not start: {}", msg),
            DisplayError::Bus(msg) => write!(f, "display bus: {}", msg),
            DisplayError::UnsupportedSize { width, height } => {
                write!(f, "no panel of {}x{} pixels is supported", width, height)
            }
            DisplayError::Unsupported(control) => write!(f, "panel has no {} control", control),
            DisplayError::InvalidRotation(degrees) => {
                write!(f, "rotation {} is not a quarter turn (0, 90, 180, 270)", degrees)
            }
            DisplayError::BufferSizeMismatch { expected, actual } => write!(
                f,
                "packed frame is {} bytes, the panel takes {} (1 bit per pixel)",
                actual, expected
            ),
            DisplayError::Interface(err) => write!(f, "panel interface: {:?}", err),
            DisplayError::Command(msg) => write!(f, "panel command failed: {}", msg),
        }
    }
}

impl Error for DisplayError {}

impl From<display_interface::DisplayError> for DisplayError {
    fn from(err: display_interface::DisplayError) -> Self {
        DisplayError::Interface(err)
    }
}

impl From<linux_embedded_hal::I2CError> for DisplayError {
    fn from(err: linux_embedded_hal::I2CError) -> Self {
        DisplayError::Bus(format!("{:?}", err))
    }
}

/// Why no driver could be built from the configuration.
#[derive(Debug)]
pub enum DisplayFactoryError {
    /// `display.driver` is missing; `--headless` picks the in-memory panel
    NoDriverSpecified,
    /// A hardware panel was chosen without `display.bus`
    NoBusConfiguration,
    /// The panel was found but failed to come up
    Panel(DisplayError),
    ConfigError(String),
}

impl fmt::Display for DisplayFactoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayFactoryError::NoDriverSpecified => {
                write!(f, "no display.driver configured (use --headless to run without a panel)")
            }
            DisplayFactoryError::NoBusConfiguration => write!(f, "panel needs a display.bus entry"),
            DisplayFactoryError::Panel(err) => write!(f, "{}", err),
            DisplayFactoryError::ConfigError(msg) => write!(f, "display config: {}", msg),
        }
    }
}

impl Error for DisplayFactoryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            DisplayFactoryError::Panel(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DisplayError> for DisplayFactoryError {
    fn from(err: DisplayError) -> Self {
        DisplayFactoryError::Panel(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_size_message() {
        let err = DisplayError::BufferSizeMismatch { expected: 512, actual: 3 };
        assert_eq!(err.to_string(), "packed frame is 3 bytes, the panel takes 512 (1 bit per pixel)");
        assert!(DisplayError::InvalidRotation(45).to_string().contains("45"));
        assert_eq!(
            DisplayError::UnsupportedSize { width: 96, height: 16 }.to_string(),
            "no panel of 96x16 pixels is supported"
        );
    }

    #[test]
    fn test_factory_error_source() {
        let err: DisplayFactoryError = DisplayError::Unsupported("invert").into();
        assert!(err.source().is_some());
        assert!(DisplayFactoryError::NoDriverSpecified.source().is_none());
        assert!(DisplayFactoryError::NoDriverSpecified.to_string().contains("--headless"));
    }
}
