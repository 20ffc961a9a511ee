/*
 *  display/drivers/mock.rs
 *
 *  Lightpainter - paint with light
 *  (c) 2020-26 Stuart Hunter
 *
 *  Mock display driver for running without hardware
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

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use log::{debug, warn};

use crate::config::DisplayConfig;
use crate::display::error::DisplayError;
use crate::display::traits::{DisplayCapabilities, DisplayDriver};

/// Mock display driver
///
/// Simulates a monochrome panel without hardware. It keeps the last frame
/// written to it, records every operation for inspection, and can mirror
/// each new frame into a PBM image so a headless run can be watched with
/// any image viewer.
#[derive(Debug, Clone)]
pub struct MockDriver {
    /// Last frame, one bool per pixel, row-major
    pixels: Vec<bool>,

    /// Display capabilities
    capabilities: DisplayCapabilities,

    /// Where to mirror frames, if anywhere
    dump_path: Option<PathBuf>,

    /// Shared state for testing
    state: Arc<Mutex<MockDriverState>>,
}

/// Internal state for the mock driver (shared for inspection in tests)
#[derive(Debug, Default)]
pub struct MockDriverState {
    /// Number of times init() was called
    pub init_count: usize,

    /// Number of frames pushed to the panel
    pub flush_count: usize,

    /// Number of times clear() was called
    pub clear_count: usize,

    /// Last brightness value set
    pub last_brightness: Option<u8>,

    /// Last rotation set
    pub last_rotation: Option<u16>,

    /// Last invert state set
    pub last_invert: Option<bool>,

    /// Whether the driver is initialized
    pub is_initialized: bool,

    /// Total bytes written via write_buffer
    pub bytes_written: usize,

    /// Simulate failures (for error testing)
    pub simulate_flush_failure: bool,
    pub simulate_init_failure: bool,
}

impl MockDriver {
    /// Create a new mock driver, 128x32 unless configured otherwise
    pub fn new(config: &DisplayConfig) -> Result<Self, DisplayError> {
        let width = config.width.unwrap_or(128);
        let height = config.height.unwrap_or(32);

        if width == 0 || height == 0 {
            return Err(DisplayError::UnsupportedSize { width, height });
        }

        let capabilities = DisplayCapabilities { width, height, max_fps: 60 };

        let mut driver = Self {
            pixels: vec![false; (width * height) as usize],
            capabilities,
            dump_path: config.dump_frame.clone(),
            state: Arc::new(Mutex::new(MockDriverState::default())),
        };

        // same panel settings the SSD1306 driver applies at open
        if let Some(brightness) = config.brightness {
            driver.set_brightness(brightness)?;
        }
        if let Some(inverted) = config.invert {
            driver.set_invert(inverted)?;
        }
        if let Some(degrees) = config.rotate_deg {
            driver.set_rotation(degrees)?;
        }

        Ok(driver)
    }

    /// Create a mock driver with specific dimensions
    pub fn new_with_size(width: u32, height: u32) -> Result<Self, DisplayError> {
        let config = DisplayConfig {
            width: Some(width),
            height: Some(height),
            ..Default::default()
        };
        Self::new(&config)
    }

    /// Get pixel at position
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<bool> {
        if x >= self.capabilities.width || y >= self.capabilities.height {
            return None;
        }
        self.pixels.get((y * self.capabilities.width + x) as usize).copied()
    }

    /// Get reference to state for inspection
    pub fn state(&self) -> Arc<Mutex<MockDriverState>> {
        Arc::clone(&self.state)
    }

    fn lock_state(&self) -> MutexGuard<'_, MockDriverState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Count number of lit pixels in the last frame
    pub fn count_on_pixels(&self) -> usize {
        self.pixels.iter().filter(|&&p| p).count()
    }

    /// Render the last frame as text, `#` for lit pixels
    pub fn to_ascii(&self) -> String {
        let w = self.capabilities.width as usize;
        let mut out = String::with_capacity(self.pixels.len() + self.capabilities.height as usize);
        for row in self.pixels.chunks(w) {
            out.extend(row.iter().map(|&p| if p { '#' } else { '.' }));
            out.push('\n');
        }
        out
    }

    /// Save the last frame to a PBM file (for visual debugging)
    pub fn save_to_pbm(&self, path: &Path) -> std::io::Result<()> {
        let mut file = BufWriter::new(File::create(path)?);

        // PBM header
        writeln!(file, "P1")?;
        writeln!(file, "{} {}", self.capabilities.width, self.capabilities.height)?;

        let w = self.capabilities.width as usize;
        for row in self.pixels.chunks(w) {
            let line: Vec<&str> = row.iter().map(|&p| if p { "1" } else { "0" }).collect();
            writeln!(file, "{}", line.join(" "))?;
        }

        file.flush()
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        let mut state = self.lock_state();

        if state.simulate_flush_failure {
            return Err(DisplayError::Command("simulated flush failure".to_string()));
        }

        state.flush_count += 1;
        Ok(())
    }
}

impl DisplayDriver for MockDriver {
    fn capabilities(&self) -> &DisplayCapabilities {
        &self.capabilities
    }

    fn init(&mut self) -> Result<(), DisplayError> {
        let mut state = self.lock_state();

        if state.simulate_init_failure {
            return Err(DisplayError::PanelInit("simulated init failure".to_string()));
        }

        state.init_count += 1;
        state.is_initialized = true;
        Ok(())
    }

    fn set_brightness(&mut self, value: u8) -> Result<(), DisplayError> {
        self.lock_state().last_brightness = Some(value);
        Ok(())
    }

    fn clear(&mut self) -> Result<(), DisplayError> {
        self.lock_state().clear_count += 1;
        self.pixels.fill(false);
        self.flush()
    }

    fn write_buffer(&mut self, buffer: &[u8]) -> Result<(), DisplayError> {
        let expected_size = self.capabilities.frame_bytes();

        if buffer.len() != expected_size {
            return Err(DisplayError::BufferSizeMismatch {
                expected: expected_size,
                actual: buffer.len(),
            });
        }

        self.lock_state().bytes_written += buffer.len();

        let mut changed = false;
        for (i, pixel) in self.pixels.iter_mut().enumerate() {
            let lit = buffer[i / 8] & (1 << (i % 8)) != 0;
            changed |= *pixel != lit;
            *pixel = lit;
        }

        self.flush()?;

        if changed {
            if let Some(path) = self.dump_path.as_deref() {
                match self.save_to_pbm(path) {
                    Ok(()) => debug!("Frame mirrored to {}", path.display()),
                    Err(e) => warn!("Failed to write frame to {}: {}", path.display(), e),
                }
            }
        }
        Ok(())
    }

    fn set_invert(&mut self, inverted: bool) -> Result<(), DisplayError> {
        self.lock_state().last_invert = Some(inverted);
        Ok(())
    }

    fn set_rotation(&mut self, degrees: u16) -> Result<(), DisplayError> {
        if !matches!(degrees, 0 | 90 | 180 | 270) {
            return Err(DisplayError::InvalidRotation(degrees));
        }
        self.lock_state().last_rotation = Some(degrees);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_driver_creation() {
        let driver = MockDriver::new_with_size(128, 32).unwrap();
        assert_eq!(driver.capabilities().width, 128);
        assert_eq!(driver.capabilities().height, 32);
        assert_eq!(driver.capabilities().frame_bytes(), 512);
        assert_eq!(driver.count_on_pixels(), 0);
    }

    #[test]
    fn test_mock_driver_rejects_empty_panel() {
        assert!(MockDriver::new_with_size(0, 32).is_err());
    }

    #[test]
    fn test_mock_driver_init() {
        let mut driver = MockDriver::new_with_size(128, 32).unwrap();

        let state = driver.state();
        assert!(!state.lock().unwrap().is_initialized);

        driver.init().unwrap();

        assert_eq!(state.lock().unwrap().init_count, 1);
        assert!(state.lock().unwrap().is_initialized);
    }

    #[test]
    fn test_mock_driver_write_buffer() {
        let mut driver = MockDriver::new_with_size(128, 32).unwrap();

        driver.write_buffer(&vec![0xFF; 512]).unwrap();

        assert_eq!(driver.count_on_pixels(), 128 * 32);
        assert_eq!(driver.state().lock().unwrap().bytes_written, 512);
        assert_eq!(driver.state().lock().unwrap().flush_count, 1);
    }

    #[test]
    fn test_mock_driver_unpacks_lsb_first() {
        let mut driver = MockDriver::new_with_size(16, 1).unwrap();
        driver.write_buffer(&[0b0000_0010, 0x00]).unwrap();
        assert_eq!(driver.get_pixel(1, 0), Some(true));
        assert_eq!(driver.get_pixel(0, 0), Some(false));
        assert_eq!(driver.to_ascii(), ".#..............\n");
    }

    #[test]
    fn test_mock_driver_buffer_size_mismatch() {
        let mut driver = MockDriver::new_with_size(128, 32).unwrap();
        assert!(matches!(
            driver.write_buffer(&vec![0xFF; 100]),
            Err(DisplayError::BufferSizeMismatch { expected: 512, actual: 100 })
        ));
    }

    #[test]
    fn test_mock_driver_clear() {
        let mut driver = MockDriver::new_with_size(128, 32).unwrap();
        driver.write_buffer(&vec![0xFF; 512]).unwrap();
        driver.clear().unwrap();
        assert_eq!(driver.count_on_pixels(), 0);
        assert_eq!(driver.state().lock().unwrap().clear_count, 1);
    }

    #[test]
    fn test_mock_driver_rotation() {
        let mut driver = MockDriver::new_with_size(128, 32).unwrap();

        driver.set_rotation(180).unwrap();
        assert_eq!(driver.state().lock().unwrap().last_rotation, Some(180));

        assert!(driver.set_rotation(45).is_err());
    }

    #[test]
    fn test_mock_driver_applies_panel_config() {
        let config = DisplayConfig {
            brightness: Some(200),
            invert: Some(true),
            rotate_deg: Some(180),
            ..Default::default()
        };
        let driver = MockDriver::new(&config).unwrap();
        let state = driver.state();
        let state = state.lock().unwrap();
        assert_eq!(state.last_brightness, Some(200));
        assert_eq!(state.last_invert, Some(true));
        assert_eq!(state.last_rotation, Some(180));

        let bad = DisplayConfig { rotate_deg: Some(45), ..Default::default() };
        assert!(matches!(MockDriver::new(&bad), Err(DisplayError::InvalidRotation(45))));
    }

    #[test]
    fn test_mock_driver_simulated_failure() {
        let mut driver = MockDriver::new_with_size(128, 32).unwrap();

        driver.state().lock().unwrap().simulate_flush_failure = true;
        assert!(driver.write_buffer(&vec![0x00; 512]).is_err());

        driver.state().lock().unwrap().simulate_flush_failure = false;
        assert!(driver.write_buffer(&vec![0x00; 512]).is_ok());
    }

    #[test]
    fn test_mock_driver_pbm_dump() {
        let path = std::env::temp_dir().join(format!("lightpainter-mock-{}.pbm", std::process::id()));
        let config = DisplayConfig {
            width: Some(8),
            height: Some(2),
            dump_frame: Some(path.clone()),
            ..Default::default()
        };
        let mut driver = MockDriver::new(&config).unwrap();
        driver.write_buffer(&[0x01, 0x80]).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(text, "P1\n8 2\n1 0 0 0 0 0 0 0\n0 0 0 0 0 0 0 1\n");
    }
}
