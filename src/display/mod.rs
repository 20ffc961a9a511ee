/*
 *  display/mod.rs
 *
 *  Lightpainter - paint with light
 *  (c) 2020-26 Stuart Hunter
 *
 *  Display subsystem - drivers, drawing surface and canvas
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

// Core trait definitions
pub mod traits;
pub mod error;
pub mod factory;

// Drawing surface consumed by the menu renderer
pub mod surface;
pub mod canvas;
pub mod glyphs;
pub mod recording;

// Display drivers
pub mod drivers;

// Re-exports for convenience
pub use traits::{DisplayDriver, DisplayCapabilities};
pub use error::{DisplayError, DisplayFactoryError};
pub use factory::{create_driver, BoxedDriver};
pub use surface::{DrawColor, FontId, IconId, Surface};
pub use canvas::Canvas;
pub use recording::{DrawOp, RecordingSurface};
