// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! This module contains submodules which represent the attribute
//! value types of the vector drawable format.

pub use self::color::{Color, ColorProvider, ColorRef};
pub use self::number::{write_num, FuzzyEq};
pub use self::transform::Transform;

pub mod path;

mod color;
mod number;
mod transform;
