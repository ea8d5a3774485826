// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Core functionalities: the image buffer and the transforms applied to it.

pub mod buffer;
pub mod pack;
pub mod resize;
