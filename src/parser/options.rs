// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/// Options that defines parsing.
pub struct ParseOptions {
    /// Skip unknown elements together with their subtree.
    ///
    /// All elements which is not defined in `ElementId` are unknown.
    /// Skipping is the default, because the format is designed to
    /// evolve; when disabled, an unknown element is a fatal
    /// `InvalidHierarchy` error.
    pub skip_unknown_elements: bool,
}

impl Default for ParseOptions {
    fn default() -> ParseOptions {
        ParseOptions {
            skip_unknown_elements: true,
        }
    }
}
