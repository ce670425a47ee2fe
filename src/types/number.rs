// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use dtoa;

use float_cmp::ApproxEqUlps;

// Canonical output keeps 8 decimal digits, which is more than any
// realistic icon coordinate carries.
const POW: f64 = 100_000_000.0;

/// Writes a number to the buffer in the canonical form.
///
/// The value is rounded to 8 decimal digits and printed without an
/// exponent for realistic coordinates and without a trailing `.0`.
pub fn write_num(num: f64, buf: &mut Vec<u8>) {
    let value = (num * POW).round() / POW;

    if value == 0.0 {
        // including -0.0
        buf.push(b'0');
        return;
    }

    dtoa::write(&mut *buf, value).unwrap();

    // dtoa always adds '.0', so we have to remove it
    if buf.len() >= 2 && buf[buf.len() - 1] == b'0' && buf[buf.len() - 2] == b'.' {
        let new_len = buf.len() - 2;
        buf.truncate(new_len);
    }
}

/// A fuzzy float comparison, aka `approximately equal`.
pub trait FuzzyEq<Rhs: ?Sized = Self> {
    /// Returns `true` if the values are approximately equal.
    fn fuzzy_eq(&self, other: &Rhs) -> bool;

    /// Returns `true` if the values are not approximately equal.
    #[inline]
    fn fuzzy_ne(&self, other: &Rhs) -> bool {
        !self.fuzzy_eq(other)
    }
}

impl FuzzyEq for f64 {
    #[inline]
    fn fuzzy_eq(&self, other: &f64) -> bool {
        self.approx_eq_ulps(other, 4)
    }
}
