// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The element tree builder.
//!
//! Drives the XML tokenizer and the attribute decoder to assemble the
//! typed [`Document`](../struct.Document.html) hierarchy, enforcing the
//! format's nesting rules. Unknown elements and attributes are skipped
//! with a logged warning; structural anomalies abort the parse with the
//! first error and its byte offset.

pub use self::options::ParseOptions;

pub(crate) use self::parser::{parse_document, parse_document_str};

mod attributes;
mod options;
mod parser;
