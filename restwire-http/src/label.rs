/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Percent-encoding for URI path labels.
//!
//! Path labels are user data spliced into the request path, so everything
//! outside the RFC 3986 unreserved set must be escaped or the label could
//! change the route.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

const LABEL: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Encodes `value` for use as a single path segment.
pub fn fmt_string(value: &str) -> String {
    utf8_percent_encode(value, LABEL).to_string()
}

#[cfg(test)]
mod test {
    use super::fmt_string;

    #[test]
    fn unreserved_characters_pass_through() {
        assert_eq!(fmt_string("my-project_1.2~x"), "my-project_1.2~x");
    }

    #[test]
    fn reserved_characters_are_escaped() {
        assert_eq!(fmt_string("a/b"), "a%2Fb");
        assert_eq!(fmt_string("a b?c"), "a%20b%3Fc");
        assert_eq!(fmt_string("space name"), "space%20name");
    }

    #[test]
    fn non_ascii_is_utf8_escaped() {
        assert_eq!(fmt_string("é"), "%C3%A9");
    }
}
