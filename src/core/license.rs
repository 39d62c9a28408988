//! Built-in license catalog for generated files.
//!
//! Each license carries a short header (placed as a comment banner at the
//! top of generated source files) and a full body (written to `LICENSE` by
//! project scaffolding). The `none` license produces neither.

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct License {
    pub id: &'static str,
    pub name: &'static str,
    /// Header comment text; `{{copyright}}` is replaced at render time.
    pub header: &'static str,
    /// Full license body for the LICENSE file; empty for `none`.
    pub body: &'static str,
}

const APACHE2_HEADER: &str = "\
{{copyright}}

Licensed under the Apache License, Version 2.0 (the \"License\");
you may not use this file except in compliance with the License.
You may obtain a copy of the License at

    http://www.apache.org/licenses/LICENSE-2.0

Unless required by applicable law or agreed to in writing, software
distributed under the License is distributed on an \"AS IS\" BASIS,
WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
See the License for the specific language governing permissions and
limitations under the License.";

const MIT_HEADER: &str = "\
{{copyright}}

Use of this source code is governed by an MIT-style
license that can be found in the LICENSE file.";

const CATALOG: &[License] = &[
    License {
        id: "apache2",
        name: "Apache License 2.0",
        header: APACHE2_HEADER,
        body: include_str!("licenses/apache2.txt"),
    },
    License {
        id: "mit",
        name: "MIT License",
        header: MIT_HEADER,
        body: include_str!("licenses/mit.txt"),
    },
    License {
        id: "none",
        name: "None",
        header: "",
        body: "",
    },
];

/// Look up a license by identifier (case-insensitive).
pub fn find(id: &str) -> Result<&'static License> {
    CATALOG
        .iter()
        .find(|l| l.id.eq_ignore_ascii_case(id.trim()))
        .ok_or_else(|| Error::license_not_found(id))
}

pub fn known_ids() -> Vec<&'static str> {
    CATALOG.iter().map(|l| l.id).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_builtin_licenses() {
        assert_eq!(find("apache2").unwrap().name, "Apache License 2.0");
        assert_eq!(find("mit").unwrap().name, "MIT License");
        assert_eq!(find("MIT").unwrap().id, "mit");
    }

    #[test]
    fn none_license_is_empty() {
        let l = find("none").unwrap();
        assert!(l.header.is_empty());
        assert!(l.body.is_empty());
    }

    #[test]
    fn unknown_license_errors_with_hint() {
        let err = find("wtfpl").unwrap_err();
        assert_eq!(err.code, crate::ErrorCode::LicenseNotFound);
        assert!(!err.hints.is_empty());
    }

    #[test]
    fn headers_carry_copyright_placeholder() {
        assert!(find("apache2").unwrap().header.contains("{{copyright}}"));
        assert!(find("mit").unwrap().header.contains("{{copyright}}"));
    }
}
