// system-tests/src/fixtures/python.rs
// ============================================================================
// Module: Python Fixtures
// Description: Red/green Python sources for the lint layer.
// Purpose: Trigger (or survive) the Python linter's default pyflakes rules.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Red fixtures name the pycodestyle/pyflakes rule code the linter must print
//! (`F821`, `F401`, `E712`, `F841`); all of them sit inside the linter's
//! default rule set, so no fixture configuration file is required.

use super::SourceFixture;

// ============================================================================
// SECTION: Red Fixtures
// ============================================================================

/// Returning an undefined name fails at runtime.
pub const UNDEFINED_NAME: SourceFixture = SourceFixture {
    name: "py-undefined-name",
    file_name: "bad.py",
    source: r"def foo():
    return undefined_var
",
    diagnostic: Some("F821"),
};

/// Unused imports are dead weight and mask real dependencies.
pub const UNUSED_IMPORTS: SourceFixture = SourceFixture {
    name: "py-unused-imports",
    file_name: "bad.py",
    source: r#"import os
import sys
import json


def greet():
    return "hello"
"#,
    diagnostic: Some("F401"),
};

/// Comparing against `True` instead of truthiness.
pub const TRUE_COMPARISON: SourceFixture = SourceFixture {
    name: "py-true-comparison",
    file_name: "bad.py",
    source: r"x = 1
if x == True:
    pass
",
    diagnostic: Some("E712"),
};

/// A local bound and never read.
pub const UNUSED_LOCAL: SourceFixture = SourceFixture {
    name: "py-unused-local",
    file_name: "bad.py",
    source: r"def compute():
    result = 42
    return None
",
    diagnostic: Some("F841"),
};

/// A second undefined-name fixture for re-enforcement coverage.
pub const ANOTHER_UNDEFINED_NAME: SourceFixture = SourceFixture {
    name: "py-another-undefined-name",
    file_name: "bad2.py",
    source: r"def bar():
    return another_undefined
",
    diagnostic: Some("F821"),
};

/// Red fixtures for the Python lint layer.
pub const RED: [SourceFixture; 4] =
    [UNDEFINED_NAME, UNUSED_IMPORTS, TRUE_COMPARISON, UNUSED_LOCAL];

// ============================================================================
// SECTION: Green Fixtures
// ============================================================================

/// Fully annotated function.
pub const TYPED_FUNCTION: SourceFixture = SourceFixture {
    name: "py-typed-function",
    file_name: "clean.py",
    source: r"def add(a: int, b: int) -> int:
    return a + b
",
    diagnostic: None,
};

/// Import that is actually used.
pub const USED_IMPORT: SourceFixture = SourceFixture {
    name: "py-used-import",
    file_name: "clean.py",
    source: r"import os


def get_cwd() -> str:
    return os.getcwd()
",
    diagnostic: None,
};

/// Class with a fluent mutator.
pub const FLUENT_CLASS: SourceFixture = SourceFixture {
    name: "py-fluent-class",
    file_name: "clean.py",
    source: r#"class Calculator:
    def __init__(self, value: int = 0) -> None:
        self.value = value

    def add(self, n: int) -> "Calculator":
        self.value += n
        return self
"#,
    diagnostic: None,
};

/// Green fixtures for the Python lint layer.
pub const GREEN: [SourceFixture; 3] = [TYPED_FUNCTION, USED_IMPORT, FLUENT_CLASS];
