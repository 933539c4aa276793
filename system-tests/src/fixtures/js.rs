// system-tests/src/fixtures/js.rs
// ============================================================================
// Module: JavaScript Fixtures
// Description: Red/green JS sources for the lint layer.
// Purpose: Trigger (or survive) the JS linter's default suspicious-code rules.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Green fixtures are pre-formatted the way the JS linter's default formatter
//! expects (tab indentation, double quotes, trailing newline) because its
//! check mode enforces format alongside lint rules. Sources use escaped tabs
//! so the indentation style survives editors that rewrite whitespace.

use super::SourceFixture;

// ============================================================================
// SECTION: Red Fixtures
// ============================================================================

/// Debugger statements must never survive the lint layer.
pub const DEBUGGER_STATEMENT: SourceFixture = SourceFixture {
    name: "js-debugger-statement",
    file_name: "bad.js",
    source: "const x = 1;\ndebugger;\nconsole.log(x);\n",
    diagnostic: Some("noDebugger"),
};

/// Global `eval` is a code-injection foothold.
pub const GLOBAL_EVAL: SourceFixture = SourceFixture {
    name: "js-global-eval",
    file_name: "bad.js",
    source: "function run(code) {\n\teval(code);\n}\nrun(\"1+1\");\n",
    diagnostic: Some("noGlobalEval"),
};

/// Duplicate parameters silently shadow earlier bindings.
pub const DUPLICATE_PARAMETERS: SourceFixture = SourceFixture {
    name: "js-duplicate-parameters",
    file_name: "bad.js",
    source: "function add(a, b, a) {\n\treturn a + b;\n}\nadd(1, 2, 3);\n",
    diagnostic: Some("noDuplicateParameters"),
};

/// Code after `return` is dead and usually a refactoring accident.
pub const UNREACHABLE_CODE: SourceFixture = SourceFixture {
    name: "js-unreachable-code",
    file_name: "bad.js",
    source: "function getValue() {\n\treturn 42;\n\tconsole.log(\"unreachable\");\n}\ngetValue();\n",
    diagnostic: Some("noUnreachable"),
};

/// Red fixtures for the JS lint layer.
pub const RED: [SourceFixture; 4] =
    [DEBUGGER_STATEMENT, GLOBAL_EVAL, DUPLICATE_PARAMETERS, UNREACHABLE_CODE];

// ============================================================================
// SECTION: Green Fixtures
// ============================================================================

/// Plain function with a call site.
pub const CLEAN_FUNCTION: SourceFixture = SourceFixture {
    name: "js-clean-function",
    file_name: "clean.js",
    source: "function add(a, b) {\n\treturn a + b;\n}\nconsole.log(add(1, 2));\n",
    diagnostic: None,
};

/// Modern `const`/`let` bindings.
pub const CLEAN_BINDINGS: SourceFixture = SourceFixture {
    name: "js-clean-bindings",
    file_name: "clean.js",
    source: "const PI = 3.14159;\nlet count = 0;\ncount += 1;\nconsole.log(PI, count);\n",
    diagnostic: None,
};

/// Async/await flow.
pub const CLEAN_ASYNC: SourceFixture = SourceFixture {
    name: "js-clean-async",
    file_name: "clean.js",
    source: "async function fetchData(url) {\n\tconst response = await fetch(url);\n\treturn \
             response.json();\n}\nfetchData(\"https://example.com\");\n",
    diagnostic: None,
};

/// Class with a fluent method.
pub const CLEAN_CLASS: SourceFixture = SourceFixture {
    name: "js-clean-class",
    file_name: "clean.js",
    source: "class Counter {\n\tconstructor() {\n\t\tthis.value = 0;\n\t}\n\tincrement() \
             {\n\t\tthis.value += 1;\n\t\treturn this;\n\t}\n}\nconst c = new \
             Counter();\nc.increment();\n",
    diagnostic: None,
};

/// Small helper used by the hook-layer green path.
pub const CLEAN_GREETER: SourceFixture = SourceFixture {
    name: "js-clean-greeter",
    file_name: "clean.js",
    source: "function greet(name) {\n\treturn name.toUpperCase();\n}\nconsole.log(greet(\"world\"));\n",
    diagnostic: None,
};

/// Green fixtures for the JS lint layer.
pub const GREEN: [SourceFixture; 5] =
    [CLEAN_FUNCTION, CLEAN_BINDINGS, CLEAN_ASYNC, CLEAN_CLASS, CLEAN_GREETER];
