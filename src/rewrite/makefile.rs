//! Rule table for `makefile-adapter`.
//!
//! ORDER MATTERS: carriage returns are stripped first so CRLF line
//! continuations (`\` + CRLF) become plain `\` + LF before any continuation
//! rule runs. The `../src/` prefix and continuation rules must run before the
//! bare `src/` rule, so `../src/foo.o` becomes `foo.o` rather than
//! `../foo.o`. Likewise `cmd.exe` is rewritten to `sh` before the generic
//! `.exe` strip runs.

use once_cell::sync::Lazy;
use regex::Regex;

use super::RewriteRule;

/// Install path the IDE hard-wires into every recipe line.
const TOOLCHAIN_BIN: &str =
    r"C:\\Program Files \(x86\)\\Atmel\\Studio\\7\.0\\toolchain\\avr8\\avr8-gnu-toolchain\\bin\\";

pub static RULES: Lazy<Vec<RewriteRule>> = Lazy::new(|| {
    vec![
        RewriteRule {
            name: "strip_carriage_returns",
            pattern: Regex::new(r"\r").expect("valid regex"),
            replacement: "",
        },
        RewriteRule {
            name: "strip_parent_src_prefix",
            pattern: Regex::new(r"\.\./src/").expect("valid regex"),
            replacement: "",
        },
        RewriteRule {
            name: "strip_parent_src_continuation",
            pattern: Regex::new(r"\.\./src \\\n").expect("valid regex"),
            replacement: "",
        },
        RewriteRule {
            name: "strip_doc_continuation",
            pattern: Regex::new(r"\.\./doc.* \\\n").expect("valid regex"),
            replacement: "",
        },
        RewriteRule {
            name: "strip_src_segment",
            pattern: Regex::new(r"src/").expect("valid regex"),
            replacement: "",
        },
        RewriteRule {
            name: "shell_for_cmd",
            pattern: Regex::new(r"cmd\.exe").expect("valid regex"),
            replacement: "sh",
        },
        RewriteRule {
            name: "strip_toolchain_bin_path",
            pattern: Regex::new(TOOLCHAIN_BIN).expect("valid regex"),
            replacement: "",
        },
        RewriteRule {
            name: "strip_exe_suffix",
            pattern: Regex::new(r"\.exe").expect("valid regex"),
            replacement: "",
        },
        RewriteRule {
            name: "strip_gcc_version_pin",
            pattern: Regex::new(r" : 4\.9\.2").expect("valid regex"),
            replacement: "",
        },
    ]
});

#[cfg(test)]
mod tests {
    use crate::rewrite::apply_rules;

    use super::RULES;

    const TOOLCHAIN_BIN_LITERAL: &str =
        r"C:\Program Files (x86)\Atmel\Studio\7.0\toolchain\avr8\avr8-gnu-toolchain\bin\";

    fn adapt(input: &str) -> String {
        apply_rules(input, &RULES).content
    }

    #[test]
    fn parent_src_prefix_fires_before_bare_src() {
        assert_eq!(adapt("../src/foo.o \\\n"), "foo.o \\\n");
    }

    #[test]
    fn strips_exe_suffix_everywhere() {
        assert_eq!(adapt("gcc.exe -o out.exe"), "gcc -o out");
    }

    #[test]
    fn strips_version_pin_and_carriage_return() {
        assert_eq!(adapt("CC : 4.9.2\r\n"), "CC\n");
    }

    #[test]
    fn strips_toolchain_path_and_exe_suffix_together() {
        let input = format!("{TOOLCHAIN_BIN_LITERAL}gcc.exe");
        assert_eq!(adapt(&input), "gcc");
    }

    #[test]
    fn rewrites_cmd_shell_to_sh() {
        // cmd.exe must not fall through to the .exe strip and end up as "cmd".
        assert_eq!(adapt("SHELL := cmd.exe\n"), "SHELL := sh\n");
    }

    #[test]
    fn removes_parent_src_continuation_line() {
        assert_eq!(adapt("a.c \\\n../src \\\nb.c\n"), "a.c \\\nb.c\n");
    }

    #[test]
    fn keeps_parent_src_without_continuation() {
        assert_eq!(adapt("../src\n"), "../src\n");
    }

    #[test]
    fn removes_doc_reference_continuation_lines() {
        assert_eq!(adapt("../doc/doxygen.cfg \\\nmain.c\n"), "main.c\n");
    }

    #[test]
    fn output_satisfies_removal_properties() {
        let input = format!(
            "SHELL := cmd.exe\r\nCC := {TOOLCHAIN_BIN_LITERAL}avr-gcc.exe : 4.9.2\r\nsrc/a.o: ../src/a.c\r\n"
        );
        let out = adapt(&input);
        assert!(!out.contains('\r'), "got: {out}");
        assert!(!out.contains("cmd.exe"), "got: {out}");
        assert!(!out.contains(".exe"), "got: {out}");
        assert!(!out.contains(" : 4.9.2"), "got: {out}");
    }

    #[test]
    fn adapts_exported_makefile_fixture() {
        let input = concat!(
            "SHELL := cmd.exe\r\n",
            "\r\n",
            "C_SRCS +=  \\\r\n",
            "../src/main.c \\\r\n",
            "../src \\\r\n",
            "../doc/doxygen.cfg \\\r\n",
            "src/modules/io/io.c\r\n",
            "\r\n",
            "main.o: ../src/main.c\r\n",
            "\tC:\\Program Files (x86)\\Atmel\\Studio\\7.0\\toolchain\\avr8\\avr8-gnu-toolchain\\bin\\avr-gcc.exe -c -o main.o ../src/main.c\r\n",
            "\r\n",
            "# avr-gcc : 4.9.2\r\n",
        );
        let expected = concat!(
            "SHELL := sh\n",
            "\n",
            "C_SRCS +=  \\\n",
            "main.c \\\n",
            "modules/io/io.c\n",
            "\n",
            "main.o: main.c\n",
            "\tavr-gcc -c -o main.o main.c\n",
            "\n",
            "# avr-gcc\n",
        );
        similar_asserts::assert_eq!(adapt(input), expected);
    }

    #[test]
    fn is_idempotent_on_makefile_text() {
        let input = concat!(
            "SHELL := cmd.exe\r\n",
            "OBJS += ../src/main.o \\\r\n",
            "src/core/serial.o\r\n",
            "# avr-gcc : 4.9.2\r\n",
        );
        let once = adapt(input);
        let twice = adapt(&once);
        assert_eq!(once, twice);
    }
}
