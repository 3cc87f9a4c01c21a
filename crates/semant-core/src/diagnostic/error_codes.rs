//! Error code registry with descriptions and help text
//!
//! Ranges:
//! - S1xxx: Declaration and name resolution errors
//! - S2xxx: Control-flow errors
//! - S3xxx: Type errors

// === Error Code Constants ===

// S1xxx - Declarations and names
pub const DUPLICATE_FUNCTION: &str = "S1001";
pub const DUPLICATE_GLOBAL: &str = "S1002";
pub const DUPLICATE_PARAMETER: &str = "S1003";
pub const DUPLICATE_IN_SCOPE: &str = "S1004";
pub const RESERVED_NAME_CONFLICT: &str = "S1005";
pub const VOID_VARIABLE: &str = "S1006";
pub const MISSING_ENTRY_POINT: &str = "S1007";
pub const INVALID_ENTRY_POINT: &str = "S1008";
pub const UNDEFINED_SYMBOL: &str = "S1009";
pub const UNDEFINED_FUNCTION: &str = "S1010";

// S2xxx - Control flow
pub const MISSING_RETURN: &str = "S2001";
pub const MISPLACED_LOOP_CONTROL: &str = "S2002";

// S3xxx - Types
pub const ARGUMENT_COUNT_MISMATCH: &str = "S3001";
pub const ARGUMENT_TYPE_MISMATCH: &str = "S3002";
pub const MISSING_ARGUMENTS: &str = "S3003";
pub const RETURN_TYPE_MISMATCH: &str = "S3004";
pub const ASSIGNMENT_TYPE_MISMATCH: &str = "S3005";
pub const ARITHMETIC_TYPE_MISMATCH: &str = "S3006";
pub const UNARY_TYPE_MISMATCH: &str = "S3007";
pub const RELATIONAL_TYPE_MISMATCH: &str = "S3008";
pub const EQUALITY_TYPE_MISMATCH: &str = "S3009";
pub const LOGICAL_TYPE_MISMATCH: &str = "S3010";
pub const BITWISE_TYPE_MISMATCH: &str = "S3011";

// === Error Code Info Registry ===

/// Error code descriptor with code, description, and optional help text
#[derive(Debug, Clone)]
pub struct ErrorCodeInfo {
    /// The error code string (e.g., "S1001")
    pub code: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Optional contextual help text
    pub help: Option<&'static str>,
}

/// Get info for an error code, if known
pub fn lookup(code: &str) -> Option<ErrorCodeInfo> {
    ERROR_CODES
        .iter()
        .find(|e| e.code.eq_ignore_ascii_case(code))
        .cloned()
}

/// Get help text for an error code
pub fn help_for(code: &str) -> Option<&'static str> {
    lookup(code).and_then(|e| e.help)
}

/// Get description for an error code
pub fn description_for(code: &str) -> Option<&'static str> {
    lookup(code).map(|e| e.description)
}

/// All known error codes with descriptions and help
pub static ERROR_CODES: &[ErrorCodeInfo] = &[
    ErrorCodeInfo {
        code: DUPLICATE_FUNCTION,
        description: "Function defined more than once",
        help: Some("rename or remove one of the definitions; every function name must be unique"),
    },
    ErrorCodeInfo {
        code: DUPLICATE_GLOBAL,
        description: "Global variable defined more than once",
        help: Some("rename or remove one of the global declarations"),
    },
    ErrorCodeInfo {
        code: DUPLICATE_PARAMETER,
        description: "Duplicate parameter name",
        help: Some("parameter names must be unique within one function signature"),
    },
    ErrorCodeInfo {
        code: DUPLICATE_IN_SCOPE,
        description: "Variable defined more than once in the same scope",
        help: Some(
            "locals share the function's scope with its parameters; \
             use a different name or move the declaration into a nested block",
        ),
    },
    ErrorCodeInfo {
        code: RESERVED_NAME_CONFLICT,
        description: "Declaration uses the name of the built-in print intrinsic",
        help: Some("the print intrinsic name is reserved for functions and global variables"),
    },
    ErrorCodeInfo {
        code: VOID_VARIABLE,
        description: "Variable declared with type Void",
        help: Some("Void can only be used as a function return type"),
    },
    ErrorCodeInfo {
        code: MISSING_ENTRY_POINT,
        description: "Entry function is not defined",
        help: Some("define the entry function, e.g. `Void main() { return; }`"),
    },
    ErrorCodeInfo {
        code: INVALID_ENTRY_POINT,
        description: "Entry function has the wrong signature",
        help: Some("the entry function must return Void and take no parameters"),
    },
    ErrorCodeInfo {
        code: UNDEFINED_SYMBOL,
        description: "Variable is not defined",
        help: Some("declare the variable in this block, an enclosing block, or as a global"),
    },
    ErrorCodeInfo {
        code: UNDEFINED_FUNCTION,
        description: "Function is not defined",
        help: Some("check the spelling or declare the function"),
    },
    ErrorCodeInfo {
        code: MISSING_RETURN,
        description: "Function has no top-level return statement",
        help: Some(
            "returns nested inside `if` or loops are not counted; \
             add a `return` at the end of the function body",
        ),
    },
    ErrorCodeInfo {
        code: MISPLACED_LOOP_CONTROL,
        description: "`break` or `continue` outside of a loop",
        help: Some("`break` and `continue` may only appear inside `while` or `for` bodies"),
    },
    ErrorCodeInfo {
        code: ARGUMENT_COUNT_MISMATCH,
        description: "Wrong number of arguments",
        help: Some("pass exactly as many arguments as the function declares parameters"),
    },
    ErrorCodeInfo {
        code: ARGUMENT_TYPE_MISMATCH,
        description: "Argument type does not match the parameter type",
        help: Some("argument types must match parameter types exactly; no implicit conversions"),
    },
    ErrorCodeInfo {
        code: MISSING_ARGUMENTS,
        description: "Print intrinsic called without arguments",
        help: Some("the print intrinsic takes a String format as its first argument"),
    },
    ErrorCodeInfo {
        code: RETURN_TYPE_MISMATCH,
        description: "Returned value does not match the declared return type",
        help: Some("use `return;` in Void functions and a value of the declared type otherwise"),
    },
    ErrorCodeInfo {
        code: ASSIGNMENT_TYPE_MISMATCH,
        description: "Assigned value does not match the variable type",
        help: Some("the right-hand side must have exactly the variable's declared type"),
    },
    ErrorCodeInfo {
        code: ARITHMETIC_TYPE_MISMATCH,
        description: "Invalid operand types for an arithmetic operator",
        help: Some("`+ - * /` need Int or Float operands; `%` needs two Int operands"),
    },
    ErrorCodeInfo {
        code: UNARY_TYPE_MISMATCH,
        description: "Invalid operand type for unary negation",
        help: Some("only Int and Float values can be negated"),
    },
    ErrorCodeInfo {
        code: RELATIONAL_TYPE_MISMATCH,
        description: "Invalid operand types for a relational operator",
        help: Some("`< <= >= >` compare Int or Float operands"),
    },
    ErrorCodeInfo {
        code: EQUALITY_TYPE_MISMATCH,
        description: "Invalid operand types for an equality operator",
        help: Some("`==` and `!=` accept Int, Float, or Bool operands"),
    },
    ErrorCodeInfo {
        code: LOGICAL_TYPE_MISMATCH,
        description: "Invalid operand types for a logical operator",
        help: Some("`&& || ^ !` require Bool operands"),
    },
    ErrorCodeInfo {
        code: BITWISE_TYPE_MISMATCH,
        description: "Invalid operand types for a bitwise operator",
        help: Some("`& | ~` require Int operands"),
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic::ErrorKind;

    #[test]
    fn test_no_duplicate_codes() {
        let mut seen = std::collections::HashSet::new();
        for entry in ERROR_CODES {
            assert!(
                seen.insert(entry.code),
                "Duplicate error code: {}",
                entry.code
            );
        }
    }

    #[test]
    fn test_every_kind_is_registered() {
        for kind in ErrorKind::ALL {
            assert!(
                lookup(kind.code()).is_some(),
                "{:?} ({}) missing from registry",
                kind,
                kind.code()
            );
        }
        assert_eq!(ERROR_CODES.len(), ErrorKind::ALL.len());
    }

    #[test]
    fn test_lookup_existing() {
        let info = lookup("S3006").unwrap();
        assert_eq!(
            info.description,
            "Invalid operand types for an arithmetic operator"
        );
        assert!(info.help.is_some());
    }

    #[test]
    fn test_lookup_case_insensitive() {
        assert!(lookup("s1007").is_some());
    }

    #[test]
    fn test_lookup_missing() {
        assert!(lookup("S9999").is_none());
        assert!(help_for("ZZZZ").is_none());
    }

    #[test]
    fn test_description_for() {
        assert_eq!(
            description_for(MISSING_RETURN).unwrap(),
            "Function has no top-level return statement"
        );
    }

    #[test]
    fn test_code_ranges() {
        for entry in ERROR_CODES {
            assert!(
                entry.code.starts_with("S1")
                    || entry.code.starts_with("S2")
                    || entry.code.starts_with("S3"),
                "{} outside known ranges",
                entry.code
            );
        }
    }
}
