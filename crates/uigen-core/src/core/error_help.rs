use crate::core::UigenError;

/// Provides helpful suggestions for common errors
pub trait ErrorHelp {
    fn help(&self) -> Option<String>;
}

impl ErrorHelp for UigenError {
    fn help(&self) -> Option<String> {
        match self {
            UigenError::InvalidName(msg) => {
                if msg.contains("empty") {
                    Some(
                        "💡 Suggestion: Provide a component name, e.g. 'uigen generate select'"
                            .to_string(),
                    )
                } else {
                    Some(
                        "💡 Suggestion: Use a single plain folder name, e.g. 'uigen generate date-picker'"
                            .to_string(),
                    )
                }
            }
            UigenError::AlreadyExists { .. } => Some(
                "💡 Suggestion: Pick another name, or remove the existing component folder first"
                    .to_string(),
            ),
            UigenError::TemplateNotFound(_) => Some(
                "💡 Suggestion: Check the 'components_dir' and 'template' entries in uigen.yaml, or pass --root"
                    .to_string(),
            ),
            UigenError::Path(msg) => {
                if msg.contains("Could not find") {
                    Some(
                        "💡 Suggestion: Run uigen from inside the component library, or pass --root <dir>"
                            .to_string(),
                    )
                } else {
                    None
                }
            }
            UigenError::Yaml(e) => Some(format!(
                "💡 Suggestion: Check your uigen.yaml syntax. Common issues:\n  - Missing colons after keys\n  - Incorrect indentation\n  - Unclosed quotes\n\nError details: {}",
                e
            )),
            UigenError::Io(e) => {
                if e.kind() == std::io::ErrorKind::PermissionDenied {
                    Some(
                        "💡 Suggestion: Check file permissions, or try running with appropriate permissions"
                            .to_string(),
                    )
                } else if e.kind() == std::io::ErrorKind::NotFound {
                    Some(
                        "💡 Suggestion: The file or directory may not exist. Check the path and try again"
                            .to_string(),
                    )
                } else {
                    None
                }
            }
            _ => None,
        }
    }
}

/// Format an error with helpful suggestions
pub fn format_error_with_help(error: &UigenError) -> String {
    let mut output = format!("❌ Error: {}", error);

    if let Some(help) = error.help() {
        output.push_str("\n\n");
        output.push_str(&help);
    }

    output
}
