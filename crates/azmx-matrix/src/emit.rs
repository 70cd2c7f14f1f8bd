use azmx_domain::Matrix;

/// Pipeline variable the matrix is published under. The orchestration
/// side references `dependencies.<job>.outputs['<step>.subscriptionMatrix']`.
pub const MATRIX_VARIABLE: &str = "subscriptionMatrix";

/// The matrix document written to the output file.
pub fn to_pretty_json(matrix: &Matrix) -> serde_json::Result<String> {
    serde_json::to_string_pretty(matrix)
}

/// The Azure DevOps logging command that publishes the matrix as an
/// output variable. Double quotes are escaped; the consuming pipeline
/// unescapes before handing the value to the matrix strategy.
pub fn to_vso_command(matrix: &Matrix) -> serde_json::Result<String> {
    let compact = serde_json::to_string(matrix)?;
    Ok(format!(
        "##vso[task.setvariable variable={};isOutput=true]{}",
        MATRIX_VARIABLE,
        compact.replace('"', "\\\"")
    ))
}

/// A PowerShell helper that re-publishes the matrix variable from a
/// checked-in file, for pipeline stages that cannot consume the logging
/// command directly.
pub fn to_set_matrix_script(matrix: &Matrix) -> serde_json::Result<String> {
    let pretty = to_pretty_json(matrix)?;
    Ok(format!(
        "$matrix = @'\n{pretty}\n'@\n\
         $matrixJson = $matrix | ConvertFrom-Json | ConvertTo-Json -Compress\n\
         Write-Host \"##vso[task.setvariable variable={MATRIX_VARIABLE};isOutput=true]$matrixJson\"\n"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use azmx_domain::{MatrixEntry, SubscriptionId};

    fn matrix() -> Matrix {
        let mut m = Matrix::new();
        m.insert(
            "prod".into(),
            MatrixEntry {
                subscription_id: SubscriptionId::new("s1"),
                subscription_name: "Prod".into(),
                service_connection: "spn-a".into(),
            },
        );
        m
    }

    #[test]
    fn vso_command_targets_the_matrix_variable() {
        let cmd = to_vso_command(&matrix()).unwrap();
        assert!(cmd.starts_with(
            "##vso[task.setvariable variable=subscriptionMatrix;isOutput=true]"
        ));
    }

    #[test]
    fn vso_command_escapes_quotes() {
        let cmd = to_vso_command(&matrix()).unwrap();
        assert!(cmd.contains(r#"{\"prod\":{\"subscriptionId\":\"s1\""#), "cmd: {cmd}");
        // No bare quotes left in the payload.
        let payload = cmd.split(']').nth(1).unwrap();
        assert!(!payload.replace("\\\"", "").contains('"'));
    }

    #[test]
    fn empty_matrix_still_emits_a_document() {
        let empty = Matrix::new();
        assert_eq!(to_pretty_json(&empty).unwrap(), "{}");
        let cmd = to_vso_command(&empty).unwrap();
        assert!(cmd.ends_with("{}"));
    }

    #[test]
    fn set_matrix_script_embeds_the_document() {
        let script = to_set_matrix_script(&matrix()).unwrap();
        assert!(script.starts_with("$matrix = @'\n{"));
        assert!(script.contains("ConvertTo-Json -Compress"));
        assert!(script.contains("subscriptionMatrix"));
    }
}
