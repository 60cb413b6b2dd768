// src/output/writer.rs
//! Executes output operations by performing actual I/O.

use super::browser::open_in_browser;
use super::clipboard::copy_to_clipboard;
use super::types::*;
use crate::error::AppError;
use std::io::Write;

/// Delivers the output plan. Every operation is attempted; failures are
/// collected in the report rather than stopping the plan.
pub fn deliver(plan: OutputPlan) -> OutputReport {
    let mut report = OutputReport::new();

    log::debug!(
        "Executing output plan with {} operations",
        plan.operations.len()
    );

    for operation in plan.operations {
        match execute_operation(&operation) {
            Ok(()) => {
                report = report.with_completed(CompletedOperation { operation });
            }
            Err(e) => {
                log::error!("Operation failed: {}", e);
                report = report.with_failed(FailedOperation {
                    operation,
                    error: e.to_string(),
                });
            }
        }
    }

    log::debug!(
        "Output plan execution complete: {} succeeded, {} failed",
        report.completed.len(),
        report.failed.len()
    );

    report
}

/// Executes a single output operation.
fn execute_operation(operation: &DeliveryTarget) -> Result<(), AppError> {
    match operation {
        DeliveryTarget::PrintToStdout { content } => print_to_stdout(content),
        DeliveryTarget::CopyToClipboard { content } => copy_to_clipboard(content),
        DeliveryTarget::OpenInBrowser { url } => open_in_browser(url),
    }
}

/// Prints content to stdout.
fn print_to_stdout(content: &str) -> Result<(), AppError> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", content)?;
    stdout.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_plan_succeeds() {
        let report = deliver(OutputPlan::new());
        assert!(report.is_success());
        assert!(report.completed.is_empty());
    }

    #[test]
    fn test_stdout_delivery_completes() {
        let plan = OutputPlan::new().with_operation(DeliveryTarget::PrintToStdout {
            content: "https://viewer.test/?pen=x".to_string(),
        });
        let report = deliver(plan);

        assert!(report.is_success());
        assert_eq!(report.completed.len(), 1);
    }
}
