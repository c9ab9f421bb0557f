use crate::input::{entry, example};
use anyhow::Context;
use matcore::prelude::{EntryLimits, MatrixError};
use matcore::telemetry::{LogManager, MetricsRecorder, MetricsSnapshot};
use matcore::Matrix;
use std::io::{BufRead, Write};

/// Outcome of one product computed for the console.
#[derive(Debug)]
pub struct ProductReport {
    pub product: Matrix,
    /// Scalar multiplications the triple loop performed (`m * n * p`).
    pub element_products: usize,
}

/// Orchestrates products for both console paths and owns their telemetry.
pub struct Runner {
    logger: LogManager,
    metrics: MetricsRecorder,
}

impl Runner {
    pub fn new() -> Self {
        Self {
            logger: LogManager::new("workflow"),
            metrics: MetricsRecorder::new(),
        }
    }

    /// Multiplies two prepared matrices, counting and logging the outcome.
    /// Errors pass through untouched so the caller can classify them.
    pub fn execute(&self, lhs: &Matrix, rhs: &Matrix) -> Result<ProductReport, MatrixError> {
        self.logger.record(&format!(
            "multiplying {}x{} by {}x{}",
            lhs.rows(),
            lhs.cols(),
            rhs.rows(),
            rhs.cols()
        ));

        match Matrix::multiply(lhs, rhs) {
            Ok(product) => {
                self.metrics.record_product();
                let report = ProductReport {
                    element_products: lhs.rows() * lhs.cols() * rhs.cols(),
                    product,
                };
                self.logger.record(&format!(
                    "product ready: {}x{} after {} element products",
                    report.product.rows(),
                    report.product.cols(),
                    report.element_products
                ));
                Ok(report)
            }
            Err(err) => {
                self.metrics.record_failure();
                self.logger.record_failure(&format!("product aborted: {err}"));
                Err(err)
            }
        }
    }

    /// Demonstration path: prints the fixed example and its product.
    /// Failures are reported to stderr and do not end the session.
    pub fn run_example<W: Write>(&self, output: &mut W) -> anyhow::Result<()> {
        writeln!(output, "\n=== Example product ===").context("writing example header")?;
        if let Err(err) = self.print_example(output) {
            eprintln!("error: {err:#}");
        }
        Ok(())
    }

    fn print_example<W: Write>(&self, output: &mut W) -> anyhow::Result<()> {
        let (lhs, rhs) = example::example_pair()?;
        writeln!(output, "Matrix A:")?;
        write!(output, "{}", lhs.render())?;
        writeln!(output, "\nMatrix B:")?;
        write!(output, "{}", rhs.render())?;
        let report = self.execute(&lhs, &rhs)?;
        writeln!(output, "\nResult of A * B:")?;
        write!(output, "{}", report.product.render())?;
        Ok(())
    }

    /// Manual path: collects both operands, echoes them, multiplies, and
    /// prints the result. Failures propagate to the caller.
    pub fn run_manual<R: BufRead, W: Write>(
        &self,
        input: &mut R,
        output: &mut W,
        limits: &EntryLimits,
    ) -> anyhow::Result<()> {
        let lhs = entry::read_matrix(input, output, "A", limits)?;
        let rhs = entry::read_matrix(input, output, "B", limits)?;

        writeln!(output, "\n=== Entered matrices ===")?;
        writeln!(output, "Matrix A:")?;
        write!(output, "{lhs}")?;
        writeln!(output, "\nMatrix B:")?;
        write!(output, "{rhs}")?;

        writeln!(output, "\n=== Multiplying ===")?;
        let report = self.execute(&lhs, &rhs)?;
        writeln!(output, "Result of A * B:")?;
        write!(output, "{}", report.product)?;
        Ok(())
    }

    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }
}

impl Default for Runner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn execute_produces_the_example_product() {
        let runner = Runner::new();
        let (lhs, rhs) = example::example_pair().unwrap();
        let report = runner.execute(&lhs, &rhs).unwrap();
        assert_eq!(report.product.get(0, 0).unwrap(), 58.0);
        assert_eq!(report.product.get(1, 1).unwrap(), 154.0);
        assert_eq!(report.element_products, 12);
        assert_eq!(runner.metrics().products, 1);
        assert_eq!(runner.metrics().failures, 0);
    }

    #[test]
    fn execute_counts_failures() {
        let runner = Runner::new();
        let lhs = Matrix::zeros(2, 3).unwrap();
        let rhs = Matrix::zeros(2, 2).unwrap();
        let err = runner.execute(&lhs, &rhs).unwrap_err();
        assert!(matches!(err, MatrixError::DimensionMismatch { .. }));
        assert_eq!(runner.metrics().failures, 1);
        assert_eq!(runner.metrics().products, 0);
    }

    #[test]
    fn run_example_prints_the_product() {
        let runner = Runner::new();
        let mut output = Vec::new();
        runner.run_example(&mut output).unwrap();
        let transcript = String::from_utf8(output).unwrap();
        assert!(transcript.contains("=== Example product ==="));
        assert!(transcript.contains("Matrix 2x3:"));
        assert!(transcript.contains("58\t64"));
        assert!(transcript.contains("139\t154"));
    }

    #[test]
    fn run_manual_completes_a_scripted_session() {
        let runner = Runner::new();
        // A is 1x2 [[2, 3]], B is 2x1 [[4], [5]]; the product is [[23]].
        let mut input: &[u8] = b"1\n2\n2\n3\n2\n1\n4\n5\n";
        let mut output = Vec::new();
        runner
            .run_manual(&mut input, &mut output, &EntryLimits::default())
            .unwrap();
        let transcript = String::from_utf8(output).unwrap();
        assert!(transcript.contains("=== Entered matrices ==="));
        assert!(transcript.contains("=== Multiplying ==="));
        assert!(transcript.contains("Result of A * B:"));
        assert!(transcript.contains("Matrix 1x1:\n23"));
        assert_eq!(runner.metrics().products, 1);
    }

    #[test]
    fn run_manual_propagates_core_failures() {
        let runner = Runner::new();
        // A is 1x2 but B is 1x1, so the shapes cannot be multiplied.
        let mut input: &[u8] = b"1\n2\n5\n6\n1\n1\n2\n";
        let mut output = Vec::new();
        let err = runner
            .run_manual(&mut input, &mut output, &EntryLimits::default())
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<MatrixError>(),
            Some(MatrixError::DimensionMismatch { .. })
        ));
        assert_eq!(runner.metrics().failures, 1);
    }
}
