#![allow(non_snake_case)]
use super::{EngineSettings, SettingsError};
use crate::algebra::*;
use crate::io::{ConfigurablePrintTarget, PrintTarget};
use crate::timers::*;
use std::io::Write;
use std::time::Duration;

/// Engine for the expensive matrix operations.
///
/// Each call runs the determinant method chosen by
/// [`EngineSettings::determinant_solver`] for the size of its argument
/// and is timed under the operation name.  With `verbose` set, one line
/// per call is written to the configured print target.
///
/// Example
/// ```
/// use densemat::algebra::*;
/// use densemat::engine::*;
///
/// let settings = EngineSettingsBuilder::default()
///     .determinant_method("lu")
///     .build()
///     .unwrap();
/// let mut engine = MatrixEngine::new(settings).unwrap();
///
/// let A = Matrix::from(&[[2., 5., 7.], [6., 3., 4.], [5., -2., -3.]]);
/// let d = engine.determinant(&A).unwrap();
/// assert!((d + 1.).abs() < 1e-9);
/// assert_eq!(engine.timers().count("determinant"), 1);
/// ```
#[derive(Debug)]
pub struct MatrixEngine {
    pub settings: EngineSettings,
    timers: Timers,
    print_target: PrintTarget,
}

impl Default for MatrixEngine {
    fn default() -> Self {
        Self {
            settings: EngineSettings::default(),
            timers: Timers::default(),
            print_target: PrintTarget::default(),
        }
    }
}

impl MatrixEngine {
    /// # Errors
    /// Returns the first settings validation failure, if any.
    pub fn new(settings: EngineSettings) -> Result<Self, SettingsError> {
        settings.validate()?;
        Ok(Self {
            settings,
            ..Self::default()
        })
    }

    /// Determinant of a square, nonempty matrix.
    pub fn determinant(&mut self, A: &Matrix) -> Result<f64, MatrixError> {
        let method = self.settings.determinant_solver(A.nrows());
        let before = self.elapsed("determinant");
        let result;
        timeit! {self.timers => "determinant"; {
            result = A.determinant_with(&method);
        }}
        let dt = self.elapsed("determinant") - before;
        self.report("determinant", A, &method, &result, dt);
        result
    }

    /// Matrix of algebraic complements of a square matrix of size at least 2×2.
    pub fn calc_complements(&mut self, A: &Matrix) -> Result<Matrix, MatrixError> {
        let method = self.settings.determinant_solver(A.nrows().saturating_sub(1));
        let before = self.elapsed("complements");
        let result;
        timeit! {self.timers => "complements"; {
            result = A.calc_complements_with(&method);
        }}
        let dt = self.elapsed("complements") - before;
        self.report("complements", A, &method, &result, dt);
        result
    }

    /// Inverse of a square, nonsingular matrix.
    pub fn inverse(&mut self, A: &Matrix) -> Result<Matrix, MatrixError> {
        let method = self.settings.determinant_solver(A.nrows());
        let before = self.elapsed("inverse");
        let result;
        timeit! {self.timers => "inverse"; {
            result = A.inverse_with(&method);
        }}
        let dt = self.elapsed("inverse") - before;
        self.report("inverse", A, &method, &result, dt);
        result
    }

    /// Accumulated timings for all operations run so far.
    pub fn timers(&self) -> &Timers {
        &self.timers
    }

    pub fn total_time(&self) -> Duration {
        self.timers.total_time()
    }

    pub fn reset_timers(&mut self) {
        self.timers.reset();
    }

    /// Writes the timing table to the configured print target.
    pub fn print_timers(&mut self) -> std::io::Result<()> {
        writeln!(self.print_target, "timings:")?;
        self.timers.print(&mut self.print_target)?;
        self.print_target.flush()
    }

    fn elapsed(&self, key: &'static str) -> Duration {
        self.timers.elapsed(key).unwrap_or_default()
    }

    fn report<T>(
        &mut self,
        op: &'static str,
        A: &Matrix,
        method: &DeterminantSolver,
        result: &Result<T, MatrixError>,
        dt: Duration,
    ) {
        if !self.settings.verbose {
            return;
        }
        let (m, n) = A.size();
        let status = match result {
            Ok(_) => "ok".to_string(),
            Err(e) => format!("failed: {}", e),
        };
        // printing errors are not fatal to the computation
        let _ = writeln!(
            self.print_target,
            "{:<12} {}x{} [{}] {} ({:?})",
            op,
            m,
            n,
            method.name(),
            status,
            dt
        );
    }
}

impl ConfigurablePrintTarget for MatrixEngine {
    fn print_to_stdout(&mut self) {
        self.print_target.print_to_stdout()
    }

    fn print_to_file(&mut self, file: std::fs::File) {
        self.print_target.print_to_file(file)
    }

    fn print_to_stream(&mut self, stream: Box<dyn Write + Send + Sync>) {
        self.print_target.print_to_stream(stream)
    }

    fn print_to_sink(&mut self) {
        self.print_target.print_to_sink()
    }

    fn print_to_buffer(&mut self) {
        self.print_target.print_to_buffer()
    }

    fn get_print_buffer(&mut self) -> std::io::Result<String> {
        self.print_target.get_print_buffer()
    }
}
