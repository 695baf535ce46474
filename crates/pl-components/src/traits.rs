//! Capabilities shared by line models.

use pl_core::ModelResult;

/// Models that can fold several identical circuits running in parallel into
/// one equivalent circuit.
///
/// Implementations validate `num_of_lines > 0` before mutating anything.
/// Series quantities (resistance, reactance, impedance, conditional length) are
/// divided by the count and shunt quantities (susceptance, admittance) are
/// multiplied by it, so `n` then `m` composes to a single `n * m`.
pub trait ParallelCircuits {
    fn add_parallel_lines(&mut self, num_of_lines: u32) -> ModelResult<()>;
}
