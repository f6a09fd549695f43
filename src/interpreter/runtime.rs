use std::io::Write;

use tracing::{debug, info, trace, warn};

use crate::{
    ast::types::{coerce, CoercionError, Value},
    errors::errors::{Error, ErrorImpl},
    Position,
};

use super::{
    compiler::CompiledProgram,
    input::LineSource,
    step::{Operand, Step},
    store::{Slot, VariableStore},
};

/// Executes compiled programs against a line source and an output sink.
///
/// The store outlives a failed run, so callers can inspect whatever the
/// steps before the failure left behind.
pub struct Runtime<'a> {
    input: &'a mut dyn LineSource,
    output: &'a mut dyn Write,
    store: VariableStore,
}

impl<'a> Runtime<'a> {
    pub fn new(input: &'a mut dyn LineSource, output: &'a mut dyn Write) -> Self {
        Runtime {
            input,
            output,
            store: VariableStore::new(),
        }
    }

    pub fn store(&self) -> &VariableStore {
        &self.store
    }

    /// Runs every step in order, stopping at the first fatal error.
    pub fn execute(&mut self, program: &CompiledProgram) -> Result<(), Error> {
        info!(program = %program.name, steps = program.steps.len(), "running program");

        for step in &program.steps {
            trace!(?step, "executing step");
            self.execute_step(step)?;
        }

        Ok(())
    }

    pub fn execute_step(&mut self, step: &Step) -> Result<(), Error> {
        match step {
            Step::Announce { program, position } => {
                self.print(&format!("Program {}", program), position)
            }
            Step::PromptAndRead {
                identifier,
                declared_type,
                position,
            } => {
                self.print(&format!("{} (type : {}):", identifier, declared_type), position)?;

                let line = self
                    .input
                    .read_line()
                    .map_err(|error| {
                        warn!(%identifier, %error, "failed to read input");
                        Error::new(
                            ErrorImpl::InputFailed {
                                reason: error.to_string(),
                            },
                            position.clone(),
                        )
                    })?
                    .ok_or_else(|| {
                        Error::new(
                            ErrorImpl::EndOfInput {
                                identifier: identifier.to_string(),
                            },
                            position.clone(),
                        )
                    })?;
                debug!(%identifier, %line, "read parameter");

                let value = coerce(Value::String(line), *declared_type)
                    .map_err(|failure| coercion_failed(failure, position))?;

                self.store
                    .declare(identifier.clone(), *declared_type, Slot::Set(value));
                Ok(())
            }
            Step::Declare {
                identifier,
                declared_type,
            } => {
                self.store
                    .declare(identifier.clone(), *declared_type, Slot::Unset);
                Ok(())
            }
            Step::Assign {
                identifier,
                value,
                position,
            } => {
                let value = self.evaluate(value)?;
                let declared_type = self.store.declared_type(identifier, position)?;
                let value = coerce(value, declared_type)
                    .map_err(|failure| coercion_failed(failure, position))?;

                self.store.assign(identifier, value, position)
            }
            Step::Print {
                arguments,
                position,
            } => {
                let line = self.join(arguments)?;
                self.print(&line, position)
            }
            Step::Concatenate {
                identifier,
                arguments,
                position,
            } => {
                let joined = self.join(arguments)?;
                self.store.assign(identifier, Value::String(joined), position)
            }
        }
    }

    pub fn evaluate(&self, operand: &Operand) -> Result<Value, Error> {
        match operand {
            Operand::Variable {
                identifier,
                position,
            } => self.store.read(identifier, position),
            Operand::Literal(value) => Ok(value.clone()),
        }
    }

    /// Evaluates every operand, then joins their text with no separator.
    fn join(&self, arguments: &[Operand]) -> Result<String, Error> {
        let values = arguments
            .iter()
            .map(|argument| self.evaluate(argument))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(values.iter().map(Value::to_string).collect())
    }

    fn print(&mut self, line: &str, position: &Position) -> Result<(), Error> {
        writeln!(self.output, "{}", line)
            .and_then(|_| self.output.flush())
            .map_err(|error| {
                Error::new(
                    ErrorImpl::OutputFailed {
                        reason: error.to_string(),
                    },
                    position.clone(),
                )
            })
    }
}

fn coercion_failed(failure: CoercionError, position: &Position) -> Error {
    Error::new(
        ErrorImpl::CoercionFailed {
            value: failure.value,
            target: failure.target,
        },
        position.clone(),
    )
}
