/// A function under search: maps one input to one output.
///
/// Search solvers call the model once per candidate, so `call` takes the
/// input by reference and must not depend on earlier calls. Failures such as
/// an exhausted work budget are reported through [`Model::Error`].
pub trait Model {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the model for `input`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the input cannot be evaluated.
    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error>;
}

/// The input a candidate produced and the output the model returned for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot<I, O> {
    pub input: I,
    pub output: O,
}

impl<I, O> Snapshot<I, O> {
    /// Pairs a model input with its output.
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }
}
