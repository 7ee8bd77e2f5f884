/// The presentation-logic contract of a screen.
///
/// Glue hands over an input record of event streams (gestures) and
/// observes the output record (display state, navigation intents). Glue
/// never reads screen internals and screen logic never reads widgets.
pub trait Transform {
    type Input;

    type Output;

    /// Wire the input streams to the output streams.
    ///
    /// Must be called from within a Tokio runtime: the wiring runs as tasks
    /// owned by the screen and stops when the screen is torn down.
    fn transform(&self, input: Self::Input) -> Self::Output;
}
