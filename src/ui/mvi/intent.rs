/// Marker trait for intents: user actions and async completions
/// (e.g. a finished fetch) that a reducer turns into a new state.
pub trait Intent: Send + 'static {}
