/// Marker trait for UI state objects.
///
/// A state holds everything the view needs to render and is replaced
/// wholesale by its reducer.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
