/// User interactions the controller reacts to.
///
/// Frontends translate their native input (DOM events, key presses,
/// clicks) into these and feed them to [`ViewController::handle`].
/// Per-row actions carry the asset id of the row they were issued on.
///
/// [`ViewController::handle`]: super::controller::ViewController::handle
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// Add form submitted. Both fields arrive as raw text; validation is
    /// the controller's job.
    AddSubmit { asset_id: String, amount: String },

    /// Search box changed; fired on every keystroke.
    SearchInput { term: String },

    /// Sort dropdown changed to the given criterion string.
    SortChange { criterion: String },

    /// Delete action on a holdings row.
    DeleteClick { asset_id: String },

    /// Edit action on a holdings row; opens the edit modal.
    EditClick { asset_id: String },

    /// Save pressed in the edit modal, with the raw amount field text.
    EditSave { amount: String },

    /// Modal closed via its close control or backdrop.
    ModalDismiss,
}
