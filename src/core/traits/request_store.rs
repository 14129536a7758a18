use crate::core::errors::Result;
use crate::core::models::swap_request::RequestDocument;

/// Port for whole-document persistence of swap requests.
///
/// There is no partial-update API: callers load the document, change it
/// in memory and save it back.
pub trait RequestStore {
    /// Load the document, initializing an empty one if none exists yet.
    fn load(&self) -> Result<RequestDocument>;

    /// Replace the stored document with `document`.
    fn save(&self, document: &RequestDocument) -> Result<()>;
}
