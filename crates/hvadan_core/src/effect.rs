#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch the country data; the answer must carry the same `request_id`.
    FetchData { request_id: crate::RequestId },
}
