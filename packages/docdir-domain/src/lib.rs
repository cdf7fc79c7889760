pub mod assemble;
pub mod facet;
pub mod normalize;
pub mod paging;
pub mod reconcile;
pub mod record;

mod error;

pub use error::ValidationError;
pub use record::{MultiValuedField, NewProvider, ProviderRecord, StoredProvider};
