//! Testing utilities and mock implementations of the collaborator traits.
//!
//! Mocks record every interaction and let tests inject responses, errors,
//! and confirmation answers, so controller flows can be exercised without
//! real infrastructure.
//!
//! # Example
//!
//! ```rust,ignore
//! use arrmap_core::testing::{MockConfirm, MockNotifier, MockTransport};
//!
//! let transport = Arc::new(MockTransport::new());
//! transport.set_response("GET", "api/metadata/list", ApiResponse { .. }).await;
//!
//! // Drive the controller, then assert on transport.recorded().await
//! // and notifier.notifications().
//! ```

mod mock_confirm;
mod mock_notifier;
mod mock_transport;

pub use mock_confirm::MockConfirm;
pub use mock_notifier::{MockNotifier, Notification};
pub use mock_transport::{MockTransport, RecordedRequest};
