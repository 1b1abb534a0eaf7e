//! Event-driven engine behind the page's interactive behaviors: the slide
//! controller, the contact-form validation state machine, and the
//! navigation/scroll/visibility glue. State transitions in, render ops out;
//! rendering itself is the document's job.

pub mod behaviors;
pub mod controller;
pub mod form;
pub mod scheduler;
pub mod slider;
pub mod transport;
pub mod validate;

pub use controller::{PageConfig, PageController, Update};
pub use scheduler::{Scheduler, TaskHandle, TokioScheduler};
pub use transport::{FormSubmission, SimulatedTransport, SubmissionTransport, TransportError};
