// Services layer for business logic
// Services own business logic, calling storage directly

pub mod event;

pub use event::EventService;
