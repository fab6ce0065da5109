//! Storefront cart state machine.
//!
//! Everything here is independent of the browser: the page frontend supplies a
//! [`CartStorage`] implementation and translates DOM gestures into
//! [`CartCommand`]s.

pub mod bootstrap;
pub mod checkout;
pub mod command;
pub mod config;
pub mod error;
pub mod item;
pub mod navigation;
pub mod persist;
pub mod price;
pub mod storage;
pub mod store;
pub mod view;

pub use bootstrap::Bootstrap;
pub use checkout::{hand_off, read_checkout_snapshot};
pub use command::CartCommand;
pub use config::CartConfig;
pub use error::{CheckoutError, ConfigError, DecodeFallback, StorageError};
pub use item::LineItem;
pub use storage::{CartStorage, InMemoryStorage};
pub use store::{AddOutcome, CartStore};
pub use view::{CartView, LineView};
