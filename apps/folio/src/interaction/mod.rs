//! Interaction state held by the rendered page: publication pagination,
//! project filtering, modal overlays and the contact form check.
//! All of it is plain data; nothing here touches the page shell directly.

pub mod contact;
pub mod filter;
pub mod modal;
pub mod pagination;

pub use filter::{CategoryFilter, FilterView, ItemVisibility};
pub use modal::{DismissTrigger, Modal, ModalKind, ModalSet};
pub use pagination::{PageView, Paginator, Reveal};
