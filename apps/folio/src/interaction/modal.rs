//! Modal viewers: document (CV), single image (profile hexagons) and image
//! gallery.
//!
//! Each modal is a two-state machine, `Closed` or `Open(content)`. The
//! [`ModalSet`] owns all three and keeps at most one open: opening a modal
//! closes whichever other one was showing.

use indexmap::IndexMap;
use serde::Serialize;

use crate::models::sections::GalleryImage;

/// Query suffix that hides the embedded PDF viewer chrome.
pub const DOCUMENT_VIEWER_SUFFIX: &str = "#toolbar=0&navpanes=0&scrollbar=0&view=FitH";

pub const GALLERY_PLACEHOLDER: &str = "Images coming soon...";

/// Viewer source for a document URL. URLs that already carry a fragment are
/// left alone.
pub fn document_source(url: &str) -> String {
    if url.contains('#') {
        url.to_string()
    } else {
        format!("{url}{DOCUMENT_VIEWER_SUFFIX}")
    }
}

/// What the user did while a modal was showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissTrigger {
    CloseControl,
    /// A click that landed on the overlay background itself.
    BackdropClick,
    /// A click inside the modal content; never dismisses.
    ContentClick,
    EscapeKey,
}

impl DismissTrigger {
    pub fn dismisses(self) -> bool {
        !matches!(self, DismissTrigger::ContentClick)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "content", rename_all = "snake_case")]
pub enum Modal<C> {
    Closed,
    Open(C),
}

impl<C> Default for Modal<C> {
    fn default() -> Self {
        Modal::Closed
    }
}

impl<C> Modal<C> {
    pub fn open(&mut self, content: C) {
        *self = Modal::Open(content);
    }

    /// Closes the modal, dropping its content so nothing keeps loading.
    /// Returns whether it was open.
    pub fn close(&mut self) -> bool {
        let was_open = self.is_open();
        *self = Modal::Closed;
        was_open
    }

    /// Applies a dismissal trigger. Escape and backdrop clicks only act on
    /// an open modal. Returns whether the modal closed.
    pub fn dismiss(&mut self, trigger: DismissTrigger) -> bool {
        if !trigger.dismisses() {
            return false;
        }
        self.close()
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Modal::Open(_))
    }

    pub fn content(&self) -> Option<&C> {
        match self {
            Modal::Open(content) => Some(content),
            Modal::Closed => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GalleryContent {
    pub title: String,
    pub images: Vec<GalleryImage>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ModalKind {
    Document,
    Image,
    Gallery,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ModalSet {
    pub document: Modal<String>,
    pub image: Modal<String>,
    pub gallery: Modal<GalleryContent>,
}

impl ModalSet {
    /// Opens the document viewer on `url` with the viewer chrome hidden.
    pub fn open_document(&mut self, url: &str) {
        self.close_all();
        self.document.open(document_source(url));
    }

    pub fn open_image(&mut self, src: &str) {
        self.close_all();
        self.image.open(src.to_string());
    }

    /// Opens the gallery for `category`, titled with the caption of the
    /// gallery tile that was clicked. Unknown categories open empty.
    pub fn open_gallery(
        &mut self,
        gallery: &IndexMap<String, Vec<GalleryImage>>,
        category: &str,
        title: &str,
    ) {
        self.close_all();
        self.gallery.open(GalleryContent {
            title: title.to_string(),
            images: gallery.get(category).cloned().unwrap_or_default(),
        });
    }

    /// Routes a dismissal trigger to whichever modal is open.
    pub fn dismiss(&mut self, trigger: DismissTrigger) -> Option<ModalKind> {
        let kind = self.active()?;
        let closed = match kind {
            ModalKind::Document => self.document.dismiss(trigger),
            ModalKind::Image => self.image.dismiss(trigger),
            ModalKind::Gallery => self.gallery.dismiss(trigger),
        };
        closed.then_some(kind)
    }

    pub fn close_all(&mut self) {
        self.document.close();
        self.image.close();
        self.gallery.close();
    }

    pub fn active(&self) -> Option<ModalKind> {
        if self.document.is_open() {
            Some(ModalKind::Document)
        } else if self.image.is_open() {
            Some(ModalKind::Image)
        } else if self.gallery.is_open() {
            Some(ModalKind::Gallery)
        } else {
            None
        }
    }

    /// Page scrolling is locked behind the document and gallery overlays.
    pub fn scroll_locked(&self) -> bool {
        matches!(
            self.active(),
            Some(ModalKind::Document) | Some(ModalKind::Gallery)
        )
    }
}
