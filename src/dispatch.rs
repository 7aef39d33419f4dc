// SPDX-License-Identifier: MPL-2.0
//! Response dispatcher: turns a handler result into either stored flash
//! state (full-page mode) or append fragments (incremental-update mode).
//!
//! Custom fragment handlers are injected strategies with a well-defined
//! default fallback: when present they take full control of the emitted
//! fragment set, otherwise exactly one append fragment targeting
//! [`CONTAINER_ID`] is produced.

use crate::config::{DISPATCH_ERROR_WIDTH_PX, DISPATCH_SUCCESS_WIDTH_PX};
use crate::message::{render, DisplayUnit, Kind, Payload, RenderOptions};
use crate::store::FlashStore;

/// Well-known identifier of the client-side flash container.
pub const CONTAINER_ID: &str = "flash-messages";

/// HTTP status emitted alongside a failure template render.
pub const UNPROCESSABLE_ENTITY: u16 = 422;

/// Which response shape the caller requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseMode {
    /// Whole-document redirect or render.
    FullPage,
    /// Small fragment spliced into the existing page.
    Incremental,
}

/// An "append to container" operation carrying one rendered unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment {
    target: String,
    unit: DisplayUnit,
}

impl Fragment {
    #[must_use]
    pub fn append(target: impl Into<String>, unit: DisplayUnit) -> Self {
        Self {
            target: target.into(),
            unit,
        }
    }

    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    #[must_use]
    pub fn unit(&self) -> &DisplayUnit {
        &self.unit
    }
}

/// Caller-supplied strategy replacing the default fragment emission.
pub type FragmentHandler = Box<dyn FnOnce(DisplayUnit) -> Vec<Fragment>>;

/// What the host application should do with the response.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Perform a full-page redirect; the flash was stored for the next render.
    Redirect { path: String },
    /// Re-render the given template with an unprocessable-entity status;
    /// the error flash was stored for the current render.
    RenderTemplate { template: String, status: u16 },
    /// Splice these fragments into the page, in order.
    Fragments(Vec<Fragment>),
    /// Nothing further to emit. Any flash was still stored; a missing
    /// redirect path or template is not a fault.
    Completed,
}

/// One dispatch of a handler result.
///
/// Built with the constructor for the outcome branch plus `with_*`
/// methods, then consumed by [`Dispatch::dispatch`]. Multiple dispatches
/// in one request cycle are independent and stack in the order set.
pub struct Dispatch {
    success: bool,
    success_message: Option<Payload>,
    error_message: Option<Payload>,
    success_path: Option<String>,
    error_template: Option<String>,
    success_width_px: u32,
    error_width_px: u32,
    on_success: Option<FragmentHandler>,
    on_error: Option<FragmentHandler>,
}

impl Dispatch {
    /// Starts a dispatch for a succeeded operation.
    #[must_use]
    pub fn success(message: impl Into<Payload>) -> Self {
        Self::new(true).with_success_message(message)
    }

    /// Starts a dispatch for a failed operation.
    #[must_use]
    pub fn failure(message: impl Into<Payload>) -> Self {
        Self::new(false).with_error_message(message)
    }

    fn new(success: bool) -> Self {
        Self {
            success,
            success_message: None,
            error_message: None,
            success_path: None,
            error_template: None,
            success_width_px: DISPATCH_SUCCESS_WIDTH_PX,
            error_width_px: DISPATCH_ERROR_WIDTH_PX,
            on_success: None,
            on_error: None,
        }
    }

    #[must_use]
    pub fn with_success_message(mut self, message: impl Into<Payload>) -> Self {
        self.success_message = Some(message.into());
        self
    }

    #[must_use]
    pub fn with_error_message(mut self, message: impl Into<Payload>) -> Self {
        self.error_message = Some(message.into());
        self
    }

    /// Redirect target for the full-page success branch.
    #[must_use]
    pub fn with_success_path(mut self, path: impl Into<String>) -> Self {
        self.success_path = Some(path.into());
        self
    }

    /// Template re-rendered (with status 422) on the full-page failure branch.
    #[must_use]
    pub fn with_error_template(mut self, template: impl Into<String>) -> Self {
        self.error_template = Some(template.into());
        self
    }

    #[must_use]
    pub fn with_success_width(mut self, width_px: u32) -> Self {
        self.success_width_px = width_px;
        self
    }

    #[must_use]
    pub fn with_error_width(mut self, width_px: u32) -> Self {
        self.error_width_px = width_px;
        self
    }

    /// Replaces the default incremental-mode success emission.
    #[must_use]
    pub fn on_incremental_success(mut self, handler: FragmentHandler) -> Self {
        self.on_success = Some(handler);
        self
    }

    /// Replaces the default incremental-mode failure emission.
    #[must_use]
    pub fn on_incremental_error(mut self, handler: FragmentHandler) -> Self {
        self.on_error = Some(handler);
        self
    }

    /// Renders the unit for the branch this dispatch will take.
    fn render_unit(&mut self) -> DisplayUnit {
        let (kind, message, width) = if self.success {
            (
                Kind::Success,
                self.success_message.take(),
                self.success_width_px,
            )
        } else {
            (Kind::Error, self.error_message.take(), self.error_width_px)
        };
        let payload = message.unwrap_or_else(|| Payload::Text(String::new()));
        render(kind, payload, RenderOptions::default().width(width))
    }

    /// Consumes the dispatch, storing flash state and/or producing fragments.
    pub fn dispatch(mut self, mode: ResponseMode, store: &mut FlashStore) -> Outcome {
        let unit = self.render_unit();

        match mode {
            ResponseMode::FullPage => {
                if self.success {
                    // Standard lifetime: the flash must survive the redirect hop.
                    store.set(unit);
                    match self.success_path {
                        Some(path) => Outcome::Redirect { path },
                        None => Outcome::Completed,
                    }
                } else {
                    // Now lifetime: the error is shown by the template render
                    // happening in this same cycle.
                    store.set_now(unit);
                    match self.error_template {
                        Some(template) => Outcome::RenderTemplate {
                            template,
                            status: UNPROCESSABLE_ENTITY,
                        },
                        None => Outcome::Completed,
                    }
                }
            }
            ResponseMode::Incremental => {
                let handler = if self.success {
                    self.on_success.take()
                } else {
                    self.on_error.take()
                };
                match handler {
                    Some(handler) => Outcome::Fragments(handler(unit)),
                    None => Outcome::Fragments(vec![Fragment::append(CONTAINER_ID, unit)]),
                }
            }
        }
    }
}
