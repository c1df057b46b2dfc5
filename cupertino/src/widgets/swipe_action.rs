// Copyright 2026 the Cupertino Authors
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use kurbo::Rect;
use tracing::{debug, trace};

use crate::core::{ActionId, Side};

/// How wide a [`SwipeAction`] is.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ActionWidth {
    /// A fixed width in logical pixels.
    Fixed(f64),
    /// A fraction of the row's width, re-resolved whenever the row is resized.
    Fraction(f64),
}

impl ActionWidth {
    /// Resolves this width against the width of the row.
    ///
    /// Non-positive and non-finite widths resolve to `0.0`.
    pub fn resolve(self, row_width: f64) -> f64 {
        let width = match self {
            Self::Fixed(width) => width,
            Self::Fraction(fraction) => fraction * row_width,
        };
        if width.is_finite() && width > 0.0 {
            width
        } else {
            0.0
        }
    }
}

impl Default for ActionWidth {
    fn default() -> Self {
        Self::Fixed(80.0)
    }
}

/// An action hidden behind one edge of a [`Swipe`](crate::widgets::Swipe) row.
///
/// Actions are revealed when the row content is dragged away from their edge.
/// They are positioned by the row; they have no behavior of their own besides
/// their activation callback, which the host invokes when the action is tapped.
///
/// An action with a non-positive width is kept, but treated as zero-width:
/// it never becomes visible and doesn't count towards how far the row can open.
pub struct SwipeAction {
    id: ActionId,
    side: Side,
    width: ActionWidth,
    resolved_width: f64,
    frame: Rect,
    text: String,
    symbol: String,
    disabled: bool,
    on_activate: Option<Box<dyn FnMut(ActionId)>>,
}

// --- MARK: BUILDERS
impl SwipeAction {
    /// Creates a new action on the given side.
    pub fn new(side: Side, width: ActionWidth) -> Self {
        Self {
            id: ActionId::next(),
            side,
            width,
            resolved_width: 0.0,
            frame: Rect::ZERO,
            text: String::new(),
            symbol: String::new(),
            disabled: false,
            on_activate: None,
        }
    }

    /// Creates a new action on the left side.
    pub fn left(width: ActionWidth) -> Self {
        Self::new(Side::Left, width)
    }

    /// Creates a new action on the right side.
    pub fn right(width: ActionWidth) -> Self {
        Self::new(Side::Right, width)
    }

    /// Builder-style method to set the label shown under the symbol.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Builder-style method to set the name of the symbol shown on the action.
    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = symbol.into();
        self
    }

    /// Builder-style method to set whether the action is disabled.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Builder-style method to set the callback run by [`activate`](Self::activate).
    pub fn on_activate(mut self, callback: impl FnMut(ActionId) + 'static) -> Self {
        self.on_activate = Some(Box::new(callback));
        self
    }
}

// --- MARK: METHODS
impl SwipeAction {
    /// The id of this action.
    pub fn id(&self) -> ActionId {
        self.id
    }

    /// The side this action is anchored to.
    pub fn side(&self) -> Side {
        self.side
    }

    /// The requested width of this action.
    pub fn width(&self) -> ActionWidth {
        self.width
    }

    /// The width of this action in logical pixels, as of the last geometry pass.
    pub fn resolved_width(&self) -> f64 {
        self.resolved_width
    }

    /// The frame of this action, in the row's coordinate space.
    ///
    /// Parts of the frame outside the row's bounds are meant to be clipped by the host.
    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// The label of this action.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The symbol name of this action.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Whether this action is disabled.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Sets the anchor side and width of this action.
    ///
    /// Once the action has been added to a row, use
    /// [`Swipe::configure_action`](crate::widgets::Swipe::configure_action) instead,
    /// so the row can update its geometry.
    pub fn configure(&mut self, side: Side, width: ActionWidth) {
        if width.resolve(1.0) == 0.0 {
            debug!(
                id = self.id.trace(),
                "SwipeAction configured with non-positive width {width:?}, treated as zero-width"
            );
        }
        self.side = side;
        self.width = width;
    }

    /// Sets the label of this action.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Sets the symbol name of this action.
    pub fn set_symbol(&mut self, symbol: impl Into<String>) {
        self.symbol = symbol.into();
    }

    /// Sets whether this action is disabled.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Runs the activation callback, as the host does when the action is tapped.
    ///
    /// Returns `false` without doing anything if the action is disabled or has no callback.
    pub fn activate(&mut self) -> bool {
        if self.disabled {
            trace!(id = self.id.trace(), "SwipeAction disabled, not activating");
            return false;
        }
        let Some(callback) = self.on_activate.as_mut() else {
            return false;
        };
        trace!(id = self.id.trace(), "SwipeAction activated");
        callback(self.id);
        true
    }

    pub(crate) fn resolve_width(&mut self, row_width: f64) -> f64 {
        self.resolved_width = self.width.resolve(row_width);
        self.resolved_width
    }

    pub(crate) fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }
}

impl fmt::Debug for SwipeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwipeAction")
            .field("id", &self.id)
            .field("side", &self.side)
            .field("width", &self.width)
            .field("resolved_width", &self.resolved_width)
            .field("frame", &self.frame)
            .field("text", &self.text)
            .field("symbol", &self.symbol)
            .field("disabled", &self.disabled)
            .field(
                "on_activate",
                &self.on_activate.as_ref().map(|_| "FnMut(ActionId)"),
            )
            .finish()
    }
}
